use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

/// One directional "like" edge. A match is mutual when the reverse
/// edge also exists; mutuality is derived, never stored.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct MatchEdge {
    pub id: Uuid,
    pub actor_id: Uuid,
    pub target_id: Uuid,
    pub created_at: NaiveDateTime,
}
