use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UsersQuery {
    pub role: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct PromoteRequest {
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct LeadsQuery {
    pub unreviewed_only: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct LogsQuery {
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct BroadcastRequest {
    pub title: String,
    pub body: String,
}
