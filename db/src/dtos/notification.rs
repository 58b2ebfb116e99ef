use uuid::Uuid;

pub struct NotificationCreateRequest {
    pub user_id: Uuid,
    pub kind: String,
    pub title: String,
    pub body: String,
}
