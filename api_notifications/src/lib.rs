use actix_web::web;

pub mod dtos {
    pub mod notifications;
}
pub mod routes {
    pub mod notifications;
}
pub mod services {
    pub mod notify;
}

pub fn mount_notifications() -> actix_web::Scope {
    web::scope("/notifications")
        .service(routes::notifications::get_notifications)
        .service(routes::notifications::get_unread_count)
        .service(routes::notifications::post_mark_read)
}
