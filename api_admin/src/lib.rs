use actix_web::web;

use middleware::admin::AdminMiddleware;

pub mod middleware {
    pub mod admin;
}
pub mod dtos {
    pub mod admin;
}
pub mod routes {
    pub mod admin;
}
pub mod services {
    pub mod admin;
}

pub fn mount_admin() -> actix_web::Scope {
    web::scope("")
        .service(routes::admin::get_users)
        .service(routes::admin::post_promote)
        .service(routes::admin::post_verify)
        .service(routes::admin::get_leads)
        .service(routes::admin::post_lead_review)
        .service(routes::admin::get_logs)
        .service(routes::admin::post_broadcast)
}

/// Requires an admin role, re-checked against the database rather than
/// trusting the token snapshot alone.
pub fn admin_middleware() -> AdminMiddleware {
    AdminMiddleware::new()
}
