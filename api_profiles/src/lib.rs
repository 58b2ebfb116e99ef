use actix_web::web;

pub mod dtos {
    pub mod profile;
}
pub mod routes {
    pub mod profile;
    pub mod quiz;
}
pub mod services {
    pub mod profile;
    pub mod quiz;
}

pub fn mount_profile() -> actix_web::Scope {
    web::scope("/profile")
        .service(routes::profile::get_profile)
        .service(routes::profile::put_profile)
        .service(routes::profile::post_complete)
        .service(routes::quiz::put_quiz)
        .service(routes::quiz::get_quiz)
}
