use actix_web::web;

pub mod steps;

pub mod dtos {
    pub mod onboarding;
}
pub mod routes {
    pub mod onboarding;
}
pub mod services {
    pub mod onboarding;
}

pub fn mount_onboarding() -> actix_web::Scope {
    web::scope("/onboarding")
        .service(routes::onboarding::get_onboarding)
        .service(routes::onboarding::post_step)
        .service(routes::onboarding::post_complete)
}
