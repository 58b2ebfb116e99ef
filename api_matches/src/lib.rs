use actix_web::web;

pub mod scoring;

pub mod dtos {
    pub mod matches;
}
pub mod routes {
    pub mod matches;
}
pub mod services {
    pub mod matches;
}

pub fn mount_matches() -> actix_web::Scope {
    web::scope("/matches")
        .service(routes::matches::get_suggestions)
        .service(routes::matches::post_like)
        .service(routes::matches::get_matches)
        .service(routes::matches::get_likes)
}
