use actix_web::web;

pub mod dtos {
    pub mod listing;
}
pub mod routes {
    pub mod listing;
    pub mod property;
}
pub mod services {
    pub mod listing;
}

pub fn mount_listings() -> actix_web::Scope {
    web::scope("/listings")
        .service(routes::listing::post_listing)
        .service(routes::listing::get_listings)
        .service(routes::listing::put_listing)
        .service(routes::listing::post_photo)
        .service(routes::listing::delete_listing)
}

pub fn mount_properties() -> actix_web::Scope {
    web::scope("/properties")
        .service(routes::property::post_property)
        .service(routes::property::get_properties)
}

/// Marketing-site feed, mounted outside the authenticated dashboard.
pub fn mount_public_listings() -> actix_web::Scope {
    web::scope("/listings").service(routes::listing::get_public_listings)
}
