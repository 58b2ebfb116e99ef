use actix_web::web;

pub mod dtos {
    pub mod referral;
}
pub mod routes {
    pub mod lead;
    pub mod referral;
}
pub mod services {
    pub mod attribution;
    pub mod code;
    pub mod lead;
}

pub fn mount_referrals() -> actix_web::Scope {
    web::scope("/referrals")
        .service(routes::referral::post_code)
        .service(routes::referral::get_stats)
}

/// Public lead capture, mounted outside the authenticated dashboard.
pub fn mount_leads() -> actix_web::Scope {
    web::scope("/leads").service(routes::lead::post_lead)
}
