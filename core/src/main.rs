mod cors;

use actix_web::{
    App, HttpServer,
    web::{self},
};
use common::env_config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // get env vars
    let config = Config::from_env();
    let config_data = config.clone();

    // get info
    let is_production = config.environment == "production";
    let origin = config.cors_allowed_origin.clone();
    let cookie_secure = !origin.contains("localhost");

    // init logger
    if config.console_logging_enabled {
        logger::setup().expect("Failed to set up logger");
    }

    // init db connection
    let pool = db::setup(&config.database_url, is_production)
        .await
        .expect("Failed to set up database");

    // client for the hosted email functions
    let mail = mailer::Mailer::from_config(&config);

    HttpServer::new(move || {
        let secret = config_data.jwt_config.secret.as_bytes();
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config_data.clone()))
            .app_data(web::Data::new(mail.clone()))
            .wrap(limiter::global_middleware(10)) // max 10 requests per second
            .wrap(logger::middleware()) // 4th
            .wrap(extractor::middleware()) // 3rd
            .wrap(cors::middleware(&origin)) // 2nd
            .wrap(api_auth::session_middleware(
                cookie_secure,
                is_production,
                secret,
            )) // 1st
            .service(
                web::scope("/api")
                    .service(api_auth::mount_auth())
                    .service(api_listings::mount_public_listings())
                    .service(api_referrals::mount_leads().wrap(limiter::write_middleware(5)))
                    .service(
                        web::scope("/dashboard")
                            .wrap(api_auth::auth_middleware())
                            .service(api_auth::mount_user())
                            .service(api_profiles::mount_profile())
                            .service(
                                api_matches::mount_matches()
                                    .wrap(limiter::write_middleware(60)),
                            )
                            .service(api_onboarding::mount_onboarding())
                            .service(api_notifications::mount_notifications())
                            .service(api_listings::mount_listings())
                            .service(api_listings::mount_properties())
                            .service(api_referrals::mount_referrals()),
                    )
                    .service(
                        web::scope("/admin")
                            .wrap(api_admin::admin_middleware())
                            .wrap(api_auth::auth_middleware())
                            .service(api_admin::mount_admin()),
                    ),
            )
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .workers(config.num_workers)
    .run()
    .await
}
