use std::{future::Future, pin::Pin, sync::Arc};

use actix_web::{
    Error, HttpMessage,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    web,
};
use common::{error::AppError, jwt::JwtClaims, misc::Role};
use futures::future::{Ready, ok};
use sqlx::PgPool;

/// Guard for the admin surface. Runs after the auth guard, so the bare
/// `JwtClaims` are already in request extensions; the role is re-read
/// from the profile row so a stale token cannot keep admin access.
pub struct AdminMiddleware {}

impl AdminMiddleware {
    pub fn new() -> Self {
        AdminMiddleware {}
    }
}

impl<S, B> Transform<S, ServiceRequest> for AdminMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Transform = AdminMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AdminMiddlewareService {
            service: Arc::new(service),
        })
    }
}

pub struct AdminMiddlewareService<S> {
    service: Arc<S>,
}

impl<S, B> Service<ServiceRequest> for AdminMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = Arc::clone(&self.service);

        Box::pin(async move {
            let claims = req.extensions().get::<JwtClaims>().cloned();
            let Some(claims) = claims else {
                return Ok(req.error_response(AppError::Unauthorized(
                    "No authorization token provided".to_string(),
                )));
            };

            let pool = match req.app_data::<web::Data<Arc<PgPool>>>() {
                Some(data) => Arc::clone(&**data),
                None => {
                    return Ok(req.error_response(AppError::Internal(
                        "Database pool is not configured".to_string(),
                    )));
                }
            };

            let profile = match db::profile::get_profile(&**pool, claims.user_id).await {
                Ok(profile) => profile,
                Err(e) => return Ok(req.error_response(e)),
            };

            if Role::from_str(&profile.role).ok() != Some(Role::Admin) {
                return Ok(req.error_response(AppError::Forbidden(
                    "Admin access required".to_string(),
                )));
            }

            srv.call(req).await.map(|res| res.map_into_boxed_body())
        })
    }
}
