use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use common::{error::AppError, jwt::get_jwt_claims_or_error};
use governor::{Quota, RateLimiter, clock::QuantaClock, state::keyed::DashMapStateStore};
use std::{future::Future, num::NonZeroU32, pin::Pin, rc::Rc, sync::Arc};

type WriteStateStore = DashMapStateStore<String>;

/// Per-caller limiter for write-heavy endpoints. Keys on the authenticated
/// user id, falling back to the peer address for anonymous traffic
/// (lead capture is public).
pub struct WriteRateLimiter {
    permits_per_minute: u32,
}

impl WriteRateLimiter {
    pub fn new(permits_per_minute: u32) -> Self {
        Self { permits_per_minute }
    }
}

impl<S, B> Transform<S, ServiceRequest> for WriteRateLimiter
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Transform = WriteRateLimiterService<S>;
    type InitError = ();
    type Future = std::future::Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        let quota = Quota::per_minute(
            NonZeroU32::new(self.permits_per_minute).expect("write limit must be non-zero"),
        );

        std::future::ready(Ok(WriteRateLimiterService {
            service: Rc::new(service),
            limiter: Arc::new(RateLimiter::keyed(quota)),
        }))
    }
}

pub struct WriteRateLimiterService<S> {
    service: Rc<S>,
    limiter: Arc<RateLimiter<String, WriteStateStore, QuantaClock>>,
}

impl<S, B> Service<ServiceRequest> for WriteRateLimiterService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = Rc::clone(&self.service);
        let limiter = self.limiter.clone();

        Box::pin(async move {
            let key = match get_jwt_claims_or_error(&req).ok() {
                Some(claims) => claims.user_id.to_string(),
                None => req
                    .connection_info()
                    .realip_remote_addr()
                    .unwrap_or("unknown")
                    .to_string(),
            };

            if limiter.check_key(&key).is_err() {
                return Ok(req.error_response(AppError::TooManyRequests(
                    "Slow down and try again in a minute".to_string(),
                )));
            }

            srv.call(req).await.map(|res| res.map_into_boxed_body())
        })
    }
}
