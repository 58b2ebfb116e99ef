use actix_web::{HttpRequest, HttpResponse, Responder, body::BoxBody, http::StatusCode};
use serde::Serialize;

use crate::error::Res;

/// JSON response wrapper used by route handlers, so that every success path
/// reads `Success::ok(payload)` / `Success::created(payload)`.
pub struct Success<T: Serialize> {
    status: StatusCode,
    body: T,
}

impl<T: Serialize> Success<T> {
    pub fn ok(body: T) -> Res<Self> {
        Ok(Success {
            status: StatusCode::OK,
            body,
        })
    }

    pub fn created(body: T) -> Res<Self> {
        Ok(Success {
            status: StatusCode::CREATED,
            body,
        })
    }
}

impl<T: Serialize> Responder for Success<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::build(self.status).json(&self.body)
    }
}
