use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage, HttpRequest};
use futures_util::future::LocalBoxFuture;
use tracing::Level;

use super::request_trace::RequestId;
use super::require_permission::RequiredPermission;
use crate::auth::Claims;

/// One `request_completed` event per request.
///
/// Must be registered before `RequestTrace` so it runs inside it and can see
/// the request id. Guarded routes also report the permission they demanded
/// and, once authorized, the token subject.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

/// Level a completed request is logged at.
pub fn level_for(status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::ERROR
    } else if status.is_client_error() {
        Level::WARN
    } else {
        Level::INFO
    }
}

/// Caller identity gathered by the guard, if the route had one.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AccessTrail {
    pub permission: Option<&'static str>,
    pub sub: Option<String>,
}

impl AccessTrail {
    pub fn from_request(req: &HttpRequest) -> Self {
        let ext = req.extensions();
        Self {
            permission: ext.get::<RequiredPermission>().map(|p| p.0),
            sub: ext.get::<Claims>().and_then(|c| c.sub.clone()),
        }
    }
}

macro_rules! completed {
    ($level:expr, $($field:tt)*) => {{
        let level = $level;
        if level == Level::ERROR {
            tracing::error!($($field)*, "request_completed");
        } else if level == Level::WARN {
            tracing::warn!($($field)*, "request_completed");
        } else {
            tracing::info!($($field)*, "request_completed");
        }
    }};
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let request_id = req
            .extensions()
            .get::<RequestId>()
            .map(|id| id.0.clone())
            .unwrap_or_else(|| "unknown".to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;
            let (status, trail) = match &result {
                Ok(res) => (res.status(), AccessTrail::from_request(res.request())),
                Err(err) => (err.as_response_error().status_code(), AccessTrail::default()),
            };

            let duration_us = start.elapsed().as_micros() as u64;
            completed!(
                level_for(status),
                http.method = %method,
                url.path = %path,
                http.status_code = status.as_u16(),
                duration_us,
                request_id = %request_id,
                permission = trail.permission,
                sub = trail.sub.as_deref()
            );

            result
        })
    }
}
