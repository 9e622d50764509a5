//! Per-route authorization middleware.
//!
//! Wrap a resource with `RequirePermission::new("get:movies")` and every
//! request to it must carry a bearer token that verifies against the
//! identity provider and grants that permission. Verified claims are placed
//! in request extensions for the `VerifiedClaims` extractor. Rejections are
//! answered here; the handler never runs.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::auth::{AuthError, Malformed};
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Permission demanded by the route, left in request extensions for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredPermission(pub &'static str);

#[derive(Debug, Clone, Copy)]
pub struct RequirePermission {
    permission: &'static str,
}

impl RequirePermission {
    pub fn new(permission: &'static str) -> Self {
        Self { permission }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequirePermission
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequirePermissionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequirePermissionMiddleware {
            service: Rc::new(service),
            permission: self.permission,
        }))
    }
}

pub struct RequirePermissionMiddleware<S> {
    service: Rc<S>,
    permission: &'static str,
}

impl<S, B> Service<ServiceRequest> for RequirePermissionMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let permission = self.permission;

        Box::pin(async move {
            let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
                let err = AppError::internal("AppState not registered on the app");
                return Ok(req.error_response(err).map_into_right_body());
            };

            req.extensions_mut().insert(RequiredPermission(permission));

            // Not visible ASCII, so it cannot be `Bearer <token>`.
            let authorization = match req.headers().get(header::AUTHORIZATION) {
                None => Ok(None),
                Some(value) => value
                    .to_str()
                    .map(|s| Some(s.to_string()))
                    .map_err(|_| AuthError::malformed(Malformed::WrongScheme)),
            };

            let outcome = match authorization {
                Ok(value) => state.guard().authorize(value.as_deref(), permission).await,
                Err(err) => Err(err),
            };

            match outcome {
                Ok(claims) => {
                    req.extensions_mut().insert(claims);
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(err) => {
                    warn!(
                        code = %err.code(),
                        status = err.status().as_u16(),
                        permission,
                        path = %req.path(),
                        "authorization rejected"
                    );
                    Ok(req
                        .error_response(AppError::from(err))
                        .map_into_right_body())
                }
            }
        })
    }
}
