//! Shared-secret authentication for inline hook calls.
//!
//! The identity provider is configured to send a fixed secret in one request
//! header. The middleware compares that header with the configured secret in
//! constant time and rejects mismatches with a 401 carrying the hook error
//! envelope. With no secret configured the middleware passes every request
//! through.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpResponse,
};
use constant_time_eq::constant_time_eq;
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use vth_core::domain::HookResponse;
use vth_shared::HookAuthConfig;

/// Error summary returned to unauthenticated callers
pub const UNAUTHORIZED_SUMMARY: &str = "Unauthorized";

/// Hook authentication middleware factory
#[derive(Debug, Clone)]
pub struct HookAuth {
    config: Rc<HookAuthConfig>,
}

impl HookAuth {
    pub fn new(config: HookAuthConfig) -> Self {
        Self {
            config: Rc::new(config),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for HookAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = HookAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(HookAuthMiddleware {
            service: Rc::new(service),
            config: Rc::clone(&self.config),
        }))
    }
}

/// Hook authentication middleware service
pub struct HookAuthMiddleware<S> {
    service: Rc<S>,
    config: Rc<HookAuthConfig>,
}

impl<S, B> Service<ServiceRequest> for HookAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        if let Some(secret) = self.config.secret.as_deref() {
            let presented = req
                .headers()
                .get(self.config.header_name.as_str())
                .map(|value| value.as_bytes());

            if !matches_secret(presented, secret) {
                tracing::warn!(
                    event = "hook_auth_rejected",
                    path = %req.path(),
                    header = %self.config.header_name,
                    header_present = presented.is_some(),
                    "Rejected inline hook call"
                );
                let (request, _payload) = req.into_parts();
                let response = unauthorized().map_into_right_body();
                return Box::pin(async move { Ok(ServiceResponse::new(request, response)) });
            }
        }

        Box::pin(async move {
            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}

fn matches_secret(presented: Option<&[u8]>, secret: &str) -> bool {
    presented.is_some_and(|value| constant_time_eq(value, secret.as_bytes()))
}

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(HookResponse::error(
        UNAUTHORIZED_SUMMARY,
        "UNAUTHORIZED",
        "Missing or invalid hook credentials",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_secret() {
        assert!(matches_secret(Some(b"s3cret"), "s3cret"));
        assert!(!matches_secret(Some(b"s3cre"), "s3cret"));
        assert!(!matches_secret(Some(b"S3CRET"), "s3cret"));
        assert!(!matches_secret(None, "s3cret"));
    }
}
