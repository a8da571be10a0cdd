//! Application factory
//!
//! Builds the actix-web application: shared state, request tracing, the
//! authenticated hook routes and the health check.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::InternalError,
    web, App, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use crate::middleware::HookAuth;
use crate::routes::{health::health_check, telephony::telephony_hook, AppState};

use vth_core::domain::HookResponse;
use vth_shared::HookAuthConfig;

/// Hook endpoint path
pub const HOOK_PATH: &str = "/telephony/hook";

/// Create and configure the application with all dependencies
pub fn create_app(
    app_state: web::Data<AppState>,
    hook_auth: HookAuthConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(app_state)
        .app_data(json_config())
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::resource(HOOK_PATH)
                .wrap(HookAuth::new(hook_auth.clone()))
                .route(web::post().to(telephony_hook)),
        )
        // Hook registrations that point at the bare host
        .service(
            web::resource("/")
                .wrap(HookAuth::new(hook_auth))
                .route(web::post().to(telephony_hook)),
        )
        .default_service(web::route().to(not_found))
}

/// JSON extractor configuration: malformed bodies get the hook error envelope
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        tracing::warn!(
            event = "telephony_hook_invalid_body",
            path = %req.path(),
            error = %err,
            "Rejected malformed hook body"
        );
        let response = HttpResponse::BadRequest().json(HookResponse::error(
            "InvalidRequest",
            "INVALID_REQUEST",
            &err.to_string(),
        ));
        InternalError::from_response(err, response).into()
    })
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(HookResponse::error(
        "NotFound",
        "NOT_FOUND",
        "The requested resource was not found",
    ))
}
