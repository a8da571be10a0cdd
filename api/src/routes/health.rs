use actix_web::{web, HttpResponse};

use super::AppState;

/// Health check endpoint handler
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "telephony-hook-bridge",
        "version": env!("CARGO_PKG_VERSION"),
        "tracked_destinations": state.controller.registry().len(),
    }))
}
