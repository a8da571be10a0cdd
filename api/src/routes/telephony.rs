use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::dto::TelephonyHookRequest;

use vth_core::domain::HookResponse;
use vth_core::services::verification::{SessionController, VerifyProviderTrait};
use vth_shared::utils::mask_phone;

/// Application state that holds shared services
pub struct AppState {
    pub controller: Arc<SessionController<dyn VerifyProviderTrait>>,
}

impl AppState {
    pub fn new(controller: Arc<SessionController<dyn VerifyProviderTrait>>) -> Self {
        Self { controller }
    }
}

/// Handler for POST /telephony/hook
///
/// Starts a verification for the phone number in the hook payload and
/// answers with the telephony action envelope.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "commands": [{
///         "type": "com.okta.telephony.action",
///         "value": [{"status": "SUCCESSFUL", "provider": "VONAGE", "transactionId": "c11236f4-..."}]
///     }]
/// }
/// ```
///
/// ## Failure (400 Bad Request)
/// ```json
/// {
///     "error": {
///         "errorSummary": "Conflict",
///         "errorCauses": [{"errorSummary": "conflict", "reason": "Concurrent verifications to the same number are not allowed."}]
///     }
/// }
/// ```
pub async fn telephony_hook(
    state: web::Data<AppState>,
    request: web::Json<TelephonyHookRequest>,
) -> HttpResponse {
    let destination = request.destination();
    let channel = request.channel();

    tracing::info!(
        event = "telephony_hook_received",
        event_type = request.event_type.as_deref().unwrap_or("unknown"),
        phone = %mask_phone(destination),
        channel = %channel,
        "Processing telephony hook"
    );

    let outcome = state.controller.start(destination, channel).await;
    let response = HookResponse::from(outcome);

    if response.is_success() {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::BadRequest().json(response)
    }
}
