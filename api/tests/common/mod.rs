//! Shared helpers for the HTTP tests

#![allow(dead_code)]

use actix_web::web;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use vth_api::routes::AppState;
use vth_core::errors::{ProviderError, ProviderResult};
use vth_core::services::verification::{
    SessionController, SessionControllerConfig, VerifyProviderTrait, VerifyRequest,
};

/// Provider that records calls and replays scripted create results
#[derive(Default)]
pub struct ScriptedProvider {
    creates: Mutex<Vec<VerifyRequest>>,
    cancels: Mutex<Vec<String>>,
    create_results: Mutex<VecDeque<ProviderResult<Value>>>,
}

impl ScriptedProvider {
    pub fn push_create_result(&self, result: ProviderResult<Value>) {
        self.create_results.lock().unwrap().push_back(result);
    }

    pub fn creates(&self) -> Vec<VerifyRequest> {
        self.creates.lock().unwrap().clone()
    }

    pub fn cancels(&self) -> Vec<String> {
        self.cancels.lock().unwrap().clone()
    }
}

#[async_trait]
impl VerifyProviderTrait for ScriptedProvider {
    async fn create(&self, request: &VerifyRequest) -> ProviderResult<Value> {
        let number = {
            let mut creates = self.creates.lock().unwrap();
            creates.push(request.clone());
            creates.len()
        };
        self.create_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(json!({ "request_id": format!("req-{}", number) })))
    }

    async fn cancel(&self, request_id: &str) -> ProviderResult<()> {
        self.cancels.lock().unwrap().push(request_id.to_string());
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "Scripted"
    }
}

pub fn problem(title: &str, code: &str, detail: &str) -> ProviderError {
    ProviderError::new()
        .with_title(title)
        .with_code(code)
        .with_detail(detail)
}

/// Application state over `provider` with brand "Acme"
pub fn app_state(provider: Arc<ScriptedProvider>) -> web::Data<AppState> {
    let provider: Arc<dyn VerifyProviderTrait> = provider;
    let controller = SessionController::new(provider, SessionControllerConfig::new("Acme"));
    web::Data::new(AppState::new(Arc::new(controller)))
}

pub fn hook_body(phone: &str, channel: &str) -> Value {
    json!({
        "eventType": "com.okta.telephony.provider",
        "data": {
            "messageProfile": {
                "msgTemplate": "Your code is ${code}",
                "phoneNumber": phone,
                "deliveryChannel": channel,
                "otpCode": "123456"
            }
        }
    })
}
