//! Mock implementations for testing the session controller

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::errors::{ProviderError, ProviderResult};
use crate::services::verification::{SessionRegistry, VerifyProviderTrait, VerifyRequest};

/// Call observed by the mock provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCall {
    Create {
        brand: String,
        channel: String,
        to: String,
    },
    Cancel(String),
}

// Mock verification provider for testing
pub struct MockVerifyProvider {
    pub calls: Mutex<Vec<ProviderCall>>,
    create_results: Mutex<VecDeque<ProviderResult<Value>>>,
    cancel_error: Mutex<Option<ProviderError>>,
    yield_in_cancel: AtomicBool,
    next_id: AtomicUsize,
    watched: Mutex<Option<(SessionRegistry, String)>>,
    pub registry_at_create: Mutex<Vec<Option<String>>>,
}

impl MockVerifyProvider {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            create_results: Mutex::new(VecDeque::new()),
            cancel_error: Mutex::new(None),
            yield_in_cancel: AtomicBool::new(false),
            next_id: AtomicUsize::new(1),
            watched: Mutex::new(None),
            registry_at_create: Mutex::new(Vec::new()),
        }
    }

    /// Queue the result of the next `create` call; unscripted calls succeed
    /// with `{"request_id": "req-N"}`
    pub fn push_create_result(&self, result: ProviderResult<Value>) {
        self.create_results.lock().unwrap().push_back(result);
    }

    /// Make every `cancel` call fail with `error`
    pub fn fail_cancel_with(&self, error: ProviderError) {
        *self.cancel_error.lock().unwrap() = Some(error);
    }

    /// Suspend once inside `cancel` so concurrent calls can interleave
    pub fn yield_in_cancel(&self) {
        self.yield_in_cancel.store(true, Ordering::SeqCst);
    }

    /// Record the registry entry for `destination` whenever `create` is called
    pub fn watch_registry(&self, registry: SessionRegistry, destination: &str) {
        *self.watched.lock().unwrap() = Some((registry, destination.to_string()));
    }

    pub fn calls(&self) -> Vec<ProviderCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn cancel_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ProviderCall::Cancel(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    pub fn create_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, ProviderCall::Create { .. }))
            .count()
    }
}

#[async_trait]
impl VerifyProviderTrait for MockVerifyProvider {
    async fn create(&self, request: &VerifyRequest) -> ProviderResult<Value> {
        let step = &request.workflow[0];
        self.calls.lock().unwrap().push(ProviderCall::Create {
            brand: request.brand.clone(),
            channel: step.channel.as_str().to_string(),
            to: step.to.clone(),
        });

        let observed = self
            .watched
            .lock()
            .unwrap()
            .as_ref()
            .map(|(registry, destination)| registry.get(destination));
        if let Some(entry) = observed {
            self.registry_at_create.lock().unwrap().push(entry);
        }

        let scripted = self.create_results.lock().unwrap().pop_front();
        match scripted {
            Some(result) => result,
            None => {
                let n = self.next_id.fetch_add(1, Ordering::SeqCst);
                Ok(json!({ "request_id": format!("req-{}", n) }))
            }
        }
    }

    async fn cancel(&self, request_id: &str) -> ProviderResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push(ProviderCall::Cancel(request_id.to_string()));

        if self.yield_in_cancel.load(Ordering::SeqCst) {
            tokio::task::yield_now().await;
        }

        let error = self.cancel_error.lock().unwrap().clone();
        match error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "Mock"
    }
}
