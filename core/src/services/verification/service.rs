//! Verification session controller implementation

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use vth_shared::utils::mask_phone;

use crate::domain::entities::{Channel, VerificationAttempt};
use crate::domain::value_objects::NormalizedOutcome;
use crate::errors::ProviderResult;

use super::config::SessionControllerConfig;
use super::registry::SessionRegistry;
use super::response::extract_request_id;
use super::traits::VerifyProviderTrait;
use super::types::{CancelOutcome, VerifyRequest};

type DestinationLock = Arc<tokio::sync::Mutex<()>>;

/// Starts verifications so that each destination has at most one tracked
/// attempt with the provider.
///
/// `start` cancels the attempt recorded for the destination (if any), creates
/// a new one and records its id. Provider failures never escape: every call
/// resolves to a [`NormalizedOutcome`].
pub struct SessionController<P: VerifyProviderTrait + ?Sized> {
    /// Provider client used for create and cancel calls
    provider: Arc<P>,
    /// Latest attempt per destination
    registry: SessionRegistry,
    /// Controller configuration
    config: SessionControllerConfig,
    /// Per-destination locks, only used when `exclusive_per_destination` is set.
    /// An entry lives while some call for the destination holds or awaits it.
    destination_locks: Mutex<HashMap<String, DestinationLock>>,
}

impl<P: VerifyProviderTrait + ?Sized> SessionController<P> {
    /// Create a controller with a fresh registry
    pub fn new(provider: Arc<P>, config: SessionControllerConfig) -> Self {
        Self::with_registry(provider, SessionRegistry::new(), config)
    }

    /// Create a controller around an existing registry
    ///
    /// # Arguments
    ///
    /// * `provider` - Verification provider client
    /// * `registry` - Registry handle; clones observe the controller's updates
    /// * `config` - Controller configuration
    pub fn with_registry(
        provider: Arc<P>,
        registry: SessionRegistry,
        config: SessionControllerConfig,
    ) -> Self {
        Self {
            provider,
            registry,
            config,
            destination_locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    pub fn config(&self) -> &SessionControllerConfig {
        &self.config
    }

    /// Start a verification for `destination`
    ///
    /// This method:
    /// 1. Cancels the attempt tracked for the destination, if any, and forgets
    ///    it whatever the cancellation result
    /// 2. Creates a new attempt with the configured brand
    /// 3. Records the new provider request id
    ///
    /// The destination is forwarded verbatim; the channel defaults to SMS and
    /// is lowercased. Neither is validated here.
    pub async fn start(&self, destination: &str, channel: impl Into<Channel>) -> NormalizedOutcome {
        let channel = channel.into();

        let result = if self.config.exclusive_per_destination {
            let lock = self.lock_for(destination);
            let result = {
                let _guard = lock.lock().await;
                self.run_sequence(destination, &channel).await
            };
            self.release_lock(destination, lock);
            result
        } else {
            self.run_sequence(destination, &channel).await
        };

        match result {
            Ok(attempt) => {
                tracing::info!(
                    phone = %mask_phone(destination),
                    channel = %channel,
                    request_id = attempt.provider_request_id.as_deref().unwrap_or("<none>"),
                    provider = self.provider.provider_name(),
                    event = "verification_started",
                    "Verification started"
                );
                NormalizedOutcome::success(channel, attempt.provider_request_id)
            }
            Err(error) => {
                tracing::error!(
                    phone = %mask_phone(destination),
                    channel = %channel,
                    error = %error,
                    provider = self.provider.provider_name(),
                    event = "verification_start_failed",
                    "Failed to start verification"
                );
                NormalizedOutcome::from_provider_error(channel, &error)
            }
        }
    }

    /// Read, cancel, clear and create for one destination.
    ///
    /// The registry is not locked between steps, so concurrent calls for the
    /// same destination can interleave at each provider call.
    async fn run_sequence(
        &self,
        destination: &str,
        channel: &Channel,
    ) -> ProviderResult<VerificationAttempt> {
        if let CancelOutcome::Failed { request_id, error } = self.cancel_prior(destination).await {
            tracing::warn!(
                phone = %mask_phone(destination),
                request_id = %request_id,
                error = %error,
                event = "verification_cancel_failed",
                "Could not cancel previous verification, continuing"
            );
        }

        let request = VerifyRequest::single(&self.config.brand, channel.clone(), destination);
        let response = self.provider.create(&request).await?;

        let request_id = extract_request_id(&response);
        match &request_id {
            Some(id) => self.registry.set(destination, id.as_str()),
            None => tracing::warn!(
                phone = %mask_phone(destination),
                event = "verification_id_missing",
                "Provider response carried no request id"
            ),
        }

        Ok(VerificationAttempt::new(destination, channel.clone(), request_id))
    }

    /// Best-effort cancellation of the attempt tracked for `destination`
    async fn cancel_prior(&self, destination: &str) -> CancelOutcome {
        let Some(request_id) = self.registry.get(destination) else {
            return CancelOutcome::NothingToCancel;
        };

        tracing::debug!(
            phone = %mask_phone(destination),
            request_id = %request_id,
            "Cancelling previous verification"
        );

        let result = self.provider.cancel(&request_id).await;
        self.registry.remove(destination);

        match result {
            Ok(()) => CancelOutcome::Cancelled { request_id },
            Err(error) => CancelOutcome::Failed { request_id, error },
        }
    }

    fn lock_for(&self, destination: &str) -> DestinationLock {
        self.destination_locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(destination.to_string())
            .or_default()
            .clone()
    }

    /// Drop the caller's handle and forget the lock if nobody else has one
    fn release_lock(&self, destination: &str, lock: DestinationLock) {
        let mut locks = self
            .destination_locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        drop(lock);
        if locks
            .get(destination)
            .is_some_and(|held| Arc::strong_count(held) == 1)
        {
            locks.remove(destination);
        }
    }

    #[cfg(test)]
    pub(crate) fn tracked_lock_count(&self) -> usize {
        self.destination_locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
