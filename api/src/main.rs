use actix_web::{web, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vth_api::{app::create_app, config::Config, routes::AppState};
use vth_core::services::verification::{SessionController, SessionControllerConfig};
use vth_infra::verify::create_verify_provider;
use vth_shared::{LogFormat, LoggingConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    info!(
        environment = %config.environment,
        provider = ?config.provider.kind,
        hook_auth = config.hook_auth.is_enabled(),
        exclusive_per_destination = config.exclusive_per_destination,
        "Starting telephony hook bridge"
    );
    if !config.hook_auth.is_enabled() {
        tracing::warn!("HOOK_AUTH_SECRET is not set, hook calls are not authenticated");
    }

    let provider = create_verify_provider(&config.provider)
        .context("Failed to create verification provider")?;
    info!(provider = provider.provider_name(), "Verification provider ready");

    let controller = Arc::new(SessionController::new(
        provider,
        SessionControllerConfig::new(config.provider.brand.clone())
            .with_exclusive_per_destination(config.exclusive_per_destination),
    ));
    let app_state = web::Data::new(AppState::new(controller));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let hook_auth = config.hook_auth.clone();
    let mut server = HttpServer::new(move || create_app(app_state.clone(), hook_auth.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over the configured level when both are present.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));

    let registry = tracing_subscriber::registry().with(filter);
    match logging.format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).init(),
        LogFormat::Compact => registry.with(fmt::layer().compact()).init(),
    }
}
