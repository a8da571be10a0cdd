//! Vonage Verify v2 Client
//!
//! Starts and cancels verifications through the Vonage Verify v2 REST API.
//!
//! ## Features
//!
//! - Application JWT (RS256) or API key/secret authentication
//! - RFC 7807 problem responses parsed into structured provider errors
//! - Per-request timeout; no retries, a failed call is reported immediately
//! - Security: phone numbers masked and credentials redacted in logs

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};
use uuid::Uuid;

use vth_core::errors::{ProviderError, ProviderResult};
use vth_core::services::verification::{VerifyProviderTrait, VerifyRequest};
use vth_shared::config::{parse_or, read, require};
use vth_shared::utils::mask_phone;
use vth_shared::{ConfigError, ConfigResult};

use crate::InfrastructureError;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.nexmo.com";

/// Default request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Lifetime of a generated application JWT in seconds
const JWT_TTL_SECS: i64 = 900;

/// Credentials accepted by the Verify v2 API
#[derive(Clone)]
pub enum VonageCredentials {
    /// Application id and PEM-encoded RSA private key, sent as a bearer JWT
    Application {
        application_id: String,
        private_key: String,
    },
    /// Account API key and secret, sent as HTTP basic auth
    ApiKey { api_key: String, api_secret: String },
}

impl std::fmt::Debug for VonageCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VonageCredentials::Application { application_id, .. } => f
                .debug_struct("Application")
                .field("application_id", application_id)
                .field("private_key", &"<redacted>")
                .finish(),
            VonageCredentials::ApiKey { api_key, .. } => f
                .debug_struct("ApiKey")
                .field("api_key", api_key)
                .field("api_secret", &"<redacted>")
                .finish(),
        }
    }
}

/// Vonage Verify configuration
#[derive(Debug, Clone)]
pub struct VonageConfig {
    /// API base URL, without trailing path
    pub base_url: String,
    /// API credentials
    pub credentials: VonageCredentials,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl VonageConfig {
    pub fn new(credentials: VonageCredentials) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    /// Create configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(&vth_shared::config::env_lookup)
    }

    /// Load settings; application credentials take precedence over API keys
    pub fn from_lookup<F>(lookup: &F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = if let Some(application_id) = read(lookup, "VONAGE_APPLICATION_ID") {
            VonageCredentials::Application {
                application_id,
                private_key: load_private_key(lookup)?,
            }
        } else if let Some(api_key) = read(lookup, "VONAGE_API_KEY") {
            VonageCredentials::ApiKey {
                api_key,
                api_secret: require(lookup, "VONAGE_API_SECRET")?,
            }
        } else {
            return Err(ConfigError::missing("VONAGE_APPLICATION_ID or VONAGE_API_KEY"));
        };

        Ok(Self {
            base_url: read(lookup, "VONAGE_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            credentials,
            request_timeout_secs: parse_or(
                lookup,
                "VONAGE_REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?,
        })
    }
}

/// Private key from `VONAGE_PRIVATE_KEY` (inline PEM, `\n` escapes allowed)
/// or the file named by `VONAGE_PRIVATE_KEY_PATH`
fn load_private_key<F>(lookup: &F) -> ConfigResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(inline) = read(lookup, "VONAGE_PRIVATE_KEY") {
        return Ok(inline.replace("\\n", "\n"));
    }

    let path = read(lookup, "VONAGE_PRIVATE_KEY_PATH")
        .ok_or_else(|| ConfigError::missing("VONAGE_PRIVATE_KEY or VONAGE_PRIVATE_KEY_PATH"))?;
    std::fs::read_to_string(&path)
        .map_err(|e| ConfigError::invalid("VONAGE_PRIVATE_KEY_PATH", format!("{}: {}", path, e)))
}

/// Claims of a Vonage application JWT
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationClaims {
    pub application_id: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

impl ApplicationClaims {
    pub fn new(application_id: &str, issued_at: i64) -> Self {
        Self {
            application_id: application_id.to_string(),
            iat: issued_at,
            exp: issued_at + JWT_TTL_SECS,
            jti: Uuid::new_v4().to_string(),
        }
    }
}

enum Auth {
    Bearer {
        application_id: String,
        key: EncodingKey,
    },
    Basic {
        api_key: String,
        api_secret: String,
    },
}

/// Vonage Verify v2 client
pub struct VonageVerifyClient {
    http: Client,
    base_url: String,
    auth: Auth,
}

impl VonageVerifyClient {
    /// Create a new client
    ///
    /// Fails if the HTTP client cannot be built or the private key is not a
    /// valid RSA PEM key.
    pub fn new(config: VonageConfig) -> Result<Self, InfrastructureError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        let auth = match config.credentials {
            VonageCredentials::Application {
                application_id,
                private_key,
            } => Auth::Bearer {
                key: EncodingKey::from_rsa_pem(private_key.as_bytes())?,
                application_id,
            },
            VonageCredentials::ApiKey {
                api_key,
                api_secret,
            } => Auth::Basic {
                api_key,
                api_secret,
            },
        };

        info!(base_url = %config.base_url, "Vonage Verify client initialized");

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth,
        })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(VonageConfig::from_env()?)
    }

    fn verify_url(&self) -> String {
        format!("{}/v2/verify", self.base_url)
    }

    fn request_url(&self, request_id: &str) -> String {
        format!("{}/v2/verify/{}", self.base_url, request_id)
    }

    /// Attach credentials to a request
    fn authorize(&self, builder: RequestBuilder) -> ProviderResult<RequestBuilder> {
        match &self.auth {
            Auth::Bearer {
                application_id,
                key,
            } => {
                let claims = ApplicationClaims::new(application_id, Utc::now().timestamp());
                let token = jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, key)
                    .map_err(|e| {
                        ProviderError::new()
                            .with_title("CredentialError")
                            .with_code("JWT_SIGNING_FAILED")
                            .with_detail(e.to_string())
                    })?;
                Ok(builder.bearer_auth(token))
            }
            Auth::Basic {
                api_key,
                api_secret,
            } => Ok(builder.basic_auth(api_key, Some(api_secret))),
        }
    }
}

#[async_trait]
impl VerifyProviderTrait for VonageVerifyClient {
    async fn create(&self, request: &VerifyRequest) -> ProviderResult<Value> {
        if let Some(step) = request.workflow.first() {
            debug!(
                phone = %mask_phone(&step.to),
                channel = %step.channel,
                "Sending Vonage verification request"
            );
        }

        let response = self
            .authorize(self.http.post(self.verify_url()))?
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(parse_problem(status, &body));
        }

        Ok(serde_json::from_str(&body).unwrap_or_else(|e| {
            warn!(error = %e, "Vonage verification response was not JSON");
            Value::Null
        }))
    }

    async fn cancel(&self, request_id: &str) -> ProviderResult<()> {
        let response = self
            .authorize(self.http.delete(self.request_url(request_id)))?
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(parse_problem(status, &body))
    }

    fn provider_name(&self) -> &'static str {
        "Vonage"
    }
}

/// RFC 7807 problem details returned by the Verify API
#[derive(Debug, Default, Deserialize)]
struct ProblemDetails {
    #[serde(rename = "type")]
    problem_type: Option<String>,
    title: Option<String>,
    detail: Option<String>,
}

/// Convert a non-success response into a provider error
///
/// A body without any problem fields yields an error carrying only the
/// status, so callers fall back to their default messages.
pub fn parse_problem(status: StatusCode, body: &str) -> ProviderError {
    let error = ProviderError::new().with_status(status.as_u16());

    let problem: ProblemDetails = match serde_json::from_str(body) {
        Ok(problem) => problem,
        Err(_) => return error,
    };
    if problem.problem_type.is_none() && problem.title.is_none() && problem.detail.is_none() {
        return error;
    }

    let code = problem
        .problem_type
        .as_deref()
        .and_then(code_from_type)
        .unwrap_or_else(|| status.as_u16().to_string());

    let mut error = error.with_code(code);
    if let Some(title) = problem.title {
        error = error.with_title(title);
    }
    if let Some(detail) = problem.detail {
        error = error.with_detail(detail);
    }
    error
}

/// Machine token from a problem `type` URI: the fragment, else the last
/// path segment
pub fn code_from_type(problem_type: &str) -> Option<String> {
    let token = match problem_type.rsplit_once('#') {
        Some((_, fragment)) => fragment,
        None => problem_type.trim_end_matches('/').rsplit('/').next()?,
    };
    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

fn transport_error(error: reqwest::Error) -> ProviderError {
    let detail = if error.is_timeout() {
        format!("Request to Vonage timed out: {}", error)
    } else {
        format!("Request to Vonage failed: {}", error)
    };
    ProviderError::transport(detail)
}
