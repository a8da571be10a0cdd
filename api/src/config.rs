use vth_infra::config::VerifyProviderConfig;
use vth_shared::config::{env_lookup, parse_flag};
use vth_shared::{ConfigResult, Environment, HookAuthConfig, LoggingConfig, ServerConfig};

/// Process configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub hook_auth: HookAuthConfig,
    pub logging: LoggingConfig,
    pub provider: VerifyProviderConfig,
    /// Serialize the verification sequence per destination
    pub exclusive_per_destination: bool,
}

impl Config {
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(&env_lookup)
    }

    pub fn from_lookup<F>(lookup: &F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::from_lookup(lookup);

        Ok(Config {
            environment,
            server: ServerConfig::from_lookup(lookup)?,
            hook_auth: HookAuthConfig::from_lookup(lookup, environment)?,
            logging: LoggingConfig::from_lookup(lookup, environment),
            provider: VerifyProviderConfig::from_lookup(lookup)?,
            exclusive_per_destination: parse_flag(
                lookup,
                "VERIFY_EXCLUSIVE_PER_DESTINATION",
                false,
            )?,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
