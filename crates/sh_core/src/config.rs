//! Engine configuration.
//!
//! Everything has a working default; the name-service endpoint can be
//! overridden through the environment for self-hosted mirrors and tests.

use std::env;
use std::time::Duration;

/// Env var overriding the remote name-service endpoint.
pub const NAME_API_ENV: &str = "SH_NAME_API_URL";

/// Default public endpoint (randomuser-style payload).
pub const DEFAULT_NAME_API_URL: &str = "https://randomuser.me/api/";

/// Remote name-provider settings.
#[derive(Debug, Clone)]
pub struct NameServiceConfig {
    pub endpoint: String,
    /// Hard bound on the network call; generation must never block on the
    /// name service beyond this.
    pub request_timeout: Duration,
}

impl Default for NameServiceConfig {
    fn default() -> Self {
        NameServiceConfig {
            endpoint: DEFAULT_NAME_API_URL.to_string(),
            request_timeout: Duration::from_secs(2),
        }
    }
}

impl NameServiceConfig {
    /// Default config with the endpoint resolved from `SH_NAME_API_URL`
    /// when set and non-empty.
    pub fn from_env() -> Self {
        let mut config = NameServiceConfig::default();
        if let Ok(endpoint) = env::var(NAME_API_ENV) {
            let trimmed = endpoint.trim();
            if !trimmed.is_empty() {
                config.endpoint = trimmed.to_string();
            }
        }
        config
    }
}

/// Squad-generation tuning.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Candidate draws attempted before falling back to the numeric
    /// suffix scheme.
    pub name_retry_budget: usize,
    /// Name candidates requested per squad slot; headroom for collisions.
    pub candidates_per_slot: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            name_retry_budget: 8,
            candidates_per_slot: 2,
        }
    }
}
