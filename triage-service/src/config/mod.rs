use secrecy::SecretString;
use service_core::config::{self as core_config, get_env, get_env_parsed};
use service_core::error::AppError;
use std::time::Duration;

use crate::services::map_url::DEFAULT_MAPS_BASE_URL;
use crate::services::providers::gateway::{DEFAULT_GATEWAY_URL, DEFAULT_MODEL};
use crate::services::providers::GatewayConfig;

/// Default upstream timeout. Vision calls on large photos can be slow.
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 120;

/// Default request body cap (10 MiB) so photo data-URIs fit.
const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct TriageConfig {
    pub common: core_config::Config,
    pub gateway: GatewayConfig,
    pub maps: MapsConfig,
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone)]
pub struct MapsConfig {
    pub base_url: String,
}

impl TriageConfig {
    /// Load from the environment. A missing API key fails here, at startup.
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let is_prod = core_config::is_production();

        let timeout_secs =
            get_env_parsed("UPSTREAM_TIMEOUT_SECS", DEFAULT_UPSTREAM_TIMEOUT_SECS, is_prod)?;

        Ok(TriageConfig {
            common,
            gateway: GatewayConfig {
                base_url: get_env("AI_GATEWAY_URL", Some(DEFAULT_GATEWAY_URL), is_prod)?,
                api_key: SecretString::new(get_env("AI_GATEWAY_API_KEY", None, is_prod)?),
                model: get_env("TRIAGE_MODEL", Some(DEFAULT_MODEL), is_prod)?,
                timeout: Duration::from_secs(timeout_secs),
            },
            maps: MapsConfig {
                base_url: get_env("MAPS_BASE_URL", Some(DEFAULT_MAPS_BASE_URL), is_prod)?,
            },
            max_body_bytes: get_env_parsed("MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES, is_prod)?,
        })
    }
}

impl Default for MapsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_MAPS_BASE_URL.to_string(),
        }
    }
}
