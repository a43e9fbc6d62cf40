#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::recommendations::DEFAULT_BROWSER_USER_AGENT;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SCRYFALL_BASE_URL: &str = "https://api.scryfall.com";
pub const DEFAULT_EDHREC_BASE_URL: &str = "https://json.edhrec.com";

/// Effective process configuration, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub scryfall_base_url: String,
    pub edhrec_base_url: String,
    pub browser_user_agent: String,
    pub request_timeout_seconds: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            scryfall_base_url: DEFAULT_SCRYFALL_BASE_URL.to_string(),
            edhrec_base_url: DEFAULT_EDHREC_BASE_URL.to_string(),
            browser_user_agent: DEFAULT_BROWSER_USER_AGENT.to_string(),
            request_timeout_seconds: None,
        }
    }
}

impl AppConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ConfigProvider for AppConfig {
    fn scryfall_base_url(&self) -> &str {
        &self.scryfall_base_url
    }

    fn edhrec_base_url(&self) -> &str {
        &self.edhrec_base_url
    }

    fn browser_user_agent(&self) -> &str {
        &self.browser_user_agent
    }

    fn request_timeout_seconds(&self) -> Option<u64> {
        self.request_timeout_seconds
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("server.host", &self.host)?;
        validation::validate_positive_number("server.port", self.port, 1)?;
        validation::validate_url("upstream.scryfall_base_url", &self.scryfall_base_url)?;
        validation::validate_url("upstream.edhrec_base_url", &self.edhrec_base_url)?;
        validation::validate_non_empty_string("upstream.user_agent", &self.browser_user_agent)?;
        if let Some(timeout) = self.request_timeout_seconds {
            validation::validate_positive_number("upstream.timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}
