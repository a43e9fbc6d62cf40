use crate::config::AppConfig;
use crate::utils::error::{RecsError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk configuration. Every key is optional; missing keys keep the
/// built-in defaults.
///
/// ```toml
/// [server]
/// port = 3000
///
/// [upstream]
/// edhrec_base_url = "${EDHREC_URL}"
/// timeout_seconds = 10
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: Option<ServerConfig>,
    #[serde(default)]
    pub upstream: Option<UpstreamConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpstreamConfig {
    pub scryfall_base_url: Option<String>,
    pub edhrec_base_url: Option<String>,
    pub user_agent: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RecsError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the value of the environment variable. Unset
    /// variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RecsError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// Overlays the values present in the file onto `config`.
    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(server) = &self.server {
            if let Some(host) = &server.host {
                config.host = host.clone();
            }
            if let Some(port) = server.port {
                config.port = port;
            }
        }

        if let Some(upstream) = &self.upstream {
            if let Some(url) = &upstream.scryfall_base_url {
                config.scryfall_base_url = url.clone();
            }
            if let Some(url) = &upstream.edhrec_base_url {
                config.edhrec_base_url = url.clone();
            }
            if let Some(agent) = &upstream.user_agent {
                config.browser_user_agent = agent.clone();
            }
            if upstream.timeout_seconds.is_some() {
                config.request_timeout_seconds = upstream.timeout_seconds;
            }
        }
    }

    pub fn into_app_config(self) -> AppConfig {
        let mut config = AppConfig::default();
        self.apply_to(&mut config);
        config
    }
}
