use crate::config::toml_config::TomlConfig;
use crate::config::AppConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "commander-recs")]
#[command(about = "Serves EDHREC card recommendations for a commander looked up on Scryfall")]
pub struct CliConfig {
    #[arg(long, short = 'c', help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub host: Option<String>,

    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    #[arg(long)]
    pub scryfall_url: Option<String>,

    #[arg(long)]
    pub edhrec_url: Option<String>,

    #[arg(long, help = "Upstream request timeout; unset means no timeout")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, short = 'v', help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Defaults, then the config file if given, then explicit flags.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_app_config(),
            None => AppConfig::default(),
        };

        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(url) = &self.scryfall_url {
            config.scryfall_base_url = url.clone();
        }
        if let Some(url) = &self.edhrec_url {
            config.edhrec_base_url = url.clone();
        }
        if self.timeout_seconds.is_some() {
            config.request_timeout_seconds = self.timeout_seconds;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::parse_from([
            "commander-recs",
            "--port",
            "8080",
            "--edhrec-url",
            "http://localhost:9000",
            "-v",
        ]);

        assert!(cli.verbose);
        let config = cli.resolve().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.edhrec_base_url, "http://localhost:9000");
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 4000\n\n[upstream]\ntimeout_seconds = 5").unwrap();

        let cli = CliConfig {
            config: Some(file.path().to_path_buf()),
            port: Some(5000),
            ..CliConfig::default()
        };
        let config = cli.resolve().unwrap();

        assert_eq!(config.port, 5000);
        assert_eq!(config.request_timeout_seconds, Some(5));
    }
}
