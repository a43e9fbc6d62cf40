use clap::Parser;
use commander_recs::utils::{logger, validation::Validate};
use commander_recs::CliConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting commander-recs");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Upstreams: scryfall={} edhrec={}",
        config.scryfall_base_url,
        config.edhrec_base_url
    );

    commander_recs::serve(&config).await
}
