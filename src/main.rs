use clap::Parser;
use scryhand::domain::ports::ConfigProvider;
use scryhand::utils::{logger, validation::Validate};
use scryhand::{CliConfig, HandDealer, ScryfallSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting scryhand");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let source = ScryfallSource::new(config.endpoint().to_string());
    let dealer = HandDealer::new(source, config.hand_size());

    let mut players = Vec::with_capacity(config.players().len());
    for name in config.players() {
        match dealer.deal(name).await {
            Ok(player) => players.push(player),
            Err(e) => {
                // Any fetch failure is fatal to the whole run; no partially
                // dealt player is ever printed.
                tracing::error!("❌ Failed to deal a hand for {}: {}", name, e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        }
    }

    for player in &players {
        println!("{:?}", player);
    }

    Ok(())
}
