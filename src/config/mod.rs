use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_list, validate_positive_number, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://api.scryfall.com/cards/random";
pub const DEFAULT_HAND_SIZE: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "scryhand")]
#[command(about = "Deals hands of random cards fetched concurrently from Scryfall")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, value_delimiter = ',', default_value = "Dan,Seth")]
    pub players: Vec<String>,

    #[arg(long, default_value_t = DEFAULT_HAND_SIZE)]
    pub hand_size: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn hand_size(&self) -> usize {
        self.hand_size
    }

    fn players(&self) -> &[String] {
        &self.players
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_positive_number("hand_size", self.hand_size, 1)?;
        validate_non_empty_list("players", &self.players)?;
        Ok(())
    }
}
