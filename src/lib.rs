pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::scryfall::ScryfallSource;
pub use crate::config::CliConfig;
pub use crate::core::dealer::HandDealer;
pub use crate::domain::model::{Card, Player};
pub use crate::utils::error::{DealError, Result};
