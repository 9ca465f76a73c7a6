pub mod dealer;

pub use crate::domain::model::{Card, Player};
pub use crate::domain::ports::{CardSource, ConfigProvider};
pub use crate::utils::error::Result;
