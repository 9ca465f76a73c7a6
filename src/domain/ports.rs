use crate::domain::model::Card;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of single random card records. The production implementation talks
/// to the remote provider; tests substitute stubs.
#[async_trait]
pub trait CardSource: Send + Sync {
    async fn fetch_random(&self) -> Result<Card>;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn hand_size(&self) -> usize;
    fn players(&self) -> &[String];
}
