use crate::domain::model::Player;
use crate::domain::ports::CardSource;
use crate::utils::error::{DealError, Result};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinSet;

/// Populates player hands by fanning out one fetch task per card and joining
/// on all of them before the player becomes visible to the caller.
pub struct HandDealer<S: CardSource> {
    source: Arc<S>,
    hand_size: usize,
}

impl<S: CardSource + 'static> HandDealer<S> {
    pub fn new(source: S, hand_size: usize) -> Self {
        Self {
            source: Arc::new(source),
            hand_size,
        }
    }

    /// Deals a full hand for `name`.
    ///
    /// All fetch tasks are spawned before any is joined, so the network calls
    /// run concurrently. The hand lock is held only for the append, never
    /// across a fetch. Appends may land in any order; the only guarantee is
    /// that every task has finished before this returns.
    ///
    /// The first task error aborts the deal. No partially populated `Player`
    /// is ever returned.
    pub async fn deal(&self, name: &str) -> Result<Player> {
        tracing::info!("Dealing {} cards to {}", self.hand_size, name);
        let hand = Arc::new(Mutex::new(Vec::with_capacity(self.hand_size)));

        let mut tasks = JoinSet::new();
        for _ in 0..self.hand_size {
            let source = Arc::clone(&self.source);
            let hand = Arc::clone(&hand);
            tasks.spawn(async move {
                let card = source.fetch_random().await?;
                hand.lock().await.push(card);
                Ok::<(), DealError>(())
            });
        }

        // Fan-in. Returning early on the first failure drops the set, which
        // aborts any tasks still in flight.
        while let Some(joined) = tasks.join_next().await {
            joined??;
        }

        let hand = std::mem::take(&mut *hand.lock().await);
        tracing::info!("Dealt {} cards to {}", hand.len(), name);
        Ok(Player::new(name, hand))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Card, STARTING_HEALTH};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::Barrier;

    fn bolt() -> Card {
        Card {
            name: "Bolt".to_string(),
            mana_cost: "{R}".to_string(),
            type_line: "Instant".to_string(),
            power: String::new(),
            toughness: String::new(),
        }
    }

    /// Returns the same card on every call, counting calls.
    struct FixedSource {
        card: Card,
        calls: AtomicUsize,
    }

    impl FixedSource {
        fn new(card: Card) -> Self {
            Self {
                card,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CardSource for FixedSource {
        async fn fetch_random(&self) -> Result<Card> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.card.clone())
        }
    }

    /// Returns uniquely numbered cards.
    struct NumberedSource {
        next: AtomicUsize,
    }

    #[async_trait]
    impl CardSource for NumberedSource {
        async fn fetch_random(&self) -> Result<Card> {
            let n = self.next.fetch_add(1, Ordering::SeqCst);
            Ok(Card {
                name: format!("card-{}", n),
                ..bolt()
            })
        }
    }

    /// Fails on exactly one call, succeeds on the rest.
    struct FlakySource {
        calls: AtomicUsize,
        fail_on: usize,
    }

    #[async_trait]
    impl CardSource for FlakySource {
        async fn fetch_random(&self) -> Result<Card> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if n == self.fail_on {
                let parse_err = serde_json::from_str::<Card>("not json").unwrap_err();
                return Err(DealError::ParseError(parse_err));
            }
            Ok(bolt())
        }
    }

    /// Blocks every fetch until all of them have started. A dealer that ran
    /// its fetches sequentially would deadlock here.
    struct BarrierSource {
        barrier: Barrier,
    }

    #[async_trait]
    impl CardSource for BarrierSource {
        async fn fetch_random(&self) -> Result<Card> {
            self.barrier.wait().await;
            Ok(bolt())
        }
    }

    #[tokio::test]
    async fn deal_fills_the_hand_exactly() {
        let dealer = HandDealer::new(FixedSource::new(bolt()), 5);
        let player = dealer.deal("Dan").await.unwrap();

        assert_eq!(player.name, "Dan");
        assert_eq!(player.health, STARTING_HEALTH);
        assert_eq!(player.hand.len(), 5);
        assert!(player.hand.iter().all(|card| *card == bolt()));
    }

    #[tokio::test]
    async fn deal_makes_one_fetch_per_card() {
        let source = FixedSource::new(bolt());
        let dealer = HandDealer::new(source, 5);
        dealer.deal("Dan").await.unwrap();
        assert_eq!(dealer.source.calls.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn fetches_run_concurrently_not_sequentially() {
        let source = BarrierSource {
            barrier: Barrier::new(5),
        };
        let dealer = HandDealer::new(source, 5);

        let player = tokio::time::timeout(Duration::from_secs(5), dealer.deal("Dan"))
            .await
            .expect("fan-out deadlocked: fetches did not overlap")
            .unwrap();
        assert_eq!(player.hand.len(), 5);
    }

    #[tokio::test]
    async fn repeated_deals_never_over_or_underfill() {
        let dealer = HandDealer::new(FixedSource::new(bolt()), 5);
        for _ in 0..100 {
            let player = dealer.deal("Dan").await.unwrap();
            assert_eq!(player.hand.len(), 5);
            assert!(player.hand.iter().all(|card| *card == bolt()));
        }
    }

    #[tokio::test]
    async fn one_failed_fetch_fails_the_whole_deal() {
        let source = FlakySource {
            calls: AtomicUsize::new(0),
            fail_on: 2,
        };
        let dealer = HandDealer::new(source, 5);

        let err = dealer.deal("Dan").await.unwrap_err();
        assert!(matches!(err, DealError::ParseError(_)));
    }

    #[tokio::test]
    async fn players_do_not_share_hand_state() {
        let dealer = HandDealer::new(
            NumberedSource {
                next: AtomicUsize::new(0),
            },
            5,
        );

        let dan = dealer.deal("Dan").await.unwrap();
        let seth = dealer.deal("Seth").await.unwrap();

        assert_eq!(dan.hand.len(), 5);
        assert_eq!(seth.hand.len(), 5);
        for card in &dan.hand {
            assert!(!seth.hand.contains(card));
        }
    }
}
