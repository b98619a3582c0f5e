//! Decorative rain field.
//!
//! One timer appends a randomly placed drop every 300ms and keeps the newest
//! 15; a second one trims the field to the newest 10 every 5s. Both timers
//! belong to the [`RainField`] and stop when it is dropped.

use std::ops::ControlFlow;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use rand::Rng;
use serde::Serialize;
use tokio::sync::RwLock;

use super::timer::{FirstTick, TimerHandle};

#[derive(Debug, Clone)]
pub struct RainConfig {
    pub spawn_every: Duration,
    pub prune_every: Duration,
    pub max_drops: usize,
    pub keep_on_prune: usize,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            spawn_every: Duration::from_millis(300),
            prune_every: Duration::from_millis(5_000),
            max_drops: 15,
            keep_on_prune: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RainDrop {
    pub id: u64,
    /// Horizontal position, percent of the viewport width
    pub left_pct: f64,
    /// Fall duration, 2-5 seconds
    pub duration_secs: f64,
    /// Sprite size, 20-40 px
    pub size_px: f64,
}

impl RainDrop {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, id: u64) -> Self {
        Self {
            id,
            left_pct: rng.gen_range(0.0..100.0),
            duration_secs: rng.gen_range(2.0..5.0),
            size_px: rng.gen_range(20.0..40.0),
        }
    }
}

/// Keep only the newest `keep` drops
fn keep_newest(drops: &mut Vec<RainDrop>, keep: usize) {
    if drops.len() > keep {
        drops.drain(..drops.len() - keep);
    }
}

pub struct RainField {
    drops: Arc<RwLock<Vec<RainDrop>>>,
    spawner: TimerHandle,
    pruner: TimerHandle,
}

impl RainField {
    pub fn start(config: RainConfig) -> Self {
        let drops = Arc::new(RwLock::new(Vec::with_capacity(config.max_drops)));
        let next_id = Arc::new(AtomicU64::new(0));

        let spawner = {
            let drops = Arc::clone(&drops);
            let max = config.max_drops;
            TimerHandle::every("rain-spawn", config.spawn_every, FirstTick::AfterPeriod, move || {
                let drops = Arc::clone(&drops);
                let rain_drop = RainDrop::random(&mut rand::thread_rng(), next_id.fetch_add(1, Ordering::Relaxed));
                async move {
                    let mut drops = drops.write().await;
                    drops.push(rain_drop);
                    keep_newest(&mut drops, max);
                    ControlFlow::Continue(())
                }
            })
        };

        let pruner = {
            let drops = Arc::clone(&drops);
            let keep = config.keep_on_prune;
            TimerHandle::every("rain-prune", config.prune_every, FirstTick::AfterPeriod, move || {
                let drops = Arc::clone(&drops);
                async move {
                    keep_newest(&mut *drops.write().await, keep);
                    ControlFlow::Continue(())
                }
            })
        };

        Self { drops, spawner, pruner }
    }

    pub async fn drops(&self) -> Vec<RainDrop> {
        self.drops.read().await.clone()
    }

    /// Stop both timers; the current drops stay readable
    pub fn stop(&mut self) {
        self.spawner.cancel();
        self.pruner.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_drop_ranges() {
        let mut rng = rand::thread_rng();
        for id in 0..200 {
            let rain_drop = RainDrop::random(&mut rng, id);
            assert!((0.0..100.0).contains(&rain_drop.left_pct));
            assert!((2.0..5.0).contains(&rain_drop.duration_secs));
            assert!((20.0..40.0).contains(&rain_drop.size_px));
        }
    }

    #[test]
    fn test_keep_newest() {
        let mut rng = rand::thread_rng();
        let mut drops: Vec<RainDrop> = (0..15).map(|id| RainDrop::random(&mut rng, id)).collect();
        keep_newest(&mut drops, 10);
        assert_eq!(drops.len(), 10);
        assert_eq!(drops.first().map(|d| d.id), Some(5));
        assert_eq!(drops.last().map(|d| d.id), Some(14));
    }

    #[tokio::test(start_paused = true)]
    async fn test_field_is_bounded() {
        let field = RainField::start(RainConfig::default());

        tokio::time::sleep(Duration::from_millis(950)).await;
        assert_eq!(field.drops().await.len(), 3);

        tokio::time::sleep(Duration::from_millis(3_600)).await;
        // 15 spawns so far, capped at 15
        assert_eq!(field.drops().await.len(), 15);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(field.drops().await.len(), 15);

        // prune at 5000ms trims to 10
        tokio::time::sleep(Duration::from_millis(280)).await;
        let drops = field.drops().await;
        assert_eq!(drops.len(), 10);
        assert!(drops.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_freezes_field() {
        let mut field = RainField::start(RainConfig::default());
        tokio::time::sleep(Duration::from_millis(650)).await;
        field.stop();

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(field.drops().await.len(), 2);
    }
}
