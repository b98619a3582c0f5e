//! Owned timer tasks.
//!
//! Every repeating timer in the crate is a spawned task held by a
//! [`TimerHandle`]. Dropping or cancelling the handle aborts the task, so a
//! timer never outlives the controller that owns it.

use std::future::Future;
use std::ops::ControlFlow;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// When the first tick of a repeating timer fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstTick {
    Immediate,
    AfterPeriod,
}

#[derive(Debug)]
pub struct TimerHandle {
    name: &'static str,
    task: Option<JoinHandle<()>>,
}

impl TimerHandle {
    /// Spawn a one-shot or hand-rolled task under a handle
    pub fn spawn<F>(name: &'static str, future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::trace!("Starting timer {}", name);
        Self {
            name,
            task: Some(tokio::spawn(future)),
        }
    }

    /// Call `tick` every `period` until it returns `ControlFlow::Break`
    pub fn every<F, Fut>(name: &'static str, period: Duration, first: FirstTick, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ControlFlow<()>> + Send + 'static,
    {
        Self::spawn(name, async move {
            let start = match first {
                FirstTick::Immediate => Instant::now(),
                FirstTick::AfterPeriod => Instant::now() + period,
            };
            let mut ticker = interval_at(start, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if tick().await.is_break() {
                    break;
                }
            }
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the task has run to completion or been aborted
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, |task| task.is_finished())
    }

    /// Abort the task. Safe to call more than once.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            if !task.is_finished() {
                tracing::trace!("Cancelling timer {}", self.name);
            }
            task.abort();
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
