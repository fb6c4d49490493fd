use async_trait::async_trait;
use std::time::Duration;
use tokio::time::{Interval, MissedTickBehavior};
use tracing::debug;

pub const COUNTDOWN_PERIOD: Duration = Duration::from_secs(1);

/// Source of countdown ticks. The loop only polls it while the timer runs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TickSource: Send {
    // Start a fresh phase: the next tick lands one full period from now
    fn restart(&mut self);

    async fn next_tick(&mut self);
}

pub struct IntervalTicks {
    interval: Interval,
}

impl IntervalTicks {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }
}

impl Default for IntervalTicks {
    fn default() -> Self {
        Self::new(COUNTDOWN_PERIOD)
    }
}

#[async_trait]
impl TickSource for IntervalTicks {
    fn restart(&mut self) {
        self.interval.reset();
    }

    async fn next_tick(&mut self) {
        self.interval.tick().await;
    }
}

/// Channel-fed ticks for driving the loop by hand.
#[cfg(test)]
pub struct ManualTicks {
    rx: tokio::sync::mpsc::UnboundedReceiver<()>,
}

#[cfg(test)]
impl ManualTicks {
    pub fn new() -> (Self, tokio::sync::mpsc::UnboundedSender<()>) {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        (Self { rx }, tx)
    }
}

#[cfg(test)]
#[async_trait]
impl TickSource for ManualTicks {
    fn restart(&mut self) {}

    async fn next_tick(&mut self) {
        if self.rx.recv().await.is_none() {
            std::future::pending::<()>().await;
        }
    }
}

/// Arms and disarms a [`TickSource`] as the timer enters and leaves
/// `Running`.
pub struct TickDriver {
    source: Box<dyn TickSource>,
    armed: bool,
}

impl TickDriver {
    pub fn new(source: Box<dyn TickSource>) -> Self {
        Self {
            source,
            armed: false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn arm(&mut self) {
        if self.armed {
            return;
        }
        self.source.restart();
        self.armed = true;
        debug!("tick driver armed");
    }

    pub fn disarm(&mut self) {
        if self.armed {
            self.armed = false;
            debug!("tick driver disarmed");
        }
    }

    pub async fn wait(&mut self) {
        self.source.next_tick().await;
    }
}
