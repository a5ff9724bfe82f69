//! Periodic tick scheduler
//!
//! The interval only exists while the timer runs. `stop()` (or dropping the
//! scheduler) releases it, so a paused or discarded engine is never ticked.

use std::time::Duration;
use tokio::time::{interval_at, Instant, Interval};
use tracing::{debug, warn};

#[derive(Debug)]
pub struct Scheduler {
    period: Duration,
    interval: Option<Interval>,
}

impl Scheduler {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            interval: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Start ticking; the first tick fires one period from now
    pub fn start(&mut self) {
        if self.interval.is_some() {
            return;
        }
        let Some(first) = Instant::now().checked_add(self.period) else {
            warn!("Tick period {:?} is out of range, scheduler not started", self.period);
            return;
        };
        debug!("Starting tick scheduler every {:?}", self.period);
        self.interval = Some(interval_at(first, self.period));
    }

    pub fn stop(&mut self) {
        if self.interval.take().is_some() {
            debug!("Tick scheduler stopped");
        }
    }

    pub fn is_active(&self) -> bool {
        self.interval.is_some()
    }

    /// Wait for the next tick. Never resolves while stopped.
    pub async fn next(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_period_while_active() {
        let mut scheduler = Scheduler::new(Duration::from_millis(10));
        scheduler.start();
        assert!(scheduler.is_active());

        let begin = Instant::now();
        for _ in 0..3 {
            scheduler.next().await;
        }
        assert_eq!(begin.elapsed(), Duration::from_millis(30));
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_scheduler_never_fires() {
        let mut scheduler = Scheduler::new(Duration::from_millis(10));
        scheduler.start();
        scheduler.stop();
        assert!(!scheduler.is_active());

        let waited = timeout(Duration::from_secs(1), scheduler.next()).await;
        assert!(waited.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn out_of_range_period_does_not_start() {
        let mut scheduler = Scheduler::new(Duration::MAX);
        scheduler.start();
        assert!(!scheduler.is_active());
        assert_eq!(scheduler.period(), Duration::MAX);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_waits_a_full_period() {
        let mut scheduler = Scheduler::new(Duration::from_millis(10));
        scheduler.start();
        scheduler.next().await;
        scheduler.stop();

        tokio::time::sleep(Duration::from_millis(95)).await;
        scheduler.start();
        let begin = Instant::now();
        scheduler.next().await;
        assert_eq!(begin.elapsed(), Duration::from_millis(10));
    }
}
