//! Repeating animation timer.
//!
//! A thin wrapper over [`tokio::time::Interval`] that can be stopped,
//! restarted, and re-timed.  Ticks are awaited from the main loop's
//! `select!`, so each tick is fully handled before the next one can fire.

use std::time::Duration;

use tokio::time::{self, Instant, Interval, MissedTickBehavior};

use crate::core::indicator::MIN_INTERVAL;

pub struct AnimationTimer {
    period: Duration,
    /// `None` while stopped.
    interval: Option<Interval>,
}

impl AnimationTimer {
    pub fn new(period: Duration, running: bool) -> Self {
        let period = period.max(MIN_INTERVAL);
        Self {
            period,
            interval: running.then(|| schedule(period)),
        }
    }

    #[cfg(test)]
    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    pub fn start(&mut self) {
        if self.interval.is_none() {
            self.interval = Some(schedule(self.period));
        }
    }

    pub fn stop(&mut self) {
        self.interval = None;
    }

    /// Change the period.  A running timer restarts its schedule so the next
    /// tick lands one new period from now.
    pub fn set_period(&mut self, period: Duration) {
        let period = period.max(MIN_INTERVAL);
        if period == self.period {
            return;
        }
        self.period = period;
        if self.interval.is_some() {
            self.interval = Some(schedule(period));
        }
    }

    /// Bring the timer in line with the widget: running iff `enabled`, at
    /// `period`.
    pub fn sync(&mut self, enabled: bool, period: Duration) {
        self.set_period(period);
        match (enabled, self.is_running()) {
            (true, false) => self.start(),
            (false, true) => self.stop(),
            _ => {}
        }
    }

    /// Wait for the next tick.  Never resolves while stopped.
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

/// First tick one full period from now; late ticks are delayed, not bunched.
fn schedule(period: Duration) -> Interval {
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(300);

    /// Paused-clock deadlines land on whole milliseconds.
    fn assert_near(elapsed: Duration, want: Duration) {
        assert!(
            elapsed >= want && elapsed < want + Duration::from_millis(2),
            "elapsed {elapsed:?}, want {want:?}"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_waits_one_period() {
        let mut timer = AnimationTimer::new(PERIOD, true);
        let start = Instant::now();
        timer.tick().await;
        assert_near(start.elapsed(), PERIOD);
        timer.tick().await;
        assert_near(start.elapsed(), PERIOD * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_timer_never_ticks() {
        let mut timer = AnimationTimer::new(PERIOD, false);
        assert!(!timer.is_running());
        let res = time::timeout(Duration::from_secs(10), timer.tick()).await;
        assert!(res.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn sync_follows_enabled_and_period() {
        let mut timer = AnimationTimer::new(PERIOD, true);
        timer.sync(false, PERIOD);
        assert!(!timer.is_running());

        timer.sync(true, Duration::from_millis(50));
        assert!(timer.is_running());
        assert_eq!(timer.period(), Duration::from_millis(50));

        let start = Instant::now();
        timer.tick().await;
        assert_near(start.elapsed(), Duration::from_millis(50));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_period_is_clamped() {
        let mut timer = AnimationTimer::new(Duration::ZERO, true);
        assert_eq!(timer.period(), MIN_INTERVAL);
        timer.set_period(Duration::ZERO);
        assert_eq!(timer.period(), MIN_INTERVAL);
        timer.tick().await;
    }
}
