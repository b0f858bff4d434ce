use std::future;
use std::time::Duration;

use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};
use tracing::debug;

use crate::config::CarouselOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Running,
    Paused,
}

/// Owns the repeating autoplay timer.
///
/// The timer is a resource held only while `Running`: it is acquired on entry
/// and dropped on every exit path (hover, autoplay disabled, reconfiguration,
/// or the owner going away). At most one `Interval` exists at a time.
#[derive(Debug)]
pub struct AutoplayTimer {
    enabled: bool,
    hovered: bool,
    period: Duration,
    ticker: Option<Interval>,
}

impl AutoplayTimer {
    /// Must be called from within a tokio runtime when `auto_play` is set.
    pub fn new(options: &CarouselOptions) -> Self {
        let mut timer = Self {
            enabled: options.auto_play,
            hovered: false,
            period: options.interval,
            ticker: None,
        };
        timer.sync();
        timer
    }

    pub fn state(&self) -> PlaybackState {
        if self.ticker.is_some() {
            PlaybackState::Running
        } else {
            PlaybackState::Paused
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state() == PlaybackState::Running
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
        if self.enabled {
            self.sync();
        }
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
        if self.enabled {
            self.sync();
        }
    }

    /// Applies new options. A running timer is recreated only when the
    /// interval or the autoplay flag actually changed.
    pub fn reconfigure(&mut self, options: &CarouselOptions) {
        let changed = self.enabled != options.auto_play || self.period != options.interval;
        if !changed {
            return;
        }
        self.enabled = options.auto_play;
        self.period = options.interval;
        self.release();
        self.sync();
    }

    /// Drops the timer unconditionally.
    pub fn release(&mut self) {
        if self.ticker.take().is_some() {
            debug!("autoplay timer released");
        }
    }

    /// Resolves on the next autoplay tick; never resolves while paused.
    pub async fn tick(&mut self) {
        match self.ticker.as_mut() {
            Some(ticker) => {
                ticker.tick().await;
            }
            None => future::pending::<()>().await,
        }
    }

    fn should_run(&self) -> bool {
        self.enabled && !self.hovered && !self.period.is_zero()
    }

    fn sync(&mut self) {
        match (self.should_run(), self.ticker.is_some()) {
            (true, false) => self.acquire(),
            (false, true) => self.release(),
            _ => {}
        }
    }

    fn acquire(&mut self) {
        let mut ticker = interval_at(Instant::now() + self.period, self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.ticker = Some(ticker);
        debug!(period = ?self.period, "autoplay timer acquired");
    }
}
