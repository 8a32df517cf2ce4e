//! Buzzer decision
//!
//! The buzzer sounds when the reported reading is dark enough, or while a
//! manually triggered latch is still running.

use embassy_time::{Duration, Instant};

use crate::Lux;

/// How long a manual trigger keeps the buzzer on
pub const MANUAL_ALERT_DURATION: Duration = Duration::from_millis(5000);

/// Self-expiring manual trigger
#[derive(Debug, Clone, Copy)]
pub struct AlertLatch {
    duration: Duration,
    off_at: Option<Instant>,
}

impl AlertLatch {
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            off_at: None,
        }
    }

    /// Latch on until `now + duration`, restarting any running window
    pub fn trigger(&mut self, now: Instant) {
        self.off_at = Some(now + self.duration);
    }

    /// Whether the latch is still holding, expiring it once `now` reaches
    /// the deadline
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.off_at {
            Some(off_at) if now >= off_at => {
                self.off_at = None;
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    pub const fn is_latched(&self) -> bool {
        self.off_at.is_some()
    }
}

impl Default for AlertLatch {
    fn default() -> Self {
        Self::new(MANUAL_ALERT_DURATION)
    }
}

/// Darkness auto-trigger combined with the manual latch
#[derive(Debug, Clone, Copy)]
pub struct AlertPolicy {
    threshold_lux: Lux,
    latch: AlertLatch,
}

impl AlertPolicy {
    /// Default darkness threshold
    pub const DEFAULT_THRESHOLD_LUX: Lux = 50.0;

    pub const fn new(threshold_lux: Lux, manual_duration: Duration) -> Self {
        Self {
            threshold_lux,
            latch: AlertLatch::new(manual_duration),
        }
    }

    /// Start (or restart) the manual alert window
    pub fn trigger_manual(&mut self, now: Instant) {
        self.latch.trigger(now);
    }

    /// Decide the buzzer level for a reported reading
    pub fn evaluate(&mut self, reported_lux: Lux, now: Instant) -> bool {
        let dark = reported_lux <= self.threshold_lux;
        let manual = self.latch.poll(now);
        dark || manual
    }

    pub const fn is_manual_active(&self) -> bool {
        self.latch.is_latched()
    }
}

impl Default for AlertPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD_LUX, MANUAL_ALERT_DURATION)
    }
}
