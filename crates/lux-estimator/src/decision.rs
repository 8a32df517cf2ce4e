//! Per-cycle output decision
//!
//! The printed value and the buzzer see the reading after the darkness
//! floor; the color gradient sees it before.

use embassy_time::Instant;
use smart_leds::RGB8;

use crate::Lux;
use crate::alert::AlertPolicy;
use crate::indicator::{IndicatorConfig, gradient, reported_lux};

/// What the outputs show for one reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Indication {
    /// Printed value, zero at or below the darkness floor
    pub reported_lux: Lux,
    pub color: RGB8,
    pub alert: bool,
}

/// Decide every output for a converted reading
pub fn indicate(
    lux: Lux,
    config: &IndicatorConfig,
    alert: &mut AlertPolicy,
    now: Instant,
) -> Indication {
    let reported = reported_lux(lux, config.dark_floor_lux);

    Indication {
        reported_lux: reported,
        color: gradient(lux, config),
        alert: alert.evaluate(reported, now),
    }
}
