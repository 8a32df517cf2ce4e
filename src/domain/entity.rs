use lux_estimator::{Lux, RawSample};
use smart_leds::RGB8;

/// Outcome of one metering cycle
#[derive(Debug, Clone, Copy)]
pub struct MeterSnapshot {
    /// Averaged ADC reading
    pub sample: RawSample,
    /// Calibrated illuminance
    pub lux: Lux,
    /// Value printed to the console, after the darkness floor
    pub reported_lux: Lux,
    /// Indicator color before PWM scaling
    pub color: RGB8,
    /// Buzzer level
    pub alert: bool,
}
