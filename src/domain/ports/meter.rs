use lux_estimator::Lux;
use smart_leds::RGB8;

pub use lux_estimator::AnalogSource;

/// Sink for the per-cycle illuminance value
pub trait IlluminanceReporter {
    /// Publish the reported (floored) illuminance
    fn report_illuminance(&mut self, lux: Lux);
}

/// Tri-color indicator
pub trait IndicatorOutput {
    /// Show a color given as 8-bit channel levels
    fn set_indicator(&mut self, color: RGB8);
}

/// Audible alert
pub trait AlertOutput {
    fn set_alert(&mut self, active: bool);
}

/// Everything the metering loop drives
pub trait PanelPort: IlluminanceReporter + IndicatorOutput + AlertOutput {}

impl<T: IlluminanceReporter + IndicatorOutput + AlertOutput> PanelPort for T {}
