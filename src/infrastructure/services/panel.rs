use esp_println::println;
use lux_estimator::Lux;
use smart_leds::RGB8;

use crate::domain::ports::{AlertOutput, IlluminanceReporter, IndicatorOutput};
use crate::infrastructure::drivers::{EspBuzzer, EspRgbLed};

/// User-facing outputs of the meter: console line, RGB LED and buzzer
pub struct EspPanel {
    led: EspRgbLed,
    buzzer: EspBuzzer,
}

impl EspPanel {
    pub fn new(led: EspRgbLed, buzzer: EspBuzzer) -> Self {
        Self { led, buzzer }
    }
}

impl IlluminanceReporter for EspPanel {
    // One value per line, readable by serial plotters
    #[allow(clippy::print_stdout)]
    fn report_illuminance(&mut self, lux: Lux) {
        println!("{:.1}", lux);
    }
}

impl IndicatorOutput for EspPanel {
    fn set_indicator(&mut self, color: RGB8) {
        self.led.set_color(color);
    }
}

impl AlertOutput for EspPanel {
    fn set_alert(&mut self, active: bool) {
        self.buzzer.set_active(active);
    }
}
