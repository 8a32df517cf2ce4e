use esp_hal::gpio::{Level, Output, OutputConfig, OutputPin};

/// Active buzzer on a push-pull output, HIGH sounds
pub struct EspBuzzer {
    pin: Output<'static>,
    active: bool,
}

impl EspBuzzer {
    pub fn new(pin: impl OutputPin + 'static) -> Self {
        Self {
            pin: Output::new(pin, Level::Low, OutputConfig::default()),
            active: false,
        }
    }

    pub fn set_active(&mut self, active: bool) {
        if active != self.active {
            log::debug!("buzzer: {}", if active { "on" } else { "off" });
            self.active = active;
        }
        self.pin.set_level(Level::from(active));
    }
}
