mod buzzer;
mod light_sensor;
mod rgb_led;
mod serial;

pub use buzzer::EspBuzzer;
pub use light_sensor::EspLightSensor;
pub use rgb_led::EspRgbLed;
pub use serial::{SerialRx, init_serial_rx};
