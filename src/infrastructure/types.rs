use embassy_time::Delay;

use crate::app::LightMeterUsecases;
use crate::infrastructure::drivers::EspLightSensor;
use crate::infrastructure::services::EspPanel;

/// Must match `sensor_gpio!`
pub type SensorPin = esp_hal::peripherals::GPIO34<'static>;

pub type LightSensor = EspLightSensor<SensorPin>;

pub type LightMeterUsecasesImpl = LightMeterUsecases<LightSensor, Delay, EspPanel>;
