use esp_hal::Blocking;
use esp_hal::analog::adc::{Adc, AdcChannel, AdcConfig, AdcPin, Attenuation};
use esp_hal::gpio::AnalogPin;
use esp_hal::peripherals::ADC1;

use lux_estimator::AnalogSource;

/// The ESP32 ADC is 12 bits wide; readings are reduced to the 10-bit domain
const ADC_DOWNSHIFT: u16 = 2;

/// Photoresistor divider read through ADC1 in one-shot mode
pub struct EspLightSensor<PIN> {
    adc: Adc<'static, ADC1<'static>, Blocking>,
    pin: AdcPin<PIN, ADC1<'static>>,
    last: u16,
}

impl<PIN> EspLightSensor<PIN>
where
    PIN: AdcChannel + AnalogPin,
{
    /// Create a new sensor driver
    ///
    /// # Arguments
    /// * `adc` - ADC1 peripheral
    /// * `pin` - GPIO wired to the divider output
    pub fn new(adc: ADC1<'static>, pin: PIN) -> Self {
        let mut config = AdcConfig::new();
        // 11 dB covers the full 0-3.3 V swing of the divider
        let pin = config.enable_pin(pin, Attenuation::_11dB);
        let adc = Adc::new(adc, config);

        Self { adc, pin, last: 0 }
    }
}

impl<PIN: AdcChannel> AnalogSource for EspLightSensor<PIN> {
    fn read(&mut self) -> u16 {
        match nb::block!(self.adc.read_oneshot(&mut self.pin)) {
            Ok(value) => {
                self.last = value >> ADC_DOWNSHIFT;
            }
            Err(()) => {
                log::warn!("sensor: conversion failed, repeating last reading");
            }
        }
        self.last
    }
}
