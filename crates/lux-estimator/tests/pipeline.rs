//! End-to-end tests of the estimation pipeline against a simulated sensor.

use embassy_futures::block_on;
use embassy_time::{Duration, Instant};
use embedded_hal_async::delay::DelayNs;
use lux_estimator::{
    AlertPolicy, AnalogSource, Command, IndicatorConfig, RawSample, RoomAnchor, SampleProfile,
    Sampler, fit, gradient, indicate, reported_lux, to_illuminance,
};
use smart_leds::RGB8;

// -----------------------------------------------------------------------------
// Simulated hardware
// -----------------------------------------------------------------------------

/// Sensor whose level is set by the test, with a small alternating ripple
struct SimulatedSensor {
    level: u16,
    tick: u16,
}

impl SimulatedSensor {
    fn new(level: u16) -> Self {
        Self { level, tick: 0 }
    }
}

impl AnalogSource for SimulatedSensor {
    fn read(&mut self) -> u16 {
        self.tick += 1;
        if self.tick % 2 == 0 {
            self.level + 3
        } else {
            self.level.saturating_sub(3)
        }
    }
}

#[derive(Default)]
struct NoDelay {
    elapsed_us: u64,
}

impl DelayNs for NoDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.elapsed_us += u64::from(ns) / 1_000;
    }
}

// -----------------------------------------------------------------------------
// Calibration handshake
// -----------------------------------------------------------------------------

#[test]
fn calibration_from_ripple_sensor_reproduces_references() {
    let mut sensor = SimulatedSensor::new(800);
    let mut sampler = Sampler::new(&mut sensor, NoDelay::default());

    let dim = block_on(sampler.sample(SampleProfile::CALIBRATION));
    drop(sampler);
    sensor.level = 150;
    let mut sampler = Sampler::new(&mut sensor, NoDelay::default());
    let bright = block_on(sampler.sample(SampleProfile::CALIBRATION));

    // Ripple cancels out over an even number of reads
    assert_eq!(dim.get(), 800);
    assert_eq!(bright.get(), 150);

    let model = fit(dim.get(), 120.0, bright.get(), 3200.0);
    assert!(!model.is_fallback());
    assert!(model.exponent() < 0.0);
    assert!((to_illuminance(&model, dim) - 120.0).abs() < 0.1);
    assert!((to_illuminance(&model, bright) - 3000.0).abs() < f32::EPSILON);
}

#[test]
fn unmoved_sensor_falls_back_to_inverse_law() {
    let mut sensor = SimulatedSensor::new(512);
    let mut sampler = Sampler::new(&mut sensor, NoDelay::default());
    let first = block_on(sampler.sample(SampleProfile::CALIBRATION));
    let second = block_on(sampler.sample(SampleProfile::CALIBRATION));

    let model = fit(first.get(), 120.0, second.get(), 3200.0);
    assert_eq!(model.exponent(), -1.0);
    assert!((to_illuminance(&model, first) - 120.0).abs() < 0.01);
}

#[test]
fn room_anchor_scales_room_sample_to_target() {
    let model = fit(800, 120.0, 150, 3200.0).anchored(RoomAnchor::Target(150.0), 600);
    assert!(model.room_scale() > 0.0);
    assert!((to_illuminance(&model, 600u16) - 150.0).abs() < 0.05);
}

#[test]
fn sampling_blocks_for_profile_duration() {
    let mut sensor = SimulatedSensor::new(300);
    let mut sampler = Sampler::new(&mut sensor, NoDelay::default());
    block_on(sampler.sample(SampleProfile::CYCLE));
    block_on(sampler.pause(Duration::from_millis(1500)));

    let (_, delay) = sampler.into_parts();
    assert_eq!(delay.elapsed_us, 32_000 + 1_500_000);
}

// -----------------------------------------------------------------------------
// Metering cycle
// -----------------------------------------------------------------------------

#[test]
fn dark_room_reports_zero_blue_and_buzzes() {
    // Exponent clamps to -2, so the top of the ADC range reads ~41 lux
    let model = fit(600, 120.0, 150, 3200.0);
    let config = IndicatorConfig::DEFAULT;
    let mut alert = AlertPolicy::default();

    let lux = to_illuminance(&model, RawSample::new(1022));
    assert!(lux <= config.dark_floor_lux);

    let indication = indicate(lux, &config, &mut alert, Instant::from_millis(0));
    assert_eq!(indication.reported_lux, 0.0);
    assert!(indication.color.b > 190);
    assert!(indication.color.r < 5);
    assert!(indication.alert);
}

#[test]
fn floor_band_reading_buzzes_but_keeps_its_color() {
    let config = IndicatorConfig::DEFAULT;
    let mut alert = AlertPolicy::default();

    let indication = indicate(50.05, &config, &mut alert, Instant::from_millis(0));
    assert_eq!(indication.reported_lux, 0.0);
    assert!(indication.alert);
    assert_eq!(indication.color, gradient(50.05, &config));
    assert_ne!(indication.color, gradient(0.0, &config));
}

#[test]
fn serial_command_latches_alert_for_five_seconds() {
    let model = fit(800, 120.0, 150, 3200.0);
    let config = IndicatorConfig::DEFAULT;
    let mut alert = AlertPolicy::default();

    let lux = to_illuminance(&model, RawSample::new(300));
    let reported = reported_lux(lux, config.dark_floor_lux);
    assert!(reported > 50.0);

    let start = Instant::from_millis(10_000);
    for command in Command::decode(b"B") {
        match command {
            Command::BuzzerTest => alert.trigger_manual(start),
        }
    }

    assert!(alert.evaluate(reported, start));
    assert!(alert.evaluate(reported, start + Duration::from_millis(4_999)));
    assert!(!alert.evaluate(reported, start + Duration::from_millis(5_000)));
}

#[test]
fn bright_light_turns_indicator_red() {
    let model = fit(800, 120.0, 150, 3200.0);
    let lux = to_illuminance(&model, RawSample::new(RawSample::MIN));
    assert_eq!(lux, 3000.0);
    assert_eq!(
        gradient(lux, &IndicatorConfig::DEFAULT),
        RGB8 { r: 200, g: 0, b: 0 }
    );
}
