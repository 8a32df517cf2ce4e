use embassy_time::Duration;
use lux_estimator::{
    AlertPolicy, IndicatorConfig, LedPolarity, Lux, MANUAL_ALERT_DURATION, PwmResolution,
    RoomAnchor, SampleProfile,
};

pub const BUILD_VERSION: &str = env!("BUILD_VERSION");

/// Startup calibration handshake
#[derive(Debug, Clone, Copy)]
pub struct CalibrationSettings {
    /// Illuminance at the dim reference position
    pub dim_reference_lux: Lux,
    /// Illuminance at the bright reference position
    pub bright_reference_lux: Lux,
    /// Wait before each reference sample, gives the operator time to move the sensor
    pub pre_sample_delay: Duration,
    pub profile: SampleProfile,
    pub room_anchor: RoomAnchor,
}

/// Fixed-rate metering loop
#[derive(Debug, Clone, Copy)]
pub struct MeterSettings {
    pub profile: SampleProfile,
    /// Idle time after sampling, before the next cycle
    pub rest: Duration,
    pub indicator: IndicatorConfig,
    pub alert_threshold_lux: Lux,
    pub manual_alert_duration: Duration,
}

impl MeterSettings {
    /// Nominal cadence: sampling time plus rest
    pub const fn cycle_period(&self) -> Duration {
        Duration::from_ticks(self.profile.duration().as_ticks() + self.rest.as_ticks())
    }
}

pub const CALIBRATION: CalibrationSettings = CalibrationSettings {
    dim_reference_lux: 120.0,
    bright_reference_lux: 3200.0,
    pre_sample_delay: Duration::from_millis(1500),
    profile: SampleProfile::CALIBRATION,
    room_anchor: RoomAnchor::Disabled,
};

pub const METER: MeterSettings = MeterSettings {
    profile: SampleProfile::CYCLE,
    rest: Duration::from_millis(150),
    indicator: IndicatorConfig::DEFAULT,
    alert_threshold_lux: AlertPolicy::DEFAULT_THRESHOLD_LUX,
    manual_alert_duration: MANUAL_ALERT_DURATION,
};

/// LEDC counter width for the RGB channels
pub const PWM_RESOLUTION: PwmResolution = PwmResolution::Bits10;

#[cfg(feature = "common-anode")]
pub const LED_POLARITY: LedPolarity = LedPolarity::CommonAnode;
#[cfg(not(feature = "common-anode"))]
pub const LED_POLARITY: LedPolarity = LedPolarity::CommonCathode;
