#![no_std]

//! Illuminance estimation pipeline for a photoresistor lux meter
//!
//! Layers, bottom to top:
//! - `sampler` - Averaged, rail-clamped reads from an [`AnalogSource`]
//! - `calibration` - Two-point power-law fit producing a [`CalibrationModel`]
//! - `converter` - Raw sample to lux with sentinel and range clamping
//! - `indicator` - Darkness floor, smoothstep color gradient, PWM duty mapping
//! - `alert` - Buzzer decision with a self-expiring manual latch
//! - `decision` - Per-cycle printed value, color and buzzer level
//! - `command` - Single-byte serial commands
//!
//! Nothing here touches hardware; the firmware plugs its drivers in through
//! [`AnalogSource`] and an async `DelayNs`.

pub mod alert;
pub mod calibration;
pub mod command;
pub mod converter;
pub mod decision;
pub mod indicator;
pub mod sampler;

// Sampler exports
pub use sampler::{AnalogSource, RawSample, SampleProfile, Sampler, average_clamped};

// Calibration exports
pub use calibration::{CalibrationModel, DEFAULT_EXPONENT, RoomAnchor, fit};

// Converter exports
pub use converter::{MAX_LUX, raw_estimate, to_illuminance};

// Indicator exports
pub use indicator::{
    IndicatorConfig, LedPolarity, PwmResolution, duty, gradient, reported_lux, smoothstep,
};

// Alert exports
pub use alert::{AlertLatch, AlertPolicy, MANUAL_ALERT_DURATION};

pub use command::Command;

pub use decision::{Indication, indicate};

/// Illuminance in lux
pub type Lux = f32;
