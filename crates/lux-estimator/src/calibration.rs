//! Two-point power-law calibration
//!
//! The sensor response is modelled as `lux = K * C * adc^p`. `C` and `p` are
//! solved once at startup from a dim and a bright reference reading; `K` is a
//! room scaling factor that stays at 1 unless a room anchor is configured.

use libm::{fabsf, logf, powf};

use crate::Lux;

/// Exponent used when the reference points are too close to fit a slope.
/// A photoresistor divider is expected to respond roughly inversely.
pub const DEFAULT_EXPONENT: f32 = -1.0;

/// Minimum log-space separation of the reference points on either axis
const MIN_LOG_SEPARATION: f32 = 0.15;

/// Illuminance floor applied before taking a logarithm
const MIN_REFERENCE_LUX: f32 = 0.1;

/// Fitted exponents outside this range are treated as implausible and clamped
const EXPONENT_LIMIT: f32 = 2.0;

/// Optional scaling of the fitted curve to a known room illuminance
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RoomAnchor {
    /// Keep `K = 1`
    #[default]
    Disabled,
    /// Scale the curve so the room sample reads as this many lux
    Target(Lux),
}

/// Immutable calibration parameters
///
/// Produced once by [`fit`] and passed by value into the converter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationModel {
    coefficient: f32,
    exponent: f32,
    room_scale: f32,
    fallback: bool,
}

impl CalibrationModel {
    /// Model used before any calibration: `lux = 1 / adc`
    pub const UNCALIBRATED: Self = Self {
        coefficient: 1.0,
        exponent: DEFAULT_EXPONENT,
        room_scale: 1.0,
        fallback: true,
    };

    /// Coefficient `C`
    pub const fn coefficient(&self) -> f32 {
        self.coefficient
    }

    /// Exponent `p`, always within [-2, 2]
    pub const fn exponent(&self) -> f32 {
        self.exponent
    }

    /// Room scaling factor `K`
    pub const fn room_scale(&self) -> f32 {
        self.room_scale
    }

    /// Whether the fit fell back to [`DEFAULT_EXPONENT`]
    pub const fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Return a copy scaled so that `room_adc` converts to the anchor target
    ///
    /// A non-finite or non-positive scale leaves `K` untouched.
    #[must_use]
    pub fn anchored(self, anchor: RoomAnchor, room_adc: u16) -> Self {
        let RoomAnchor::Target(target) = anchor else {
            return self;
        };

        let scale = target / crate::converter::raw_estimate(&self, room_adc);
        if !scale.is_finite() || scale <= 0.0 {
            log::warn!("calibration: ignoring room anchor, scale {} is unusable", scale);
            return self;
        }

        Self {
            room_scale: scale,
            ..self
        }
    }
}

impl Default for CalibrationModel {
    fn default() -> Self {
        Self::UNCALIBRATED
    }
}

/// Fit `lux = C * adc^p` through two reference points
///
/// If the points are closer than 0.15 in log space on either axis the slope
/// is not trusted: `p` falls back to [`DEFAULT_EXPONENT`]. In every case `C`
/// is back-solved from the first point.
pub fn fit(adc1: u16, lux1: Lux, adc2: u16, lux2: Lux) -> CalibrationModel {
    let adc1 = f32::from(adc1);
    let adc2 = f32::from(adc2);

    let ln_adc = logf(adc2) - logf(adc1);
    let ln_lux = logf(lux2.max(MIN_REFERENCE_LUX)) - logf(lux1.max(MIN_REFERENCE_LUX));

    // A zero ADC reference gives an infinite log; treat it like a collapsed axis.
    let fallback = !ln_adc.is_finite()
        || fabsf(ln_adc) < MIN_LOG_SEPARATION
        || fabsf(ln_lux) < MIN_LOG_SEPARATION;
    let exponent = if fallback {
        log::debug!(
            "calibration: reference points too close (ln_adc={}, ln_lux={}), using p={}",
            ln_adc,
            ln_lux,
            DEFAULT_EXPONENT
        );
        DEFAULT_EXPONENT
    } else {
        (ln_lux / ln_adc).clamp(-EXPONENT_LIMIT, EXPONENT_LIMIT)
    };

    CalibrationModel {
        coefficient: lux1 / powf(adc1, exponent),
        exponent,
        room_scale: 1.0,
        fallback,
    }
}
