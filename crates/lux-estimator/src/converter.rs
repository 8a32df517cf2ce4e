//! Raw sample to illuminance conversion

use libm::powf;

use crate::Lux;
use crate::calibration::CalibrationModel;

/// Upper bound of a reported reading
pub const MAX_LUX: Lux = 3000.0;

/// Floor of the unscaled estimate, keeps it strictly positive
const MIN_RAW_LUX: Lux = 0.0001;

/// Substituted for non-finite intermediate results
const NON_FINITE_SENTINEL: Lux = 0.02;

/// Unscaled estimate `C * adc^p`, floored at 0.0001
///
/// Overflow or NaN from a pathological model yields the 0.02 sentinel.
pub fn raw_estimate(model: &CalibrationModel, adc: u16) -> Lux {
    let lux = model.coefficient() * powf(f32::from(adc), model.exponent());
    if lux.is_finite() {
        lux.max(MIN_RAW_LUX)
    } else {
        NON_FINITE_SENTINEL
    }
}

/// Calibrated illuminance for a raw sample, always finite and within
/// `0.0..=MAX_LUX`
pub fn to_illuminance(model: &CalibrationModel, raw: impl Into<u16>) -> Lux {
    let scaled = model.room_scale() * raw_estimate(model, raw.into());
    let scaled = if scaled.is_finite() {
        scaled
    } else {
        NON_FINITE_SENTINEL
    };

    scaled.clamp(0.0, MAX_LUX)
}

#[cfg(test)]
mod tests {
    use libm::fabsf;

    use super::*;
    use crate::calibration::fit;
    use crate::sampler::RawSample;

    #[test]
    fn test_reproduces_first_reference() {
        let model = fit(100, 120.0, 3000, 3200.0);
        assert!(fabsf(to_illuminance(&model, 100u16) - 120.0) < 0.05);
    }

    #[test]
    fn test_second_reference_is_clamped() {
        let model = fit(100, 120.0, 3000, 3200.0);
        assert!(fabsf(raw_estimate(&model, 3000) - 3200.0) < 1.0);
        assert_eq!(to_illuminance(&model, 3000u16), MAX_LUX);
    }

    #[test]
    fn test_fallback_reproduces_first_reference() {
        let model = fit(400, 150.0, 400, 900.0);
        assert!(fabsf(to_illuminance(&model, 400u16) - 150.0) < 0.01);
    }

    #[test]
    fn test_estimate_is_floored() {
        let model = fit(1000, 0.0, 1000, 0.0);
        assert_eq!(raw_estimate(&model, 500), MIN_RAW_LUX);
    }

    #[test]
    fn test_overflow_uses_sentinel() {
        // p clamps to 2 and C = 1e37, so the top of the range overflows f32
        let model = fit(1, 1.0e37, 2, f32::MAX);
        assert_eq!(model.exponent(), 2.0);
        assert_eq!(raw_estimate(&model, 1022), NON_FINITE_SENTINEL);
        assert_eq!(to_illuminance(&model, 1022u16), NON_FINITE_SENTINEL);
    }

    #[test]
    fn test_output_range_for_all_samples() {
        let models = [
            fit(100, 120.0, 3000, 3200.0),
            fit(900, 120.0, 200, 3200.0),
            fit(500, 120.0, 500, 3200.0),
            fit(100, 1.0, 130, 3000.0),
            fit(130, 1.0, 100, 3000.0),
            fit(1, 0.0, 1022, 0.0),
            CalibrationModel::UNCALIBRATED,
        ];

        for model in &models {
            for adc in RawSample::MIN..=RawSample::MAX {
                let lux = to_illuminance(model, RawSample::new(adc));
                assert!(lux.is_finite(), "adc={adc} model={model:?}");
                assert!((0.0..=MAX_LUX).contains(&lux), "adc={adc} lux={lux}");
            }
        }
    }
}
