//! Mapping of an illuminance reading to user-facing output
//!
//! - the printed value, with a darkness floor that suppresses sensor noise
//! - a red/blue color gradient eased with smoothstep
//! - PWM duty values for the chosen resolution and LED wiring

use smart_leds::RGB8;

use crate::Lux;

/// Indicator policy parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorConfig {
    /// Readings at or below this are reported as exactly 0.0
    pub dark_floor_lux: Lux,
    /// Reading at which the gradient reaches full red
    pub display_max_lux: Lux,
    /// Overall brightness shared between red and blue (of 255)
    pub brightness: u8,
}

impl IndicatorConfig {
    pub const DEFAULT: Self = Self {
        dark_floor_lux: 50.1,
        display_max_lux: 1000.0,
        brightness: 200,
    };
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Value shown to the user
pub fn reported_lux(lux: Lux, dark_floor: Lux) -> Lux {
    if lux <= dark_floor { 0.0 } else { lux }
}

/// Cubic easing `t * t * (3 - 2t)`, input clamped to [0, 1]
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Indicator color for a reading: blue in the dark, red in bright light
///
/// Green is never used.
pub fn gradient(lux: Lux, config: &IndicatorConfig) -> RGB8 {
    let t = smoothstep(lux / config.display_max_lux);
    let brightness = f32::from(config.brightness);

    RGB8 {
        r: channel_level(brightness * t),
        g: 0,
        b: channel_level(brightness * (1.0 - t)),
    }
}

/// Truncate toward zero and clamp into 0..=255
#[allow(clippy::cast_possible_truncation)]
fn channel_level(value: f32) -> u8 {
    (value as i32).clamp(0, 255) as u8
}

/// PWM counter width of the output channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmResolution {
    /// 0..=255
    Bits8,
    /// 0..=1023
    Bits10,
}

impl PwmResolution {
    pub const fn max_duty(self) -> u16 {
        match self {
            PwmResolution::Bits8 => 255,
            PwmResolution::Bits10 => 1023,
        }
    }
}

/// RGB LED wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedPolarity {
    /// Higher duty is brighter
    CommonCathode,
    /// Higher duty is dimmer
    CommonAnode,
}

/// Duty value for an 8-bit channel level
///
/// Scales `level` linearly from 0..=255 onto the resolution range with
/// integer math, then inverts it for common-anode wiring.
#[allow(clippy::cast_possible_truncation)]
pub fn duty(level: u8, resolution: PwmResolution, polarity: LedPolarity) -> u16 {
    let max = u32::from(resolution.max_duty());
    let duty = (u32::from(level) * max / 255) as u16;

    match polarity {
        LedPolarity::CommonCathode => duty,
        LedPolarity::CommonAnode => resolution.max_duty() - duty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: IndicatorConfig = IndicatorConfig::DEFAULT;

    #[test]
    fn test_darkness_floor() {
        assert_eq!(reported_lux(50.1, CONFIG.dark_floor_lux), 0.0);
        assert_eq!(reported_lux(12.0, CONFIG.dark_floor_lux), 0.0);
        assert_eq!(reported_lux(0.0001, CONFIG.dark_floor_lux), 0.0);
        assert_eq!(reported_lux(50.2, CONFIG.dark_floor_lux), 50.2);
        assert_eq!(reported_lux(2999.0, CONFIG.dark_floor_lux), 2999.0);
    }

    #[test]
    fn test_smoothstep_points() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(0.5), 0.5);
        assert_eq!(smoothstep(1.0), 1.0);
        assert_eq!(smoothstep(-3.0), 0.0);
        assert_eq!(smoothstep(7.0), 1.0);
    }

    #[test]
    fn test_gradient_endpoints() {
        assert_eq!(gradient(0.0, &CONFIG), RGB8 { r: 0, g: 0, b: 200 });
        assert_eq!(gradient(1000.0, &CONFIG), RGB8 { r: 200, g: 0, b: 0 });
        assert_eq!(gradient(3000.0, &CONFIG), RGB8 { r: 200, g: 0, b: 0 });
    }

    #[test]
    fn test_gradient_midpoint() {
        assert_eq!(gradient(500.0, &CONFIG), RGB8 { r: 100, g: 0, b: 100 });
    }

    #[test]
    fn test_gradient_truncates() {
        // t = 0.25 -> smoothstep = 0.15625 -> r = 31.25, b = 168.75
        assert_eq!(gradient(250.0, &CONFIG), RGB8 { r: 31, g: 0, b: 168 });
    }

    #[test]
    fn test_duty_mapping() {
        assert_eq!(duty(255, PwmResolution::Bits10, LedPolarity::CommonCathode), 1023);
        assert_eq!(duty(200, PwmResolution::Bits10, LedPolarity::CommonCathode), 802);
        assert_eq!(duty(200, PwmResolution::Bits8, LedPolarity::CommonCathode), 200);
        assert_eq!(duty(0, PwmResolution::Bits10, LedPolarity::CommonAnode), 1023);
        assert_eq!(duty(0, PwmResolution::Bits8, LedPolarity::CommonAnode), 255);
        assert_eq!(duty(255, PwmResolution::Bits8, LedPolarity::CommonAnode), 0);
    }
}
