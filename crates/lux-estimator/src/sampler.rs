//! Noise-reducing sensor sampling
//!
//! Averages a burst of raw reads taken with a settling delay between them and
//! keeps the result off the ADC rails.

use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;

/// Source of raw 10-bit analog readings (0-1023)
pub trait AnalogSource {
    /// Take a single raw reading
    fn read(&mut self) -> u16;
}

impl<T: AnalogSource + ?Sized> AnalogSource for &mut T {
    fn read(&mut self) -> u16 {
        (**self).read()
    }
}

/// Averaged sensor reading, always within [`RawSample::MIN`]..=[`RawSample::MAX`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RawSample(u16);

impl RawSample {
    /// Lowest value a sample can take (one above the ground rail)
    pub const MIN: u16 = 1;
    /// Highest value a sample can take (one below the 10-bit supply rail)
    pub const MAX: u16 = 1022;

    /// Create a sample, clamping into the safe sub-range
    pub const fn new(value: u16) -> Self {
        let value = if value < Self::MIN {
            Self::MIN
        } else if value > Self::MAX {
            Self::MAX
        } else {
            value
        };
        Self(value)
    }

    pub const fn get(self) -> u16 {
        self.0
    }
}

impl From<RawSample> for u16 {
    fn from(sample: RawSample) -> Self {
        sample.0
    }
}

/// How many reads to average and how long to wait after each one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleProfile {
    pub count: u16,
    pub delay: Duration,
}

impl SampleProfile {
    /// Profile used once per metering cycle
    pub const CYCLE: Self = Self {
        count: 16,
        delay: Duration::from_millis(2),
    };

    /// Slower, deeper profile used for the calibration handshake
    pub const CALIBRATION: Self = Self {
        count: 32,
        delay: Duration::from_millis(10),
    };

    pub const fn new(count: u16, delay: Duration) -> Self {
        Self { count, delay }
    }

    /// Wall-clock time a sample with this profile blocks for
    pub const fn duration(&self) -> Duration {
        Duration::from_ticks(self.delay.as_ticks() * self.count as u64)
    }
}

/// Integer mean of `reads`, clamped into the [`RawSample`] range
///
/// An empty iterator yields [`RawSample::MIN`].
pub fn average_clamped<I>(reads: I) -> RawSample
where
    I: IntoIterator<Item = u16>,
{
    let (sum, count) = reads
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), value| {
            (sum + u64::from(value), count + 1)
        });

    clamped_mean(sum, count)
}

fn clamped_mean(sum: u64, count: u64) -> RawSample {
    if count == 0 {
        return RawSample::new(RawSample::MIN);
    }

    #[allow(clippy::cast_possible_truncation)]
    let mean = (sum / count).min(u64::from(u16::MAX)) as u16;
    RawSample::new(mean)
}

/// Averaging sampler over an analog source and an async delay
pub struct Sampler<S, D> {
    source: S,
    delay: D,
}

impl<S: AnalogSource, D: DelayNs> Sampler<S, D> {
    pub const fn new(source: S, delay: D) -> Self {
        Self { source, delay }
    }

    /// Take `profile.count` reads, waiting `profile.delay` after each one,
    /// and return their clamped mean
    pub async fn sample(&mut self, profile: SampleProfile) -> RawSample {
        #[allow(clippy::cast_possible_truncation)]
        let delay_us = profile.delay.as_micros().min(u64::from(u32::MAX)) as u32;

        let mut sum: u64 = 0;
        for _ in 0..profile.count {
            sum += u64::from(self.source.read());
            self.delay.delay_us(delay_us).await;
        }

        clamped_mean(sum, u64::from(profile.count))
    }

    /// Wait without sampling, used for operator cues between calibration reads
    pub async fn pause(&mut self, duration: Duration) {
        #[allow(clippy::cast_possible_truncation)]
        let ms = duration.as_millis().min(u64::from(u32::MAX)) as u32;
        self.delay.delay_ms(ms).await;
    }

    pub fn into_parts(self) -> (S, D) {
        (self.source, self.delay)
    }
}
