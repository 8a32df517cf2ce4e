use esp_hal::gpio::DriveMode;
use esp_hal::gpio::interconnect::PeripheralOutput;
use esp_hal::ledc::channel::{self, ChannelHW, ChannelIFace};
use esp_hal::ledc::timer::{self, TimerIFace};
use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed};
use esp_hal::peripherals::LEDC;
use esp_hal::time::Rate;
use smart_leds::RGB8;

use lux_estimator::{LedPolarity, PwmResolution, duty};

use crate::domain::ports::HardwareError;
use crate::infrastructure::config;
use crate::mk_static;

type LedTimer = timer::Timer<'static, LowSpeed>;
type LedChannel = channel::Channel<'static, LowSpeed>;

/// Discrete RGB LED driven by three LEDC low-speed channels sharing one timer
pub struct EspRgbLed {
    red: LedChannel,
    green: LedChannel,
    blue: LedChannel,
    resolution: PwmResolution,
    polarity: LedPolarity,
}

impl EspRgbLed {
    /// Configure LEDC and switch the LED off
    ///
    /// # Arguments
    /// * `ledc` - LEDC peripheral
    /// * `red`, `green`, `blue` - GPIOs wired to the LED legs
    /// * `resolution` - PWM counter width
    /// * `polarity` - LED wiring
    pub fn new<R, G, B>(
        ledc: LEDC<'static>,
        red: R,
        green: G,
        blue: B,
        resolution: PwmResolution,
        polarity: LedPolarity,
    ) -> Result<Self, HardwareError>
    where
        R: PeripheralOutput<'static>,
        G: PeripheralOutput<'static>,
        B: PeripheralOutput<'static>,
    {
        // Channels keep a reference to their timer for the program lifetime
        let ledc = mk_static!(Ledc<'static>, Ledc::new(ledc));
        ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);
        let ledc: &'static Ledc<'static> = ledc;

        let timer = mk_static!(LedTimer, ledc.timer::<LowSpeed>(timer::Number::Timer0));
        timer
            .configure(timer::config::Config {
                duty: duty_bits(resolution),
                clock_source: timer::LSClockSource::APBClk,
                frequency: Rate::from_khz(config::LED_PWM_FREQUENCY_KHZ),
            })
            .map_err(|_e| {
                log::error!("rgb_led: timer configuration failed: {:?}", _e);
                HardwareError::PwmTimer
            })?;
        let timer: &'static LedTimer = timer;

        let mut led = Self {
            red: bind_channel(ledc, timer, channel::Number::Channel0, red)?,
            green: bind_channel(ledc, timer, channel::Number::Channel1, green)?,
            blue: bind_channel(ledc, timer, channel::Number::Channel2, blue)?,
            resolution,
            polarity,
        };
        led.set_color(RGB8::default());

        Ok(led)
    }

    /// Apply 8-bit channel levels, scaled to the configured resolution
    pub fn set_color(&mut self, color: RGB8) {
        self.red.set_duty_hw(self.duty(color.r));
        self.green.set_duty_hw(self.duty(color.g));
        self.blue.set_duty_hw(self.duty(color.b));
    }

    fn duty(&self, level: u8) -> u32 {
        u32::from(duty(level, self.resolution, self.polarity))
    }
}

fn bind_channel<O>(
    ledc: &'static Ledc<'static>,
    timer: &'static LedTimer,
    number: channel::Number,
    pin: O,
) -> Result<LedChannel, HardwareError>
where
    O: PeripheralOutput<'static>,
{
    let mut channel = ledc.channel(number, pin);
    channel
        .configure(channel::config::Config {
            timer,
            duty_pct: 0,
            drive_mode: DriveMode::PushPull,
        })
        .map_err(|_e| {
            log::error!("rgb_led: channel configuration failed: {:?}", _e);
            HardwareError::PwmChannel
        })?;
    Ok(channel)
}

const fn duty_bits(resolution: PwmResolution) -> timer::config::Duty {
    match resolution {
        PwmResolution::Bits8 => timer::config::Duty::Duty8Bit,
        PwmResolution::Bits10 => timer::config::Duty::Duty10Bit,
    }
}
