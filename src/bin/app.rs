#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::{Delay, Duration};

use esp_backtrace as _;
use esp_hal::{clock::CpuClock, timer::timg::TimerGroup};

use lux_estimator::Sampler;
use lux_meter_esp::app::LightMeterUsecases;
use lux_meter_esp::config::{self, BUILD_VERSION};
use lux_meter_esp::controllers::command_receiver;
use lux_meter_esp::infrastructure::drivers::{
    EspBuzzer, EspLightSensor, EspRgbLed, init_serial_rx,
};
use lux_meter_esp::infrastructure::services::EspPanel;
use lux_meter_esp::infrastructure::tasks::{meter_task, serial_commands_task};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();

    // Initialize hardware
    let hal_config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(hal_config);

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    log::info!("lux meter {}", BUILD_VERSION);

    // Outputs
    let led = EspRgbLed::new(
        peripherals.LEDC,
        lux_meter_esp::red_gpio!(peripherals),
        lux_meter_esp::green_gpio!(peripherals),
        lux_meter_esp::blue_gpio!(peripherals),
        config::PWM_RESOLUTION,
        config::LED_POLARITY,
    )
    .expect("failed to configure RGB LED");
    let buzzer = EspBuzzer::new(lux_meter_esp::buzzer_gpio!(peripherals));
    let panel = EspPanel::new(led, buzzer);

    // Console commands
    let serial_rx = init_serial_rx(
        peripherals.UART0,
        lux_meter_esp::serial_rx_gpio!(peripherals),
    )
    .expect("failed to configure serial RX");
    spawner.spawn(serial_commands_task(serial_rx)).ok();

    // Calibrate, then start metering
    let sensor = EspLightSensor::new(peripherals.ADC1, lux_meter_esp::sensor_gpio!(peripherals));
    let sampler = Sampler::new(sensor, Delay);
    let meter =
        LightMeterUsecases::calibrate(sampler, panel, &config::CALIBRATION, &config::METER).await;
    spawner.spawn(meter_task(meter, command_receiver())).ok();

    loop {
        embassy_time::Timer::after(Duration::from_secs(5)).await;
    }
}
