use esp_hal::Async;
use esp_hal::gpio::interconnect::PeripheralInput;
use esp_hal::peripherals::UART0;
use esp_hal::uart::{Config, UartRx};

use crate::domain::ports::HardwareError;
use crate::infrastructure::config;

pub type SerialRx = UartRx<'static, Async>;

/// Receive half of the console UART, used for single-byte commands
pub fn init_serial_rx(
    uart: UART0<'static>,
    rx: impl PeripheralInput<'static>,
) -> Result<SerialRx, HardwareError> {
    let config = Config::default().with_baudrate(config::SERIAL_BAUDRATE);
    let rx = UartRx::new(uart, config)
        .map_err(|_e| {
            log::error!("serial: configuration failed: {:?}", _e);
            HardwareError::Serial
        })?
        .with_rx(rx)
        .into_async();

    Ok(rx)
}
