use embedded_io_async::Read;

use crate::controllers::handle_command_bytes;
use crate::infrastructure::drivers::SerialRx;

const RX_BUFFER_SIZE: usize = 16;

/// Reads console input and forwards decoded commands to the meter loop
#[embassy_executor::task]
pub async fn serial_commands_task(mut rx: SerialRx) {
    let mut buffer = [0u8; RX_BUFFER_SIZE];

    loop {
        match Read::read(&mut rx, &mut buffer).await {
            Ok(0) => {}
            Ok(len) => handle_command_bytes(&buffer[..len]),
            Err(_e) => {
                log::warn!("serial: read failed: {:?}", _e);
            }
        }
    }
}
