use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver};
use lux_estimator::Command;

const COMMAND_QUEUE_SIZE: usize = 4;

type CommandChannel = Channel<CriticalSectionRawMutex, Command, COMMAND_QUEUE_SIZE>;
pub type CommandReceiver =
    Receiver<'static, CriticalSectionRawMutex, Command, COMMAND_QUEUE_SIZE>;

static COMMAND_CHANNEL: CommandChannel = Channel::new();

/// Decode console input and queue recognised commands for the meter loop
pub fn handle_command_bytes(bytes: &[u8]) {
    for command in Command::decode(bytes) {
        if COMMAND_CHANNEL.try_send(command).is_err() {
            log::warn!("command: queue full, dropping {:?}", command);
        }
    }
}

/// Receiver drained by the meter loop at the start of each cycle
pub fn command_receiver() -> CommandReceiver {
    COMMAND_CHANNEL.receiver()
}
