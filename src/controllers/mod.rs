mod command;

pub use command::{CommandReceiver, command_receiver, handle_command_bytes};
