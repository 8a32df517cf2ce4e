mod meter;
mod serial_commands;

pub use meter::meter_task;
pub use serial_commands::serial_commands_task;
