/// Failure while bringing up a peripheral
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardwareError {
    /// LEDC timer rejected the frequency/resolution pair
    PwmTimer,
    /// LEDC channel could not be bound to its pin
    PwmChannel,
    /// UART configuration was rejected
    Serial,
}
