/// LEDC carrier frequency for the RGB channels
pub const LED_PWM_FREQUENCY_KHZ: u32 = 5;

/// Console UART baud rate, matches the esp-println output
pub const SERIAL_BAUDRATE: u32 = 115_200;

/// Photoresistor divider output (ADC1 channel 6, input only)
#[macro_export]
macro_rules! sensor_gpio {
    ($p:expr) => {
        $p.GPIO34
    };
}

#[macro_export]
macro_rules! red_gpio {
    ($p:expr) => {
        $p.GPIO25
    };
}

#[macro_export]
macro_rules! green_gpio {
    ($p:expr) => {
        $p.GPIO26
    };
}

#[macro_export]
macro_rules! blue_gpio {
    ($p:expr) => {
        $p.GPIO27
    };
}

#[macro_export]
macro_rules! buzzer_gpio {
    ($p:expr) => {
        $p.GPIO14
    };
}

/// UART0 RX, shared with the USB bridge on devkits
#[macro_export]
macro_rules! serial_rx_gpio {
    ($p:expr) => {
        $p.GPIO3
    };
}
