pub mod hardware;
pub mod meter;

pub use hardware::*;
pub use meter::*;
