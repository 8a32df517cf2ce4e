mod calibration;
mod meter;

pub use calibration::run_calibration;
pub use meter::LightMeterUsecases;
