//! Domain layer - metering entities and the ports hardware plugs into

pub mod entity;
pub mod ports;
