//! Infrastructure layer - Port implementations
//!
//! This module contains concrete implementations of the domain ports
//! using the ESP32 peripherals.

pub(crate) mod config;
pub mod drivers;
pub mod services;
pub mod tasks;
pub(crate) mod types;
