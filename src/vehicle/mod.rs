pub mod config;

pub use config::{presets, VehicleConfig, VehicleConfigBuilder, VehicleRecord};
