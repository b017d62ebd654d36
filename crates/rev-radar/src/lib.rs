pub mod config;
pub mod error;
pub mod prospects;
pub mod telemetry;
