pub mod config;
pub mod error;
pub mod questions;
pub mod requirements;
pub mod telemetry;
