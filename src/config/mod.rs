// src/config/mod.rs

pub mod error;
pub mod parameters;

pub use error::ConfigError;
pub use parameters::JumpParameters;
