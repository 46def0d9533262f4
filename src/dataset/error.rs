// src/dataset/error.rs

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::math::error::MathError;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Math(#[from] MathError),
    #[error("cannot write output {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
