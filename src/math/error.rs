// src/math/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("invalid jump parameter: {reason}")]
    InvalidParameter { reason: String },
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
    #[error("trajectory (v0 = {v0}, alpha = {alpha}) never meets the hill")]
    NoIntersection { v0: f64, alpha: f64 },
}
