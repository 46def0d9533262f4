// src/models/mod.rs

pub mod hill;
pub mod ski_jump;

pub use hill::{Hill, HILL};
pub use ski_jump::SkiJump;

/// 重力加速度（任意単位）
pub const EARTH_GRAVITY: f64 = 1.0;
