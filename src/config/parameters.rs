// src/config/parameters.rs

use serde::Deserialize;

use crate::math::error::MathError;
use crate::models::SkiJump;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct JumpParameters {
    pub v0: f64,    // 初速（任意単位）
    pub alpha: f64, // 踏切角（rad）
}

impl JumpParameters {
    /// 軌道を生成する（定義できないパラメータはエラー）
    pub fn into_ski_jump(self) -> Result<SkiJump, MathError> {
        let jump = SkiJump {
            v0: self.v0,
            alpha: self.alpha,
        };
        jump.validate()?;
        Ok(jump)
    }
}
