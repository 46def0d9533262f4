// src/models/ski_jump.rs

use tracing::debug;

use crate::math::error::MathError;
use crate::math::quadratic::{QuadraticRoots, COEFFICIENT_EPSILON};
use crate::math::{linspace, solve_quadratic};
use crate::models::hill::Hill;
use crate::models::EARTH_GRAVITY;

/// 高さがこの値よりゼロに近い場合は 0.0 とみなす
pub const SNAP_TOLERANCE: f64 = 1e-8;

/// ジャンプの軌道
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkiJump {
    pub v0: f64,    // 初速度 (a.u.)
    pub alpha: f64, // 踏切角 (rad)
}

impl SkiJump {
    /// 放物線が定義できるパラメータかを確認する
    ///
    /// # 戻り値
    /// - `v0` が正の有限値でない場合、`alpha` が有限でない場合、
    ///   垂直な踏切（`cos(alpha)` ~ 0）の場合は `MathError::InvalidParameter`
    pub fn validate(&self) -> Result<(), MathError> {
        if !self.v0.is_finite() || self.v0 <= 0.0 {
            return Err(MathError::InvalidParameter {
                reason: format!("v0 must be a positive finite number, got {}", self.v0),
            });
        }
        if !self.alpha.is_finite() {
            return Err(MathError::InvalidParameter {
                reason: format!("alpha must be finite, got {}", self.alpha),
            });
        }
        if self.alpha.cos().abs() < COEFFICIENT_EPSILON {
            return Err(MathError::InvalidParameter {
                reason: format!("alpha = {} is a vertical launch", self.alpha),
            });
        }
        Ok(())
    }

    /// 位置 `x` における軌道の高さ
    ///
    /// # 引数
    /// - `x`: 水平位置
    ///
    /// # 戻り値
    /// - `tan(alpha)*x - g*x^2 / (2*(v0*cos(alpha))^2)`（`SNAP_TOLERANCE` 以内は 0.0）
    pub fn y(&self, x: f64) -> Result<f64, MathError> {
        self.validate()?;
        let horizontal_speed = self.v0 * self.alpha.cos();
        let y = self.alpha.tan() * x - 0.5 * EARTH_GRAVITY * x.powi(2) / horizontal_speed.powi(2);
        if y > -SNAP_TOLERANCE && y < SNAP_TOLERANCE {
            return Ok(0.0);
        }
        Ok(y)
    }

    /// 軌道が丘に着地する水平位置
    ///
    /// 軌道と丘の差 `a*x^2 + b*x + c` を解析的に解く。
    /// 着地点は踏切点より下り側でのみ探す。
    ///
    /// # 引数
    /// - `hill`: 着地面
    ///
    /// # 戻り値
    /// - 着地点の x
    /// - 下り側で丘に届かない場合は `MathError::NoIntersection`
    pub fn landing(&self, hill: &Hill) -> Result<f64, MathError> {
        self.validate()?;

        let horizontal_speed = self.v0 * self.alpha.cos();
        let a = -0.5 * EARTH_GRAVITY / horizontal_speed.powi(2);
        let b = self.alpha.tan() - hill.slope;
        let c = -hill.offset;

        let roots = if c.abs() < COEFFICIENT_EPSILON {
            // 丘が踏切点を通る: x をくくり出して a*x + b = 0 を解く
            if a.abs() < COEFFICIENT_EPSILON {
                QuadraticRoots::None
            } else {
                QuadraticRoots::One(-b / a)
            }
        } else {
            solve_quadratic(a, b, c)
        };
        debug!(a, b, c, ?roots, "landing equation");

        let direction = hill.downhill_direction();
        roots
            .to_vec()
            .into_iter()
            .filter(|x| x * direction > 0.0)
            .max_by(|x1, x2| (x1 * direction).total_cmp(&(x2 * direction)))
            .ok_or(MathError::NoIntersection {
                v0: self.v0,
                alpha: self.alpha,
            })
    }

    /// 踏切から着地までの軌道を `n` 点で離散化する
    ///
    /// # 引数
    /// - `hill`: 着地面
    /// - `n`: 点数（1 以上）
    ///
    /// # 戻り値
    /// - `xs`: 0 から着地点までの等間隔な x（両端を含む）
    /// - `ys`: 各 x における軌道の高さ
    pub fn sample(&self, hill: &Hill, n: usize) -> Result<(Vec<f64>, Vec<f64>), MathError> {
        check_point_count(n)?;
        let landing = self.landing(hill)?;
        self.sample_until(landing, n)
    }

    /// 着地点が既知の場合の離散化
    ///
    /// # 引数
    /// - `landing`: `landing` で求めた着地点
    /// - `n`: 点数（1 以上）
    pub fn sample_until(&self, landing: f64, n: usize) -> Result<(Vec<f64>, Vec<f64>), MathError> {
        check_point_count(n)?;
        let xs = linspace(0.0, landing, n)?;
        let ys = xs
            .iter()
            .map(|&x| self.y(x))
            .collect::<Result<Vec<f64>, MathError>>()?;
        Ok((xs, ys))
    }
}

fn check_point_count(n: usize) -> Result<(), MathError> {
    if n < 1 {
        return Err(MathError::InvalidArgument {
            reason: format!("number of points must be at least 1, got {}", n),
        });
    }
    Ok(())
}
