// src/math/linspace.rs

use crate::math::error::MathError;

/// 閉区間 `[start, stop]` を等間隔に分割した点列
///
/// # 引数
/// - `start`: 始点
/// - `stop`: 終点（含む）
/// - `n`: 点数
///
/// # 戻り値
/// - `n` 個の点。先頭は `start`、末尾は `stop` に厳密に一致する
pub fn linspace(start: f64, stop: f64, n: usize) -> Result<Vec<f64>, MathError> {
    match n {
        0 => Err(MathError::InvalidArgument {
            reason: "number of points must be at least 1".to_string(),
        }),
        1 => Ok(vec![start]),
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut points: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            points[n - 1] = stop;
            Ok(points)
        }
    }
}
