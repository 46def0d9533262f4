// src/models/hill.rs

/// ジャンプ台の丘
///
/// ```text
///         ^
///         --------------> x
///         |
///         |     <- offset
///         |\
///         | \
///         |  \
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hill {
    pub offset: f64, // x = 0 での高さ（負を想定）
    pub slope: f64,  // 傾き（負を想定、右下がり）
}

/// 全てのジャンプで使う丘
pub const HILL: Hill = Hill {
    offset: -2.0,
    slope: -1.0,
};

impl Hill {
    /// `x` における丘の高さ
    pub fn y(&self, x: f64) -> f64 {
        self.offset + self.slope * x
    }

    /// 下り方向を表す x の符号（水平な丘は右下がりとして扱う）
    pub fn downhill_direction(&self) -> f64 {
        if self.slope > 0.0 {
            -1.0
        } else {
            1.0
        }
    }
}
