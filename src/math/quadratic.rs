// src/math/quadratic.rs

/// これより小さい係数はゼロとみなす
pub const COEFFICIENT_EPSILON: f64 = 1e-12;

/// `a*x^2 + b*x + c = 0` の実数解
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadraticRoots {
    None,
    One(f64),
    Two(f64, f64),
}

impl QuadraticRoots {
    /// 解をベクタで返す（求めた順）
    pub fn to_vec(self) -> Vec<f64> {
        match self {
            QuadraticRoots::None => Vec::new(),
            QuadraticRoots::One(x) => vec![x],
            QuadraticRoots::Two(x1, x2) => vec![x1, x2],
        }
    }
}

/// `a*x^2 + b*x + c = 0` を解の公式で解く
///
/// # 引数
/// - `a`: 2次の係数。ほぼゼロなら1次方程式 `b*x + c = 0` を解く
/// - `b`: 1次の係数
/// - `c`: 定数項
///
/// # 戻り値
/// - 実数解。判別式が負、または方程式が退化している場合は `QuadraticRoots::None`
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> QuadraticRoots {
    if a.abs() < COEFFICIENT_EPSILON {
        return solve_linear(b, c);
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return QuadraticRoots::None;
    }

    // q は b と平方根の符号を揃えて桁落ちを防ぐ
    let sign = if b < 0.0 { -1.0 } else { 1.0 };
    let q = -0.5 * (b + sign * discriminant.sqrt());
    if q == 0.0 {
        // b == 0 かつ c == 0: 原点で重解
        return QuadraticRoots::One(0.0);
    }

    let x1 = q / a;
    let x2 = c / q;
    if discriminant == 0.0 {
        QuadraticRoots::One(x1)
    } else {
        QuadraticRoots::Two(x1, x2)
    }
}

fn solve_linear(b: f64, c: f64) -> QuadraticRoots {
    if b.abs() < COEFFICIENT_EPSILON {
        return QuadraticRoots::None;
    }
    QuadraticRoots::One(-c / b)
}
