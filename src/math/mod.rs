// src/math/mod.rs

pub mod error;
pub mod linspace;
pub mod quadratic;

pub use linspace::linspace;
pub use quadratic::solve_quadratic;
