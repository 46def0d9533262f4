// src/dataset/mod.rs

pub mod error;
pub mod generate;
pub mod load_parameters;
pub mod writer;

pub use generate::generate;
pub use writer::Delimiter;
