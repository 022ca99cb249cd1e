// src/utils/mod.rs

pub mod linear_algebra;

// Re-export specific functions for easier access
pub use linear_algebra::{build_implicit_operator, build_steady_operator};
