// src/error.rs

use thiserror::Error;

/// Errors raised while building diffusivity fields and operator matrices.
#[derive(Debug, Error)]
pub enum Error {
    #[error("operator must have at least one interior unknown")]
    EmptyOperator,

    #[error(
        "{assembly} assembly needs at least {required} diffusivity values, got {actual}"
    )]
    DiffusivityLength {
        required: usize,
        actual: usize,
        assembly: &'static str,
    },

    #[error("harmonic mean undefined for a={a}, b={b} (a + b = 0)")]
    DegenerateHarmonicMean { a: f64, b: f64 },

    #[error("expected {expected} depth-bin diffusivities, got {actual}")]
    BinCount { expected: usize, actual: usize },

    #[error("depth at grid node {index} is not a number")]
    NonFiniteDepth { index: usize },

    #[error("invalid grid: {0}")]
    Grid(String),

    #[error("invalid temperature samples: {0}")]
    Samples(String),

    #[error("failed to read input deck: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse input deck: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
