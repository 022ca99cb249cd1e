// src/lib.rs

//! Finite-difference assembly of 1D heat-diffusion operators with
//! depth-varying thermal diffusivity.
//!
//! # Errors
//!
//! Every fallible operation returns [`Result`]. The one exception is the bare
//! [`harmonic_mean`], which stays a plain `f64` function and returns a
//! non-finite value when `a + b = 0`; [`try_harmonic_mean`] and
//! [`Averaging::average`] report that case as
//! [`Error::DegenerateHarmonicMean`].

pub mod error;
pub mod input;
pub mod problem;
pub mod thermal;
pub mod utils;

pub use error::{Error, Result};
pub use problem::ProfileProblem;
pub use thermal::{
    arithmetic_mean, compute_diffusivity_profile, harmonic_mean, try_harmonic_mean, Assembly,
    Averaging, DepthGrid, DiffusivityProfile,
};
pub use utils::{build_implicit_operator, build_steady_operator};
