// src/thermal/mod.rs

pub mod averaging;
pub mod diffusivity;
pub mod grid;
pub mod temperature;

pub use averaging::{
    arithmetic_mean, harmonic_mean, interface_diffusivities, try_harmonic_mean, Assembly,
    Averaging,
};
pub use diffusivity::{compute_diffusivity_profile, DiffusivityProfile, DEPTH_BINS};
pub use grid::DepthGrid;
pub use temperature::{LinearInterpolator, TemperatureInterpolator};
