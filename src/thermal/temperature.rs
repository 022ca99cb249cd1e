// src/thermal/temperature.rs

use nalgebra::DVector;

use crate::error::{Error, Result};
use crate::input::input_deck::TemperatureSamples;
use crate::thermal::grid::DepthGrid;

/// Maps sparse temperature measurements onto a computation grid, producing
/// the initial condition for every grid node (boundary nodes included).
pub trait TemperatureInterpolator {
    fn initial_temperature(&self, grid: &DepthGrid) -> DVector<f64>;
}

/// Piecewise-linear interpolation through measured temperatures, held constant
/// beyond the shallowest and deepest sample.
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    samples: TemperatureSamples,
}

impl LinearInterpolator {
    /// Creates an interpolator over the given samples.
    ///
    /// # Arguments
    ///
    /// * `samples` - Depths [m] (strictly increasing) and temperatures [°C] of equal length.
    pub fn new(samples: TemperatureSamples) -> Result<Self> {
        if samples.depth.is_empty() {
            return Err(Error::Samples("no samples given".into()));
        }
        if samples.depth.len() != samples.temperature.len() {
            return Err(Error::Samples(format!(
                "{} depths but {} temperatures",
                samples.depth.len(),
                samples.temperature.len()
            )));
        }
        if let Some(k) = samples.depth.iter().position(|z| !z.is_finite()) {
            return Err(Error::Samples(format!("depth at sample {k} is not finite")));
        }
        if samples.depth.windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(Error::Samples("depths must be strictly increasing".into()));
        }
        Ok(LinearInterpolator { samples })
    }

    /// Temperature at a single depth.
    pub fn temperature_at(&self, depth: f64) -> f64 {
        interpolate(&self.samples.depth, &self.samples.temperature, depth)
    }
}

impl TemperatureInterpolator for LinearInterpolator {
    fn initial_temperature(&self, grid: &DepthGrid) -> DVector<f64> {
        grid.depths().map(|depth| self.temperature_at(depth))
    }
}

/// Linear interpolation of `y` over ascending `x`, clamped at both ends.
fn interpolate(x: &[f64], y: &[f64], value: f64) -> f64 {
    let last = x.len() - 1;
    if value <= x[0] {
        return y[0];
    }
    if value >= x[last] {
        return y[last];
    }
    // first index with x[i] > value, in 1..=last
    let i = x.partition_point(|&xi| xi <= value);
    let t = (value - x[i - 1]) / (x[i] - x[i - 1]);
    y[i - 1] * (1.0 - t) + y[i] * t
}
