// src/thermal/diffusivity.rs

use nalgebra::DVector;

use crate::error::{Error, Result};

/// A depth layer, closed at its upper bound: it holds depths in
/// `(previous upper bound, upper_bound]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthBin {
    pub upper_bound: f64, // [m]
    pub index: usize,
}

pub const NUM_DEPTH_BINS: usize = 9;

/// Depth layers in ascending order. The last one is open-ended.
pub static DEPTH_BINS: [DepthBin; NUM_DEPTH_BINS] = [
    DepthBin { upper_bound: 50.0, index: 0 },
    DepthBin { upper_bound: 250.0, index: 1 },
    DepthBin { upper_bound: 400.0, index: 2 },
    DepthBin { upper_bound: 600.0, index: 3 },
    DepthBin { upper_bound: 800.0, index: 4 },
    DepthBin { upper_bound: 1000.0, index: 5 },
    DepthBin { upper_bound: 1500.0, index: 6 },
    DepthBin { upper_bound: 1900.0, index: 7 },
    DepthBin { upper_bound: f64::INFINITY, index: 8 },
];

/// Step-function diffusivity over depth, one value per [`DEPTH_BINS`] entry.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffusivityProfile {
    bin_values: [f64; NUM_DEPTH_BINS],
}

impl DiffusivityProfile {
    /// Creates a profile from one diffusivity per depth bin.
    ///
    /// # Arguments
    ///
    /// * `bin_values` - Exactly nine diffusivities [m^2/s], shallowest bin first.
    pub fn new(bin_values: &[f64]) -> Result<Self> {
        let bin_values: [f64; NUM_DEPTH_BINS] =
            bin_values.try_into().map_err(|_| Error::BinCount {
                expected: NUM_DEPTH_BINS,
                actual: bin_values.len(),
            })?;
        Ok(DiffusivityProfile { bin_values })
    }

    pub fn bin_values(&self) -> &[f64; NUM_DEPTH_BINS] {
        &self.bin_values
    }

    /// Diffusivity of the bin containing `depth`.
    ///
    /// A depth lying exactly on a threshold belongs to the shallower bin.
    /// Returns `None` for NaN.
    pub fn lookup(&self, depth: f64) -> Option<f64> {
        DEPTH_BINS
            .iter()
            .find(|bin| depth <= bin.upper_bound)
            .map(|bin| self.bin_values[bin.index])
    }

    /// Samples the profile at every grid depth.
    ///
    /// # Returns
    ///
    /// * A vector with one diffusivity per entry of `depths`.
    pub fn sample(&self, depths: &DVector<f64>) -> Result<DVector<f64>> {
        let values = depths
            .iter()
            .enumerate()
            .map(|(index, &depth)| self.lookup(depth).ok_or(Error::NonFiniteDepth { index }))
            .collect::<Result<Vec<_>>>()?;
        Ok(DVector::from_vec(values))
    }
}

/// Builds the nodal diffusivity field for a grid from nine bin values.
pub fn compute_diffusivity_profile(
    bin_values: &[f64],
    depths: &DVector<f64>,
) -> Result<DVector<f64>> {
    DiffusivityProfile::new(bin_values)?.sample(depths)
}
