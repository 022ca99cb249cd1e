// src/thermal/grid.rs

use nalgebra::DVector;

use crate::error::{Error, Result};

/// Depth coordinates of a 1D computation grid.
///
/// Node `0` and node `n_interior + 1` are boundary nodes, the nodes in between
/// are the unknowns of the linear system.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthGrid {
    depths: DVector<f64>,
}

impl DepthGrid {
    /// Creates an equally spaced grid from `depth_top` to `depth_bottom`.
    ///
    /// # Arguments
    ///
    /// * `depth_top` - Depth of the upper boundary node [m].
    /// * `depth_bottom` - Depth of the lower boundary node [m].
    /// * `n_interior` - Number of interior unknowns.
    pub fn uniform(depth_top: f64, depth_bottom: f64, n_interior: usize) -> Result<Self> {
        if n_interior == 0 {
            return Err(Error::Grid("at least one interior node is required".into()));
        }
        if !(depth_top.is_finite() && depth_bottom.is_finite()) || depth_bottom <= depth_top {
            return Err(Error::Grid(format!(
                "bottom depth {depth_bottom} must be finite and below top depth {depth_top}"
            )));
        }

        let n_nodes = n_interior + 2;
        let h = (depth_bottom - depth_top) / (n_nodes - 1) as f64;
        let mut depths = DVector::from_fn(n_nodes, |k, _| depth_top + k as f64 * h);
        // pin the last node so rounding cannot move the boundary
        depths[n_nodes - 1] = depth_bottom;

        Ok(DepthGrid { depths })
    }

    /// Wraps caller-provided depths. They must be finite and strictly increasing,
    /// with at least one interior node.
    pub fn from_depths(depths: Vec<f64>) -> Result<Self> {
        if depths.len() < 3 {
            return Err(Error::Grid(format!(
                "need at least 3 nodes, got {}",
                depths.len()
            )));
        }
        if let Some(k) = depths.iter().position(|z| !z.is_finite()) {
            return Err(Error::Grid(format!("depth at node {k} is not finite")));
        }
        if let Some(k) = depths.windows(2).position(|pair| pair[1] <= pair[0]) {
            return Err(Error::Grid(format!(
                "depths must be strictly increasing (node {} -> {})",
                k,
                k + 1
            )));
        }
        Ok(DepthGrid {
            depths: DVector::from_vec(depths),
        })
    }

    pub fn depths(&self) -> &DVector<f64> {
        &self.depths
    }

    pub fn n_nodes(&self) -> usize {
        self.depths.len()
    }

    pub fn n_interior(&self) -> usize {
        self.depths.len() - 2
    }

    /// Node spacing if the grid is uniform (relative tolerance 1e-9), else `None`.
    pub fn spacing(&self) -> Option<f64> {
        let n = self.depths.len();
        let h = (self.depths[n - 1] - self.depths[0]) / (n - 1) as f64;
        self.depths
            .as_slice()
            .windows(2)
            .all(|pair| ((pair[1] - pair[0]) - h).abs() <= 1e-9 * h)
            .then_some(h)
    }
}
