// src/problem.rs

use nalgebra::{DMatrix, DVector};
use tracing::info;

use crate::error::{Error, Result};
use crate::input::InputDeck;
use crate::thermal::averaging::Assembly;
use crate::thermal::diffusivity::DiffusivityProfile;
use crate::thermal::grid::DepthGrid;
use crate::thermal::temperature::{LinearInterpolator, TemperatureInterpolator};
use crate::utils::{build_implicit_operator, build_steady_operator};

/// A temperature-profile problem ready for matrix assembly: the grid, the
/// diffusivity at every grid node and, if measured, the initial temperatures.
///
/// Boundary conditions and the linear solve are left to the caller.
#[derive(Debug, Clone)]
pub struct ProfileProblem {
    pub grid: DepthGrid,
    pub diffusivity: DVector<f64>,
    pub assembly: Assembly,
    pub initial_temperature: Option<DVector<f64>>,
}

impl ProfileProblem {
    pub fn new(grid: DepthGrid, profile: &DiffusivityProfile, assembly: Assembly) -> Result<Self> {
        let diffusivity = profile.sample(grid.depths())?;
        Ok(ProfileProblem {
            grid,
            diffusivity,
            assembly,
            initial_temperature: None,
        })
    }

    /// Sets up the grid, diffusivity field and initial temperatures described
    /// by an input deck.
    pub fn from_input_deck(deck: &InputDeck) -> Result<Self> {
        let grid = DepthGrid::uniform(
            deck.grid.depth_top,
            deck.grid.depth_bottom,
            deck.grid.n_interior,
        )?;
        let profile = DiffusivityProfile::new(&deck.diffusivity.bin_values)?;
        let mut problem = ProfileProblem::new(grid, &profile, deck.diffusivity.assembly.into())?;

        if let Some(samples) = &deck.temperature_samples {
            let interpolator = LinearInterpolator::new(samples.clone())?;
            problem = problem.with_initial_temperature(&interpolator);
        }

        info!(
            n_interior = problem.n_interior(),
            assembly = problem.assembly.name(),
            has_initial_temperature = problem.initial_temperature.is_some(),
            "assembled profile problem from input deck"
        );
        Ok(problem)
    }

    pub fn with_initial_temperature(mut self, interpolator: &impl TemperatureInterpolator) -> Self {
        self.initial_temperature = Some(interpolator.initial_temperature(&self.grid));
        self
    }

    pub fn n_interior(&self) -> usize {
        self.grid.n_interior()
    }

    /// Steady operator over the raw nodal diffusivities.
    pub fn steady_operator(&self) -> Result<DMatrix<f64>> {
        build_steady_operator(self.n_interior(), &self.diffusivity, self.assembly)
    }

    /// Implicit operator for a time step `time_step` [s].
    ///
    /// The diffusivities are scaled by `time_step / h^2` before assembly, which
    /// requires a uniformly spaced grid.
    pub fn implicit_operator(&self, time_step: f64) -> Result<DMatrix<f64>> {
        let h = self
            .grid
            .spacing()
            .ok_or_else(|| Error::Grid("implicit operator needs uniform spacing".into()))?;
        let scaled = &self.diffusivity * (time_step / (h * h));
        build_implicit_operator(self.n_interior(), &scaled, self.assembly)
    }
}
