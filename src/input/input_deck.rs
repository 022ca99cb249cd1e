// src/input/input_deck.rs
use serde::Deserialize;

use crate::thermal::averaging::{Assembly, Averaging};

#[derive(Debug, Clone, Deserialize)]
pub struct GridSettings {
    pub depth_top: f64,    // [m] Depth of the upper boundary node
    pub depth_bottom: f64, // [m] Depth of the lower boundary node
    pub n_interior: usize, // Number of interior unknowns
}

/// Assembly mode as written in the input deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssemblyKind {
    Direct,
    Arithmetic,
    Harmonic,
}

impl From<AssemblyKind> for Assembly {
    fn from(kind: AssemblyKind) -> Self {
        match kind {
            AssemblyKind::Direct => Assembly::Direct,
            AssemblyKind::Arithmetic => Assembly::Averaged(Averaging::Arithmetic),
            AssemblyKind::Harmonic => Assembly::Averaged(Averaging::Harmonic),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiffusivitySettings {
    pub bin_values: Vec<f64>, // [m^2/s] one per depth bin, shallowest first
    #[serde(default = "default_assembly")]
    pub assembly: AssemblyKind,
}

fn default_assembly() -> AssemblyKind {
    AssemblyKind::Direct
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimulationSettings {
    pub time_step: f64, // [s] Folded into the implicit operator
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemperatureSamples {
    pub depth: Vec<f64>,       // [m]
    pub temperature: Vec<f64>, // [°C]
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputDeck {
    pub grid: GridSettings,
    pub diffusivity: DiffusivitySettings,
    #[serde(default)]
    pub simulation: Option<SimulationSettings>,
    #[serde(default)]
    pub temperature_samples: Option<TemperatureSamples>,
}
