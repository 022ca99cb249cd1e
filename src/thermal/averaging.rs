// src/thermal/averaging.rs

use nalgebra::DVector;

use crate::error::{Error, Result};

/// Arithmetic mean of two nodal diffusivities.
pub fn arithmetic_mean(a: f64, b: f64) -> f64 {
    0.5 * (a + b)
}

/// Harmonic mean of two nodal diffusivities.
///
/// Weights toward the smaller value, so a poorly conducting layer dominates
/// the flux across the interface. Yields a non-finite value when `a + b = 0`;
/// use [`try_harmonic_mean`] or [`Averaging::average`] to get that case
/// reported as an error.
pub fn harmonic_mean(a: f64, b: f64) -> f64 {
    2.0 * a * b / (a + b)
}

/// Harmonic mean that fails with [`Error::DegenerateHarmonicMean`] when
/// `a + b = 0`.
pub fn try_harmonic_mean(a: f64, b: f64) -> Result<f64> {
    if a + b == 0.0 {
        return Err(Error::DegenerateHarmonicMean { a, b });
    }
    Ok(harmonic_mean(a, b))
}

/// Policy used to estimate the diffusivity at the interface between two nodes.
#[derive(Debug, Clone, Copy)]
pub enum Averaging {
    Arithmetic,
    Harmonic,
    /// Caller-supplied policy. Called as `f(left, right)` with the argument
    /// order documented on the operator builders.
    Custom(fn(f64, f64) -> f64),
}

impl Averaging {
    /// Applies the policy to a pair of nodal values.
    pub fn average(&self, a: f64, b: f64) -> Result<f64> {
        match self {
            Averaging::Arithmetic => Ok(arithmetic_mean(a, b)),
            Averaging::Harmonic => try_harmonic_mean(a, b),
            Averaging::Custom(f) => Ok(f(a, b)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Averaging::Arithmetic => "arithmetic",
            Averaging::Harmonic => "harmonic",
            Averaging::Custom(_) => "custom",
        }
    }
}

/// How the operator builders turn nodal diffusivities into matrix entries.
#[derive(Debug, Clone, Copy)]
pub enum Assembly {
    /// Nodal values are used as they are, `d[i+1]` on the diagonal and the
    /// super-diagonal, `d[i]` on the sub-diagonal.
    Direct,
    /// Every coupling uses an interface value produced by the policy.
    Averaged(Averaging),
}

impl Assembly {
    /// Smallest diffusivity length accepted for `n` interior unknowns.
    pub fn required_len(&self, n: usize) -> usize {
        match self {
            Assembly::Direct => n + 1,
            Assembly::Averaged(_) => n + 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Assembly::Direct => "direct",
            Assembly::Averaged(averaging) => averaging.name(),
        }
    }
}

/// Interface diffusivities `f(d[i], d[i+1])` at the midpoints between
/// consecutive nodes.
///
/// # Returns
///
/// * A vector one entry shorter than `diffusivity` (empty for fewer than two nodes).
pub fn interface_diffusivities(
    diffusivity: &DVector<f64>,
    averaging: Averaging,
) -> Result<DVector<f64>> {
    let values = diffusivity
        .as_slice()
        .windows(2)
        .map(|pair| averaging.average(pair[0], pair[1]))
        .collect::<Result<Vec<_>>>()?;
    Ok(DVector::from_vec(values))
}
