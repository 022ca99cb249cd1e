// src/utils/linear_algebra.rs

use nalgebra::{DMatrix, DVector};
use tracing::debug;

use crate::error::{Error, Result};
use crate::thermal::averaging::Assembly;

/// Builds the steady-state diffusion operator for `n` interior unknowns.
///
/// The matrix is the variable-coefficient 1D Laplacian, tridiagonal but stored
/// dense. Entry `(i, j)` couples interior node `i + 1` to interior node `j + 1`
/// of the grid, so `diffusivity[0]` and `diffusivity[n + 1]` belong to the
/// boundary nodes.
///
/// With [`Assembly::Direct`] row `i` holds `-2 d[i+1]` on the diagonal, `d[i+1]`
/// on the super-diagonal and `d[i]` on the sub-diagonal, except the last row
/// whose sub-diagonal is `d[n]`.
///
/// With [`Assembly::Averaged`] and policy `f` the diagonal is
/// `-(f(d[i], d[i+1]) + f(d[i+1], d[i+2]))`, the super-diagonal
/// `f(d[i+1], d[i+2])` and the sub-diagonal `f(d[i+1], d[i])`, except the last
/// row whose sub-diagonal is `f(d[n-1], d[n])`. Arguments are passed in exactly
/// this order, which only matters for non-symmetric custom policies.
///
/// # Arguments
///
/// * `n` - Number of interior unknowns, at least one.
/// * `diffusivity` - Nodal diffusivities, at least `n + 1` (direct) or `n + 2`
///   (averaged) entries. Time step and grid spacing are expected to be folded in.
/// * `assembly` - Direct nodal indexing or an interface-averaging policy.
///
/// # Returns
///
/// * An \(n \times n\) operator matrix, or an error if `n` is zero, the
///   diffusivity field is too short, or the averaging policy fails.
pub fn build_steady_operator(
    n: usize,
    diffusivity: &DVector<f64>,
    assembly: Assembly,
) -> Result<DMatrix<f64>> {
    check_dimensions(n, diffusivity, assembly)?;
    debug!(n, assembly = assembly.name(), "assembling steady operator");

    let d = diffusivity;
    let last = n - 1;
    let mut laplacian = DMatrix::zeros(n, n);

    match assembly {
        Assembly::Direct => {
            for i in 0..n {
                laplacian[(i, i)] = -2.0 * d[i + 1];
                if i < last {
                    laplacian[(i, i + 1)] = d[i + 1];
                }
                if i > 0 {
                    laplacian[(i, i - 1)] = if i == last { d[n] } else { d[i] };
                }
            }
        }
        Assembly::Averaged(averaging) => {
            let f = |a: f64, b: f64| averaging.average(a, b);
            for i in 0..n {
                let backward = f(d[i], d[i + 1])?;
                let forward = f(d[i + 1], d[i + 2])?;
                laplacian[(i, i)] = -(backward + forward);
                if i < last {
                    laplacian[(i, i + 1)] = forward;
                }
                if i > 0 {
                    laplacian[(i, i - 1)] = if i == last {
                        f(d[n - 1], d[n])?
                    } else {
                        f(d[i + 1], d[i])?
                    };
                }
            }
        }
    }

    Ok(laplacian)
}

/// Builds the system matrix of one implicit (backward Euler) time step.
///
/// This is the identity minus the steady operator: the diagonal becomes
/// `2 d[i+1] + 1` (direct) or `f(d[i], d[i+1]) + f(d[i+1], d[i+2]) + 1`
/// (averaged) and every off-diagonal entry changes sign. The time step and
/// grid spacing must already be folded into `diffusivity`.
///
/// # Arguments
///
/// * `n` - Number of interior unknowns, at least one.
/// * `diffusivity` - Nodal diffusivities, same length requirements as
///   [`build_steady_operator`].
/// * `assembly` - Direct nodal indexing or an interface-averaging policy.
///
/// # Returns
///
/// * An \(n \times n\) operator matrix, or the same errors as [`build_steady_operator`].
pub fn build_implicit_operator(
    n: usize,
    diffusivity: &DVector<f64>,
    assembly: Assembly,
) -> Result<DMatrix<f64>> {
    let laplacian = build_steady_operator(n, diffusivity, assembly)?;
    debug!(n, assembly = assembly.name(), "adding mass term to implicit operator");
    Ok(DMatrix::identity(n, n) - laplacian)
}

fn check_dimensions(n: usize, diffusivity: &DVector<f64>, assembly: Assembly) -> Result<()> {
    if n == 0 {
        return Err(Error::EmptyOperator);
    }
    let required = assembly.required_len(n);
    if diffusivity.len() < required {
        return Err(Error::DiffusivityLength {
            required,
            actual: diffusivity.len(),
            assembly: assembly.name(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thermal::averaging::{arithmetic_mean, harmonic_mean, Averaging};

    fn ramp() -> DVector<f64> {
        DVector::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0])
    }

    #[test]
    fn test_build_steady_operator_direct() {
        let laplacian = build_steady_operator(3, &ramp(), Assembly::Direct).unwrap();

        let expected = DMatrix::from_row_slice(3, 3, &[
            -4.0,  2.0,  0.0,
             2.0, -6.0,  3.0,
             0.0,  4.0, -8.0,
        ]);

        assert_eq!(laplacian, expected);
    }

    #[test]
    fn test_build_steady_operator_arithmetic() {
        let laplacian =
            build_steady_operator(3, &ramp(), Assembly::Averaged(Averaging::Arithmetic)).unwrap();

        let expected = DMatrix::from_row_slice(3, 3, &[
            -4.0,  2.5,  0.0,
             2.5, -6.0,  3.5,
             0.0,  3.5, -8.0,
        ]);

        assert_eq!(laplacian, expected);
    }

    #[test]
    fn test_build_steady_operator_harmonic() {
        let d = ramp();
        let laplacian =
            build_steady_operator(3, &d, Assembly::Averaged(Averaging::Harmonic)).unwrap();

        let h = harmonic_mean;
        let expected = DMatrix::from_row_slice(3, 3, &[
            -(h(1.0, 2.0) + h(2.0, 3.0)), h(2.0, 3.0), 0.0,
            h(3.0, 2.0), -(h(2.0, 3.0) + h(3.0, 4.0)), h(3.0, 4.0),
            0.0, h(3.0, 4.0), -(h(3.0, 4.0) + h(4.0, 5.0)),
        ]);

        for i in 0..3 {
            for j in 0..3 {
                assert!((laplacian[(i, j)] - expected[(i, j)]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_sub_diagonal_argument_order() {
        // records the left argument so the call order is visible in the matrix
        let first = Assembly::Averaged(Averaging::Custom(|a, _| a));
        let d = DVector::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let laplacian = build_steady_operator(4, &d, first).unwrap();

        // interior rows use f(d[i+1], d[i]), the last row f(d[n-1], d[n])
        assert_eq!(laplacian[(1, 0)], 3.0);
        assert_eq!(laplacian[(2, 1)], 4.0);
        assert_eq!(laplacian[(3, 2)], 4.0);
        // super-diagonal uses f(d[i+1], d[i+2])
        assert_eq!(laplacian[(0, 1)], 2.0);
        assert_eq!(laplacian[(2, 3)], 4.0);
    }

    #[test]
    fn test_direct_is_not_an_averaging_policy() {
        let d = ramp();
        let direct = build_steady_operator(3, &d, Assembly::Direct).unwrap();
        let first = build_steady_operator(3, &d, Assembly::Averaged(Averaging::Custom(|a, _| a)))
            .unwrap();
        assert_ne!(direct, first);
    }

    #[test]
    fn test_single_unknown() {
        let d = DVector::from_vec(vec![1.0, 2.0, 3.0]);
        let direct = build_steady_operator(1, &d, Assembly::Direct).unwrap();
        assert_eq!(direct, DMatrix::from_element(1, 1, -4.0));

        let averaged =
            build_steady_operator(1, &d, Assembly::Averaged(Averaging::Arithmetic)).unwrap();
        let diagonal = -(arithmetic_mean(1.0, 2.0) + arithmetic_mean(2.0, 3.0));
        assert_eq!(averaged, DMatrix::from_element(1, 1, diagonal));

        let implicit = build_implicit_operator(1, &d, Assembly::Direct).unwrap();
        assert_eq!(implicit, DMatrix::from_element(1, 1, 5.0));
    }

    #[test]
    fn test_build_implicit_operator_direct() {
        let implicit = build_implicit_operator(3, &ramp(), Assembly::Direct).unwrap();

        let expected = DMatrix::from_row_slice(3, 3, &[
             5.0, -2.0,  0.0,
            -2.0,  7.0, -3.0,
             0.0, -4.0,  9.0,
        ]);

        assert_eq!(implicit, expected);
    }

    #[test]
    fn test_build_implicit_operator_arithmetic() {
        let implicit =
            build_implicit_operator(3, &ramp(), Assembly::Averaged(Averaging::Arithmetic)).unwrap();

        let expected = DMatrix::from_row_slice(3, 3, &[
             5.0, -2.5,  0.0,
            -2.5,  7.0, -3.5,
             0.0, -3.5,  9.0,
        ]);

        assert_eq!(implicit, expected);
    }

    #[test]
    fn test_dimension_errors() {
        let d = ramp();
        assert!(matches!(
            build_steady_operator(0, &d, Assembly::Direct),
            Err(Error::EmptyOperator)
        ));

        // direct needs n + 1 values, averaged n + 2
        assert!(build_steady_operator(4, &d, Assembly::Direct).is_ok());
        let err = build_implicit_operator(4, &d, Assembly::Averaged(Averaging::Harmonic)).unwrap_err();
        assert!(matches!(
            err,
            Error::DiffusivityLength { required: 6, actual: 5, .. }
        ));
        assert!(build_steady_operator(5, &d, Assembly::Direct).is_err());
    }

    #[test]
    fn test_harmonic_failure_propagates() {
        let d = DVector::from_vec(vec![1.0, -1.0, 2.0]);
        let err = build_steady_operator(1, &d, Assembly::Averaged(Averaging::Harmonic)).unwrap_err();
        assert!(matches!(err, Error::DegenerateHarmonicMean { .. }));
    }
}
