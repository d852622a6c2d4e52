use crate::linalg::LinalgError;
use crate::log::{trace_line, NoopLogger, StepLogger};
use crate::matrix::Vector;
use crate::traits::FloatScalar;
use crate::Matrix;

use super::{solve_logged, RESIDUAL_TOL};

/// Number of correction rounds used when no count is given.
pub const DEFAULT_REFINE_ITERATIONS: usize = 5;

/// Solve `A·x = b`, then improve the answer by iterative refinement.
///
/// After the initial [`solve`](super::solve), each round computes the
/// residual `r = b − A·x`, stops once `‖r‖ < 1e-14`, and otherwise solves
/// `A·δ = r` and updates `x += δ`. At most `max_iter` rounds run.
///
/// ```
/// use densela::{Matrix, Vector};
/// use densela::solver::{solve_refined, DEFAULT_REFINE_ITERATIONS};
///
/// let a = Matrix::from_row_slice(2, 2, &[4.0_f64, 3.0, 6.0, 3.0]);
/// let b = Vector::from_slice(&[1.0, 2.0]);
/// let x = solve_refined(&a, &b, DEFAULT_REFINE_ITERATIONS).unwrap();
/// assert!((x[0] - 0.5).abs() < 1e-12);
/// assert!((x[1] + 1.0 / 3.0).abs() < 1e-12);
/// ```
pub fn solve_refined<T: FloatScalar>(
    a: &Matrix<T>,
    b: &Vector<T>,
    max_iter: usize,
) -> Result<Vector<T>, LinalgError> {
    solve_refined_logged(a, b, max_iter, &mut NoopLogger)
}

/// [`solve_refined`], narrating the inner solves, convergence and the
/// residual norm of every round to `log`.
pub fn solve_refined_logged<T, L>(
    a: &Matrix<T>,
    b: &Vector<T>,
    max_iter: usize,
    log: &mut L,
) -> Result<Vector<T>, LinalgError>
where
    T: FloatScalar,
    L: StepLogger + ?Sized,
{
    let mut x = solve_logged(a, b, log)?;
    let tol = T::lit(RESIDUAL_TOL);

    log.log("Starting iterative refinement");

    for iter in 0..max_iter {
        let r = b - &a.mul_vec(&x)?;
        let residual = r.norm();
        if residual < tol {
            trace_line!(log, "Converged at iteration {}, residual: {:e}", iter, residual);
            break;
        }

        let delta = solve_logged(a, &r, log)?;
        x = &x + &delta;

        trace_line!(log, "Iteration {}, residual norm: {:e}", iter + 1, residual);
    }

    Ok(x)
}
