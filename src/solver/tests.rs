use super::*;
use crate::log::{LogEntry, RecordingLogger};
use alloc::string::String;
use alloc::vec::Vec;

const TOL: f64 = 1e-10;

fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff {})",
        msg,
        a,
        b,
        (a - b).abs()
    );
}

fn m(r: usize, c: usize, v: &[f64]) -> Matrix<f64> {
    Matrix::from_row_slice(r, c, v)
}

fn v(x: &[f64]) -> Vector<f64> {
    Vector::from_slice(x)
}

fn residual(a: &Matrix<f64>, x: &Vector<f64>, b: &Vector<f64>) -> f64 {
    (&a.mul_vec(x).unwrap() - b).norm()
}

// ═══════════════════════════════════════════════════════════════════
// solve
// ═══════════════════════════════════════════════════════════════════

#[test]
fn solve_2x2_by_residual() {
    let a = m(2, 2, &[4.0, 3.0, 6.0, 3.0]);
    let b = v(&[1.0, 2.0]);
    let x = solve(&a, &b).unwrap();
    assert!(residual(&a, &x, &b) < 1e-12);
    assert_near(x[0], 0.5, TOL, "x0");
    assert_near(x[1], -1.0 / 3.0, TOL, "x1");
}

#[test]
fn solve_3x3() {
    let a = m(3, 3, &[2.0, 1.0, -1.0, -3.0, -1.0, 2.0, -2.0, 1.0, 2.0]);
    let b = v(&[8.0, -11.0, -3.0]);
    let x = solve(&a, &b).unwrap();
    assert_near(x[0], 2.0, TOL, "x0");
    assert_near(x[1], 3.0, TOL, "x1");
    assert_near(x[2], -1.0, TOL, "x2");
}

#[test]
fn solve_singular() {
    let a = m(2, 2, &[1.0, 2.0, 2.0, 4.0]);
    assert_eq!(solve(&a, &v(&[1.0, 2.0])), Err(LinalgError::Singular));
}

#[test]
fn solve_shape_errors() {
    let a = m(2, 3, &[1.0; 6]);
    assert!(matches!(
        solve(&a, &v(&[1.0, 2.0])),
        Err(LinalgError::InvalidArgument(_))
    ));
    let sq = Matrix::<f64>::identity(2);
    assert_eq!(
        solve(&sq, &v(&[1.0, 2.0, 3.0])),
        Err(LinalgError::DimensionMismatch {
            expected: (2, 1),
            got: (3, 1)
        })
    );
}

#[test]
fn solve_empty_system() {
    let x = solve(&Matrix::<f64>::zeros(0, 0), &Vector::zeros(0)).unwrap();
    assert!(x.is_empty());
}

#[test]
fn solve_logged_trace() {
    let a = m(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    let b = v(&[5.0, 6.0]);
    let mut log = RecordingLogger::new();
    let x = solve_logged(&a, &b, &mut log).unwrap();
    assert_near(x[0], -4.0, TOL, "x0");
    assert_near(x[1], 4.5, TOL, "x1");

    let entries = log.entries();
    assert_eq!(entries[0], LogEntry::Line("Starting Gaussian Elimination".into()));
    assert_eq!(entries[1], LogEntry::Step("Initial Augmented Matrix:".into()));
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines[1], "Swapping row 0 with row 1");
    assert!(lines[2].starts_with("R1 = R1 - (0.333"), "{}", lines[2]);
    assert!(lines[2].ends_with(") * R0"));
    assert_eq!(*lines.last().unwrap(), "Starting Back Substitution");
}

#[test]
fn solve_logs_nothing_for_identity_elimination() {
    let mut log = RecordingLogger::new();
    solve_logged(&Matrix::identity(3), &v(&[1.0, 2.0, 3.0]), &mut log).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines, ["Starting Gaussian Elimination", "Starting Back Substitution"]);
}

#[test]
fn solve_f32() {
    let a = Matrix::from_row_slice(2, 2, &[2.0_f32, 1.0, 5.0, 3.0]);
    let x = solve(&a, &Vector::from_slice(&[4.0, 11.0])).unwrap();
    assert!((x[0] - 1.0).abs() < 1e-5);
    assert!((x[1] - 2.0).abs() < 1e-5);
}

// ═══════════════════════════════════════════════════════════════════
// determinant
// ═══════════════════════════════════════════════════════════════════

#[test]
fn determinant_known_values() {
    assert_eq!(determinant(&Matrix::<f64>::identity(2)).unwrap(), 1.0);
    let a = m(3, 3, &[6.0, 1.0, 1.0, 4.0, -2.0, 5.0, 2.0, 8.0, 7.0]);
    assert_near(determinant(&a).unwrap(), -306.0, 1e-9, "det 3x3");
}

#[test]
fn determinant_singular_is_zero() {
    let a = m(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    assert_eq!(determinant(&a).unwrap(), 0.0);
}

#[test]
fn determinant_row_swap_flips_sign() {
    let a = m(3, 3, &[2.0, -1.0, 0.0, 1.0, 3.0, 4.0, 0.0, 5.0, -2.0]);
    let mut swapped = a.clone();
    swapped.swap_rows(0, 2);
    let d = determinant(&a).unwrap();
    assert_near(determinant(&swapped).unwrap(), -d, 1e-9, "swap sign");
}

#[test]
fn determinant_logs_sign_flips() {
    let mut log = RecordingLogger::new();
    let d = determinant_logged(&m(2, 2, &[0.0, 1.0, 1.0, 0.0]), &mut log).unwrap();
    assert_eq!(d, -1.0);
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(
        lines,
        [
            "Calculating Determinant using Gaussian Elimination",
            "Swapping row 0 with row 1 (det sign flips)",
        ]
    );
}

#[test]
fn determinant_non_square() {
    assert!(determinant(&Matrix::<f64>::zeros(2, 3)).is_err());
}

// ═══════════════════════════════════════════════════════════════════
// inverse / power
// ═══════════════════════════════════════════════════════════════════

#[test]
fn inverse_identity() {
    let id = Matrix::<f64>::identity(2);
    assert_eq!(inverse(&id).unwrap(), id);
}

#[test]
fn inverse_3x3_product_is_identity() {
    let a = m(3, 3, &[1.0, 2.0, 3.0, 0.0, 1.0, 4.0, 5.0, 6.0, 0.0]);
    let inv = inverse(&a).unwrap();
    assert!((&a * &inv).approx_eq(&Matrix::identity(3), 1e-9));
    assert!((&inv * &a).approx_eq(&Matrix::identity(3), 1e-9));
    // Known inverse
    assert_near(inv[(0, 0)], -24.0, 1e-9, "inv00");
    assert_near(inv[(2, 2)], 1.0, 1e-9, "inv22");
}

#[test]
fn inverse_singular() {
    assert_eq!(
        inverse(&m(2, 2, &[1.0, 2.0, 2.0, 4.0])),
        Err(LinalgError::Singular)
    );
}

#[test]
fn inverse_logs_row_division() {
    let mut log = RecordingLogger::new();
    inverse_logged(&m(2, 2, &[2.0, 0.0, 0.0, 4.0]), &mut log).unwrap();
    let lines: Vec<String> = log.lines().map(String::from).collect();
    assert_eq!(lines[0], "Starting Gauss-Jordan for Inverse");
    assert_eq!(lines[1], "Dividing row 0 by 2");
    assert_eq!(lines[2], "Dividing row 1 by 4");
}

#[test]
fn power_cases() {
    let a = m(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(power(&a, 0).unwrap(), Matrix::identity(2));
    assert_eq!(power(&a, 1).unwrap(), a);
    assert_eq!(power(&a, 2).unwrap(), &a * &a);
    assert_eq!(power(&a, 3).unwrap(), &(&a * &a) * &a);

    let inv2 = power(&a, -2).unwrap();
    assert!((&inv2 * &(&a * &a)).approx_eq(&Matrix::identity(2), 1e-9));
}

#[test]
fn power_errors() {
    assert!(power(&Matrix::<f64>::zeros(2, 3), 2).is_err());
    assert_eq!(
        power(&m(2, 2, &[1.0, 1.0, 1.0, 1.0]), -1),
        Err(LinalgError::Singular)
    );
}

// ═══════════════════════════════════════════════════════════════════
// least squares / Cholesky / refinement
// ═══════════════════════════════════════════════════════════════════

#[test]
fn least_squares_overdetermined_fit() {
    // Noisy line: normal equations give the reference answer
    let a = m(4, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0, 1.0, 3.0]);
    let b = v(&[1.1, 2.9, 5.2, 6.8]);
    let x = least_squares(&a, &b).unwrap();

    let at = a.transpose();
    let reference = solve(&(&at * &a), &at.mul_vec(&b).unwrap()).unwrap();
    assert_near(x[0], reference[0], 1e-9, "intercept");
    assert_near(x[1], reference[1], 1e-9, "slope");
}

#[test]
fn least_squares_errors() {
    let wide = m(1, 2, &[1.0, 2.0]);
    assert!(matches!(
        least_squares(&wide, &v(&[1.0])),
        Err(LinalgError::InvalidArgument(_))
    ));
    let tall = m(3, 2, &[1.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
    assert!(matches!(
        least_squares(&tall, &v(&[1.0, 2.0])),
        Err(LinalgError::DimensionMismatch { .. })
    ));
    let dependent = m(3, 2, &[1.0, 2.0, 1.0, 2.0, 1.0, 2.0]);
    assert_eq!(
        least_squares(&dependent, &v(&[1.0, 1.0, 1.0])),
        Err(LinalgError::Singular)
    );
}

#[test]
fn solve_cholesky_matches_solve() {
    let a = m(3, 3, &[4.0, 2.0, 1.0, 2.0, 5.0, 3.0, 1.0, 3.0, 6.0]);
    let b = v(&[1.0, -2.0, 3.0]);
    let xc = solve_cholesky(&a, &b).unwrap();
    let xg = solve(&a, &b).unwrap();
    for i in 0..3 {
        assert_near(xc[i], xg[i], 1e-10, "cholesky vs gauss");
    }

    let mut log = RecordingLogger::new();
    solve_cholesky_logged(&a, &b, &mut log).unwrap();
    assert_eq!(
        log.entries(),
        &[LogEntry::Line("Solving using Cholesky decomposition".into())]
    );
}

#[test]
fn solve_cholesky_errors() {
    let not_pd = m(2, 2, &[1.0, 5.0, 5.0, 1.0]);
    assert_eq!(
        solve_cholesky(&not_pd, &v(&[1.0, 1.0])),
        Err(LinalgError::NotPositiveDefinite)
    );
    assert!(solve_cholesky(&Matrix::<f64>::identity(2), &v(&[1.0])).is_err());
}

#[test]
fn solve_refined_converges() {
    // Wilson matrix, solution all ones
    let a = m(
        4,
        4,
        &[
            10.0, 7.0, 8.0, 7.0, //
            7.0, 5.0, 6.0, 5.0, //
            8.0, 6.0, 10.0, 9.0, //
            7.0, 5.0, 9.0, 10.0,
        ],
    );
    let b = v(&[32.0, 23.0, 33.0, 31.0]);
    let x = solve_refined(&a, &b, DEFAULT_REFINE_ITERATIONS).unwrap();
    assert!(residual(&a, &x, &b) < 1e-10);
    for i in 0..4 {
        assert_near(x[i], 1.0, 1e-9, "x");
    }
}

#[test]
fn solve_refined_logs_rounds() {
    let a = Matrix::<f64>::identity(2);
    let b = v(&[1.0, 2.0]);
    let mut log = RecordingLogger::new();
    solve_refined_logged(&a, &b, 3, &mut log).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert!(lines.contains(&"Starting iterative refinement"));
    // Exact on the first try, so it converges in round 0
    assert!(lines
        .last()
        .unwrap()
        .starts_with("Converged at iteration 0, residual: "));
}

#[test]
fn solve_refined_zero_rounds_is_plain_solve() {
    let a = m(2, 2, &[4.0, 3.0, 6.0, 3.0]);
    let b = v(&[1.0, 2.0]);
    assert_eq!(solve_refined(&a, &b, 0).unwrap(), solve(&a, &b).unwrap());
}

// ═══════════════════════════════════════════════════════════════════
// Convenience methods
// ═══════════════════════════════════════════════════════════════════

#[test]
fn matrix_methods_delegate() {
    let a = m(2, 2, &[4.0, 2.0, 2.0, 3.0]);
    let b = v(&[2.0, 1.0]);
    assert_eq!(a.solve(&b).unwrap(), solve(&a, &b).unwrap());
    assert_eq!(a.det().unwrap(), determinant(&a).unwrap());
    assert_eq!(a.inverse().unwrap(), inverse(&a).unwrap());
    assert_eq!(a.pow(2).unwrap(), &a * &a);
    assert_eq!(a.lu().unwrap(), linalg::lu(&a).unwrap());
    assert_eq!(a.cholesky().unwrap(), linalg::cholesky(&a).unwrap());
    assert_eq!(a.qr().unwrap(), linalg::qr(&a).unwrap());
    assert_eq!(a.svd().unwrap(), linalg::svd(&a).unwrap());
    assert_eq!(
        a.eigen().unwrap(),
        linalg::eigen(&a, EigenSettings::default()).unwrap()
    );
}
