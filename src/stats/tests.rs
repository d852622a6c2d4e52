use super::*;
use crate::linalg::{EigenSettings, LinalgError};
use crate::{Matrix, Vector};

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

fn sample() -> Matrix<f64> {
    Matrix::from_row_slice(
        5,
        3,
        &[
            2.5_f64, 2.4, 1.0, //
            0.5, 0.7, 2.0, //
            2.2, 2.9, 0.5, //
            1.9, 2.2, 1.5, //
            3.1, 3.0, 0.2,
        ],
    )
}

// ======================== Descriptive ========================

#[test]
fn mean_both_axes() {
    let data = Matrix::from_row_slice(2, 2, &[1.0_f64, 2.0, 3.0, 6.0]);
    assert_eq!(mean(&data, Axis::Columns).as_slice(), &[2.0, 4.0]);
    assert_eq!(mean(&data, Axis::Rows).as_slice(), &[1.5, 4.5]);
    assert_eq!(Axis::default(), Axis::Columns);
}

#[test]
fn variance_sample_denominator() {
    let data = Matrix::from_row_slice(4, 1, &[2.0_f64, 4.0, 4.0, 6.0]);
    // Sum of squares 8 over n - 1 = 3
    assert_near(variance(&data, Axis::Columns)[0], 8.0 / 3.0, 1e-14, "var");
    assert_near(std_dev(&data, Axis::Columns)[0], (8.0_f64 / 3.0).sqrt(), 1e-14, "std");
}

#[test]
fn variance_single_observation() {
    let data = Matrix::from_row_slice(1, 3, &[1.0_f64, 2.0, 3.0]);
    assert_eq!(variance(&data, Axis::Columns).as_slice(), &[0.0, 0.0, 0.0]);
    // Along rows there are three observations
    assert_eq!(variance(&data, Axis::Rows).as_slice(), &[1.0]);
}

#[test]
fn standardize_columns() {
    let z = standardize(&sample());
    let m = mean(&z, Axis::Columns);
    let s = std_dev(&z, Axis::Columns);
    for j in 0..3 {
        assert_near(m[j], 0.0, 1e-12, "mean");
        assert_near(s[j], 1.0, 1e-12, "std");
    }
}

#[test]
fn standardize_leaves_constant_column() {
    let data = Matrix::from_row_slice(2, 2, &[1.0_f64, 7.0, 3.0, 7.0]);
    let z = standardize(&data);
    assert_eq!(z.col(1).as_slice(), &[7.0, 7.0]);
    assert_near(z[(0, 0)], -core::f64::consts::FRAC_1_SQRT_2, 1e-12, "z00");
}

// ======================== Covariance ========================

#[test]
fn covariance_symmetric_with_variances_on_diagonal() {
    let data = sample();
    let cov = covariance_matrix(&data).unwrap();
    assert_eq!(cov.shape(), (3, 3));
    assert!(cov.is_symmetric(1e-14));
    let var = variance(&data, Axis::Columns);
    for j in 0..3 {
        assert_near(cov[(j, j)], var[j], 1e-12, "diag");
    }
}

#[test]
fn covariance_needs_two_rows() {
    let one = Matrix::from_row_slice(1, 2, &[1.0_f64, 2.0]);
    assert!(matches!(
        covariance_matrix(&one),
        Err(LinalgError::InvalidArgument(_))
    ));
    assert!(correlation_matrix(&one).is_err());
    assert!(pca(&one, 1).is_err());
}

#[test]
fn correlation_perfect_and_constant() {
    let data = Matrix::from_row_slice(4, 3, &[1.0_f64, 2.0, 5.0, 2.0, 4.0, 5.0, 3.0, 6.0, 5.0, 4.0, 8.0, 5.0]);
    let corr = correlation_matrix(&data).unwrap();
    assert_near(corr[(0, 1)], 1.0, 1e-12, "perfect");
    assert_near(corr[(0, 0)], 1.0, 1e-12, "self");
    assert_eq!(corr[(0, 2)], 0.0);
    assert_eq!(corr[(2, 2)], 0.0);
}

#[test]
fn correlation_anti() {
    let data = Matrix::from_row_slice(3, 2, &[1.0_f64, 3.0, 2.0, 2.0, 3.0, 1.0]);
    let corr = correlation_matrix(&data).unwrap();
    assert_near(corr[(1, 0)], -1.0, 1e-12, "anti");
}

// ======================== PCA ========================

#[test]
fn pca_sorted_and_orthonormal() {
    let p = pca(&sample(), 3).unwrap();
    let ev = &p.explained_variance;
    assert!(ev[0] >= ev[1] && ev[1] >= ev[2]);

    let wtw = p.components.transpose() * &p.components;
    assert!(wtw.approx_eq(&Matrix::identity(3), 1e-6));

    let cov = covariance_matrix(&sample()).unwrap();
    assert_near(p.total_variance, cov.trace().unwrap(), 1e-9, "total variance");

    let ratios = p.explained_variance_ratio();
    assert_near(ratios.iter().sum::<f64>(), 1.0, 1e-9, "ratios");
}

#[test]
fn pca_components_are_eigenvectors() {
    let data = sample();
    let cov = covariance_matrix(&data).unwrap();
    let p = pca(&data, 2).unwrap();
    for k in 0..2 {
        let w = p.components.col(k);
        let cw = cov.mul_vec(&w).unwrap();
        let lw = w.scale(p.explained_variance[k]);
        assert!((&cw - &lw).norm() < 1e-8, "component {}", k);
    }
}

#[test]
fn pca_clamps_component_count() {
    let p = pca(&sample(), 10).unwrap();
    assert_eq!(p.num_components(), 3);
    assert_eq!(p.explained_variance.len(), 3);
    let none = pca(&sample(), 0).unwrap();
    assert_eq!(none.components.shape(), (3, 0));
}

#[test]
fn pca_transform_projects_centered_rows() {
    let data = sample();
    let p = pca(&data, 2).unwrap();
    let scores = p.transform(&data).unwrap();
    assert_eq!(scores.shape(), (5, 2));

    // Scores are centered and their variances are the explained variances
    let m = mean(&scores, Axis::Columns);
    let v = variance(&scores, Axis::Columns);
    for k in 0..2 {
        assert_near(m[k], 0.0, 1e-12, "score mean");
        assert_near(v[k], p.explained_variance[k], 1e-8, "score variance");
    }

    assert!(matches!(
        p.transform(&Matrix::zeros(2, 2)),
        Err(LinalgError::DimensionMismatch { .. })
    ));
}

#[test]
fn pca_constant_data_has_zero_ratios() {
    let data = Matrix::fill(3, 2, 4.0);
    let p = pca(&data, 2).unwrap();
    assert_eq!(p.total_variance, 0.0);
    assert_eq!(p.explained_variance_ratio(), Vector::zeros(2));
}

#[test]
fn pca_with_custom_settings() {
    let s = EigenSettings {
        max_iter: 5000,
        tol: 1e-12,
    };
    let p = pca_with_settings(&sample(), 1, s).unwrap();
    let q = pca(&sample(), 1).unwrap();
    assert_near(p.explained_variance[0], q.explained_variance[0], 1e-8, "λ1");
}
