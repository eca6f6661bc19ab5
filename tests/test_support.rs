//! Shared helpers for the integration tests.
#![allow(dead_code)]

/// Absolute-difference assertion with the library's own tolerance.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-6,
        "expected {expected}, got {actual}"
    );
}

/// A spread of finite sample values covering signs, zero, and magnitude.
pub fn sample_values() -> Vec<f64> {
    vec![-100.0, -2.5, -1.0, -1e-3, 0.0, 1e-3, 0.5, 1.0, 3.75, 100.0]
}
