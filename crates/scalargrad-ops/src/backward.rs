//! Reverse-mode gradient contributions.
//!
//! Each `*_back(x, d)` takes the forward input `x` and an upstream
//! gradient `d` and returns `d * f'(x)`, the local chain-rule product
//! an autodiff engine accumulates while walking the graph backward.
//! The formulas are exact; no approximation.

use scalargrad_core::{Error, Result};

use crate::scalar::inv;

/// d * (1/x), the gradient of `log` scaled by the upstream gradient.
pub fn log_back(x: f64, d: f64) -> Result<f64> {
    Ok(d * inv(x)?)
}

/// -d / x^2, the gradient of `inv` scaled by the upstream gradient.
pub fn inv_back(x: f64, d: f64) -> Result<f64> {
    if x == 0.0 {
        return Err(Error::division_by_zero("inv_back", x));
    }
    Ok(-d / (x * x))
}

/// d if x >= 0 else 0.0, the gradient of `relu` scaled by the upstream
/// gradient.
pub fn relu_back(x: f64, d: f64) -> f64 {
    if x >= 0.0 {
        d
    } else {
        0.0
    }
}
