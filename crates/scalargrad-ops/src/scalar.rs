//! Elementary forward operators over `f64` scalars.
//!
//! All comparisons that "return a boolean" encode it as a scalar
//! (1.0 / 0.0) so downstream layers can treat every operator result
//! uniformly. Two fixed tolerances are in play and they are *not* the
//! same constant: `eq` uses [`EPS`] (1e-6) while `is_close` uses
//! e^-2 (~0.135). Both are part of the contract; do not unify them.

use scalargrad_core::{Error, Result, EPS};

/// x * y
pub fn mul(x: f64, y: f64) -> f64 {
    x * y
}

/// Identity.
pub fn id(x: f64) -> f64 {
    x
}

/// x + y
pub fn add(x: f64, y: f64) -> f64 {
    x + y
}

/// -x
pub fn neg(x: f64) -> f64 {
    -x
}

/// 1.0 if x < y else 0.0.
pub fn lt(x: f64, y: f64) -> f64 {
    if x < y {
        1.0
    } else {
        0.0
    }
}

/// 1.0 if |x - y| <= [`EPS`] else 0.0.
pub fn eq(x: f64, y: f64) -> f64 {
    if (x - y).abs() <= EPS {
        1.0
    } else {
        0.0
    }
}

/// The larger of x and y.
pub fn max(x: f64, y: f64) -> f64 {
    if x > y {
        x
    } else {
        y
    }
}

/// 1.0 if |x - y| <= e^-2 else 0.0.
///
/// Deliberately a much looser tolerance than [`eq`]'s.
pub fn is_close(x: f64, y: f64) -> f64 {
    if (x - y).abs() <= (-2.0f64).exp() {
        1.0
    } else {
        0.0
    }
}

/// Logistic sigmoid, numerically stable on both tails.
///
/// For x >= 0 computes 1 / (1 + e^-x); otherwise e^x / (1 + e^x).
/// Both branches only ever exponentiate a non-positive value, so large
/// |x| cannot overflow to infinity or produce NaN.
pub fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        x.exp() / (1.0 + x.exp())
    }
}

/// x if x >= 0 else 0.0.
pub fn relu(x: f64) -> f64 {
    if x >= 0.0 {
        x
    } else {
        0.0
    }
}

/// ln(x + [`EPS`]).
///
/// The additive epsilon guards ln(0); inputs with x + EPS <= 0 are a
/// domain error.
pub fn log(x: f64) -> Result<f64> {
    let shifted = x + EPS;
    if shifted <= 0.0 {
        return Err(Error::domain("log", x));
    }
    Ok(shifted.ln())
}

/// e^x
pub fn exp(x: f64) -> f64 {
    x.exp()
}

/// 1 / x; division by zero is an error.
pub fn inv(x: f64) -> Result<f64> {
    if x == 0.0 {
        return Err(Error::division_by_zero("inv", x));
    }
    Ok(1.0 / x)
}
