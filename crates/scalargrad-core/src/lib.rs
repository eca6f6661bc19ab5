#![forbid(unsafe_code)]
//! scalargrad-core: shared vocabulary for the operator library.
//!
//! Only constants and the error taxonomy live here. No logic, no I/O,
//! no async; the operator crates depend on this API without pulling in
//! anything heavier.

pub mod error;

pub use error::{Error, Result};

/// Fixed tolerance used by `eq` and as the additive guard in `log`.
pub const EPS: f64 = 1e-6;
