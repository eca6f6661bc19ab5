#![forbid(unsafe_code)]
//! scalargrad-ops: the operator library (scalar forward ops, reverse-mode
//! gradients, higher-order list combinators).
//!
//! Design intent:
//! - Keep this crate pure and synchronous (no async, no I/O, no state).
//! - Every function operates only on its own arguments; all of them are
//!   safe to call concurrently without synchronization.
//! - Fallible operators (`log`, `inv` and their backward forms) return
//!   `scalargrad_core::Result` and never panic.

pub mod backward;
pub mod list;
pub mod scalar;

pub use backward::{inv_back, log_back, relu_back};
pub use list::{add_lists, map, neg_list, prod, reduce, sum, zip_with};
pub use scalar::{add, eq, exp, id, inv, is_close, log, lt, max, mul, neg, relu, sigmoid};
