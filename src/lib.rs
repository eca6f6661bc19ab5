#![forbid(unsafe_code)]
//! scalargrad: scalar-math prelude for a reverse-mode autodiff engine.
//!
//! Facade over the workspace crates. Downstream layers (the tensor and
//! autodiff engines) bind against this one name; the [`prelude`] module
//! reproduces the flat operator surface.

pub use scalargrad_core::{Error, Result, EPS};
pub use scalargrad_ops::{backward, list, scalar};

/// Convenient re-exports for downstream crates.
pub mod prelude {
    pub use scalargrad_core::{Error, Result, EPS};
    pub use scalargrad_ops::backward::{inv_back, log_back, relu_back};
    pub use scalargrad_ops::list::{add_lists, map, neg_list, prod, reduce, sum, zip_with};
    pub use scalargrad_ops::scalar::{
        add, eq, exp, id, inv, is_close, log, lt, max, mul, neg, relu, sigmoid,
    };
}
