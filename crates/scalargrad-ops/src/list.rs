//! Higher-order list combinators and the list operators built on them.
//!
//! `map`, `zip_with`, and `reduce` are curried: each takes the combining
//! function and returns a closure over slices. Evaluation is eager; the
//! returned closures allocate a fresh `Vec` per call and may be invoked
//! any number of times.

use crate::scalar::{add, mul, neg};

/// Higher-order map.
///
/// Returns a function that applies `f` to every element of a slice,
/// order preserved.
pub fn map<F>(f: F) -> impl Fn(&[f64]) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    move |ls: &[f64]| ls.iter().map(|&x| f(x)).collect()
}

/// Higher-order zip-with (map2).
///
/// Returns a function pairing two slices positionally and combining
/// each pair with `f`. Pairing stops at the shorter slice.
pub fn zip_with<F>(f: F) -> impl Fn(&[f64], &[f64]) -> Vec<f64>
where
    F: Fn(f64, f64) -> f64,
{
    move |ls1: &[f64], ls2: &[f64]| ls1.iter().zip(ls2).map(|(&x, &y)| f(x, y)).collect()
}

/// Higher-order reduce.
///
/// Returns a function folding a slice into one scalar, starting from
/// `start`. `f` is called as `f(element, accumulator)` — element first —
/// so non-commutative combiners behave exactly like the written-out
/// nesting `f(x_n, ... f(x_2, f(x_1, start)))`. An empty slice yields
/// `start`.
pub fn reduce<F>(f: F, start: f64) -> impl Fn(&[f64]) -> f64
where
    F: Fn(f64, f64) -> f64,
{
    move |ls: &[f64]| ls.iter().fold(start, |acc, &x| f(x, acc))
}

/// Negate every element.
pub fn neg_list(ls: &[f64]) -> Vec<f64> {
    map(neg)(ls)
}

/// Pointwise sum of two slices, truncating to the shorter.
pub fn add_lists(ls1: &[f64], ls2: &[f64]) -> Vec<f64> {
    zip_with(add)(ls1, ls2)
}

/// Sum of a slice.
pub fn sum(ls: &[f64]) -> f64 {
    reduce(add, 0.0)(ls)
}

/// Product of a slice.
pub fn prod(ls: &[f64]) -> f64 {
    reduce(mul, 1.0)(ls)
}
