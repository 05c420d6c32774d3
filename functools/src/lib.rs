//! Compare, apply, filter, map, and reduce ordered sequences.
//!
//! Every operation borrows its input as a slice, never mutates it, and visits
//! elements exactly once in ascending index order. Operations that produce a
//! sequence return a freshly allocated [Vec] (empty, never absent, when nothing
//! survives).
//!
//! Callbacks are [FnMut] so that they may accumulate into captured state. If a
//! callback panics, the panic unwinds through the operation and no later
//! element is visited. Callbacks that can fail without panicking should use the
//! `try_*` variants, which stop at the first [Err] and return it unchanged.
//!
//! # Example
//!
//! ```
//! use functools::{filter, map, reduce};
//!
//! let values: [f64; 5] = [-5.3, 2.8, -1.0, 8.9, 0.1];
//! let positives = filter(&values, |x| *x > 0.0);
//! let rounded = map(&positives, |x| x.round() as i64);
//! let summed = reduce(&rounded, 0, |x, acc| x + acc);
//! assert_eq!(summed, 12);
//! ```

mod fallible;
pub use fallible::{try_apply, try_filter, try_map, try_reduce};

/// Returns whether `xs` and `ys` contain the same values in the same order.
///
/// Sequences of different length are never equal (their elements are not
/// inspected).
pub fn equal<T: PartialEq>(xs: &[T], ys: &[T]) -> bool {
    if xs.len() != ys.len() {
        return false;
    }
    xs.iter().zip(ys).all(|(x, y)| x == y)
}

/// Invokes `effect` on every element of `xs`, in order.
pub fn apply<T>(xs: &[T], mut effect: impl FnMut(&T)) {
    for x in xs {
        effect(x);
    }
}

/// Returns the elements of `xs` for which `predicate` holds, preserving their
/// relative order.
pub fn filter<T: Clone>(xs: &[T], mut predicate: impl FnMut(&T) -> bool) -> Vec<T> {
    let mut ys = Vec::new();
    for x in xs {
        if predicate(x) {
            ys.push(x.clone());
        }
    }
    ys
}

/// Returns the result of `transform` applied to every element of `xs`.
///
/// The output always has the same length as `xs`.
pub fn map<S, T>(xs: &[S], mut transform: impl FnMut(&S) -> T) -> Vec<T> {
    let mut ys = Vec::with_capacity(xs.len());
    for x in xs {
        ys.push(transform(x));
    }
    ys
}

/// Folds `xs` from the left, starting from `init`.
///
/// `combine` receives the current element first and the accumulator second
/// (`acc = combine(x, acc)`). This ordering is observable for non-commutative
/// combiners like subtraction or concatenation. If `xs` is empty, `init` is
/// returned and `combine` is never invoked.
pub fn reduce<T>(xs: &[T], init: T, mut combine: impl FnMut(&T, T) -> T) -> T {
    let mut acc = init;
    for x in xs {
        acc = combine(x, acc);
    }
    acc
}
