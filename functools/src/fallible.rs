//! Variants of the sequence operations whose callbacks may fail.
//!
//! Each operation visits elements in the same order as its infallible twin and
//! returns the first error produced by the callback. No element after the one
//! that failed is visited, and no partial output is returned.

use tracing::debug;

/// Invokes `effect` on every element of `xs`, in order, stopping at the first error.
pub fn try_apply<T, E>(
    xs: &[T],
    mut effect: impl FnMut(&T) -> Result<(), E>,
) -> Result<(), E> {
    for (index, x) in xs.iter().enumerate() {
        effect(x).inspect_err(|_| debug!(index, len = xs.len(), "effect failed"))?;
    }
    Ok(())
}

/// Returns the elements of `xs` for which `predicate` returns `Ok(true)`,
/// or the first error returned by `predicate`.
pub fn try_filter<T: Clone, E>(
    xs: &[T],
    mut predicate: impl FnMut(&T) -> Result<bool, E>,
) -> Result<Vec<T>, E> {
    let mut ys = Vec::new();
    for (index, x) in xs.iter().enumerate() {
        let keep = predicate(x)
            .inspect_err(|_| debug!(index, len = xs.len(), "predicate failed"))?;
        if keep {
            ys.push(x.clone());
        }
    }
    Ok(ys)
}

/// Returns the result of `transform` applied to every element of `xs`,
/// or the first error returned by `transform`.
pub fn try_map<S, T, E>(
    xs: &[S],
    mut transform: impl FnMut(&S) -> Result<T, E>,
) -> Result<Vec<T>, E> {
    let mut ys = Vec::with_capacity(xs.len());
    for (index, x) in xs.iter().enumerate() {
        let y = transform(x)
            .inspect_err(|_| debug!(index, len = xs.len(), "transform failed"))?;
        ys.push(y);
    }
    Ok(ys)
}

/// Folds `xs` from the left, starting from `init`, stopping at the first error.
///
/// Like [crate::reduce], `combine` receives the current element first and the
/// accumulator second.
pub fn try_reduce<T, E>(
    xs: &[T],
    init: T,
    mut combine: impl FnMut(&T, T) -> Result<T, E>,
) -> Result<T, E> {
    let mut acc = init;
    for (index, x) in xs.iter().enumerate() {
        acc = combine(x, acc)
            .inspect_err(|_| debug!(index, len = xs.len(), "combine failed"))?;
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{filter, map, reduce};

    #[derive(Debug, PartialEq)]
    struct Rejected(i32);

    #[test]
    fn test_try_apply() {
        let mut storage = Vec::new();
        let result: Result<(), Rejected> = try_apply(&[1, 2, 3], |x| {
            storage.push(*x);
            Ok(())
        });
        assert_eq!(result, Ok(()));
        assert_eq!(storage, [1, 2, 3]);
    }

    #[test]
    fn test_try_apply_stops_at_first_error() {
        let mut storage = Vec::new();
        let result = try_apply(&[1, 2, -3, 4, -5], |x| {
            if *x < 0 {
                return Err(Rejected(*x));
            }
            storage.push(*x);
            Ok(())
        });
        assert_eq!(result, Err(Rejected(-3)));
        assert_eq!(storage, [1, 2]);
    }

    #[test]
    fn test_try_apply_empty() {
        let mut calls = 0;
        let result = try_apply(&[] as &[i32], |_| {
            calls += 1;
            Err(Rejected(0))
        });
        assert_eq!(result, Ok(()));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_try_filter() {
        let xs = [-3, 2, -1, 0, 1, 3, -2];
        let result: Result<_, Rejected> = try_filter(&xs, |x| Ok(*x >= 0));
        assert_eq!(result, Ok(filter(&xs, |x| *x >= 0)));
    }

    #[test]
    fn test_try_filter_error() {
        let mut visited = 0;
        let result = try_filter(&[1, 2, 30, 4], |x| {
            visited += 1;
            if *x > 10 {
                return Err(Rejected(*x));
            }
            Ok(x % 2 == 0)
        });
        assert_eq!(result, Err(Rejected(30)));
        assert_eq!(visited, 3);
    }

    #[test]
    fn test_try_filter_empty() {
        let mut calls = 0;
        let result = try_filter(&[] as &[i32], |_| {
            calls += 1;
            Err(Rejected(0))
        });
        assert_eq!(result, Ok(vec![]));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_try_map() {
        let xs = ["1", "2", "3"];
        let result = try_map(&xs, |s| s.parse::<u8>());
        assert_eq!(result, Ok(vec![1, 2, 3]));
        assert_eq!(result.unwrap(), map(&xs, |s| s.parse::<u8>().unwrap()));
    }

    #[test]
    fn test_try_map_error() {
        let mut visited = Vec::new();
        let result = try_map(&["1", "x", "3"], |s| {
            visited.push(*s);
            s.parse::<u8>()
        });
        assert!(result.is_err());
        assert_eq!(visited, ["1", "x"]);
    }

    #[test]
    fn test_try_map_empty() {
        let result: Result<Vec<u8>, Rejected> = try_map(&[] as &[u8], |x| Ok(*x));
        assert_eq!(result, Ok(vec![]));
    }

    #[test]
    fn test_try_reduce() {
        let xs = [1u8, 2, 3, 4, 5, 6];
        assert_eq!(try_reduce(&xs, 0u8, |x, acc| acc.checked_add(*x).ok_or(())), Ok(21));
        assert_eq!(
            try_reduce(&xs, 0u8, |x, acc| Ok::<_, ()>(x.wrapping_sub(acc))),
            Ok(reduce(&xs, 0u8, |x, acc| x.wrapping_sub(acc)))
        );
    }

    #[test]
    fn test_try_reduce_overflow() {
        let mut calls = 0;
        let result = try_reduce(&[200u8, 50, 10, 1], 0u8, |x, acc| {
            calls += 1;
            acc.checked_add(*x).ok_or(Rejected(*x as i32))
        });
        assert_eq!(result, Err(Rejected(10)));
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_try_reduce_empty() {
        let result = try_reduce(&[], 7, |_: &i32, _| Err(Rejected(0)));
        assert_eq!(result, Ok(7));
    }
}
