#![no_main]

use arbitrary::Arbitrary;
use functools::{apply, equal, filter, map, reduce, try_map, try_reduce};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum FuzzInput {
    Equal { xs: Vec<u16>, ys: Vec<u16> },
    Apply { xs: Vec<i32> },
    Filter { xs: Vec<i32>, modulus: u8 },
    Map { xs: Vec<i32>, offset: i32 },
    Reduce { xs: Vec<u8>, init: u8 },
    TryReduce { xs: Vec<u8> },
}

fn fuzz(input: FuzzInput) {
    match input {
        FuzzInput::Equal { xs, ys } => {
            assert!(equal(&xs, &xs));
            assert!(equal(&ys, &ys));
            assert_eq!(equal(&xs, &ys), xs == ys);
            assert_eq!(equal(&xs, &ys), equal(&ys, &xs));
            if xs.len() != ys.len() {
                assert!(!equal(&xs, &ys));
            }
        }

        FuzzInput::Apply { xs } => {
            let mut storage = Vec::with_capacity(xs.len());
            apply(&xs, |x| storage.push(*x));
            assert!(equal(&storage, &xs));
        }

        FuzzInput::Filter { xs, modulus } => {
            let modulus = i32::from(modulus.max(1));
            let keep = |x: &i32| x.rem_euclid(modulus) == 0;
            let ys = filter(&xs, keep);
            assert!(ys.len() <= xs.len());
            assert!(ys.iter().all(keep));

            // The result is exactly the ordered subsequence of survivors
            let mut survivors = xs.iter().filter(|x| keep(*x));
            for y in &ys {
                assert_eq!(Some(y), survivors.next());
            }
            assert!(survivors.next().is_none());
        }

        FuzzInput::Map { xs, offset } => {
            let f = |x: &i32| x.wrapping_add(offset);
            let ys = map(&xs, f);
            assert_eq!(ys.len(), xs.len());
            for (x, y) in xs.iter().zip(&ys) {
                assert_eq!(*y, f(x));
            }

            let tried = try_map(&xs, |x| Ok::<_, ()>(f(x)));
            assert_eq!(tried, Ok(ys));
        }

        FuzzInput::Reduce { xs, init } => {
            let wide = map(&xs, |x| u64::from(*x));
            let sum = reduce(&wide, u64::from(init), |x, acc| acc + x);
            let expected = wide.iter().sum::<u64>() + u64::from(init);
            assert_eq!(sum, expected);
            if xs.is_empty() {
                assert_eq!(reduce(&xs, init, |_, _| 0), init);
            }
        }

        FuzzInput::TryReduce { xs } => {
            let mut visited = 0;
            let result = try_reduce(&xs, 0u8, |x, acc| {
                visited += 1;
                acc.checked_add(*x).ok_or(visited)
            });
            match result {
                Ok(sum) => {
                    assert_eq!(visited, xs.len());
                    assert_eq!(u64::from(sum), xs.iter().map(|x| u64::from(*x)).sum::<u64>());
                }
                Err(failed_at) => {
                    // Traversal stopped on the failing element
                    assert_eq!(failed_at, visited);
                    assert!(visited <= xs.len());
                }
            }
        }
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
