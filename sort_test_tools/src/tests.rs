use std::cmp::Ordering;
use std::fmt::Debug;

use crate::patterns;
use crate::Sort;

#[cfg(not(feature = "large_test_sizes"))]
pub const TEST_SIZES: [usize; 17] = [
    0, 1, 2, 3, 4, 5, 7, 8, 10, 15, 16, 17, 20, 33, 50, 100, 500,
];

#[cfg(feature = "large_test_sizes")]
pub const TEST_SIZES: [usize; 19] = [
    0, 1, 2, 3, 4, 5, 7, 8, 10, 15, 16, 17, 20, 33, 50, 100, 500, 1_000, 2_048,
];

/// Direction the sort under test is asked for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

fn sort_with<S: Sort, T: Ord + Clone>(v: &mut [T], direction: Direction) {
    match direction {
        Direction::Ascending => S::sort(v),
        Direction::Descending => S::sort_descending(v),
    }
}

fn expected<T: Ord + Clone>(v: &[T], direction: Direction) -> Vec<T> {
    let mut expected = v.to_vec();
    match direction {
        Direction::Ascending => expected.sort(),
        Direction::Descending => expected.sort_by(|a, b| b.cmp(a)),
    }

    expected
}

/// Sorts `v` with `S` and compares the result against the standard library sort. Equal results
/// imply the output is ordered and a permutation of the input.
pub fn sort_comp<S: Sort, T: Ord + Clone + Debug>(v: &mut [T], direction: Direction) {
    let expected = expected(v, direction);

    sort_with::<S, T>(v, direction);

    assert_eq!(
        &*v,
        expected.as_slice(),
        "{} {direction:?} len={}",
        S::name(),
        v.len()
    );
}

pub fn test_pattern<S: Sort>(pattern_fn: fn(usize) -> Vec<i32>, direction: Direction) {
    for len in TEST_SIZES {
        let mut v = pattern_fn(len);
        sort_comp::<S, i32>(&mut v, direction);
    }
}

pub fn basic<S: Sort>() {
    let mut empty: Vec<i32> = Vec::new();
    S::sort(&mut empty);
    S::sort_descending(&mut empty);
    assert!(empty.is_empty());

    let mut solo = vec![1];
    S::sort(&mut solo);
    assert_eq!(solo, [1]);
    S::sort_descending(&mut solo);
    assert_eq!(solo, [1]);

    let mut pair = vec![2, 1];
    S::sort(&mut pair);
    assert_eq!(pair, [1, 2]);
    S::sort_descending(&mut pair);
    assert_eq!(pair, [2, 1]);
}

pub fn fixed_mixed<S: Sort>() {
    let mut v = patterns::mixed_fixed();
    S::sort(&mut v);
    assert_eq!(v, [-10, -1, 0, 1, 3, 5, 6, 7, 7, 12], "{}", S::name());

    let mut v = patterns::mixed_fixed();
    S::sort_descending(&mut v);
    assert_eq!(v, [12, 7, 7, 6, 5, 3, 1, 0, -1, -10], "{}", S::name());
}

pub fn extremes<S: Sort>() {
    let mut v = vec![i32::MAX, 0, i32::MIN, -1, i32::MAX, i32::MIN, 1];
    sort_comp::<S, i32>(&mut v, Direction::Ascending);

    let mut v = vec![i32::MAX, 0, i32::MIN, -1, i32::MAX, i32::MIN, 1];
    sort_comp::<S, i32>(&mut v, Direction::Descending);
}

pub fn strings<S: Sort>() {
    for len in TEST_SIZES {
        let mut v = patterns::random_dups(len)
            .into_iter()
            .map(|x| format!("{:010}", x.wrapping_mul(7919)))
            .collect::<Vec<_>>();
        sort_comp::<S, String>(&mut v, Direction::Ascending);

        let mut v = patterns::random(len)
            .into_iter()
            .map(|x| x.to_string())
            .collect::<Vec<_>>();
        sort_comp::<S, String>(&mut v, Direction::Descending);
    }
}

/// Element ordered by `key` only, `ordinal` records the input position.
#[derive(Clone, Debug)]
pub struct Keyed {
    pub key: i32,
    pub ordinal: usize,
}

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Keyed {}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

pub fn keyed(keys: &[i32]) -> Vec<Keyed> {
    keys.iter()
        .enumerate()
        .map(|(ordinal, &key)| Keyed { key, ordinal })
        .collect()
}

pub fn stability<S: Sort>(direction: Direction) {
    for len in TEST_SIZES {
        let mut v = keyed(&patterns::random_dups(len));

        sort_with::<S, Keyed>(&mut v, direction);

        for pair in v.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let in_order = match direction {
                Direction::Ascending => a.key <= b.key,
                Direction::Descending => a.key >= b.key,
            };
            assert!(in_order, "{} {direction:?} len={len}", S::name());

            if a.key == b.key {
                assert!(
                    a.ordinal < b.ordinal,
                    "{} {direction:?} len={len} reordered equal keys",
                    S::name()
                );
            }
        }
    }
}

#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        #[test]
        fn basic() {
            $crate::tests::basic::<$sort_impl>();
        }

        #[test]
        fn fixed_mixed() {
            $crate::tests::fixed_mixed::<$sort_impl>();
        }

        #[test]
        fn extremes() {
            $crate::tests::extremes::<$sort_impl>();
        }

        #[test]
        fn strings() {
            $crate::tests::strings::<$sort_impl>();
        }

        $crate::instantiate_pattern_tests!(
            $sort_impl,
            [
                random,
                random_dups,
                random_zipf,
                ascending,
                descending,
                all_equal,
                saw,
                pipe_organ
            ]
        );
    };
}

#[macro_export]
macro_rules! instantiate_pattern_tests {
    ($sort_impl:ty, [$($pattern:ident),*]) => {
        $crate::paste::paste! {
            $(
                #[test]
                fn [<$pattern _ascending>]() {
                    $crate::tests::test_pattern::<$sort_impl>(
                        $crate::tests::pattern_fn::$pattern,
                        $crate::tests::Direction::Ascending,
                    );
                }

                #[test]
                fn [<$pattern _descending>]() {
                    $crate::tests::test_pattern::<$sort_impl>(
                        $crate::tests::pattern_fn::$pattern,
                        $crate::tests::Direction::Descending,
                    );
                }
            )*
        }
    };
}

/// Only for sorts that keep equal elements in input order.
#[macro_export]
macro_rules! instantiate_stable_sort_tests {
    ($sort_impl:ty) => {
        #[test]
        fn stability_ascending() {
            $crate::tests::stability::<$sort_impl>($crate::tests::Direction::Ascending);
        }

        #[test]
        fn stability_descending() {
            $crate::tests::stability::<$sort_impl>($crate::tests::Direction::Descending);
        }
    };
}

/// Patterns with a uniform `fn(usize) -> Vec<i32>` shape, for the test macros.
pub mod pattern_fn {
    use crate::patterns;

    pub use crate::patterns::{
        all_equal, ascending, descending, pipe_organ, random, random_dups, saw,
    };

    pub fn random_zipf(len: usize) -> Vec<i32> {
        patterns::random_zipf(len, 1.0)
    }
}
