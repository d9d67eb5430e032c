use std::cmp::Ordering;

use crate::unstable::partition::partition_by;
use crate::Order;

sort_impl!("quicksort_unstable");

/// Sorts `v` in place with quicksort, and returns it.
///
/// The pivot is always the middle element, which handles sorted and reverse sorted input well.
/// Inputs with many equal elements end up on the same side of every pivot and degrade to
/// quadratic time.
///
/// - Best case time: O(n * log(n))
/// - Average case time: O(n * log(n))
/// - Worst case time: O(n^2)
/// - Worst case space: O(log(n)) recursion depth
pub fn sort<T: Ord>(v: &mut [T], order: Order) -> &mut [T] {
    quicksort(v, &order.comparator::<T>());

    v
}

fn quicksort<T, F>(mut v: &mut [T], compare: &F)
where
    F: Fn(&T, &T) -> Ordering,
{
    while v.len() > 1 {
        let pivot_pos = partition_by(v, compare);

        // Split the slice into `left`, `pivot`, and `right`. The pivot is already in place.
        let (left, rest) = v.split_at_mut(pivot_pos);
        let right = &mut rest[1..];

        // Recurse into the shorter side and continue with the longer one. This keeps the
        // recursion depth at O(log(n)) even when every element lands on one side.
        if left.len() <= right.len() {
            quicksort(left, compare);
            v = right;
        } else {
            quicksort(right, compare);
            v = left;
        }
    }
}
