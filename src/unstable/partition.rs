use std::cmp::Ordering;

use crate::Order;

/// Partitions `v` in place around its middle element and returns the pivot's final index.
///
/// Afterwards every element before the returned index compares `Less` or `Equal` to the pivot
/// under `order`, and every element after it compares `Greater`.
///
/// Partitioning needs at least two elements. For shorter slices `v` is left untouched and `0` is
/// returned, which is not a valid index for an empty slice.
///
/// - Time: O(n)
/// - Space: O(1)
pub fn partition<T: Ord>(v: &mut [T], order: Order) -> usize {
    partition_by(v, &order.comparator::<T>())
}

/// Lomuto scheme with the pivot parked at the end.
pub(crate) fn partition_by<T, F>(v: &mut [T], compare: &F) -> usize
where
    F: Fn(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return 0;
    }

    let right = len - 1;
    v.swap(right >> 1, right);

    // `v[right]` is the pivot until the final swap, the scan never reaches it.
    let mut store = 0;
    for left in 0..right {
        if compare(&v[left], &v[right]) != Ordering::Greater {
            v.swap(left, store);
            store += 1;
        }
    }

    v.swap(store, right);

    store
}
