use std::cmp::Ordering;

use crate::stable::merge::merge_into;
use crate::Order;

sort_impl!("merge_sort_stable", allocating);

/// Returns a sorted copy of `v`, `v` itself is not modified.
///
/// Top-down merge sort. The copy is split in place and every level merges through one scratch
/// buffer, so no sub-slices are copied out on the way down.
///
/// - Time: O(n * log(n)) in all cases
/// - Space: O(n) plus O(log(n)) recursion depth
pub fn sort<T: Ord + Clone>(v: &[T], order: Order) -> Vec<T> {
    let mut sorted = v.to_vec();
    if sorted.len() <= 1 {
        return sorted;
    }

    let mut scratch = Vec::with_capacity(sorted.len());
    merge_sort(&mut sorted, &mut scratch, &order.comparator::<T>());

    sorted
}

fn merge_sort<T, F>(v: &mut [T], scratch: &mut Vec<T>, compare: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let len = v.len();
    if len <= 1 {
        return;
    }

    // The left half gets the smaller share for odd lengths.
    let mid = len >> 1;
    let (left, right) = v.split_at_mut(mid);
    merge_sort(left, scratch, compare);
    merge_sort(right, scratch, compare);

    scratch.clear();
    merge_into(left, right, scratch, compare);
    v.clone_from_slice(&scratch[..]);
}
