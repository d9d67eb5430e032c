use std::cmp::Ordering;

use crate::Order;

/// Merges `left` and `right`, both already sorted by `order`, into a new sorted `Vec`.
///
/// Equal elements are taken from `left` first, so the merge is stable. If either input is not
/// sorted by `order` the result is unspecified, but it still holds every input element exactly
/// once.
///
/// - Time: O(n + m)
/// - Space: O(n + m)
pub fn merge<T: Ord + Clone>(left: &[T], right: &[T], order: Order) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    merge_into(left, right, &mut merged, &order.comparator::<T>());

    merged
}

/// Appends the merge of `left` and `right` to `dst`.
pub(crate) fn merge_into<T, F>(left: &[T], right: &[T], dst: &mut Vec<T>, compare: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    dst.reserve(left.len() + right.len());

    let mut l = 0;
    let mut r = 0;
    while l < left.len() && r < right.len() {
        if compare(&left[l], &right[r]) != Ordering::Greater {
            dst.push(left[l].clone());
            l += 1;
        } else {
            dst.push(right[r].clone());
            r += 1;
        }
    }

    // At most one side still has elements, drain it as is.
    dst.extend_from_slice(&left[l..]);
    dst.extend_from_slice(&right[r..]);
}
