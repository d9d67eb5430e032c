//! Front to back scan, works on unsorted input.

use crate::search::{to_position, Position, NOT_FOUND};

search_impl!("linear_search");

/// Returns the index of the first element of `v` equal to `target`, or [`NOT_FOUND`].
///
/// Equality is `Ord::cmp` returning `Equal`.
///
/// - Best case time: O(1)
/// - Worst case time: O(n)
/// - Worst case space: O(1)
pub fn search<T: Ord>(v: &[T], target: &T) -> Position {
    v.iter()
        .position(|elem| elem.cmp(target).is_eq())
        .map_or(NOT_FOUND, to_position)
}
