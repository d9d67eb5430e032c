//! Halving search over ascending input.

use std::cmp::Ordering;

use crate::search::{to_position, Position, NOT_FOUND};

search_impl!("binary_search");

/// Searches `v` for `target`, `v` must be sorted ascending.
///
/// Returns the index of a matching element, if there are several matches any one of them may be
/// returned. Returns [`NOT_FOUND`] otherwise. On unsorted input the result is unspecified, but the
/// search still terminates after at most `log2(len) + 1` probes.
///
/// - Best case time: O(1)
/// - Worst case time: O(log(n))
/// - Worst case space: O(1)
pub fn search<T: Ord>(v: &[T], target: &T) -> Position {
    if v.is_empty() {
        return NOT_FOUND;
    }

    // Closed window `[low, high]`.
    let mut low = 0;
    let mut high = v.len() - 1;

    while low <= high {
        // `low + high` can overflow for huge slices, the difference can't.
        let middle = low + (high - low) / 2;

        match v[middle].cmp(target) {
            Ordering::Equal => return to_position(middle),
            Ordering::Less => low = middle + 1,
            Ordering::Greater => {
                // Nothing left below index 0.
                if middle == 0 {
                    break;
                }
                high = middle - 1;
            }
        }
    }

    NOT_FOUND
}
