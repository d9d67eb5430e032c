use std::cmp::Ordering;

sort_impl!("bubble_sort_stable");

/// Sorts `v` in place by repeatedly swapping adjacent out of order pairs, and returns it.
///
/// Stops after the first pass without swaps, so already sorted input takes a single pass.
///
/// - Best case time: O(n)
/// - Average case time: O(n^2)
/// - Worst case time: O(n^2)
/// - Worst case space: O(1)
pub fn sort<T: Ord>(v: &mut [T], order: crate::Order) -> &mut [T] {
    let compare = order.comparator::<T>();

    let mut unsorted_len = v.len();
    loop {
        let mut swapped = false;

        for i in 1..unsorted_len {
            if compare(&v[i - 1], &v[i]) == Ordering::Greater {
                v.swap(i - 1, i);
                swapped = true;
            }
        }

        // The largest remaining element bubbled up to the end of the window.
        unsorted_len = unsorted_len.saturating_sub(1);

        if !swapped {
            break;
        }
    }

    v
}
