use std::cmp::Ordering;

sort_impl!("insertion_sort_unstable");

/// Sorts `v` in place by walking each element back into the sorted prefix, and returns it.
///
/// An element keeps moving left while it does not compare `Greater` than its predecessor, so it
/// also hops over equal elements. Runs of equal elements therefore come out reversed, this sort is
/// not stable.
///
/// - Best case time: O(n)
/// - Average case time: O(n^2)
/// - Worst case time: O(n^2)
/// - Worst case space: O(1)
pub fn sort<T: Ord>(v: &mut [T], order: crate::Order) -> &mut [T] {
    if v.len() <= 1 {
        return v;
    }

    let compare = order.comparator::<T>();

    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && compare(&v[j], &v[j - 1]) != Ordering::Greater {
            v.swap(j, j - 1);
            j -= 1;
        }
    }

    v
}
