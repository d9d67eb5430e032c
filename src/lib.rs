//! Classic comparison based search and sort algorithms.
//!
//! Every sort takes an [`Order`] and compares through the single comparator derived from it, so
//! one call never mixes directions. In-place sorts hand the slice back for chaining, merge sort
//! leaves its input alone and returns a fresh `Vec`.

// Implements `sort_test_tools::Sort` for the `sort` function of the calling module. The
// `allocating` form is for sorts that return a new `Vec` instead of sorting in place.
macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                sort(arr, $crate::Order::Ascending);
            }

            #[inline]
            fn sort_descending<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                sort(arr, $crate::Order::Descending);
            }
        }
    };
    ($name:expr, allocating) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                let sorted = sort(arr, $crate::Order::Ascending);
                arr.clone_from_slice(&sorted);
            }

            #[inline]
            fn sort_descending<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                let sorted = sort(arr, $crate::Order::Descending);
                arr.clone_from_slice(&sorted);
            }
        }
    };
}

pub mod order;
pub mod search;
pub mod stable;
pub mod unstable;

pub use order::{comparator, is_sorted, Order};
pub use search::{Position, NOT_FOUND};

pub use search::binary::search as binary_search;
pub use search::linear::search as linear_search;

pub use stable::bubble_sort::sort as bubble_sort;
pub use stable::merge::merge;
pub use stable::merge_sort::sort as merge_sort;

pub use unstable::insertion_sort::sort as insertion_sort;
pub use unstable::partition::partition;
pub use unstable::quicksort::sort as quicksort;
