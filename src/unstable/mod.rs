//! Sorts that may reorder equal elements.

pub mod insertion_sort;

// Lomuto partition around the middle element, building block of quicksort.
pub mod partition;

pub mod quicksort;
