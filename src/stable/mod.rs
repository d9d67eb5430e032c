//! Sorts that keep equal elements in their input order.

pub mod bubble_sort;

// Two-way merge of already sorted inputs, building block of merge_sort.
pub mod merge;

pub mod merge_sort;
