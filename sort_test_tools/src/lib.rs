pub trait Sort {
    fn name() -> String;

    /// Sorts `arr` in ascending (natural) order.
    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone;

    /// Sorts `arr` in descending (reverse natural) order.
    fn sort_descending<T>(arr: &mut [T])
    where
        T: Ord + Clone;
}

pub mod patterns;
pub mod tests;

// Used by the test macros, so the calling crate doesn't need its own dependency.
#[doc(hidden)]
pub use paste;
