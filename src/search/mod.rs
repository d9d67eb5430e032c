//! Searching for a single element.

/// Index of a found element, or a negative value if there was no match.
pub type Position = isize;

/// The negative [`Position`] returned by every search here when nothing matches.
pub const NOT_FOUND: Position = -1;

pub trait Search {
    fn name() -> String;

    fn search<T>(arr: &[T], target: &T) -> Position
    where
        T: Ord;
}

macro_rules! search_impl {
    ($name:expr) => {
        pub struct SearchImpl;

        impl crate::search::Search for SearchImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn search<T>(arr: &[T], target: &T) -> crate::search::Position
            where
                T: Ord,
            {
                search(arr, target)
            }
        }
    };
}

pub mod binary;
pub mod linear;

// Slices never exceed `isize::MAX` bytes, so any index of a non-ZST element fits. For zero-sized
// elements the length is unbounded, saturate rather than wrap into the negative range.
#[inline]
fn to_position(index: usize) -> Position {
    Position::try_from(index).unwrap_or(Position::MAX)
}
