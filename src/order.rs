use std::cmp::Ordering;

/// Direction of a sort.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Order {
    /// Natural order, smallest first.
    #[default]
    Ascending,
    /// Reverse natural order, largest first.
    Descending,
}

impl Order {
    /// Returns the three-way comparison for this order.
    ///
    /// `Ascending` is `Ord::cmp`, `Descending` is `Ord::cmp` with the operands swapped. A result of
    /// `Less` means `a` belongs before `b`.
    #[inline]
    pub fn comparator<T: Ord>(self) -> impl Fn(&T, &T) -> Ordering + Copy {
        move |a: &T, b: &T| match self {
            Order::Ascending => a.cmp(b),
            Order::Descending => b.cmp(a),
        }
    }

    /// Returns the opposite direction.
    #[inline]
    pub fn reverse(self) -> Order {
        match self {
            Order::Ascending => Order::Descending,
            Order::Descending => Order::Ascending,
        }
    }
}

/// Free function form of [`Order::comparator`].
#[inline]
pub fn comparator<T: Ord>(order: Order) -> impl Fn(&T, &T) -> Ordering + Copy {
    order.comparator::<T>()
}

/// Returns `true` if no adjacent pair of `v` is out of `order`.
///
/// Equal neighbours are fine in either order, and slices shorter than two elements are always
/// sorted.
pub fn is_sorted<T: Ord>(v: &[T], order: Order) -> bool {
    let compare = order.comparator::<T>();

    v.windows(2).all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
}
