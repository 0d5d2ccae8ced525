use std::cmp::Ordering;

/// Ordering strategy for a heap. `Ordering::Greater` means `a` ranks above
/// `b`, i.e. `a` belongs closer to the root.
pub trait Compare<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Largest element at the root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MaxOrder;

impl<T: Ord> Compare<T> for MaxOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Smallest element at the root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MinOrder;

impl<T: Ord> Compare<T> for MinOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

impl<T, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
