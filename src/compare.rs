use std::cmp::Ordering;

/// A strict total order over values of type `T`.
///
/// Implemented by [`Natural`] for any `T: Ord`, and by any closure or function of the form
/// `Fn(&T, &T) -> Ordering`.
pub trait Compare<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Orders values by their `Ord` implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Natural;

impl<T> Compare<T> for Natural
where
    T: Ord + ?Sized,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T, F> Compare<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
