use std::cmp::Ordering;

// Traits bound
/// Total order over keys. Must stay consistent for the lifetime of a tree.
pub trait KeyComparator {
    fn compare(&self, lhs: &str, rhs: &str) -> Ordering;
}

impl<F> KeyComparator for F
where
    F: Fn(&str, &str) -> Ordering,
{
    #[inline]
    fn compare(&self, lhs: &str, rhs: &str) -> Ordering {
        self(lhs, rhs)
    }
}

/// Receives each value the tree discards: the old value on a duplicate-key
/// insert and every remaining value when the tree is cleared or dropped.
pub type DestroyData<V> = Box<dyn FnMut(V)>;
