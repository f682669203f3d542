pub mod bst;
pub mod bst_traits;
mod deletion;
pub mod iter;
mod node;
pub mod tree_stats;

use self::{bst::Bst, bst_traits::KeyComparator};
use std::cmp::Ordering;

/// Byte-wise lexicographic order, the same order `str::cmp` gives.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultKeyComparator;

impl KeyComparator for DefaultKeyComparator {
    #[inline]
    fn compare(&self, lhs: &str, rhs: &str) -> Ordering {
        lhs.cmp(rhs)
    }
}

pub type DefaultBst<V> = Bst<V, DefaultKeyComparator>;
