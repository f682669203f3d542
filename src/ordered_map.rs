use crate::{
    bst_base::{
        bst::Bst,
        bst_traits::{DestroyData, KeyComparator},
        iter::InOrderCursor,
        tree_stats::TreeStats,
        DefaultKeyComparator,
    },
    error::Result,
};

/// Ordered map from string keys to values, backed by an unbalanced binary
/// search tree. Operations cost O(height): O(log n) for random insertion
/// orders, O(n) for sorted ones.
pub struct OrderedMap<V, C: KeyComparator = DefaultKeyComparator> {
    _tree: Bst<V, C>,
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self {
            _tree: Bst::new(DefaultKeyComparator),
        }
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, C: KeyComparator> OrderedMap<V, C> {
    pub fn with_comparator(key_cmp: C) -> Self {
        Self {
            _tree: Bst::new(key_cmp),
        }
    }

    /// Values replaced by [`put`](Self::put) and values still stored when the
    /// map is cleared or dropped are passed to `destroy_data`. Values returned
    /// by [`remove`](Self::remove) are not.
    pub fn with_destructor(key_cmp: C, destroy_data: DestroyData<V>) -> Self {
        Self {
            _tree: Bst::with_destructor(key_cmp, destroy_data),
        }
    }

    pub fn is_empty(&self) -> bool {
        self._tree.empty()
    }

    pub fn len(&self) -> usize {
        self._tree.size()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self._tree.exists(key)
    }

    /// Stores `value` under a copy of `key`. Returns `Ok(true)` for a new key
    /// and `Ok(false)` when an existing value was replaced in place.
    pub fn put(&mut self, key: &str, value: V) -> Result<bool> {
        self._tree.insert(key, value)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self._tree.find(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self._tree.find_mut(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        self._tree.erase(key)
    }

    pub fn clear(&mut self) {
        self._tree.clear();
    }

    /// Internal in-order traversal; stops as soon as `visit` returns `false`.
    pub fn for_each_in_order<'a, F>(&'a self, visit: F) -> bool
    where
        F: FnMut(&'a str, &'a V) -> bool,
    {
        self._tree.in_order(visit)
    }

    /// External in-order traversal. See [`InOrderCursor`].
    pub fn cursor(&self) -> Result<InOrderCursor<'_, V>> {
        self._tree.cursor()
    }

    pub fn stats(&self) -> TreeStats {
        self._tree.stats()
    }
}

impl<V: std::fmt::Debug, C: KeyComparator> std::fmt::Debug for OrderedMap<V, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self._tree.cursor().into_iter().flatten())
            .finish()
    }
}

pub type DefaultOrderedMap<V> = OrderedMap<V, DefaultKeyComparator>;
