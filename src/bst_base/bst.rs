use std::{cmp::Ordering, fmt, mem};

use super::{
    bst_traits::{DestroyData, KeyComparator},
    deletion::{detach_max, detach_min},
    iter::InOrderCursor,
    node::{Children, Link, Node},
    tree_stats::TreeStats,
};
use crate::error::Result;

/// Unbalanced binary search tree over owned string keys.
///
/// Every key in a node's left subtree compares less than the node's key and
/// every key in its right subtree compares greater. Keys are unique.
pub struct Bst<V, C: KeyComparator> {
    root_: Link<V>,
    size_: usize,
    key_cmp: C,
    destroy_data: Option<DestroyData<V>>,
}

impl<V, C: KeyComparator> Bst<V, C> {
    pub fn new(key_cmp: C) -> Self {
        Self {
            root_: None,
            size_: 0,
            key_cmp,
            destroy_data: None,
        }
    }

    /// Creates a tree that hands every value it discards to `destroy_data`.
    pub fn with_destructor(key_cmp: C, destroy_data: DestroyData<V>) -> Self {
        Self {
            root_: None,
            size_: 0,
            key_cmp,
            destroy_data: Some(destroy_data),
        }
    }

    pub fn key_comp(&self) -> &C {
        &self.key_cmp
    }

    pub(crate) fn root(&self) -> Option<&Node<V>> {
        self.root_.as_deref()
    }
}

impl<V, C: KeyComparator> Drop for Bst<V, C> {
    fn drop(&mut self) {
        self.clear();
        debug_assert!(self.size_ == 0);
    }
}

/// Access functions to the item count
impl<V, C: KeyComparator> Bst<V, C> {
    pub fn size(&self) -> usize {
        self.size_
    }

    pub fn empty(&self) -> bool {
        debug_assert!(self.size_ != 0 || self.root_.is_none());
        self.size_ == 0
    }

    /// Walks the whole tree. O(n).
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::new();
        let mut pending: Vec<(&Node<V>, usize)> =
            self.root().map(|n| (n, 1)).into_iter().collect();

        while let Some((node, depth)) = pending.pop() {
            stats.size += 1;
            stats.height = stats.height.max(depth);
            if node.is_leaf() {
                stats.leaves += 1;
            }
            pending.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            pending.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }

        debug_assert_eq!(stats.size, self.size_);
        stats
    }

    pub fn height(&self) -> usize {
        self.stats().height
    }
}

/// Returns the slot holding `key`, or the empty slot where it would be linked.
fn find_link<'a, V, C: KeyComparator>(
    key_cmp: &C,
    mut link: &'a mut Link<V>,
    key: &str,
) -> &'a mut Link<V> {
    loop {
        let ord = match link.as_deref() {
            Some(node) => key_cmp.compare(key, &node.key),
            None => return link,
        };
        link = match (ord, link) {
            (Ordering::Less, Some(node)) => &mut node.left,
            (Ordering::Greater, Some(node)) => &mut node.right,
            (_, link) => return link,
        };
    }
}

fn copy_key(key: &str) -> Result<Box<str>> {
    let mut owned = String::new();
    owned.try_reserve_exact(key.len())?;
    owned.push_str(key);
    Ok(owned.into_boxed_str())
}

/// Access function querying the tree by descending from the root
impl<V, C: KeyComparator> Bst<V, C> {
    fn find_node(&self, key: &str) -> Option<&Node<V>> {
        let mut curr = self.root();
        while let Some(node) = curr {
            match self.key_cmp.compare(key, &node.key) {
                Ordering::Equal => return Some(node),
                Ordering::Greater => curr = node.right.as_deref(),
                Ordering::Less => curr = node.left.as_deref(),
            }
        }
        None
    }

    pub fn exists(&self, key: &str) -> bool {
        self.find_node(key).is_some()
    }

    pub fn find(&self, key: &str) -> Option<&V> {
        self.find_node(key).map(|node| &node.value)
    }

    pub fn find_mut(&mut self, key: &str) -> Option<&mut V> {
        find_link(&self.key_cmp, &mut self.root_, key)
            .as_mut()
            .map(|node| &mut node.value)
    }
}

/// Insertion
impl<V, C: KeyComparator> Bst<V, C> {
    /// Links a new leaf for `key`, or replaces the value of the node already
    /// holding it. Returns `true` if the key was not present before.
    ///
    /// A replaced value goes to the destructor, if one is installed. If the
    /// key copy cannot be allocated the tree is left untouched.
    pub fn insert(&mut self, key: &str, value: V) -> Result<bool> {
        let slot = find_link(&self.key_cmp, &mut self.root_, key);

        if let Some(node) = slot {
            log::debug!("Bst::insert replacing value of {:?}", key);
            let old = mem::replace(&mut node.value, value);
            if let Some(destroy) = self.destroy_data.as_mut() {
                destroy(old);
            }
            return Ok(false);
        }

        *slot = Some(Node::new_leaf(copy_key(key)?, value));
        self.size_ += 1;
        log::debug!("Bst::insert({:?}) done, size {}", key, self.size_);

        Ok(true)
    }
}

/// Erase
impl<V, C: KeyComparator> Bst<V, C> {
    /// Unlinks `key` and hands its value back to the caller. The destructor is
    /// not called for a value returned this way.
    ///
    /// A node with a right subtree takes over its in-order successor's entry;
    /// a node with only a left subtree takes over its predecessor's. Either
    /// way the node keeps its position and only the heir's node is freed.
    pub fn erase(&mut self, key: &str) -> Option<V> {
        log::debug!("Bst::erase({:?}) on tree size {}", key, self.size_);
        let slot = find_link(&self.key_cmp, &mut self.root_, key);

        let Some(node) = slot.as_mut() else {
            log::debug!("Could not find key {:?} to erase.", key);
            return None;
        };

        let children = node.children();
        let heir = if children.contains(Children::Right) {
            log::debug!("Splicing in successor of {:?}", key);
            detach_min(&mut node.right)
        } else if children.contains(Children::Left) {
            log::debug!("Splicing in predecessor of {:?}", key);
            detach_max(&mut node.left)
        } else {
            None
        };

        let value = match heir {
            Some(heir) => node.adopt(heir),
            None => {
                let leaf = slot.take()?;
                leaf.value
            }
        };
        self.size_ -= 1;

        Some(value)
    }

    /// Releases every node in post-order (left subtree, right subtree, node),
    /// handing each value to the destructor if one is installed.
    pub fn clear(&mut self) {
        let Some(root) = self.root_.take() else {
            return;
        };
        log::debug!("Bst::clear on tree size {}", self.size_);

        // node, right subtree, left subtree; released back to front
        let mut pending = vec![root];
        let mut released = Vec::with_capacity(self.size_);
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
            released.push(node);
        }

        while let Some(node) = released.pop() {
            let value = node.value;
            if let Some(destroy) = self.destroy_data.as_mut() {
                destroy(value);
            }
        }

        self.size_ = 0;
    }
}

/// Traversal
impl<V, C: KeyComparator> Bst<V, C> {
    /// Calls `visit` on every entry in ascending key order until it returns
    /// `false`. Returns `true` if the walk reached the end.
    pub fn in_order<'a, F>(&'a self, mut visit: F) -> bool
    where
        F: FnMut(&'a str, &'a V) -> bool,
    {
        Self::walk_recursive(&self.root_, &mut visit)
    }

    fn walk_recursive<'a, F>(link: &'a Link<V>, visit: &mut F) -> bool
    where
        F: FnMut(&'a str, &'a V) -> bool,
    {
        match link {
            None => true,
            Some(node) => {
                Self::walk_recursive(&node.left, visit)
                    && visit(&*node.key, &node.value)
                    && Self::walk_recursive(&node.right, visit)
            }
        }
    }

    pub fn cursor(&self) -> Result<InOrderCursor<'_, V>> {
        InOrderCursor::new(self)
    }

    /// Checks the ordering invariant and the item count.
    pub fn verify(&self) -> bool {
        let mut prev: Option<&str> = None;
        let mut count = 0;
        let ordered = self.in_order(|key, _| {
            count += 1;
            let ok = prev.map_or(true, |p| self.key_cmp.compare(p, key) == Ordering::Less);
            prev = Some(key);
            ok
        });
        ordered && count == self.size_
    }
}

/// Debug
impl<V: fmt::Debug, C: KeyComparator> Bst<V, C> {
    fn print_node(f: &mut fmt::Formatter<'_>, node: &Node<V>, depth: usize) -> fmt::Result {
        if let Some(right) = node.right.as_deref() {
            Self::print_node(f, right, depth + 1)?;
        }

        for _ in 0..depth {
            write!(f, "    ")?;
        }
        writeln!(f, "{:?} => {:?}", node.key, node.value)?;

        if let Some(left) = node.left.as_deref() {
            Self::print_node(f, left, depth + 1)?;
        }

        Ok(())
    }
}

/// Display
impl<V: fmt::Debug, C: KeyComparator> fmt::Debug for Bst<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(root) = self.root() {
            Self::print_node(f, root, 0)?;
        }

        Ok(())
    }
}
