use std::iter::FusedIterator;

use super::{bst::Bst, bst_traits::KeyComparator, node::Node};
use crate::error::Result;

/// External in-order cursor over a [`Bst`].
///
/// The whole visitation order is stacked when the cursor is created, smallest
/// key on top, so creation costs O(n) time and space regardless of how far the
/// cursor is advanced. The cursor borrows the tree: it cannot outlive it and
/// the tree cannot be modified while the cursor is alive.
#[derive(Clone, Debug)]
pub struct InOrderCursor<'a, V> {
    stack: Vec<&'a Node<V>>,
}

impl<'a, V> InOrderCursor<'a, V> {
    pub fn new<C: KeyComparator>(tree: &'a Bst<V, C>) -> Result<Self> {
        let mut stack = Vec::new();
        stack.try_reserve_exact(tree.size())?;

        if let Some(root) = tree.root() {
            Self::push_descending(&mut stack, root);
        }
        log::trace!("InOrderCursor::new stacked {} nodes", stack.len());

        Ok(Self { stack })
    }

    // right subtree, node, left subtree: the top of the stack ends up smallest
    fn push_descending(stack: &mut Vec<&'a Node<V>>, node: &'a Node<V>) {
        if let Some(right) = node.right.as_deref() {
            Self::push_descending(stack, right);
        }
        stack.push(node);
        if let Some(left) = node.left.as_deref() {
            Self::push_descending(stack, left);
        }
    }

    /// Key under the cursor, or `None` once exhausted.
    pub fn current(&self) -> Option<&'a str> {
        self.stack.last().map(|&node| &*node.key)
    }

    pub fn current_value(&self) -> Option<&'a V> {
        self.stack.last().map(|&node| &node.value)
    }

    /// Moves past the current entry. Returns `false` without doing anything if
    /// the cursor was already exhausted.
    pub fn advance(&mut self) -> bool {
        self.stack.pop().is_some()
    }

    pub fn at_end(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.stack.len()
    }
}

impl<'a, V> Iterator for InOrderCursor<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        Some((&*node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.stack.len()))
    }
}

impl<'a, V> ExactSizeIterator for InOrderCursor<'a, V> {}

impl<'a, V> FusedIterator for InOrderCursor<'a, V> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bst_base::{DefaultBst, DefaultKeyComparator};

    fn tree_of(keys: &[&str]) -> DefaultBst<()> {
        let mut tree = DefaultBst::new(DefaultKeyComparator);
        for key in keys {
            tree.insert(key, ()).unwrap();
        }
        tree
    }

    #[test]
    fn walks_in_ascending_order() {
        let tree = tree_of(&["5", "3", "8", "4", "7"]);
        let mut cursor = tree.cursor().unwrap();

        let mut seen = Vec::new();
        for _ in 0..5 {
            assert!(!cursor.at_end());
            seen.push(cursor.current().unwrap());
            assert!(cursor.advance());
        }

        assert_eq!(seen, ["3", "4", "5", "7", "8"]);
        assert!(cursor.at_end());
        assert_eq!(cursor.current(), None);
        assert!(!cursor.advance());
        assert!(cursor.at_end());
    }

    #[test]
    fn empty_tree_is_exhausted() {
        let tree = tree_of(&[]);
        let mut cursor = tree.cursor().unwrap();

        assert!(cursor.at_end());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.current_value(), None);
        assert!(!cursor.advance());
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn current_does_not_move() {
        let tree = tree_of(&["b", "a"]);
        let cursor = tree.cursor().unwrap();

        assert_eq!(cursor.current(), Some("a"));
        assert_eq!(cursor.current(), Some("a"));
        assert_eq!(cursor.remaining(), 2);
    }

    #[test]
    fn iterator_yields_entries() {
        let mut tree = DefaultBst::new(DefaultKeyComparator);
        for (key, value) in [("m", 13), ("c", 3), ("x", 24), ("a", 1)] {
            tree.insert(key, value).unwrap();
        }

        let cursor = tree.cursor().unwrap();
        assert_eq!(cursor.len(), 4);
        let entries: Vec<_> = cursor.collect();
        assert_eq!(entries, [("a", &1), ("c", &3), ("m", &13), ("x", &24)]);
    }

    #[test]
    fn independent_cursors() {
        let tree = tree_of(&["b", "a", "c"]);
        let mut first = tree.cursor().unwrap();
        let second = tree.cursor().unwrap();

        first.advance();
        assert_eq!(first.current(), Some("b"));
        assert_eq!(second.current(), Some("a"));
    }
}
