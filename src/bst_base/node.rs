use std::mem;

use bitmask_enum::bitmask;

/// An owning child slot. Descents keep a `&mut Link` to the slot that leads
/// to the current node so the slot itself can be rewritten, root included.
pub type Link<V> = Option<Box<Node<V>>>;

/// Occupied child slots of a node.
#[bitmask(u8)]
pub enum Children {
    Leaf = 0,
    Left = 1,
    Right = 2,
}

#[derive(Debug)]
pub struct Node<V> {
    pub key: Box<str>,
    pub value: V,
    pub left: Link<V>,
    pub right: Link<V>,
}

impl<V> Node<V> {
    pub fn new_leaf(key: Box<str>, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
        })
    }

    #[inline]
    pub fn children(&self) -> Children {
        let mut children = Children::Leaf;
        if self.left.is_some() {
            children = children | Children::Left;
        }
        if self.right.is_some() {
            children = children | Children::Right;
        }
        children
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Moves the key and value of a detached `heir` into this node, keeping
    /// this node's position and children. Returns the value it held before.
    pub fn adopt(&mut self, heir: Box<Node<V>>) -> V {
        debug_assert!(heir.is_leaf());
        let Node { key, value, .. } = *heir;
        self.key = key;
        mem::replace(&mut self.value, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_mask() {
        let mut node = Node::new_leaf("m".into(), 0);
        assert!(node.is_leaf());
        assert!(!node.children().contains(Children::Left));
        assert!(!node.children().contains(Children::Right));

        node.left = Some(Node::new_leaf("a".into(), 1));
        assert!(node.children().contains(Children::Left));
        assert!(!node.children().contains(Children::Right));

        node.right = Some(Node::new_leaf("z".into(), 2));
        assert!(node.children().contains(Children::Left | Children::Right));
    }

    #[test]
    fn adopt_keeps_children() {
        let mut node = Node::new_leaf("m".into(), 10);
        node.left = Some(Node::new_leaf("a".into(), 1));

        let old = node.adopt(Node::new_leaf("n".into(), 20));
        assert_eq!(old, 10);
        assert_eq!(&*node.key, "n");
        assert_eq!(node.value, 20);
        assert!(node.left.is_some());
    }
}
