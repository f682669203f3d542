use super::node::{Link, Node};

/// Detaches the maximum node of the subtree in `link`.
///
/// The slot that pointed at the maximum is rewritten to the maximum's left
/// subtree (it has no right child). Returns `None` only for an empty subtree.
pub fn detach_max<V>(link: &mut Link<V>) -> Option<Box<Node<V>>> {
    match link {
        Some(node) if node.right.is_some() => detach_max(&mut node.right),
        _ => {
            let mut max = link.take()?;
            *link = max.left.take();
            Some(max)
        }
    }
}

/// Mirror of [`detach_max`]: rewrites the slot of the minimum to its right
/// subtree.
pub fn detach_min<V>(link: &mut Link<V>) -> Option<Box<Node<V>>> {
    match link {
        Some(node) if node.left.is_some() => detach_min(&mut node.left),
        _ => {
            let mut min = link.take()?;
            *link = min.right.take();
            Some(min)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(key: &str, left: Link<u32>, right: Link<u32>) -> Link<u32> {
        let mut n = Node::new_leaf(key.into(), 0);
        n.left = left;
        n.right = right;
        Some(n)
    }

    fn keys(link: &Link<u32>, out: &mut Vec<String>) {
        if let Some(n) = link {
            keys(&n.left, out);
            out.push(n.key.to_string());
            keys(&n.right, out);
        }
    }

    #[test]
    fn detach_empty() {
        let mut link: Link<u32> = None;
        assert!(detach_max(&mut link).is_none());
        assert!(detach_min(&mut link).is_none());
    }

    #[test]
    fn detach_root_when_it_is_the_extreme() {
        // d with only a left subtree: d itself is the maximum
        let mut link = node("d", node("b", node("a", None, None), None), None);
        let max = detach_max(&mut link).unwrap();
        assert_eq!(&*max.key, "d");
        assert!(max.left.is_none());

        let mut out = Vec::new();
        keys(&link, &mut out);
        assert_eq!(out, ["a", "b"]);
    }

    #[test]
    fn detach_max_relinks_left_subtree() {
        //     b
        //    / \
        //   a   e
        //      /
        //     c
        //      \
        //       d
        let mut link = node(
            "b",
            node("a", None, None),
            node("e", node("c", None, node("d", None, None)), None),
        );
        let max = detach_max(&mut link).unwrap();
        assert_eq!(&*max.key, "e");

        let mut out = Vec::new();
        keys(&link, &mut out);
        assert_eq!(out, ["a", "b", "c", "d"]);
    }

    #[test]
    fn detach_min_relinks_right_subtree() {
        let mut link = node(
            "d",
            node("b", node("a", None, node("aa", None, None)), None),
            node("e", None, None),
        );
        let min = detach_min(&mut link).unwrap();
        assert_eq!(&*min.key, "a");
        assert!(min.right.is_none());

        let mut out = Vec::new();
        keys(&link, &mut out);
        assert_eq!(out, ["aa", "b", "d", "e"]);
    }
}
