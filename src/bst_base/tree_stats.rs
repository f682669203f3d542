/// Shape summary of a tree, computed by [`Bst::stats`](super::bst::Bst::stats).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub size: usize,
    pub leaves: usize,
    /// Number of nodes on the longest root-to-leaf path; 0 for an empty tree.
    pub height: usize,
}

impl TreeStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inner_nodes(&self) -> usize {
        self.size - self.leaves
    }

    /// Height of a perfectly balanced tree with the same size divided by the
    /// actual height. 1.0 is optimal; a degenerate chain tends towards 0.
    pub fn balance(&self) -> f64 {
        if self.height == 0 {
            return 1.0;
        }
        let optimal = usize::BITS - self.size.leading_zeros();
        optimal as f64 / self.height as f64
    }
}

#[cfg(test)]
#[test]
fn test_tree_stats() {
    let empty = TreeStats::new();
    assert_eq!(empty.inner_nodes(), 0);
    assert_eq!(empty.balance(), 1.0);

    let chain = TreeStats {
        size: 8,
        leaves: 1,
        height: 8,
    };
    assert_eq!(chain.inner_nodes(), 7);
    assert_eq!(chain.balance(), 0.5);

    let perfect = TreeStats {
        size: 7,
        leaves: 4,
        height: 3,
    };
    assert_eq!(perfect.balance(), 1.0);
}
