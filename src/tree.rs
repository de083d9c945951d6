//! Tree engine: build and checksum complete binary trees.
//!
//! Pure and stateless. Every tree is complete — a node has exactly two
//! children or none — which the [`Node`] enum encodes directly, so leaf
//! detection is a single discriminant test.

/// A node of a complete binary tree. No payload; the tree exists only to
/// exercise the allocator.
#[derive(Debug)]
pub enum Node {
    /// Interior node owning both subtrees.
    Inner {
        /// Left subtree.
        left: Box<Node>,
        /// Right subtree.
        right: Box<Node>,
    },
    /// Childless leaf.
    Leaf,
}

/// Build a complete binary tree of the given depth, bottom-up.
///
/// Allocates `2^(depth + 1) − 1` nodes on the heap. Allocation failure
/// aborts the process; there is no recoverable error here.
pub fn build(depth: u32) -> Node {
    if depth > 0 {
        Node::Inner {
            left: Box::new(build(depth - 1)),
            right: Box::new(build(depth - 1)),
        }
    } else {
        Node::Leaf
    }
}

impl Node {
    /// Total node count, the correctness oracle for the workload.
    ///
    /// For a complete tree of depth `d` this equals `2^(d+1) − 1`.
    pub fn checksum(&self) -> u64 {
        match self {
            Node::Leaf => 1,
            Node::Inner { left, right } => 1 + left.checksum() + right.checksum(),
        }
    }
}

/// Closed-form checksum of a complete tree: `2^(depth + 1) − 1`.
pub fn expected_checksum(depth: u32) -> u64 {
    (1u64 << (depth + 1)) - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, 1)]
    #[test_case(1, 3)]
    #[test_case(4, 31)]
    #[test_case(10, 2047)]
    #[test_case(11, 4095)]
    fn checksum_counts_all_nodes(depth: u32, expected: u64) {
        assert_eq!(build(depth).checksum(), expected);
        assert_eq!(expected_checksum(depth), expected);
    }

    #[test]
    fn depth_zero_is_a_single_leaf() {
        assert!(matches!(build(0), Node::Leaf));
    }

    #[test]
    fn tree_is_complete() {
        fn assert_complete(node: &Node, remaining: u32) {
            match node {
                Node::Leaf => assert_eq!(remaining, 0, "leaf above the bottom level"),
                Node::Inner { left, right } => {
                    assert!(remaining > 0, "interior node at the bottom level");
                    assert_complete(left, remaining - 1);
                    assert_complete(right, remaining - 1);
                }
            }
        }
        assert_complete(&build(6), 6);
    }

    #[test]
    fn rebuilding_yields_identical_checksums() {
        let first = build(8).checksum();
        for _ in 0..4 {
            assert_eq!(build(8).checksum(), first);
        }
    }
}
