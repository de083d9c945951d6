//! Index-based node arena: the pooled alternate to boxed allocation.
//!
//! Instead of one heap allocation per node, an arena packs all nodes of a
//! tree into a single `Vec` of child-index pairs and hands out [`NodeId`]s.
//! A batch task can reuse one arena across its iterations by calling
//! [`NodeArena::clear`] after each checksum, bounding peak memory to a
//! single tree regardless of iteration count.
//!
//! An arena is owned by exactly one task; nothing here is shared.

use crate::tree::expected_checksum;

/// Marks an absent child. Both children of a node are either real ids or
/// both [`NIL`], mirroring the completeness invariant of the boxed engine.
const NIL: u32 = u32::MAX;

/// Handle to a node inside one [`NodeArena`]. Invalidated by
/// [`NodeArena::clear`]; ids must not be retained across it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(u32);

#[derive(Debug, Clone, Copy)]
struct Slot {
    left: u32,
    right: u32,
}

/// Arena holding every node of the tree(s) built in it.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Slot>,
}

impl NodeArena {
    /// Empty arena with no reserved capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arena pre-sized for one complete tree of the given depth.
    pub fn with_depth_capacity(depth: u32) -> Self {
        Self {
            nodes: Vec::with_capacity(expected_checksum(depth) as usize),
        }
    }

    /// Build a complete binary tree of the given depth, returning its root.
    pub fn build(&mut self, depth: u32) -> NodeId {
        if depth > 0 {
            let left = self.build(depth - 1);
            let right = self.build(depth - 1);
            self.push(Slot { left: left.0, right: right.0 })
        } else {
            self.push(Slot { left: NIL, right: NIL })
        }
    }

    /// Total node count of the subtree rooted at `root`.
    pub fn checksum(&self, root: NodeId) -> u64 {
        let slot = self.nodes[root.0 as usize];
        if slot.left == NIL {
            1
        } else {
            1 + self.checksum(NodeId(slot.left)) + self.checksum(NodeId(slot.right))
        }
    }

    /// Release every node, keeping the allocation for reuse.
    ///
    /// Only call once the checksum of every tree in the arena has been
    /// consumed; all outstanding [`NodeId`]s become invalid.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Nodes currently live in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, slot: Slot) -> NodeId {
        let id = self.nodes.len() as u32;
        self.nodes.push(slot);
        NodeId(id)
    }
}
