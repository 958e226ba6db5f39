//! Prefix-code tree and its frequency-driven construction.
//!
//! Construction uses a min-priority queue (`BinaryHeap` of `Reverse`) keyed on
//! `(weight, rank)`:
//!
//! - a leaf's rank is its symbol value (0–255),
//! - an internal node's rank is `256 + n` where `n` counts merges so far.
//!
//! So at equal weight leaves pop before internal nodes, lower symbols before
//! higher ones, and older merges before newer ones. The first node popped in a
//! merge becomes the left child. This makes the tree, and therefore the
//! compressed output, a pure function of the input bytes.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use super::freq::FrequencyTable;
use super::types::{CodecError, ALPHABET_SIZE};

/// A node of the prefix-code tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeNode {
    Leaf {
        symbol: u8,
        weight: u64,
    },
    /// `weight` is the sum of the present children's weights. A child is absent
    /// only in the single-symbol tree (no right child) or in a tree rebuilt
    /// from an incomplete table.
    Internal {
        weight: u64,
        left: Option<Box<CodeNode>>,
        right: Option<Box<CodeNode>>,
    },
}

impl CodeNode {
    /// An internal node with no children yet.
    pub fn empty() -> Self {
        CodeNode::Internal {
            weight: 0,
            left: None,
            right: None,
        }
    }

    fn merge(left: CodeNode, right: CodeNode) -> Self {
        CodeNode::Internal {
            weight: left.weight() + right.weight(),
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    pub fn weight(&self) -> u64 {
        match self {
            CodeNode::Leaf { weight, .. } | CodeNode::Internal { weight, .. } => *weight,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, CodeNode::Leaf { .. })
    }

    /// The child reached by `bit` (`false` = left, `true` = right). Leaves have
    /// no children.
    #[inline]
    pub fn child(&self, bit: bool) -> Option<&CodeNode> {
        match self {
            CodeNode::Leaf { .. } => None,
            CodeNode::Internal { left, right, .. } => {
                if bit {
                    right.as_deref()
                } else {
                    left.as_deref()
                }
            }
        }
    }

    /// Number of leaves in the subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            CodeNode::Leaf { .. } => 1,
            CodeNode::Internal { left, right, .. } => {
                left.as_deref().map_or(0, CodeNode::leaf_count)
                    + right.as_deref().map_or(0, CodeNode::leaf_count)
            }
        }
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            CodeNode::Leaf { .. } => 0,
            CodeNode::Internal { left, right, .. } => {
                let l = left.as_deref().map_or(0, CodeNode::depth);
                let r = right.as_deref().map_or(0, CodeNode::depth);
                1 + l.max(r)
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Priority-queue entry
// ─────────────────────────────────────────────────────────────────────────────

struct Pending {
    weight: u64,
    rank: u32,
    node: CodeNode,
}

impl Pending {
    #[inline]
    fn key(&self) -> (u64, u32) {
        (self.weight, self.rank)
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Construction
// ─────────────────────────────────────────────────────────────────────────────

/// Build the prefix-code tree for `freq`.
///
/// With a single distinct symbol the root is an internal node whose only child
/// is that symbol's leaf on the left, so the symbol still gets the one-bit code
/// `0`. Returns [`CodecError::EmptyInput`] when no symbol occurs.
pub fn build_tree(freq: &FrequencyTable) -> Result<CodeNode, CodecError> {
    let mut heap: BinaryHeap<Reverse<Pending>> = freq
        .iter()
        .map(|(symbol, weight)| {
            Reverse(Pending {
                weight,
                rank: symbol as u32,
                node: CodeNode::Leaf { symbol, weight },
            })
        })
        .collect();

    if heap.len() == 1 {
        if let Some(Reverse(only)) = heap.pop() {
            return Ok(CodeNode::Internal {
                weight: only.weight,
                left: Some(Box::new(only.node)),
                right: None,
            });
        }
    }

    let mut next_rank = ALPHABET_SIZE as u32;
    loop {
        let Reverse(left) = heap.pop().ok_or(CodecError::EmptyInput)?;
        let Some(Reverse(right)) = heap.pop() else {
            return Ok(left.node);
        };
        heap.push(Reverse(Pending {
            weight: left.weight + right.weight,
            rank: next_rank,
            node: CodeNode::merge(left.node, right.node),
        }));
        next_rank += 1;
    }
}
