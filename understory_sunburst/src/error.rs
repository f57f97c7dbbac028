// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while building a hierarchy.

use core::fmt::Debug;

/// Malformed input tree.
///
/// Raised synchronously by [`Hierarchy::build`](crate::Hierarchy::build) and
/// surfaced by [`Sunburst::new`](crate::Sunburst::new). No partial layout is
/// produced when an error is returned.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum InvalidTreeError<K: Debug> {
    /// A forest with no top-level nodes was supplied.
    #[error("tree has no nodes")]
    Empty,
    /// A node carries a weight below zero.
    #[error("node {id:?} has negative weight {weight}")]
    NegativeWeight {
        /// Offending node.
        id: K,
        /// The rejected weight.
        weight: f64,
    },
    /// A node carries a NaN or infinite weight.
    #[error("node {id:?} has non-finite weight {weight}")]
    NonFiniteWeight {
        /// Offending node.
        id: K,
        /// The rejected weight.
        weight: f64,
    },
    /// A node id appears again below itself.
    #[error("node {id:?} is its own ancestor")]
    Cycle {
        /// The repeated id.
        id: K,
    },
    /// A node id appears twice in unrelated branches.
    #[error("node id {id:?} is used more than once")]
    DuplicateId {
        /// The repeated id.
        id: K,
    },
    /// The tree does not fit in the `u32` node arena.
    #[error("tree has {len} nodes, more than the arena can index")]
    TooManyNodes {
        /// Number of nodes visited before giving up.
        len: usize,
    },
}
