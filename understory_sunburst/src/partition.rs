// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Partition layout: proportional angular subdivision with one ring per depth.

use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;

use crate::hierarchy::{Hierarchy, NodeIndex};
use crate::interval::Interval;

/// Static polar layout of a [`Hierarchy`], one [`Interval`] per node.
///
/// The root spans `[0, 2π) × [0, 1)`. Children split their parent's angular
/// interval into contiguous slices, in layout order, whose widths are
/// proportional to aggregate weight. A node at depth `d` always occupies the
/// ring `[d, d + 1)`: depth drives radius, weight drives angle.
///
/// When a parent's aggregate weight is zero, every child receives a
/// zero-width slice at the parent's start angle rather than an equal share,
/// so zero-weight subtrees stay invisible.
#[derive(Clone, Debug)]
pub struct Partition {
    intervals: Vec<Interval>,
}

impl Partition {
    /// Lays out `hierarchy`.
    ///
    /// This is a pure function of the hierarchy; rerun it whenever the input
    /// tree changes.
    #[must_use]
    pub fn new<K>(hierarchy: &Hierarchy<K>) -> Self {
        let mut intervals = vec![Interval::default(); hierarchy.len()];
        if hierarchy.is_empty() {
            return Self { intervals };
        }

        intervals[0] = Interval::ROOT;
        let mut queue = VecDeque::from([NodeIndex::ROOT]);
        while let Some(parent) = queue.pop_front() {
            let node = hierarchy.node(parent);
            let span = intervals[parent.index()];
            let total = node.aggregate_weight;
            // Radians per unit of weight; zero collapses every child onto x0.
            let k = if total > 0.0 {
                span.angular_width() / total
            } else {
                0.0
            };

            let mut x = span.x0;
            for &child in node.children() {
                let child_node = hierarchy.node(child);
                let x0 = x;
                x += child_node.aggregate_weight * k;
                let depth = f64::from(child_node.depth);
                intervals[child.index()] = Interval::new(x0, x, depth, depth + 1.0);
                queue.push_back(child);
            }
        }

        Self { intervals }
    }

    /// Interval of the node at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` did not come from the laid-out hierarchy.
    #[must_use]
    pub fn interval(&self, index: NodeIndex) -> Interval {
        self.intervals[index.index()]
    }

    /// All intervals, indexed like [`Hierarchy::nodes`].
    #[must_use]
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }
}
