// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input tree supplied by the host.

use alloc::string::String;
use alloc::vec::Vec;

/// A weighted node of the input tree.
///
/// The engine never mutates the input: [`Hierarchy`](crate::Hierarchy) copies
/// what it needs into its own flat arena. Only leaf weights contribute to the
/// layout; the weight of a node with children is ignored in favour of the sum
/// of its children.
///
/// With the `serde` feature, nodes deserialize from flare-style JSON where the
/// weight may be spelled `value` and `children` may be omitted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node<K> {
    /// Stable identity, used by click events to address the node.
    pub id: K,
    /// Display name, used for labels and titles.
    pub name: String,
    /// Leaf weight. Must be finite and non-negative.
    #[cfg_attr(feature = "serde", serde(default, alias = "value"))]
    pub weight: f64,
    /// Children in display order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<Self>,
}

impl<K> Node<K> {
    /// Creates a node with no children and zero weight.
    pub fn new(id: K, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            weight: 0.0,
            children: Vec::new(),
        }
    }

    /// Creates a leaf with the given weight.
    pub fn leaf(id: K, name: impl Into<String>, weight: f64) -> Self {
        Self::new(id, name).with_weight(weight)
    }

    /// Sets the weight.
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Appends a child.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Appends several children, preserving their order.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    /// Returns `true` if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
