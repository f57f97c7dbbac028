// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hierarchy builder: flattens an input tree into an indexed arena.
//!
//! Nodes are stored depth-first (pre-order), so every subtree occupies a
//! contiguous index range `[index, subtree_end)`. Parent links are plain
//! indices, which keeps ownership acyclic and lets per-frame passes iterate
//! without recursion.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use smallvec::SmallVec;

use crate::error::InvalidTreeError;
use crate::tree::Node;

/// Index of a node in a [`Hierarchy`] arena.
///
/// Indices are only meaningful for the hierarchy that produced them. The root
/// is always [`NodeIndex::ROOT`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(u32);

impl NodeIndex {
    /// Index of the root node.
    pub const ROOT: Self = Self(0);

    fn from_len<K: Debug>(len: usize) -> Result<Self, InvalidTreeError<K>> {
        u32::try_from(len)
            .map(Self)
            .map_err(|_| InvalidTreeError::TooManyNodes { len })
    }

    /// Position of the node in [`Hierarchy::nodes`].
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Ordering applied to each node's children before layout.
///
/// The order decides which slices are adjacent around the ring, so it is a
/// visible policy rather than an implementation detail.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChildOrder {
    /// Keep the order of the input tree.
    #[default]
    Input,
    /// Stable sort by descending aggregate weight; ties keep input order.
    WeightDescending,
}

/// Static per-node record produced by [`Hierarchy::build`].
#[derive(Clone, Debug)]
pub struct LayoutNode<K> {
    /// Identity copied from the input node.
    pub id: K,
    /// Display name copied from the input node.
    pub name: String,
    /// Weight as supplied by the input.
    pub weight: f64,
    /// Leaf weight, or the sum of the children's aggregate weights.
    pub aggregate_weight: f64,
    /// Distance from the root (the root has depth zero).
    pub depth: u32,
    /// Parent index, `None` for the root.
    pub parent: Option<NodeIndex>,
    /// Position of the top-level ancestor among the root's children.
    ///
    /// `None` for the root. Used to color whole branches alike.
    pub branch: Option<u32>,
    children: SmallVec<[NodeIndex; 4]>,
    subtree_end: u32,
}

impl<K> LayoutNode<K> {
    /// Children in layout order.
    #[must_use]
    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }

    /// Returns `true` if the node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A flattened, depth-first arena of [`LayoutNode`]s with aggregate weights.
#[derive(Clone, Debug)]
pub struct Hierarchy<K> {
    nodes: Vec<LayoutNode<K>>,
    index_of: HashMap<K, NodeIndex>,
    max_depth: u32,
    branch_count: u32,
}

impl<K> Hierarchy<K>
where
    K: Clone + Eq + Hash + Debug,
{
    /// Flattens `root` into an arena.
    ///
    /// Aggregate weights are accumulated bottom-up and depths top-down. The
    /// traversal is iterative, so arbitrarily deep inputs do not grow the
    /// call stack.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTreeError`] if a weight is negative or not finite, if
    /// an id repeats (reported as [`InvalidTreeError::Cycle`] when it repeats
    /// below itself), or if the tree exceeds the arena size.
    pub fn build(root: &Node<K>, order: ChildOrder) -> Result<Self, InvalidTreeError<K>> {
        let mut nodes: Vec<LayoutNode<K>> = Vec::new();
        let mut index_of = HashMap::new();
        let mut max_depth = 0;
        let mut stack: Vec<(&Node<K>, Option<NodeIndex>, u32)> = vec![(root, None, 0)];

        while let Some((node, parent, depth)) = stack.pop() {
            validate_weight(node)?;
            let idx = NodeIndex::from_len(nodes.len())?;
            match index_of.entry(node.id.clone()) {
                Entry::Occupied(seen) => {
                    let seen = *seen.get();
                    let id = node.id.clone();
                    return Err(if is_on_chain(&nodes, parent, seen) {
                        InvalidTreeError::Cycle { id }
                    } else {
                        InvalidTreeError::DuplicateId { id }
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(idx);
                }
            }

            nodes.push(LayoutNode {
                id: node.id.clone(),
                name: node.name.clone(),
                weight: node.weight,
                aggregate_weight: 0.0,
                depth,
                parent,
                branch: None,
                children: SmallVec::new(),
                subtree_end: 0,
            });
            if let Some(parent) = parent {
                nodes[parent.index()].children.push(idx);
            }
            max_depth = max_depth.max(depth);

            // Reverse so children pop off the stack in input order.
            for child in node.children.iter().rev() {
                stack.push((child, Some(idx), depth + 1));
            }
        }

        // Pre-order puts every descendant after its ancestor, so a reverse
        // sweep sees complete subtrees.
        for i in (0..nodes.len()).rev() {
            let last = nodes[i].children.last().copied();
            let end = match last {
                Some(last) => nodes[last.index()].subtree_end,
                None => {
                    nodes[i].aggregate_weight = nodes[i].weight;
                    NodeIndex::from_len(i + 1)?.0
                }
            };
            nodes[i].subtree_end = end;
            if let Some(parent) = nodes[i].parent {
                let weight = nodes[i].aggregate_weight;
                nodes[parent.index()].aggregate_weight += weight;
            }
        }

        if order == ChildOrder::WeightDescending {
            let weights: Vec<f64> = nodes.iter().map(|n| n.aggregate_weight).collect();
            for node in &mut nodes {
                node.children
                    .sort_by(|a, b| weights[b.index()].total_cmp(&weights[a.index()]));
            }
        }

        for i in 0..nodes.len() {
            let branch = match nodes[i].parent {
                None => None,
                Some(NodeIndex::ROOT) => {
                    let position = nodes[0].children.iter().position(|c| c.index() == i);
                    position.and_then(|p| u32::try_from(p).ok())
                }
                Some(parent) => nodes[parent.index()].branch,
            };
            nodes[i].branch = branch;
        }
        let branch_count = nodes
            .first()
            .map_or(0, |root| u32::try_from(root.children.len()).unwrap_or(u32::MAX));

        #[cfg(feature = "tracing")]
        tracing::debug!(
            nodes = nodes.len(),
            max_depth,
            root_weight = nodes.first().map_or(0.0, |n| n.aggregate_weight),
            "built sunburst hierarchy"
        );

        Ok(Self {
            nodes,
            index_of,
            max_depth,
            branch_count,
        })
    }

    /// Builds a hierarchy whose root is synthetic and whose top-level nodes
    /// are `roots`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTreeError::Empty`] if `roots` yields nothing, or any
    /// error of [`Hierarchy::build`].
    pub fn from_forest(
        root_id: K,
        root_name: impl Into<String>,
        roots: impl IntoIterator<Item = Node<K>>,
        order: ChildOrder,
    ) -> Result<Self, InvalidTreeError<K>> {
        let root = Node::new(root_id, root_name).with_children(roots);
        if root.is_leaf() {
            return Err(InvalidTreeError::Empty);
        }
        Self::build(&root, order)
    }
}

impl<K> Hierarchy<K> {
    /// Number of nodes, including the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a hierarchy has at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in depth-first order.
    #[must_use]
    pub fn nodes(&self) -> &[LayoutNode<K>] {
        &self.nodes
    }

    /// Node at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` did not come from this hierarchy.
    #[must_use]
    pub fn node(&self, index: NodeIndex) -> &LayoutNode<K> {
        &self.nodes[index.index()]
    }

    /// Node at `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: NodeIndex) -> Option<&LayoutNode<K>> {
        self.nodes.get(index.index())
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> &LayoutNode<K> {
        &self.nodes[0]
    }

    /// Iterates `(index, node)` pairs in depth-first order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &LayoutNode<K>)> + '_ {
        self.nodes.iter().enumerate().map(|(i, n)| {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "Arena length is bounded by u32 at build time"
            )]
            let index = NodeIndex(i as u32);
            (index, n)
        })
    }

    /// Deepest depth present in the tree.
    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Number of top-level branches (children of the root).
    #[must_use]
    pub fn branch_count(&self) -> u32 {
        self.branch_count
    }

    /// Returns `true` if `ancestor` is `node` or one of its ancestors.
    #[must_use]
    pub fn is_ancestor_or_self(&self, ancestor: NodeIndex, node: NodeIndex) -> bool {
        let a = &self.nodes[ancestor.index()];
        ancestor <= node && node.0 < a.subtree_end
    }

    /// Iterates from `index` up to the root, inclusive.
    pub fn ancestors(&self, index: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        core::iter::successors(Some(index), |i| self.nodes[i.index()].parent)
    }

    /// Number of descendants of `index`, excluding itself.
    #[must_use]
    pub fn descendant_count(&self, index: NodeIndex) -> usize {
        self.nodes[index.index()].subtree_end as usize - index.index() - 1
    }
}

impl<K> Hierarchy<K>
where
    K: Eq + Hash,
{
    /// Looks up the arena index of an id.
    #[must_use]
    pub fn index_of(&self, id: &K) -> Option<NodeIndex> {
        self.index_of.get(id).copied()
    }
}

fn validate_weight<K: Clone + Debug>(node: &Node<K>) -> Result<(), InvalidTreeError<K>> {
    let weight = node.weight;
    if !weight.is_finite() {
        return Err(InvalidTreeError::NonFiniteWeight {
            id: node.id.clone(),
            weight,
        });
    }
    if weight < 0.0 {
        return Err(InvalidTreeError::NegativeWeight {
            id: node.id.clone(),
            weight,
        });
    }
    Ok(())
}

/// Returns `true` if `target` is `start` or one of its ancestors.
fn is_on_chain<K>(nodes: &[LayoutNode<K>], start: Option<NodeIndex>, target: NodeIndex) -> bool {
    let mut cursor = start;
    while let Some(i) = cursor {
        if i == target {
            return true;
        }
        cursor = nodes[i.index()].parent;
    }
    false
}
