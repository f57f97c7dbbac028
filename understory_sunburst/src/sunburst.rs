// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Sunburst`] engine and the per-frame data handed to renderers.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;
use core::time::Duration;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::Vec2;
use peniko::Color;

use crate::color::{LEAF_FILL_OPACITY, PARENT_FILL_OPACITY, branch_palette};
use crate::config::SunburstConfig;
use crate::error::InvalidTreeError;
use crate::geometry::{ArcGeometry, ArcShape, LabelTransform};
use crate::hierarchy::{Hierarchy, LayoutNode, NodeIndex};
use crate::partition::Partition;
use crate::tree::Node;
use crate::zoom::ZoomController;

/// A zoomable sunburst over nodes identified by `K`.
///
/// Owns the flattened hierarchy, its static layout and the zoom state. A
/// renderer calls [`on_frame`](Self::on_frame) on every animation tick and
/// draws the returned [`Frame`]; input handlers forward clicks through
/// [`on_arc_click`](Self::on_arc_click) and
/// [`on_background_click`](Self::on_background_click), or through
/// [`on_pointer_click`](Self::on_pointer_click) when the engine should do the
/// hit testing.
#[derive(Clone, Debug)]
pub struct Sunburst<K> {
    hierarchy: Hierarchy<K>,
    partition: Partition,
    zoom: ZoomController,
    config: SunburstConfig,
    geometry: ArcGeometry,
    palette: Vec<Color>,
}

/// Everything needed to draw one frame.
#[derive(Clone, Debug)]
pub struct Frame<'a, K> {
    /// Visible arcs in pre-order, so parents precede their descendants.
    pub arcs: Vec<ArcDescriptor<'a, K>>,
    /// Labels that fit their arcs.
    pub labels: Vec<LabelDescriptor<'a, K>>,
    /// The central parent circle.
    pub center: CenterDescriptor<'a, K>,
}

/// One arc to draw.
#[derive(Clone, Debug)]
pub struct ArcDescriptor<'a, K> {
    /// Id of the node.
    pub id: &'a K,
    /// Arena index of the node.
    pub node: NodeIndex,
    /// Shape in pixels, relative to the chart center.
    pub shape: ArcShape,
    /// Fill color of the node's top-level branch.
    pub fill: Color,
    /// Fill opacity; parents are drawn more opaque than leaves.
    pub fill_opacity: f32,
    /// Whether clicking zooms in (only nodes with children).
    pub clickable: bool,
}

/// One label to draw.
#[derive(Clone, Debug)]
pub struct LabelDescriptor<'a, K> {
    /// Id of the node.
    pub id: &'a K,
    /// Arena index of the node.
    pub node: NodeIndex,
    /// Display name.
    pub text: &'a str,
    /// Placement, relative to the chart center.
    pub transform: LabelTransform,
}

/// The central circle; clicking it zooms out.
#[derive(Clone, Debug)]
pub struct CenterDescriptor<'a, K> {
    /// Radius in pixels.
    pub radius: f64,
    /// Id of the current focus.
    pub focus: &'a K,
    /// Id the view zooms out to when the circle is clicked.
    pub zoom_out_target: &'a K,
}

/// Result of [`Sunburst::hit_test`].
#[derive(Clone, Debug, PartialEq)]
pub enum Hit<'a, K> {
    /// Inside the central circle.
    Center,
    /// On a visible arc.
    Arc {
        /// Id of the node.
        id: &'a K,
        /// Arena index of the node.
        node: NodeIndex,
    },
    /// Outside the visible rings.
    Miss,
}

/// Hover feedback for the arc under the pointer.
#[derive(Clone, Debug)]
pub struct HoverInfo<'a, K> {
    /// Id of the node.
    pub id: &'a K,
    /// Arena index of the node.
    pub node: NodeIndex,
    /// Whether clicking zooms in; drives the pointer cursor.
    pub clickable: bool,
    /// Tooltip text, see [`Sunburst::title`].
    pub title: String,
}

impl<K> Sunburst<K>
where
    K: Clone + Eq + Hash + Debug,
{
    /// Builds the hierarchy and layout for `tree`, focused on its root.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTreeError`] if `tree` is not a valid weighted tree.
    pub fn new(tree: &Node<K>, config: SunburstConfig) -> Result<Self, InvalidTreeError<K>> {
        let hierarchy = Hierarchy::build(tree, config.child_order)?;
        Ok(Self::from_hierarchy(hierarchy, config))
    }

    /// Wraps an already built hierarchy.
    #[must_use]
    pub fn from_hierarchy(hierarchy: Hierarchy<K>, config: SunburstConfig) -> Self {
        let partition = Partition::new(&hierarchy);
        let zoom = ZoomController::new(&partition, &config);
        let palette = branch_palette(hierarchy.branch_count());
        Self {
            hierarchy,
            partition,
            zoom,
            geometry: config.geometry(),
            config,
            palette,
        }
    }

    /// Replaces the data, keeping the focus if its id still names a node
    /// that can be zoomed into. Any transition in flight is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTreeError`] and leaves the engine untouched if `tree`
    /// is invalid.
    pub fn set_tree(&mut self, tree: &Node<K>) -> Result<(), InvalidTreeError<K>> {
        let hierarchy = Hierarchy::build(tree, self.config.child_order)?;
        let focus_id = self.current_focus_id().clone();
        *self = Self::from_hierarchy(hierarchy, self.config);
        if let Some(focus) = self.hierarchy.index_of(&focus_id) {
            self.zoom.jump_to(&self.hierarchy, &self.partition, focus);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            nodes = self.hierarchy.len(),
            focus = ?self.current_focus_id(),
            "sunburst data replaced"
        );
        Ok(())
    }

    /// Handles a click on the arc of `id`.
    ///
    /// Clicking a node with children zooms into it and clicking the current
    /// focus zooms out. Leaves and ids that are not in the hierarchy are
    /// ignored. Returns `true` if a transition started.
    pub fn on_arc_click(&mut self, id: &K) -> bool {
        let Some(node) = self.hierarchy.index_of(id) else {
            #[cfg(feature = "tracing")]
            tracing::trace!(?id, "ignoring click on unknown id");
            return false;
        };
        self.click_node(node)
    }

    /// Handles a click on the central circle: zooms out one level.
    pub fn on_background_click(&mut self) -> bool {
        self.zoom.zoom_out(&self.hierarchy, &self.partition)
    }

    /// Hit tests `offset` (relative to the chart center) and dispatches the
    /// click to the arc or the central circle. Clicks outside the rings are
    /// ignored.
    pub fn on_pointer_click(&mut self, offset: Vec2) -> bool {
        let target = match self.hit_test(offset) {
            Hit::Center => None,
            Hit::Arc { node, .. } => Some(node),
            Hit::Miss => return false,
        };
        match target {
            Some(node) => self.click_node(node),
            None => self.on_background_click(),
        }
    }

    /// Advances the transition by `elapsed_ms`, the time since the previous
    /// frame in milliseconds, and returns the frame to draw.
    ///
    /// Negative or NaN deltas count as zero.
    pub fn on_frame(&mut self, elapsed_ms: f64) -> Frame<'_, K> {
        let dt = Duration::try_from_secs_f64(elapsed_ms.max(0.0) / 1000.0)
            .unwrap_or(Duration::MAX);
        self.zoom.tick(dt);
        self.frame()
    }

    /// Jumps to the end of the active transition, if any.
    pub fn finish_transition(&mut self) {
        self.zoom.finish();
    }

    /// Sets the pixel radius of one ring, for example after a resize.
    pub fn set_radius_unit(&mut self, radius_unit: f64) {
        self.config.radius_unit = radius_unit;
        self.geometry = self.config.geometry();
    }

    /// The frame for the current state, without advancing time.
    #[must_use]
    pub fn frame(&self) -> Frame<'_, K> {
        let policy = self.config.visibility;
        let mut arcs = Vec::new();
        let mut labels = Vec::new();
        // The root is represented by the central circle.
        for (index, node) in self.hierarchy.iter().skip(1) {
            let current = self.zoom.current(index);
            if !policy.arc_visible(&current) {
                continue;
            }
            arcs.push(ArcDescriptor {
                id: &node.id,
                node: index,
                shape: self.geometry.arc(&current),
                fill: self.fill(node),
                fill_opacity: if node.is_leaf() {
                    LEAF_FILL_OPACITY
                } else {
                    PARENT_FILL_OPACITY
                },
                clickable: !node.is_leaf(),
            });
            if policy.label_visible(&current) {
                labels.push(LabelDescriptor {
                    id: &node.id,
                    node: index,
                    text: &node.name,
                    transform: self.geometry.label(&current),
                });
            }
        }

        let focus = self.zoom.focus();
        let zoom_out_target = self.hierarchy.node(focus).parent.unwrap_or(NodeIndex::ROOT);
        Frame {
            arcs,
            labels,
            center: CenterDescriptor {
                radius: self.geometry.radius_unit * policy.band_start,
                focus: &self.hierarchy.node(focus).id,
                zoom_out_target: &self.hierarchy.node(zoom_out_target).id,
            },
        }
    }

    /// Id of the focus, or of the node being zoomed into.
    #[must_use]
    pub fn current_focus_id(&self) -> &K {
        &self.hierarchy.node(self.zoom.focus()).id
    }

    /// Returns `true` while a zoom transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.zoom.is_transitioning()
    }

    /// Finds what lies under `offset`, relative to the chart center, using
    /// the current (possibly mid-transition) arcs.
    #[must_use]
    pub fn hit_test(&self, offset: Vec2) -> Hit<'_, K> {
        let (angle, radius) = self.geometry.to_polar(offset);
        let policy = self.config.visibility;
        if radius < policy.band_start {
            return Hit::Center;
        }
        self.hierarchy
            .iter()
            .skip(1)
            .find(|(index, _)| {
                let current = self.zoom.current(*index);
                policy.arc_visible(&current) && current.contains(angle, radius)
            })
            .map_or(Hit::Miss, |(node, n)| Hit::Arc { id: &n.id, node })
    }

    /// Hover feedback for the arc under `offset`, if any.
    #[must_use]
    pub fn hover(&self, offset: Vec2) -> Option<HoverInfo<'_, K>> {
        let Hit::Arc { id, node } = self.hit_test(offset) else {
            return None;
        };
        Some(HoverInfo {
            id,
            node,
            clickable: !self.hierarchy.node(node).is_leaf(),
            title: self.title_of(node),
        })
    }

    /// Tooltip text for `id`: the names from the root down, joined by `/`,
    /// then the aggregate weight on a second line.
    ///
    /// A top-level node `analytics` of a tree rooted at `flare` with weight
    /// 48716 reads `"flare/analytics\n48,716"`.
    #[must_use]
    pub fn title(&self, id: &K) -> Option<String> {
        self.hierarchy.index_of(id).map(|node| self.title_of(node))
    }

    /// Ids from the root down to the focus.
    #[must_use]
    pub fn breadcrumb(&self) -> Vec<&K> {
        let mut path: Vec<&K> = self
            .hierarchy
            .ancestors(self.zoom.focus())
            .map(|i| &self.hierarchy.node(i).id)
            .collect();
        path.reverse();
        path
    }

    /// The flattened input tree.
    #[must_use]
    pub fn hierarchy(&self) -> &Hierarchy<K> {
        &self.hierarchy
    }

    /// The static layout.
    #[must_use]
    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    /// The zoom state.
    #[must_use]
    pub fn zoom(&self) -> &ZoomController {
        &self.zoom
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &SunburstConfig {
        &self.config
    }

    fn click_node(&mut self, node: NodeIndex) -> bool {
        if node == self.zoom.focus() {
            return self.zoom.zoom_out(&self.hierarchy, &self.partition);
        }
        let started = self.zoom.select_node(&self.hierarchy, &self.partition, node);
        #[cfg(feature = "tracing")]
        if !started {
            tracing::trace!(
                id = ?self.hierarchy.node(node).id,
                "ignoring click on a leaf or empty node"
            );
        }
        started
    }

    fn fill(&self, node: &LayoutNode<K>) -> Color {
        node.branch
            .and_then(|b| usize::try_from(b).ok())
            .and_then(|b| self.palette.get(b))
            .copied()
            .unwrap_or(Color::BLACK)
    }

    fn title_of(&self, node: NodeIndex) -> String {
        let mut names: Vec<&str> = self
            .hierarchy
            .ancestors(node)
            .map(|i| self.hierarchy.node(i).name.as_str())
            .collect();
        names.reverse();
        let weight = format_weight(self.hierarchy.node(node).aggregate_weight);
        format!("{}\n{}", names.join("/"), weight)
    }
}

/// Rounds to an integer and groups thousands with commas.
fn format_weight(weight: f64) -> String {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "weights are finite and non-negative; the cast saturates"
    )]
    let rounded = weight.round() as u64;
    let digits = rounded.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
