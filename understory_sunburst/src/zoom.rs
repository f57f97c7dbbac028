// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom controller: focus state machine and interval tweening.
//!
//! ## States
//!
//! - `Idle(focus)`: every node's current interval equals its target.
//! - `Transitioning(from, to)`: current intervals move towards the targets
//!   computed for `to`, driven by [`ZoomController::tick`].
//!
//! Selecting a node with children, or zooming out, re-expresses every node's
//! static interval relative to the new focus (which becomes the full circle
//! and ring zero) and starts a transition. A request arriving mid-transition
//! supersedes it: the new transition starts from whatever current intervals
//! were reached. Nothing is queued.
//!
//! The focus switches as soon as a request is accepted, so a zoom-out issued
//! mid-transition climbs from the node being zoomed into.
//!
//! ## Animation state
//!
//! Current and target intervals live in an [`AnimationState`] next to, not
//! inside, the static [`Partition`]. In-flight tweens are keyed by
//! [`NodeIndex`]; nodes whose arcs are invisible both before and after a
//! transition are snapped to their target and left out of the tween map.

use alloc::vec::Vec;
use core::time::Duration;

use hashbrown::HashMap;

use crate::config::SunburstConfig;
use crate::easing::EasingFn;
use crate::hierarchy::{Hierarchy, NodeIndex};
use crate::interval::Interval;
use crate::partition::Partition;
use crate::visibility::VisibilityPolicy;

/// Observable phase of a [`ZoomController`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ZoomPhase {
    /// No transition in flight.
    Idle {
        /// Current focus.
        focus: NodeIndex,
    },
    /// A transition is interpolating towards `to`.
    Transitioning {
        /// Focus when the transition started.
        from: NodeIndex,
        /// Focus the transition is heading to.
        to: NodeIndex,
        /// Linear time progress in `[0, 1)`.
        progress: f64,
    },
}

/// Current and target interval of every node.
#[derive(Clone, Debug)]
pub struct AnimationState {
    current: Vec<Interval>,
    target: Vec<Interval>,
}

impl AnimationState {
    fn settled(layout: &[Interval]) -> Self {
        Self {
            current: layout.to_vec(),
            target: layout.to_vec(),
        }
    }

    /// Interval currently shown for `index`.
    #[must_use]
    pub fn current(&self, index: NodeIndex) -> Interval {
        self.current[index.index()]
    }

    /// Interval `index` is heading to (equal to [`current`](Self::current)
    /// when idle).
    #[must_use]
    pub fn target(&self, index: NodeIndex) -> Interval {
        self.target[index.index()]
    }

    /// All current intervals, indexed like the hierarchy.
    #[must_use]
    pub fn currents(&self) -> &[Interval] {
        &self.current
    }

    /// All target intervals, indexed like the hierarchy.
    #[must_use]
    pub fn targets(&self) -> &[Interval] {
        &self.target
    }
}

#[derive(Copy, Clone, Debug)]
struct Tween {
    from: Interval,
    to: Interval,
}

#[derive(Clone, Debug)]
struct Transition {
    from: NodeIndex,
    tweens: HashMap<NodeIndex, Tween>,
    elapsed: Duration,
}

/// Focus state machine driving zoom transitions.
///
/// The controller does not own the hierarchy or layout; callers pass them to
/// each request. [`Sunburst`](crate::Sunburst) wires everything together.
#[derive(Clone, Debug)]
pub struct ZoomController {
    focus: NodeIndex,
    animation: AnimationState,
    transition: Option<Transition>,
    duration: Duration,
    easing: EasingFn,
    policy: VisibilityPolicy,
}

impl ZoomController {
    /// Creates an idle controller focused on the root, with every current
    /// interval seeded from `partition`.
    #[must_use]
    pub fn new(partition: &Partition, config: &SunburstConfig) -> Self {
        Self {
            focus: NodeIndex::ROOT,
            animation: AnimationState::settled(partition.intervals()),
            transition: None,
            duration: config.transition,
            easing: config.easing,
            policy: config.visibility,
        }
    }

    /// The focus, or the node being zoomed into while transitioning.
    #[must_use]
    pub fn focus(&self) -> NodeIndex {
        self.focus
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> ZoomPhase {
        match &self.transition {
            None => ZoomPhase::Idle { focus: self.focus },
            Some(t) => ZoomPhase::Transitioning {
                from: t.from,
                to: self.focus,
                progress: progress(t.elapsed, self.duration),
            },
        }
    }

    /// Returns `true` while a transition is in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Number of nodes interpolated by the active transition.
    #[must_use]
    pub fn animated_nodes(&self) -> usize {
        self.transition.as_ref().map_or(0, |t| t.tweens.len())
    }

    /// Current and target intervals.
    #[must_use]
    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    /// Interval currently shown for `index`.
    #[must_use]
    pub fn current(&self, index: NodeIndex) -> Interval {
        self.animation.current(index)
    }

    /// Interval `index` is heading to.
    #[must_use]
    pub fn target(&self, index: NodeIndex) -> Interval {
        self.animation.target(index)
    }

    /// Replaces the visibility policy used to skip hidden nodes.
    pub fn set_policy(&mut self, policy: VisibilityPolicy) {
        self.policy = policy;
    }

    /// Zooms into `node`.
    ///
    /// Leaves, zero-width nodes and out-of-range indices are ignored. Returns
    /// `true` if a transition started.
    pub fn select_node<K>(
        &mut self,
        hierarchy: &Hierarchy<K>,
        partition: &Partition,
        node: NodeIndex,
    ) -> bool {
        let Some(layout_node) = hierarchy.get(node) else {
            return false;
        };
        if layout_node.is_leaf() || partition.interval(node).angular_width() <= 0.0 {
            return false;
        }
        self.retarget(hierarchy, partition, node, self.duration)
    }

    /// Zooms out to the focus' parent, or stays on the root.
    ///
    /// Returns `true` if a transition started.
    pub fn zoom_out<K>(&mut self, hierarchy: &Hierarchy<K>, partition: &Partition) -> bool {
        let parent = hierarchy
            .get(self.focus)
            .and_then(|n| n.parent)
            .unwrap_or(NodeIndex::ROOT);
        self.retarget(hierarchy, partition, parent, self.duration)
    }

    /// Moves the focus to `node` without animating.
    ///
    /// Leaves and zero-width nodes are ignored, as with
    /// [`select_node`](Self::select_node), except for the root.
    pub fn jump_to<K>(
        &mut self,
        hierarchy: &Hierarchy<K>,
        partition: &Partition,
        node: NodeIndex,
    ) -> bool {
        let Some(layout_node) = hierarchy.get(node) else {
            return false;
        };
        let zoomable =
            !layout_node.is_leaf() && partition.interval(node).angular_width() > 0.0;
        if node != NodeIndex::ROOT && !zoomable {
            return false;
        }
        self.retarget(hierarchy, partition, node, Duration::ZERO)
    }

    /// Advances the active transition by `dt`.
    ///
    /// Returns `true` if a transition is still in flight afterwards. On the
    /// final tick every animated node lands exactly on its target.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(transition) = self.transition.as_mut() else {
            return false;
        };
        transition.elapsed = transition.elapsed.saturating_add(dt);
        let t = progress(transition.elapsed, self.duration);
        if t >= 1.0 {
            self.finish();
            return false;
        }

        let eased = (self.easing)(t);
        for (index, tween) in &transition.tweens {
            self.animation.current[index.index()] = tween.from.lerp(&tween.to, eased);
        }
        true
    }

    /// Completes the active transition immediately.
    pub fn finish(&mut self) {
        let Some(transition) = self.transition.take() else {
            return;
        };
        for (index, tween) in &transition.tweens {
            self.animation.current[index.index()] = tween.to;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(from = ?transition.from, to = ?self.focus, "zoom transition complete");
    }

    fn retarget<K>(
        &mut self,
        hierarchy: &Hierarchy<K>,
        partition: &Partition,
        to: NodeIndex,
        duration: Duration,
    ) -> bool {
        if to == self.focus {
            return false;
        }

        let layout = partition.intervals();
        let focus = partition.interval(to);
        let focus_depth = f64::from(hierarchy.node(to).depth);
        let mut tweens = HashMap::new();
        #[cfg(feature = "tracing")]
        let mut skipped = 0_usize;

        for (index, _) in hierarchy.iter() {
            let i = index.index();
            // The root already spans the full circle from ring zero; copying
            // keeps a zoom-out to the root bit-identical to the initial layout.
            let target = if to == NodeIndex::ROOT {
                layout[i]
            } else {
                layout[i].rebased_on(&focus, focus_depth)
            };
            self.animation.target[i] = target;

            let from = self.animation.current[i];
            if !self.policy.arc_visible(&from) && !self.policy.arc_visible(&target) {
                self.animation.current[i] = target;
                #[cfg(feature = "tracing")]
                {
                    skipped += 1;
                }
                continue;
            }
            tweens.insert(index, Tween { from, to: target });
        }

        let from = self.focus;
        #[cfg(feature = "tracing")]
        {
            if let Some(previous) = &self.transition {
                tracing::debug!(
                    from = ?previous.from,
                    to = ?from,
                    "superseding zoom transition"
                );
            }
            tracing::debug!(
                ?from,
                ?to,
                animated = tweens.len(),
                skipped,
                "zoom transition started"
            );
        }

        self.focus = to;
        self.transition = Some(Transition {
            from,
            tweens,
            elapsed: Duration::ZERO,
        });
        if duration.is_zero() {
            self.finish();
        }
        true
    }
}

fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
}
