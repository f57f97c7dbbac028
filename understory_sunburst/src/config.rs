// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration.

use core::time::Duration;

use crate::easing::{EasingFn, ease_in_out_cubic};
use crate::geometry::ArcGeometry;
use crate::hierarchy::ChildOrder;
use crate::visibility::VisibilityPolicy;

/// Tunables for a [`Sunburst`](crate::Sunburst).
///
/// ```rust
/// use core::time::Duration;
/// use understory_sunburst::{ChildOrder, SunburstConfig, easing};
///
/// let config = SunburstConfig::for_width(932.0)
///     .with_transition(Duration::from_millis(500))
///     .with_easing(easing::linear)
///     .with_child_order(ChildOrder::WeightDescending);
/// assert!((config.radius_unit - 932.0 / 6.0).abs() < 1e-9);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct SunburstConfig {
    /// Pixels per ring. The parent circle has this radius.
    pub radius_unit: f64,
    /// Upper bound on the angular pad between sibling arcs, in radians.
    pub pad_angle: f64,
    /// Pixels trimmed from each arc's outer radius.
    pub ring_gap: f64,
    /// Which arcs and labels are drawn.
    pub visibility: VisibilityPolicy,
    /// Duration of a zoom transition.
    pub transition: Duration,
    /// Progress curve of a zoom transition.
    pub easing: EasingFn,
    /// Order of siblings around the ring.
    pub child_order: ChildOrder,
}

impl Default for SunburstConfig {
    fn default() -> Self {
        let geometry = ArcGeometry::default();
        Self {
            radius_unit: geometry.radius_unit,
            pad_angle: geometry.pad_angle,
            ring_gap: geometry.ring_gap,
            visibility: VisibilityPolicy::default(),
            transition: Duration::from_millis(750),
            easing: ease_in_out_cubic,
            child_order: ChildOrder::default(),
        }
    }
}

impl SunburstConfig {
    /// Defaults sized for a square chart `width` pixels wide.
    ///
    /// The visible band holds three rings on each side of the center, so the
    /// radius unit is a sixth of the width.
    #[must_use]
    pub fn for_width(width: f64) -> Self {
        Self::default().with_radius_unit(width / 6.0)
    }

    /// Sets the radius unit.
    #[must_use]
    pub fn with_radius_unit(mut self, radius_unit: f64) -> Self {
        self.radius_unit = radius_unit;
        self
    }

    /// Sets the maximum pad angle.
    #[must_use]
    pub fn with_pad_angle(mut self, pad_angle: f64) -> Self {
        self.pad_angle = pad_angle;
        self
    }

    /// Sets the ring gap.
    #[must_use]
    pub fn with_ring_gap(mut self, ring_gap: f64) -> Self {
        self.ring_gap = ring_gap;
        self
    }

    /// Sets the visibility policy.
    #[must_use]
    pub fn with_visibility(mut self, visibility: VisibilityPolicy) -> Self {
        self.visibility = visibility;
        self
    }

    /// Sets the transition duration. Zero makes zooms instantaneous.
    #[must_use]
    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }

    /// Sets the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Sets the sibling order.
    #[must_use]
    pub fn with_child_order(mut self, child_order: ChildOrder) -> Self {
        self.child_order = child_order;
        self
    }

    /// Geometry derived from this configuration.
    #[must_use]
    pub fn geometry(&self) -> ArcGeometry {
        ArcGeometry {
            radius_unit: self.radius_unit,
            pad_angle: self.pad_angle,
            ring_gap: self.ring_gap,
        }
    }
}
