// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polar intervals.

use core::f64::consts::TAU;

/// A node's polar interval: angular range `[x0, x1)` in radians and radial
/// range `[y0, y1)` in ring units.
///
/// Ring units count depth levels: a node at depth `d` of the static layout
/// spans `[d, d + 1)`. Multiply by a radius unit to get pixels (see
/// [`ArcGeometry`](crate::ArcGeometry)).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Interval {
    /// Start angle in radians.
    pub x0: f64,
    /// End angle in radians.
    pub x1: f64,
    /// Inner radius in ring units.
    pub y0: f64,
    /// Outer radius in ring units.
    pub y1: f64,
}

impl Interval {
    /// The root interval: the full circle and the innermost ring.
    pub const ROOT: Self = Self::new(0.0, TAU, 0.0, 1.0);

    /// Creates an interval from its four bounds.
    #[must_use]
    pub const fn new(x0: f64, x1: f64, y0: f64, y1: f64) -> Self {
        Self { x0, x1, y0, y1 }
    }

    /// Angular width `x1 - x0`.
    #[must_use]
    pub fn angular_width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Radial depth `y1 - y0`.
    #[must_use]
    pub fn radial_depth(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Angular × radial area, used as a legibility measure for labels.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.radial_depth() * self.angular_width()
    }

    /// Angular midpoint.
    #[must_use]
    pub fn mid_angle(&self) -> f64 {
        (self.x0 + self.x1) * 0.5
    }

    /// Radial midpoint.
    #[must_use]
    pub fn mid_radius(&self) -> f64 {
        (self.y0 + self.y1) * 0.5
    }

    /// Returns `true` if `(angle, radius)` lies inside the half-open interval.
    #[must_use]
    pub fn contains(&self, angle: f64, radius: f64) -> bool {
        angle >= self.x0 && angle < self.x1 && radius >= self.y0 && radius < self.y1
    }

    /// Per-field linear interpolation; `t = 0` yields `self`, `t = 1` yields `other`.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            x0: self.x0 + (other.x0 - self.x0) * t,
            x1: self.x1 + (other.x1 - self.x1) * t,
            y0: self.y0 + (other.y0 - self.y0) * t,
            y1: self.y1 + (other.y1 - self.y1) * t,
        }
    }

    /// Re-expresses this interval relative to `focus`, which becomes the full
    /// circle, with `focus_depth` becoming ring zero.
    ///
    /// Angles outside the focus sector clamp onto its edges, collapsing to
    /// zero width. A zero-width focus collapses everything onto angle zero.
    #[must_use]
    pub fn rebased_on(&self, focus: &Self, focus_depth: f64) -> Self {
        let width = focus.angular_width();
        let project = |x: f64| {
            if width > 0.0 {
                ((x - focus.x0) / width).clamp(0.0, 1.0) * TAU
            } else {
                0.0
            }
        };
        Self {
            x0: project(self.x0),
            x1: project(self.x1),
            y0: (self.y0 - focus_depth).max(0.0),
            y1: (self.y1 - focus_depth).max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{PI, TAU};

    use super::Interval;

    #[test]
    fn lerp_endpoints() {
        let a = Interval::new(0.0, 1.0, 1.0, 2.0);
        let b = Interval::new(2.0, 4.0, 0.0, 1.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        let mid = a.lerp(&b, 0.5);
        assert_eq!(mid, Interval::new(1.0, 2.5, 0.5, 1.5));
    }

    #[test]
    fn rebase_maps_focus_to_full_circle() {
        let focus = Interval::new(0.0, PI, 1.0, 2.0);
        let rebased = focus.rebased_on(&focus, 1.0);
        assert_eq!(rebased.x0, 0.0);
        assert!((rebased.x1 - TAU).abs() < 1e-12);
        assert_eq!(rebased.y0, 0.0);
        assert_eq!(rebased.y1, 1.0);
    }

    #[test]
    fn rebase_clamps_outside_sector() {
        let focus = Interval::new(0.0, PI, 1.0, 2.0);
        let outside = Interval::new(PI, TAU, 1.0, 2.0);
        let rebased = outside.rebased_on(&focus, 1.0);
        assert_eq!(rebased.x0, TAU);
        assert_eq!(rebased.x1, TAU);
        assert_eq!(rebased.angular_width(), 0.0);
    }

    #[test]
    fn rebase_on_zero_width_focus_is_finite() {
        let focus = Interval::new(1.0, 1.0, 1.0, 2.0);
        let other = Interval::new(0.5, 2.0, 2.0, 3.0);
        let rebased = other.rebased_on(&focus, 1.0);
        assert!(rebased.x0.is_finite() && rebased.x1.is_finite());
        assert_eq!(rebased.angular_width(), 0.0);
    }

    #[test]
    fn contains_is_half_open() {
        let i = Interval::new(0.0, 1.0, 1.0, 2.0);
        assert!(i.contains(0.0, 1.0));
        assert!(!i.contains(1.0, 1.5));
        assert!(!i.contains(0.5, 2.0));
    }
}
