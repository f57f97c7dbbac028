// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility and legibility predicates.

use crate::interval::Interval;

/// Decides whether a node's arc and label are drawn.
///
/// Both predicates are pure functions of a single interval. They are meant to
/// be evaluated against a node's *current* (possibly mid-transition) interval,
/// so what is drawn always reflects the animated state.
///
/// The default visible band is `[1, 3)`: ring zero is the parent circle of
/// the focus, followed by two rings of detail.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VisibilityPolicy {
    /// Innermost visible radius, in ring units.
    pub band_start: f64,
    /// Outermost visible radius, in ring units.
    pub band_end: f64,
    /// Minimum angular × radial area for a label to be drawn.
    pub label_area: f64,
}

impl Default for VisibilityPolicy {
    fn default() -> Self {
        Self {
            band_start: 1.0,
            band_end: 3.0,
            label_area: 0.05,
        }
    }
}

impl VisibilityPolicy {
    /// Returns `true` if the arc lies inside the visible band and has a
    /// non-zero angular width.
    #[must_use]
    pub fn arc_visible(&self, i: &Interval) -> bool {
        i.y1 <= self.band_end && i.y0 >= self.band_start && i.x1 > i.x0
    }

    /// Returns `true` if the arc is visible and large enough for a legible label.
    #[must_use]
    pub fn label_visible(&self, i: &Interval) -> bool {
        self.arc_visible(i) && i.area() > self.label_area
    }

    /// Number of rings drawn outside the parent circle.
    #[must_use]
    pub fn visible_rings(&self) -> f64 {
        self.band_end - self.band_start
    }
}

#[cfg(test)]
mod tests {
    use super::VisibilityPolicy;
    use crate::interval::Interval;

    #[test]
    fn band_edges() {
        let policy = VisibilityPolicy::default();
        assert!(policy.arc_visible(&Interval::new(0.0, 1.0, 1.0, 2.0)));
        assert!(policy.arc_visible(&Interval::new(0.0, 1.0, 2.0, 3.0)));
        assert!(!policy.arc_visible(&Interval::new(0.0, 1.0, 0.0, 1.0)));
        assert!(!policy.arc_visible(&Interval::new(0.0, 1.0, 3.0, 4.0)));
        // Partially outside while animating.
        assert!(!policy.arc_visible(&Interval::new(0.0, 1.0, 2.5, 3.5)));
    }

    #[test]
    fn zero_width_is_invisible() {
        let policy = VisibilityPolicy::default();
        let i = Interval::new(1.0, 1.0, 1.0, 2.0);
        assert!(!policy.arc_visible(&i));
        assert!(!policy.label_visible(&i));
    }

    #[test]
    fn label_needs_area() {
        let policy = VisibilityPolicy::default();
        assert!(!policy.label_visible(&Interval::new(0.0, 0.05, 1.0, 2.0)));
        assert!(policy.label_visible(&Interval::new(0.0, 0.06, 1.0, 2.0)));

        let strict = VisibilityPolicy {
            label_area: 1.0,
            ..VisibilityPolicy::default()
        };
        assert!(!strict.label_visible(&Interval::new(0.0, 0.5, 1.0, 2.0)));
    }
}
