// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arc geometry: polar intervals to drawable shapes and label placement.
//!
//! Angles follow the screen convention used by the sunburst: radians measured
//! clockwise from 12 o'clock in a y-down coordinate system. Kurbo measures
//! angles from the +x axis towards +y, so conversions subtract a quarter turn.

use core::f64::consts::{FRAC_PI_2, PI, TAU};

use kurbo::{Affine, BezPath, Circle, CircleSegment, Point, Shape, Vec2};

use crate::interval::Interval;

/// Maps ring units to pixels and shapes arcs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArcGeometry {
    /// Pixels per ring.
    pub radius_unit: f64,
    /// Upper bound on the angular pad between sibling arcs, in radians.
    pub pad_angle: f64,
    /// Pixels removed from each arc's outer radius to separate rings.
    pub ring_gap: f64,
}

impl Default for ArcGeometry {
    fn default() -> Self {
        Self {
            radius_unit: 100.0,
            pad_angle: 0.005,
            ring_gap: 1.0,
        }
    }
}

impl ArcGeometry {
    /// Shape of the arc occupying `i`.
    ///
    /// The pad is `min(width / 2, pad_angle)`, so a padded arc keeps at least
    /// half of its sector and never inverts. The outer radius never drops
    /// below the inner radius.
    #[must_use]
    pub fn arc(&self, i: &Interval) -> ArcShape {
        let width = i.angular_width().max(0.0);
        let inner_radius = i.y0 * self.radius_unit;
        ArcShape {
            start_angle: i.x0,
            end_angle: i.x1,
            pad_angle: (width * 0.5).min(self.pad_angle).max(0.0),
            inner_radius,
            outer_radius: inner_radius.max(i.y1 * self.radius_unit - self.ring_gap),
        }
    }

    /// Placement of the label centered in `i`.
    #[must_use]
    pub fn label(&self, i: &Interval) -> LabelTransform {
        let mid_angle = i.mid_angle();
        let radius = i.mid_radius() * self.radius_unit;
        let degrees = mid_angle.to_degrees();
        let flipped = degrees >= 180.0;
        LabelTransform {
            anchor: Point::ZERO + Vec2::from_angle(mid_angle - FRAC_PI_2) * radius,
            radius,
            mid_angle,
            rotation: (degrees - 90.0).to_radians() + if flipped { PI } else { 0.0 },
            flipped,
        }
    }

    /// Converts an offset from the chart center into `(angle, radius)` in the
    /// layout's polar coordinates: angle in `[0, 2π)`, radius in ring units.
    #[must_use]
    pub fn to_polar(&self, offset: Vec2) -> (f64, f64) {
        // atan2(x, -y): zero at 12 o'clock, increasing clockwise.
        let mut angle = Vec2::new(-offset.y, offset.x).atan2();
        if angle < 0.0 {
            angle += TAU;
        }
        let radius = if self.radius_unit > 0.0 {
            offset.hypot() / self.radius_unit
        } else {
            0.0
        };
        (angle, radius)
    }
}

/// A drawable annular sector, in pixels and radians.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArcShape {
    /// Start angle of the unpadded sector.
    pub start_angle: f64,
    /// End angle of the unpadded sector.
    pub end_angle: f64,
    /// Total angular pad, split evenly between both ends.
    pub pad_angle: f64,
    /// Inner radius in pixels.
    pub inner_radius: f64,
    /// Outer radius in pixels.
    pub outer_radius: f64,
}

impl ArcShape {
    /// Start and end angles after removing the pad.
    #[must_use]
    pub fn padded_angles(&self) -> (f64, f64) {
        let half = self.pad_angle * 0.5;
        (self.start_angle + half, self.end_angle - half)
    }

    /// Angular extent after padding.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        let (start, end) = self.padded_angles();
        (end - start).max(0.0)
    }

    /// The padded sector as a Kurbo shape centered on `center`.
    #[must_use]
    pub fn to_segment(&self, center: Point) -> CircleSegment {
        let (start, _) = self.padded_angles();
        Circle::new(center, self.outer_radius).segment(
            self.inner_radius,
            start - FRAC_PI_2,
            self.sweep(),
        )
    }

    /// The padded sector flattened to a path.
    #[must_use]
    pub fn to_path(&self, center: Point, tolerance: f64) -> BezPath {
        self.to_segment(center).to_path(tolerance)
    }
}

/// Position and rotation of a label centered in an arc.
///
/// Text is rotated to run along the radius and flipped on the left half of
/// the circle so it is never upside down.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LabelTransform {
    /// Label center as an offset from the chart center, in pixels (y-down).
    pub anchor: Point,
    /// Distance of the anchor from the chart center, in pixels.
    pub radius: f64,
    /// Angular midpoint of the arc, in radians.
    pub mid_angle: f64,
    /// Total rotation applied to the text, in radians.
    pub rotation: f64,
    /// Whether the extra half turn was applied.
    pub flipped: bool,
}

impl LabelTransform {
    /// Rotation in degrees.
    #[must_use]
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation.to_degrees()
    }

    /// Transform taking text laid out around the origin to its place on a
    /// chart centered at `center`.
    #[must_use]
    pub fn affine(&self, center: Point) -> Affine {
        let flip = if self.flipped { PI } else { 0.0 };
        Affine::translate(center.to_vec2())
            * Affine::rotate(self.mid_angle - FRAC_PI_2)
            * Affine::translate((self.radius, 0.0))
            * Affine::rotate(flip)
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{FRAC_PI_2, PI, TAU};

    use kurbo::{Point, Shape, Vec2};

    use super::ArcGeometry;
    use crate::interval::Interval;

    const EPS: f64 = 1e-9;

    #[test]
    fn arc_radii_and_pad() {
        let geom = ArcGeometry::default();
        let arc = geom.arc(&Interval::new(0.0, 1.0, 1.0, 2.0));
        assert_eq!(arc.inner_radius, 100.0);
        assert_eq!(arc.outer_radius, 199.0);
        assert_eq!(arc.pad_angle, 0.005);
        let (s, e) = arc.padded_angles();
        assert!((s - 0.0025).abs() < EPS && (e - 0.9975).abs() < EPS);
    }

    #[test]
    fn pad_never_exceeds_half_width() {
        let geom = ArcGeometry::default();
        let arc = geom.arc(&Interval::new(0.0, 0.001, 1.0, 2.0));
        assert_eq!(arc.pad_angle, 0.0005);
        assert!(arc.sweep() > 0.0);
        let zero = geom.arc(&Interval::new(0.3, 0.3, 1.0, 2.0));
        assert_eq!(zero.pad_angle, 0.0);
        assert_eq!(zero.sweep(), 0.0);
    }

    #[test]
    fn outer_radius_never_below_inner() {
        let geom = ArcGeometry {
            radius_unit: 0.5,
            ..ArcGeometry::default()
        };
        let arc = geom.arc(&Interval::new(0.0, 1.0, 1.0, 2.0));
        assert_eq!(arc.outer_radius, arc.inner_radius);
    }

    #[test]
    fn label_upright_on_both_halves() {
        let geom = ArcGeometry::default();

        // Right half: midpoint at 90°, pointing at 3 o'clock.
        let right = geom.label(&Interval::new(0.0, PI, 1.0, 2.0));
        assert!(!right.flipped);
        assert!(right.rotation_degrees().abs() < EPS);
        assert!((right.anchor.x - 150.0).abs() < EPS && right.anchor.y.abs() < EPS);

        // Left half: midpoint at 270°, flipped by half a turn.
        let left = geom.label(&Interval::new(PI, TAU, 1.0, 2.0));
        assert!(left.flipped);
        assert!((left.rotation_degrees() - 360.0).abs() < EPS);
        assert!((left.anchor.x + 150.0).abs() < EPS);

        // Just past 6 o'clock flips.
        let bottom = geom.label(&Interval::new(PI - 0.4, PI + 0.6, 1.0, 2.0));
        assert!(bottom.flipped);
        assert!(bottom.anchor.y > 140.0);
    }

    #[test]
    fn label_affine_places_origin_at_anchor() {
        let geom = ArcGeometry::default();
        let center = Point::new(300.0, 300.0);
        for i in [
            Interval::new(0.0, 0.5, 1.0, 2.0),
            Interval::new(2.0, 4.0, 2.0, 3.0),
        ] {
            let label = geom.label(&i);
            let placed = label.affine(center) * Point::ZERO;
            let expected = center + label.anchor.to_vec2();
            assert!((placed - expected).hypot() < EPS);
        }
    }

    #[test]
    fn segment_matches_arc_extent() {
        let geom = ArcGeometry::default();
        let arc = geom.arc(&Interval::new(0.0, FRAC_PI_2, 1.0, 2.0));
        let seg = arc.to_segment(Point::ZERO);
        assert_eq!(seg.outer_radius, 199.0);
        assert_eq!(seg.inner_radius, 100.0);
        // Sector between 12 and 3 o'clock lies in the upper-right quadrant.
        let bbox = seg.to_path(0.1).bounding_box();
        assert!(bbox.min_x() > -0.5 && bbox.max_y() < 0.5);
        assert!(bbox.max_x() > 190.0 && bbox.min_y() < -190.0);
    }

    #[test]
    fn polar_round_trip() {
        let geom = ArcGeometry::default();
        let (a, r) = geom.to_polar(Vec2::new(0.0, -150.0));
        assert!(a.abs() < EPS && (r - 1.5).abs() < EPS);
        let (a, _) = geom.to_polar(Vec2::new(100.0, 0.0));
        assert!((a - FRAC_PI_2).abs() < EPS);
        let (a, _) = geom.to_polar(Vec2::new(-100.0, 0.0));
        assert!((a - 3.0 * FRAC_PI_2).abs() < EPS);
    }
}
