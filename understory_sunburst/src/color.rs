// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Branch colors.

use alloc::vec::Vec;

use peniko::Color;
use peniko::color::{AlphaColor, Oklch, Srgb};

/// Fill opacity of arcs whose node has children.
pub const PARENT_FILL_OPACITY: f32 = 0.6;
/// Fill opacity of leaf arcs.
pub const LEAF_FILL_OPACITY: f32 = 0.4;

/// A color from a perceptually even hue wheel, `t ∈ [0, 1]` mapping to one turn.
#[must_use]
pub fn rainbow(t: f32) -> Color {
    AlphaColor::<Oklch>::new([0.72, 0.14, t * 360.0, 1.0]).convert::<Srgb>()
}

/// One color per top-level branch.
///
/// The wheel is quantized into `count + 1` steps so the first and last
/// branches never share a hue.
#[must_use]
pub fn branch_palette(count: u32) -> Vec<Color> {
    let steps = count as f32 + 1.0;
    (0..count).map(|i| rainbow(i as f32 / steps)).collect()
}

#[cfg(test)]
mod tests {
    use super::branch_palette;

    #[test]
    fn palette_has_distinct_colors() {
        let palette = branch_palette(5);
        assert_eq!(palette.len(), 5);
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a.components, b.components);
            }
        }
    }

    #[test]
    fn empty_palette() {
        assert!(branch_palette(0).is_empty());
    }
}
