// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves for zoom transitions.
//!
//! An easing maps normalized time `t ∈ [0, 1]` to interpolation progress.
//! Every curve here satisfies `f(0) = 0` and `f(1) = 1`.

/// An easing curve.
pub type EasingFn = fn(f64) -> f64;

/// Constant-speed progress.
#[must_use]
pub fn linear(t: f64) -> f64 {
    t
}

/// Cubic ease-in-out, symmetric around `t = 0.5`.
#[must_use]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t * 2.0;
    if t <= 1.0 {
        t * t * t * 0.5
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) * 0.5
    }
}

/// Cubic ease-out: fast start, gentle landing.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t - 1.0;
    t * t * t + 1.0
}
