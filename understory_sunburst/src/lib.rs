// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_sunburst --heading-base-level=0

//! Understory Sunburst: a zoomable radial partition layout with animated focus transitions.
//!
//! Given a tree of weighted nodes, the engine lays every node out as an annular sector: the angle
//! is proportional to the node's aggregate weight and the ring is its depth. Clicking a node with
//! children re-projects the whole layout so that node spans the full circle, animating every
//! visible arc from where it is to where it belongs. Clicking the center zooms back out.
//!
//! The crate computes geometry and state only. Renderers draw the [`Frame`] returned by
//! [`Sunburst::on_frame`] with whatever backend they use; arcs come as [`ArcShape`]s convertible
//! to Kurbo [`CircleSegment`](kurbo::CircleSegment)s and labels as [`LabelTransform`]s.
//!
//! ## Pipeline
//!
//! - [`Hierarchy`]: flattens the input [`Node`] tree into a pre-order arena, aggregating weights
//!   bottom-up and validating input ([`InvalidTreeError`]).
//! - [`Partition`]: the static polar layout, one [`Interval`] per node in unit angle and ring
//!   coordinates.
//! - [`ZoomController`]: the focus state machine. It retargets every interval relative to the
//!   chosen focus and tweens the visible ones over the configured duration.
//! - [`VisibilityPolicy`]: which arcs fall in the visible band and which labels fit.
//! - [`ArcGeometry`]: intervals to pixel-space arcs and label placements.
//! - [`Sunburst`]: ties the above together and handles clicks, hit testing and hover.
//!
//! ## Coordinates
//!
//! Angles are radians measured clockwise from 12 o'clock in a y-down space. Radii in
//! [`Interval`] are in rings; [`SunburstConfig::radius_unit`] maps one ring to pixels. Only rings
//! `[1, 3)` relative to the focus are drawn; ring zero is the central circle.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Vec2;
//! use understory_sunburst::{Node, Sunburst, SunburstConfig};
//!
//! let tree = Node::new("root", "root")
//!     .with_child(
//!         Node::new("a", "A")
//!             .with_child(Node::leaf("a1", "A1", 4.0))
//!             .with_child(Node::leaf("a2", "A2", 6.0)),
//!     )
//!     .with_child(Node::leaf("b", "B", 10.0));
//!
//! let mut sunburst = Sunburst::new(&tree, SunburstConfig::for_width(600.0)).unwrap();
//! assert_eq!(sunburst.frame().arcs.len(), 4);
//!
//! // Zoom into "a" and let the transition run out.
//! assert!(sunburst.on_arc_click(&"a"));
//! let frame = sunburst.on_frame(1000.0);
//! let visible: Vec<_> = frame.arcs.iter().map(|arc| *arc.id).collect();
//! assert_eq!(visible, ["a1", "a2"]);
//!
//! // The center zooms back out.
//! assert!(sunburst.on_pointer_click(Vec2::ZERO));
//! assert_eq!(*sunburst.current_focus_id(), "root");
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to Kurbo and Peniko.
//! - `libm`: float math for `no_std` targets.
//! - `serde`: deserialize input trees, for example flare-style JSON.
//! - `tracing`: debug events for layout builds and zoom transitions.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod color;
mod config;
pub mod easing;
mod error;
mod geometry;
mod hierarchy;
mod interval;
mod partition;
mod sunburst;
mod tree;
mod visibility;
mod zoom;

pub use config::SunburstConfig;
pub use error::InvalidTreeError;
pub use geometry::{ArcGeometry, ArcShape, LabelTransform};
pub use hierarchy::{ChildOrder, Hierarchy, LayoutNode, NodeIndex};
pub use interval::Interval;
pub use partition::Partition;
pub use sunburst::{
    ArcDescriptor, CenterDescriptor, Frame, Hit, HoverInfo, LabelDescriptor, Sunburst,
};
pub use tree::Node;
pub use visibility::VisibilityPolicy;
pub use zoom::{AnimationState, ZoomController, ZoomPhase};
