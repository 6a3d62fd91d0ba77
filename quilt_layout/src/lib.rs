// Copyright 2025 the Quilt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=quilt_layout --heading-base-level=0

//! Quilt Layout: incremental first-fit packing for scrollable grids.
//!
//! A quilt (masonry) layout packs variable-sized rectangular tiles into a
//! grid that is bounded along one axis and grows without limit along the
//! scroll axis, leaving no avoidable gaps. This crate computes such
//! placements on demand: it places exactly as many items as the queried
//! viewport requires, remembers where it stopped, and resumes from there
//! as the host scrolls.
//!
//! The core pieces are:
//!
//! - [`ItemSource`] and [`SizeProvider`]: the two collaborator contracts a
//!   host supplies — the ordered enumeration of item identities, and each
//!   item's [`Footprint`] in whole cells (plus optional per-group insets).
//! - A first-fit packing engine over a [`quilt_grid::GridIndex`], scanning
//!   row-major from a monotonically advancing frontier so earlier rows are
//!   never rescanned.
//! - [`QuiltLayout`]: the controller a host drives. It converts pixel
//!   viewports to cell ranges, extends placement to cover them, and
//!   answers extent, frame, visibility, and hit queries.
//!
//! This crate deliberately does **not** know about widgets, rendering, or
//! gesture handling. Host containers own the item data and views; the
//! layout only turns footprints into frames. Single host, single thread:
//! every operation runs to completion synchronously, and the placement
//! cache is owned by one [`QuiltLayout`] instance.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use quilt_layout::{Footprint, ItemId, ItemSource, QuiltLayout, SizeProvider};
//!
//! // A flat source of mixed tile sizes.
//! struct Gallery(Vec<Footprint>);
//!
//! impl ItemSource for Gallery {
//!     fn group_count(&self) -> usize {
//!         1
//!     }
//!     fn item_count(&self, _group: usize) -> usize {
//!         self.0.len()
//!     }
//! }
//!
//! impl SizeProvider for Gallery {
//!     fn footprint(&self, item: ItemId) -> Footprint {
//!         self.0[item.item]
//!     }
//! }
//!
//! let gallery = Gallery(vec![
//!     Footprint::new(2, 2),
//!     Footprint::ONE,
//!     Footprint::ONE,
//!     Footprint::new(1, 2),
//! ]);
//! let mut layout = QuiltLayout::new(gallery, Size::new(300.0, 600.0));
//!
//! // Ask for what is visible; placement happens on demand.
//! let visible = layout.elements_in(Rect::new(0.0, 0.0, 300.0, 600.0));
//! assert_eq!(visible.len(), 4);
//!
//! // The 2×2 tile occupies the top-left corner; the unit tiles pack
//! // beside it.
//! assert_eq!(visible[0].frame, Rect::new(0.0, 0.0, 200.0, 200.0));
//! assert_eq!(visible[1].frame, Rect::new(200.0, 0.0, 300.0, 100.0));
//! ```
//!
//! Items are placed in the source's order, and placements never move until
//! [`QuiltLayout::invalidate`] rebuilds the layout from scratch (which is
//! also the only way to handle removals — see the type-level docs).

mod driver;
mod layout;
mod model;
mod packer;
mod types;

pub use layout::QuiltLayout;
pub use model::{ItemSource, SizeProvider};
pub use types::{Axis, Footprint, ItemId, PlacedItem};
