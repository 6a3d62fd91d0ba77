// Copyright 2025 the Quilt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=quilt_grid --heading-base-level=0

//! Quilt Grid: a bidirectional cell/occupant index for grid-packed layouts.
//!
//! Quilt Grid is the leaf data structure under a quilt (masonry) packing
//! engine. It records which integer grid cell is covered by which item, and
//! where each item's footprint begins, and answers both questions in O(1)
//! amortized time.
//!
//! - [`CellPoint`]: an integer cell coordinate expressed as
//!   (restricted, unrestricted) rather than (x, y), so the index is
//!   indifferent to scroll direction.
//! - [`GridIndex`]: the two maps (cell→occupant, occupant→origin), generic
//!   over the occupant key type.
//!
//! The index has no policy of its own: it does not check overlap, does not
//! allocate placements, and is cleared wholesale when the layout that feeds
//! it is invalidated. The packing engine layered on top is responsible for
//! only recording verified-free cells.
//!
//! # Example
//!
//! ```rust
//! use quilt_grid::{CellPoint, GridIndex};
//!
//! let mut index: GridIndex<u32> = GridIndex::new();
//!
//! // Record a 2×1 footprint for item 5 with its origin at (0, 0).
//! index.set_origin(5, CellPoint::ZERO);
//! index.set_occupant(CellPoint::new(0, 0), 5);
//! index.set_occupant(CellPoint::new(1, 0), 5);
//!
//! assert_eq!(index.occupant(CellPoint::new(1, 0)), Some(5));
//! assert_eq!(index.origin_of(5), Some(CellPoint::ZERO));
//! assert_eq!(index.occupant(CellPoint::new(2, 0)), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod index;
mod types;

pub use index::GridIndex;
pub use types::CellPoint;
