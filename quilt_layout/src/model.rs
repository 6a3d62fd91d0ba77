// Copyright 2025 the Quilt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator traits supplying items and their sizes.

use kurbo::Insets;

use crate::types::{Footprint, ItemId};

/// The ordered enumeration of items to be placed.
///
/// Items are grouped, and the placement order is group-major: every item
/// of group `g` precedes every item of group `g + 1`. The layout walks
/// this enumeration exactly once per invalidation, resuming where it left
/// off; it never owns, caches, or reorders the sequence.
///
/// Implementations must keep the enumeration stable between calls to
/// [`QuiltLayout::invalidate`](crate::QuiltLayout::invalidate). After a
/// structural change (insert, move), notify the layout; after a removal,
/// invalidate it. See the facade docs for the exact protocol.
pub trait ItemSource {
    /// Number of item groups.
    fn group_count(&self) -> usize;

    /// Number of items in `group`.
    fn item_count(&self, group: usize) -> usize;
}

/// Per-item footprints and per-group edge insets.
///
/// This is the layout's only window onto item geometry. Footprints are
/// re-queried on every placement pass rather than cached, so an
/// implementation should answer cheaply.
pub trait SizeProvider {
    /// The footprint of `item` in whole cells.
    ///
    /// Components of zero are treated as one cell. A footprint wider than
    /// the bounded axis is not an error: the item is placed at the
    /// bounded-axis edge and allowed to overflow (with a logged warning).
    fn footprint(&self, item: ItemId) -> Footprint;

    /// Edge insets applied inside each placed frame of `group`.
    ///
    /// Insets shrink the returned frame; they do not affect cell
    /// occupancy. The default is no insets.
    fn insets(&self, group: usize) -> Insets {
        let _ = group;
        Insets::ZERO
    }
}
