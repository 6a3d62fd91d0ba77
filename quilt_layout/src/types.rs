// Copyright 2025 the Quilt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: item identity, footprints, axes, and placed frames.

use kurbo::Rect;

/// The axis along which a quilt layout grows.
///
/// The other axis is bounded by the container's cross extent. The default
/// is [`Axis::Vertical`]: content scrolls downward and the bounded axis is
/// horizontal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Axis {
    /// Content grows downward; the bounded axis is horizontal.
    #[default]
    Vertical,
    /// Content grows rightward; the bounded axis is vertical.
    Horizontal,
}

impl Axis {
    /// Returns `true` if content grows vertically.
    #[inline]
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Vertical)
    }
}

/// Identity of an item in the external item source.
///
/// Items are identified by their (group, ordinal) position in the source's
/// enumeration. The derived ordering is the source's total order: all of
/// group 0 precedes all of group 1, and so on. Identities are stable until
/// the layout is invalidated; the layout never owns or reorders them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId {
    /// Index of the item's group in the source.
    pub group: usize,
    /// Ordinal of the item within its group.
    pub item: usize,
}

impl ItemId {
    /// Creates an identity from a group index and an ordinal within it.
    #[inline(always)]
    #[must_use]
    pub const fn new(group: usize, item: usize) -> Self {
        Self { group, item }
    }
}

/// An item's size in whole grid cells.
///
/// Footprints are always at least 1×1; zero components are clamped up at
/// the point of use.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Footprint {
    /// Width in cells.
    pub width: u32,
    /// Height in cells.
    pub height: u32,
}

impl Footprint {
    /// The minimal 1×1 footprint.
    pub const ONE: Self = Self::new(1, 1);

    /// Creates a footprint from a cell width and height.
    #[inline(always)]
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Clamps both components to at least one cell.
    #[inline]
    #[must_use]
    pub(crate) const fn clamped(self) -> Self {
        Self {
            width: if self.width == 0 { 1 } else { self.width },
            height: if self.height == 0 { 1 } else { self.height },
        }
    }

    /// Maps width/height onto the restricted/unrestricted axes for the
    /// given growth direction.
    #[inline]
    #[must_use]
    pub(crate) const fn oriented(self, axis: Axis) -> CellExtent {
        match axis {
            Axis::Vertical => CellExtent {
                restricted: self.width,
                unrestricted: self.height,
            },
            Axis::Horizontal => CellExtent {
                restricted: self.height,
                unrestricted: self.width,
            },
        }
    }
}

/// A footprint expressed along the restricted/unrestricted axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct CellExtent {
    pub(crate) restricted: u32,
    pub(crate) unrestricted: u32,
}

/// An item together with its computed pixel frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacedItem {
    /// The item's identity in the source.
    pub id: ItemId,
    /// The item's frame in container pixel space, insets applied.
    pub frame: Rect,
}
