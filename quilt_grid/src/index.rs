// Copyright 2025 the Quilt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bidirectional cell/occupant index.

use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::types::CellPoint;

/// Bidirectional mapping between grid cells and the items occupying them.
///
/// One side maps an occupied cell to the identity of the item covering it;
/// the other maps an item to the top-left cell of its footprint. Over the
/// set of cells an item occupies, the two maps are strict inverses: every
/// occupied cell resolves to exactly one item, and that item's recorded
/// origin is the top-left of the block containing the cell.
///
/// The cell map is two-level, keyed outer by the *restricted* coordinate
/// and inner by the *unrestricted* one, so the number of outer entries is
/// bounded by the container's cross extent no matter how far content
/// scrolls.
///
/// This type is a passive cache: it performs no overlap checking of its
/// own. Callers record occupancy only for cells they have verified free,
/// and drop the whole index (never parts of it) when the layout it
/// describes is invalidated.
pub struct GridIndex<K> {
    occupants: HashMap<u32, HashMap<u32, K>>,
    origins: HashMap<K, CellPoint>,
}

impl<K> Default for GridIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> GridIndex<K> {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self {
            occupants: HashMap::new(),
            origins: HashMap::new(),
        }
    }

    /// Number of cells currently recorded as occupied.
    #[must_use]
    pub fn occupied_cells(&self) -> usize {
        self.occupants.values().map(|lane| lane.len()).sum()
    }

    /// Number of items with a recorded origin.
    #[must_use]
    pub fn len(&self) -> usize {
        self.origins.len()
    }

    /// Returns `true` if no item has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    /// Drops both maps.
    pub fn clear(&mut self) {
        self.occupants.clear();
        self.origins.clear();
    }
}

impl<K: Copy + Eq + Hash> GridIndex<K> {
    /// Returns the occupant of `cell`, if any.
    #[inline]
    #[must_use]
    pub fn occupant(&self, cell: CellPoint) -> Option<K> {
        self.occupants
            .get(&cell.restricted)?
            .get(&cell.unrestricted)
            .copied()
    }

    /// Records `item` as the occupant of `cell`.
    ///
    /// The caller is responsible for only recording cells it has verified
    /// free; re-recording an occupied cell overwrites the previous
    /// occupant and breaks the inverse invariant.
    pub fn set_occupant(&mut self, cell: CellPoint, item: K) {
        self.occupants
            .entry(cell.restricted)
            .or_default()
            .insert(cell.unrestricted, item);
    }

    /// Returns the recorded top-left cell of `item`, if it has been
    /// placed.
    #[inline]
    #[must_use]
    pub fn origin_of(&self, item: K) -> Option<CellPoint> {
        self.origins.get(&item).copied()
    }

    /// Records the top-left cell of `item`'s footprint.
    pub fn set_origin(&mut self, item: K, origin: CellPoint) {
        self.origins.insert(item, origin);
    }
}

impl<K> Debug for GridIndex<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridIndex")
            .field("items", &self.origins.len())
            .field("occupied_cells", &self.occupied_cells())
            .field("restricted_lanes", &self.occupants.len())
            .finish_non_exhaustive()
    }
}
