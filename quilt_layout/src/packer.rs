// Copyright 2025 the Quilt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The first-fit packing engine.

use quilt_grid::{CellPoint, GridIndex};
use tracing::warn;

use crate::types::{CellExtent, ItemId};

/// Outcome of a single committed placement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Placement {
    /// Top-left cell of the committed footprint.
    pub(crate) origin: CellPoint,
    /// Whether the footprint spills past the restricted bound.
    pub(crate) overflowed: bool,
}

/// First-fit scanner over the cell grid.
///
/// Given one item and its footprint, [`Packer::place`] finds the earliest
/// valid top-left cell in scan order (unrestricted-major, restricted-minor)
/// and commits the footprint into the [`GridIndex`]. Two cursors make
/// repeated placements cheap:
///
/// - `first_open` is the earliest cell known to be free. Scans start at its
///   unrestricted coordinate and advance it past fully-occupied rows, so a
///   placement never rescans the packed prefix of the grid.
/// - `furthest` is the per-axis maximum cell any footprint has reached,
///   from which the total content extent is derived.
///
/// Both cursors only ever advance; the packer is cleared by dropping it
/// along with the rest of the layout cache.
///
/// Placement cannot fail: the unrestricted axis is unbounded, so a row with
/// enough free cells always exists. The one soft case is a footprint wider
/// than the restricted bound itself, which is accepted at the bounded-axis
/// edge (overflowing the bound) rather than rejected, so every item the
/// source enumerates ends up somewhere.
#[derive(Debug)]
pub(crate) struct Packer {
    grid: GridIndex<ItemId>,
    first_open: CellPoint,
    furthest: CellPoint,
}

impl Packer {
    pub(crate) fn new() -> Self {
        Self {
            grid: GridIndex::new(),
            first_open: CellPoint::ZERO,
            furthest: CellPoint::ZERO,
        }
    }

    pub(crate) fn grid(&self) -> &GridIndex<ItemId> {
        &self.grid
    }

    pub(crate) fn first_open(&self) -> CellPoint {
        self.first_open
    }

    pub(crate) fn furthest(&self) -> CellPoint {
        self.furthest
    }

    /// Finds the earliest valid origin for `item` and commits it.
    ///
    /// `restricted_len` is the bounded-axis cell count (at least 1).
    pub(crate) fn place(
        &mut self,
        item: ItemId,
        size: CellExtent,
        restricted_len: u32,
    ) -> Placement {
        debug_assert!(restricted_len >= 1, "restricted bound must be at least one cell");
        debug_assert!(
            size.restricted >= 1 && size.unrestricted >= 1,
            "footprints must cover at least one cell; got {size:?}"
        );

        // The first free cell seen this scan becomes the new `first_open`;
        // cells before it are known occupied and never rescanned.
        let mut advanced = false;
        let mut unrestricted = self.first_open.unrestricted;
        loop {
            for restricted in 0..restricted_len {
                let origin = CellPoint::new(restricted, unrestricted);
                if self.grid.occupant(origin).is_some() {
                    continue;
                }
                if !advanced {
                    self.first_open = origin;
                    advanced = true;
                }
                let Some(overflowed) = self.block_fits(origin, size, restricted_len) else {
                    continue;
                };
                if overflowed {
                    warn!(
                        "item ({}, {}): footprint {}x{} cells does not fit across \
                         {restricted_len} cells; placing at the edge anyway",
                        item.group, item.item, size.restricted, size.unrestricted,
                    );
                }
                self.commit(item, origin, size);
                return Placement { origin, overflowed };
            }
            unrestricted += 1;
        }
    }

    /// Checks every cell of a footprint rooted at `origin`.
    ///
    /// Returns `Some(overflowed)` when the block can be committed there and
    /// `None` when it cannot. A block rooted at the restricted edge may
    /// reach past the bound (`overflowed == true`); rooted anywhere else,
    /// an out-of-bounds cell rejects the origin outright.
    fn block_fits(&self, origin: CellPoint, size: CellExtent, restricted_len: u32) -> Option<bool> {
        let mut overflowed = false;
        for restricted in origin.restricted..origin.restricted + size.restricted {
            for unrestricted in origin.unrestricted..origin.unrestricted + size.unrestricted {
                let cell = CellPoint::new(restricted, unrestricted);
                if self.grid.occupant(cell).is_some() {
                    return None;
                }
                if restricted >= restricted_len {
                    if origin.restricted != 0 {
                        return None;
                    }
                    overflowed = true;
                }
            }
        }
        Some(overflowed)
    }

    /// Records the verified-free block as occupied by `item`.
    fn commit(&mut self, item: ItemId, origin: CellPoint, size: CellExtent) {
        self.grid.set_origin(item, origin);
        for restricted in origin.restricted..origin.restricted + size.restricted {
            for unrestricted in origin.unrestricted..origin.unrestricted + size.unrestricted {
                let cell = CellPoint::new(restricted, unrestricted);
                debug_assert!(
                    self.grid.occupant(cell).is_none(),
                    "committing over an occupied cell at {cell:?}"
                );
                self.grid.set_occupant(cell, item);
                self.furthest = self.furthest.component_max(cell);
            }
        }
    }
}
