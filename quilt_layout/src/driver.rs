// Copyright 2025 the Quilt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Incremental placement: how far the packing engine runs, and where it
//! resumes.

use quilt_grid::{CellPoint, GridIndex};

use crate::model::{ItemSource, SizeProvider};
use crate::packer::Packer;
use crate::types::{Axis, ItemId};

/// Drives the [`Packer`] over the item source's total order.
///
/// The driver owns the resumption cursor: the identity of the last item a
/// placement was attempted for. Every fill resumes immediately after it,
/// so repeated viewport queries during scrolling only ever place items the
/// scroll has newly revealed. The cursor is reset (by dropping the driver)
/// exactly when the layout is invalidated, and advanced only by
/// placements, never by queries.
///
/// Because resumption follows the source's total order, the final
/// placements are independent of the query pattern that triggered them:
/// filling to row 10 and later to row 20 ends in the same state as filling
/// to row 20 in one pass.
#[derive(Debug)]
pub(crate) struct Driver {
    packer: Packer,
    cursor: Option<ItemId>,
}

impl Driver {
    pub(crate) fn new() -> Self {
        Self {
            packer: Packer::new(),
            cursor: None,
        }
    }

    pub(crate) fn grid(&self) -> &GridIndex<ItemId> {
        self.packer.grid()
    }

    pub(crate) fn furthest(&self) -> CellPoint {
        self.packer.furthest()
    }

    pub(crate) fn origin_of(&self, item: ItemId) -> Option<CellPoint> {
        self.packer.grid().origin_of(item)
    }

    /// Places successive items until every cell before unrestricted row
    /// `end` is known used or unusable, or the source runs out.
    ///
    /// Passing `u32::MAX` places everything. A bound that is already
    /// satisfied is a no-op, which is what keeps repeated queries at the
    /// same scroll offset cheap.
    pub(crate) fn fill_to_unrestricted<M>(
        &mut self,
        model: &M,
        axis: Axis,
        restricted_len: u32,
        end: u32,
    ) where
        M: ItemSource + SizeProvider,
    {
        while self.packer.first_open().unrestricted < end {
            let Some(item) = next_in_order(model, self.cursor) else {
                return;
            };
            let size = model.footprint(item).clamped().oriented(axis);
            self.packer.place(item, size, restricted_len);
            self.cursor = Some(item);
        }
    }

    /// Places successive items until `target` (or the first item after it,
    /// should `target` not exist) has been processed.
    ///
    /// A no-op when the cursor is already at or past `target`.
    pub(crate) fn fill_through<M>(
        &mut self,
        model: &M,
        axis: Axis,
        restricted_len: u32,
        target: ItemId,
    ) where
        M: ItemSource + SizeProvider,
    {
        if self.cursor.is_some_and(|placed| placed >= target) {
            return;
        }
        loop {
            let Some(item) = next_in_order(model, self.cursor) else {
                return;
            };
            let size = model.footprint(item).clamped().oriented(axis);
            self.packer.place(item, size, restricted_len);
            self.cursor = Some(item);
            if item >= target {
                return;
            }
        }
    }
}

/// The first item after `cursor` in the source's group-major total order,
/// skipping empty groups.
fn next_in_order<S: ItemSource>(source: &S, cursor: Option<ItemId>) -> Option<ItemId> {
    let (mut group, mut item) = match cursor {
        None => (0, 0),
        Some(id) => (id.group, id.item + 1),
    };
    while group < source.group_count() {
        if item < source.item_count(group) {
            return Some(ItemId::new(group, item));
        }
        group += 1;
        item = 0;
    }
    None
}
