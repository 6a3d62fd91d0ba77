// Copyright 2025 the Quilt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`QuiltLayout`] controller.

use hashbrown::HashSet;
use kurbo::{Point, Rect, Size};
use tracing::warn;

use quilt_grid::CellPoint;

use crate::driver::Driver;
use crate::model::{ItemSource, SizeProvider};
use crate::types::{Axis, ItemId, PlacedItem};

/// Controller for an incrementally packed quilt (masonry) layout.
///
/// This type:
/// - owns the model (an [`ItemSource`] + [`SizeProvider`] implementation),
/// - owns the placement cache (cell index, frontier, resumption cursor),
/// - converts between pixel space and cell space,
/// - memoizes the most recent viewport query.
///
/// It does *not* know about any widget/view system; host containers are
/// expected to wrap this, drive it with viewport rectangles as the user
/// scrolls, and render the frames it hands back.
///
/// # Incremental placement
///
/// Items are placed lazily, in the source's order, exactly as far as the
/// queried viewport requires; scrolling further places more. Everything
/// placed stays placed until [`QuiltLayout::invalidate`] drops the whole
/// cache at once. Set
/// [`prelayout_everything`](QuiltLayout::set_prelayout_everything) to
/// trade the first query's latency for exact content extents up front —
/// only worth it up to a few hundred items.
///
/// # Model mutations
///
/// After inserting or moving an item in the model, call
/// [`notify_inserted`](QuiltLayout::notify_inserted) or
/// [`notify_moved`](QuiltLayout::notify_moved) so the placement frontier
/// covers it. Removal is deliberately *not* supported incrementally:
/// freeing interior cells could admit an earlier item into the gap, which
/// the resumption cursor cannot express. After a removal, call
/// [`invalidate`](QuiltLayout::invalidate) and let the next query replay.
///
/// # Example
///
/// ```rust
/// use kurbo::{Rect, Size};
/// use quilt_layout::{Footprint, ItemId, ItemSource, QuiltLayout, SizeProvider};
///
/// struct Tiles(Vec<Footprint>);
///
/// impl ItemSource for Tiles {
///     fn group_count(&self) -> usize {
///         1
///     }
///     fn item_count(&self, _group: usize) -> usize {
///         self.0.len()
///     }
/// }
///
/// impl SizeProvider for Tiles {
///     fn footprint(&self, item: ItemId) -> Footprint {
///         self.0[item.item]
///     }
/// }
///
/// let tiles = Tiles(vec![Footprint::new(2, 1), Footprint::ONE, Footprint::ONE]);
/// // A 300px-wide container with the default 100×100 cells: three columns.
/// let mut layout = QuiltLayout::new(tiles, Size::new(300.0, 400.0));
///
/// let visible = layout.elements_in(Rect::new(0.0, 0.0, 300.0, 400.0));
/// assert_eq!(visible.len(), 3);
/// assert_eq!(visible[0].frame, Rect::new(0.0, 0.0, 200.0, 100.0));
/// ```
#[derive(Debug)]
pub struct QuiltLayout<M> {
    model: M,
    cell_size: Size,
    axis: Axis,
    container: Size,
    prelayout_everything: bool,

    driver: Driver,
    viewport_cache: Option<(Rect, Vec<PlacedItem>)>,
    warned_degenerate: bool,
}

/// Default edge length of a cell, in pixels.
const DEFAULT_CELL: f64 = 100.0;

impl<M: ItemSource + SizeProvider> QuiltLayout<M> {
    /// Creates a layout over `model` for a container of the given pixel
    /// size, with 100×100 cells and vertical growth.
    #[must_use]
    pub fn new(model: M, container: Size) -> Self {
        Self {
            model,
            cell_size: Size::new(DEFAULT_CELL, DEFAULT_CELL),
            axis: Axis::default(),
            container,
            prelayout_everything: false,
            driver: Driver::new(),
            viewport_cache: None,
            warned_degenerate: false,
        }
    }

    /// Returns a shared reference to the model.
    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Returns a mutable reference to the model.
    ///
    /// Structural changes to the item sequence must be followed by
    /// [`notify_inserted`](Self::notify_inserted) /
    /// [`notify_moved`](Self::notify_moved), or by
    /// [`invalidate`](Self::invalidate) for anything else (removals in
    /// particular); the layout cannot observe the model on its own.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Returns the pixel size of one grid cell.
    #[must_use]
    pub const fn cell_size(&self) -> Size {
        self.cell_size
    }

    /// Sets the pixel size of one grid cell. Invalidates on change.
    pub fn set_cell_size(&mut self, cell_size: Size) {
        debug_assert!(
            cell_size.width > 0.0 && cell_size.height > 0.0,
            "cell size must be positive; got {cell_size:?}"
        );
        if cell_size != self.cell_size {
            self.cell_size = cell_size;
            self.invalidate();
        }
    }

    /// Returns the growth axis.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Sets the growth axis. Invalidates on change.
    pub fn set_axis(&mut self, axis: Axis) {
        if axis != self.axis {
            self.axis = axis;
            self.invalidate();
        }
    }

    /// Returns the container's pixel size.
    #[must_use]
    pub const fn container(&self) -> Size {
        self.container
    }

    /// Sets the container's pixel size. Invalidates on change.
    pub fn set_container(&mut self, container: Size) {
        if container != self.container {
            self.container = container;
            self.invalidate();
        }
    }

    /// Returns `true` if every query places the entire source.
    #[must_use]
    pub const fn prelayout_everything(&self) -> bool {
        self.prelayout_everything
    }

    /// When enabled, every query runs placement to the end of the source
    /// instead of stopping at the viewport.
    ///
    /// This reports exact content extents from the first query onward, at
    /// the cost of placing everything up front; only recommended for
    /// sources up to a few hundred items.
    pub fn set_prelayout_everything(&mut self, prelayout_everything: bool) {
        self.prelayout_everything = prelayout_everything;
    }

    /// Drops every placement, the resumption cursor, and the memoized
    /// viewport result, together.
    ///
    /// Call this whenever the item set changes beyond an insert/move, or
    /// when any input the cache depends on changes out from under the
    /// layout. Configuration setters that need it call it themselves.
    pub fn invalidate(&mut self) {
        self.driver = Driver::new();
        self.viewport_cache = None;
        self.warned_degenerate = false;
    }

    /// The total content size: the container's cross extent along the
    /// bounded axis, and the extent of placed content along the growth
    /// axis.
    ///
    /// Before any placement pass has run this reports a single empty row.
    #[must_use]
    pub fn content_extent(&self) -> Size {
        let rows = f64::from(self.driver.furthest().unrestricted + 1);
        match self.axis {
            Axis::Vertical => Size::new(self.container.width, rows * self.cell_size.height),
            Axis::Horizontal => Size::new(rows * self.cell_size.width, self.container.height),
        }
    }

    /// Returns every item whose cells intersect the given pixel rect,
    /// each with its full frame, exactly once.
    ///
    /// Placement is extended to cover the rect first. The result is
    /// memoized on the exact rect: repeated queries at the same scroll
    /// offset return the same slice without recomputation (hosts tend to
    /// re-ask for the identical rect on every frame of a scroll).
    pub fn elements_in(&mut self, rect: Rect) -> &[PlacedItem] {
        let cached = self
            .viewport_cache
            .as_ref()
            .is_some_and(|(cached_rect, _)| *cached_rect == rect);
        if !cached {
            let restricted_len = self.restricted_len();
            let (start, end) = self.unrestricted_range(rect);
            let fill_end = if self.prelayout_everything { u32::MAX } else { end };
            self.driver
                .fill_to_unrestricted(&self.model, self.axis, restricted_len, fill_end);

            let mut seen: HashSet<ItemId> = HashSet::new();
            let mut items = Vec::new();
            for unrestricted in start..end {
                for restricted in 0..restricted_len {
                    let cell = CellPoint::new(restricted, unrestricted);
                    let Some(id) = self.driver.grid().occupant(cell) else {
                        continue;
                    };
                    if !seen.insert(id) {
                        continue;
                    }
                    if let Some(frame) = self.placed_frame(id, restricted_len) {
                        items.push(PlacedItem { id, frame });
                    }
                }
            }
            self.viewport_cache = Some((rect, items));
        }
        match &self.viewport_cache {
            Some((_, items)) => items,
            None => &[],
        }
    }

    /// Returns the pixel frame of `item`, placing up to it first if the
    /// viewport-driven scan has not reached it yet.
    ///
    /// Returns `None` for an identity the source does not enumerate.
    pub fn frame_for(&mut self, item: ItemId) -> Option<Rect> {
        let restricted_len = self.restricted_len();
        if self.driver.origin_of(item).is_none() {
            self.driver
                .fill_through(&self.model, self.axis, restricted_len, item);
        }
        self.placed_frame(item, restricted_len)
    }

    /// Extends placement to cover `viewport` plus one row beyond it.
    ///
    /// Hosts call this when the scroll position settles, so the next
    /// [`elements_in`](Self::elements_in) finds everything already placed.
    pub fn prepare(&mut self, viewport: Rect) {
        let restricted_len = self.restricted_len();
        let end = if self.prelayout_everything {
            u32::MAX
        } else {
            let trailing = match self.axis {
                Axis::Vertical => viewport.y1 / self.cell_size.height,
                Axis::Horizontal => viewport.x1 / self.cell_size.width,
            };
            saturating_cell(trailing) + 1
        };
        self.driver
            .fill_to_unrestricted(&self.model, self.axis, restricted_len, end);
    }

    /// Tells the layout an item was inserted at `item`.
    ///
    /// Placement is eagerly extended through the new item so queries
    /// issued right after the mutation are consistent.
    pub fn notify_inserted(&mut self, item: ItemId) {
        self.fill_through_item(item);
    }

    /// Tells the layout an item moved to `item`.
    ///
    /// See [`notify_inserted`](Self::notify_inserted); removal has no
    /// incremental equivalent and requires [`invalidate`](Self::invalidate).
    pub fn notify_moved(&mut self, item: ItemId) {
        self.fill_through_item(item);
    }

    /// Resolves a pixel position to the item occupying that cell, if any.
    ///
    /// Used during interactive reordering to find the drop target under
    /// the finger/pointer. This is a pure lookup over cells already
    /// placed; an empty cell (or a position outside the grid) resolves to
    /// `None` and the caller falls back to its own default.
    #[must_use]
    pub fn interactive_move_target(&self, position: Point) -> Option<ItemId> {
        let restricted_len = self.restricted_len_quiet();
        let padding = self.centering_padding(restricted_len);
        let (restricted_px, unrestricted_px) = match self.axis {
            Axis::Vertical => (position.x - padding, position.y),
            Axis::Horizontal => (position.y - padding, position.x),
        };
        let restricted = restricted_px / self.cell_extent_restricted();
        let unrestricted = unrestricted_px / self.cell_extent_unrestricted();
        if restricted < 0.0 || unrestricted < 0.0 {
            return None;
        }
        let cell = CellPoint::new(saturating_cell(restricted), saturating_cell(unrestricted));
        self.driver.grid().occupant(cell)
    }

    fn fill_through_item(&mut self, item: ItemId) {
        let restricted_len = self.restricted_len();
        self.driver
            .fill_through(&self.model, self.axis, restricted_len, item);
        // The cell range under any previously answered rect may have
        // changed occupants.
        self.viewport_cache = None;
    }

    /// Pixel frame of an already-placed item: cell position × cell size,
    /// centered across the bounded axis, shrunk by the group's insets.
    fn placed_frame(&self, item: ItemId, restricted_len: u32) -> Option<Rect> {
        let origin = self.driver.origin_of(item)?;
        let footprint = self.model.footprint(item).clamped();
        let insets = self.model.insets(item.group);
        let padding = self.centering_padding(restricted_len);

        let size = (
            f64::from(footprint.width) * self.cell_size.width,
            f64::from(footprint.height) * self.cell_size.height,
        );
        let frame = match self.axis {
            Axis::Vertical => Rect::from_origin_size(
                (
                    f64::from(origin.restricted) * self.cell_size.width + padding,
                    f64::from(origin.unrestricted) * self.cell_size.height,
                ),
                size,
            ),
            Axis::Horizontal => Rect::from_origin_size(
                (
                    f64::from(origin.unrestricted) * self.cell_size.width,
                    f64::from(origin.restricted) * self.cell_size.height + padding,
                ),
                size,
            ),
        };
        Some(frame - insets)
    }

    /// Symmetric padding that centers the packed columns when they do not
    /// fill the container's cross extent.
    fn centering_padding(&self, restricted_len: u32) -> f64 {
        (self.container_cross() - f64::from(restricted_len) * self.cell_extent_restricted()) / 2.0
    }

    /// The queried rect's coverage along the growth axis, in cells.
    fn unrestricted_range(&self, rect: Rect) -> (u32, u32) {
        let cell = self.cell_extent_unrestricted();
        let (origin, extent) = match self.axis {
            Axis::Vertical => (rect.y0, rect.height()),
            Axis::Horizontal => (rect.x0, rect.width()),
        };
        let start = saturating_cell(origin / cell);
        let len = saturating_cell(extent / cell) + 1;
        (start, start.saturating_add(len))
    }

    /// Bounded-axis cell count, degenerate containers clamped to one cell
    /// (warned once per configuration change).
    fn restricted_len(&mut self) -> u32 {
        let cells = self.container_cross() / self.cell_extent_restricted();
        if cells < 1.0 || !cells.is_finite() {
            if !self.warned_degenerate {
                warn!(
                    "cannot fit a {:?} cell across a {:?} container; defaulting to one cell",
                    self.cell_size, self.container,
                );
                self.warned_degenerate = true;
            }
            return 1;
        }
        saturating_cell(cells)
    }

    fn restricted_len_quiet(&self) -> u32 {
        let cells = self.container_cross() / self.cell_extent_restricted();
        saturating_cell(cells).max(1)
    }

    fn container_cross(&self) -> f64 {
        match self.axis {
            Axis::Vertical => self.container.width,
            Axis::Horizontal => self.container.height,
        }
    }

    fn cell_extent_restricted(&self) -> f64 {
        match self.axis {
            Axis::Vertical => self.cell_size.width,
            Axis::Horizontal => self.cell_size.height,
        }
    }

    fn cell_extent_unrestricted(&self) -> f64 {
        match self.axis {
            Axis::Vertical => self.cell_size.height,
            Axis::Horizontal => self.cell_size.width,
        }
    }
}

/// Truncates a non-negative cell count to `u32`, saturating out-of-range
/// and non-finite values to zero or `u32::MAX`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Cell coordinates are intentionally u32; the range is checked first."
)]
fn saturating_cell(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        0
    } else if value >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        value as u32
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Insets;

    use super::*;
    use crate::types::Footprint;

    /// A grouped in-memory model.
    struct Quilted {
        groups: Vec<Vec<Footprint>>,
        insets: Insets,
    }

    impl Quilted {
        fn flat(sizes: &[(u32, u32)]) -> Self {
            Self {
                groups: vec![sizes.iter().map(|&(w, h)| Footprint::new(w, h)).collect()],
                insets: Insets::ZERO,
            }
        }
    }

    impl ItemSource for Quilted {
        fn group_count(&self) -> usize {
            self.groups.len()
        }

        fn item_count(&self, group: usize) -> usize {
            self.groups.get(group).map_or(0, Vec::len)
        }
    }

    impl SizeProvider for Quilted {
        fn footprint(&self, item: ItemId) -> Footprint {
            self.groups[item.group][item.item]
        }

        fn insets(&self, _group: usize) -> Insets {
            self.insets
        }
    }

    fn id(item: usize) -> ItemId {
        ItemId::new(0, item)
    }

    /// Three 100px columns, no centering slack.
    fn three_columns(sizes: &[(u32, u32)]) -> QuiltLayout<Quilted> {
        QuiltLayout::new(Quilted::flat(sizes), Size::new(300.0, 400.0))
    }

    #[test]
    fn unit_items_pack_row_major_with_first_fit_gaps() {
        let mut layout = three_columns(&[(1, 1), (1, 1), (1, 1), (1, 1), (2, 1)]);
        let visible: Vec<_> = layout.elements_in(Rect::new(0.0, 0.0, 300.0, 400.0)).to_vec();

        assert_eq!(visible.len(), 5);
        assert_eq!(visible[0].frame, Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(visible[1].frame, Rect::new(100.0, 0.0, 200.0, 100.0));
        assert_eq!(visible[2].frame, Rect::new(200.0, 0.0, 300.0, 100.0));
        assert_eq!(visible[3].frame, Rect::new(0.0, 100.0, 100.0, 200.0));
        // The 2×1 block takes the remaining two cells of row 1.
        assert_eq!(visible[4].id, id(4));
        assert_eq!(visible[4].frame, Rect::new(100.0, 100.0, 300.0, 200.0));

        assert_eq!(layout.content_extent(), Size::new(300.0, 200.0));
    }

    #[test]
    fn gap_too_narrow_for_a_block_stays_empty() {
        // Five unit items leave one free cell at column 2 of row 1; the
        // 2×1 block skips it and wraps to row 2.
        let mut layout =
            three_columns(&[(1, 1), (1, 1), (1, 1), (1, 1), (1, 1), (2, 1)]);
        let frame = layout.frame_for(id(5)).unwrap();
        assert_eq!(frame, Rect::new(0.0, 200.0, 200.0, 300.0));
        assert_eq!(layout.content_extent(), Size::new(300.0, 300.0));

        // The skipped cell resolves to no item.
        assert_eq!(
            layout.interactive_move_target(Point::new(250.0, 150.0)),
            None
        );
    }

    #[test]
    fn viewport_query_is_reference_stable_until_something_changes() {
        let mut layout = three_columns(&[(1, 1); 9]);
        let rect = Rect::new(0.0, 0.0, 300.0, 200.0);

        let first = layout.elements_in(rect);
        assert!(!first.is_empty());
        let first_ptr = first.as_ptr();
        let second = layout.elements_in(rect);
        assert_eq!(second.as_ptr(), first_ptr, "identical query recomputed");

        // A different rect recomputes.
        let other = layout.elements_in(Rect::new(0.0, 100.0, 300.0, 300.0));
        assert!(other.iter().any(|placed| placed.id == id(6)));
    }

    #[test]
    fn scroll_pattern_does_not_change_placements() {
        let sizes = [(1, 1), (2, 2), (1, 3), (3, 1), (2, 1), (1, 1), (2, 3), (1, 2)];
        let full = Rect::new(0.0, 0.0, 300.0, 1200.0);

        let mut scrolled = three_columns(&sizes);
        for step in 0..4 {
            let offset = 100.0 * f64::from(step);
            scrolled.elements_in(Rect::new(0.0, offset, 300.0, offset + 300.0));
        }
        let scrolled_items: Vec<_> = scrolled.elements_in(full).to_vec();

        let mut eager = three_columns(&sizes);
        let eager_items: Vec<_> = eager.elements_in(full).to_vec();

        assert_eq!(scrolled_items, eager_items);
    }

    #[test]
    fn invalidate_drops_placements_and_memo_together() {
        let mut layout = three_columns(&[(1, 1); 6]);
        let rect = Rect::new(0.0, 0.0, 300.0, 400.0);
        assert_eq!(layout.elements_in(rect).len(), 6);
        assert_eq!(layout.content_extent(), Size::new(300.0, 200.0));

        layout.invalidate();
        // Back to the empty state: a single empty row, no placements.
        assert_eq!(layout.content_extent(), Size::new(300.0, 100.0));
        assert_eq!(layout.frame_for(id(0)), Some(Rect::new(0.0, 0.0, 100.0, 100.0)));

        // Re-querying replays placement from scratch.
        assert_eq!(layout.elements_in(rect).len(), 6);
        assert_eq!(layout.content_extent(), Size::new(300.0, 200.0));
    }

    #[test]
    fn frame_for_places_on_demand() {
        let mut layout = three_columns(&[(1, 1); 10]);
        // No viewport query has run; asking for a frame directly works.
        assert_eq!(
            layout.frame_for(id(7)),
            Some(Rect::new(100.0, 200.0, 200.0, 300.0))
        );
        // Only rows up to the requested item exist so far.
        assert_eq!(layout.content_extent(), Size::new(300.0, 300.0));
    }

    #[test]
    fn frame_for_unknown_item_is_none() {
        let mut layout = three_columns(&[(1, 1); 3]);
        assert_eq!(layout.frame_for(id(9)), None);
        assert_eq!(layout.frame_for(ItemId::new(4, 0)), None);
    }

    #[test]
    fn empty_model_answers_every_query() {
        let mut layout = three_columns(&[]);
        assert!(layout.elements_in(Rect::new(0.0, 0.0, 300.0, 400.0)).is_empty());
        assert_eq!(layout.frame_for(id(0)), None);
        assert_eq!(layout.content_extent(), Size::new(300.0, 100.0));
        assert_eq!(layout.interactive_move_target(Point::new(10.0, 10.0)), None);
    }

    #[test]
    fn insets_shrink_frames_but_not_occupancy() {
        let mut layout = three_columns(&[(1, 1), (1, 1)]);
        layout.model_mut().insets = Insets::uniform(2.0);
        assert_eq!(
            layout.frame_for(id(0)),
            Some(Rect::new(2.0, 2.0, 98.0, 98.0))
        );
        // The cell itself is still fully occupied: a position in the
        // inset margin resolves to the item.
        assert_eq!(
            layout.interactive_move_target(Point::new(99.0, 1.0)),
            Some(id(0))
        );
    }

    #[test]
    fn packed_content_narrower_than_container_is_centered() {
        // 350px across at 100px cells: three columns and 25px of padding
        // on each side.
        let mut layout =
            QuiltLayout::new(Quilted::flat(&[(1, 1)]), Size::new(350.0, 400.0));
        assert_eq!(
            layout.frame_for(id(0)),
            Some(Rect::new(25.0, 0.0, 125.0, 100.0))
        );
        // The padding is undone when resolving positions back to items.
        assert_eq!(
            layout.interactive_move_target(Point::new(30.0, 50.0)),
            Some(id(0))
        );
        assert_eq!(layout.interactive_move_target(Point::new(10.0, 50.0)), None);
    }

    #[test]
    fn horizontal_growth_swaps_the_axes() {
        let mut layout = QuiltLayout::new(
            Quilted::flat(&[(1, 1), (1, 1), (1, 1), (1, 1)]),
            Size::new(400.0, 300.0),
        );
        layout.set_axis(Axis::Horizontal);

        // Three rows down, then the fourth item starts the next column.
        assert_eq!(layout.frame_for(id(0)), Some(Rect::new(0.0, 0.0, 100.0, 100.0)));
        assert_eq!(layout.frame_for(id(1)), Some(Rect::new(0.0, 100.0, 100.0, 200.0)));
        assert_eq!(layout.frame_for(id(2)), Some(Rect::new(0.0, 200.0, 100.0, 300.0)));
        assert_eq!(layout.frame_for(id(3)), Some(Rect::new(100.0, 0.0, 200.0, 100.0)));

        assert_eq!(layout.content_extent(), Size::new(200.0, 300.0));
    }

    #[test]
    fn oversized_item_is_placed_at_the_edge() {
        // Two columns; a 3×1 item cannot fit but is placed anyway,
        // overflowing the container.
        let mut layout =
            QuiltLayout::new(Quilted::flat(&[(3, 1), (1, 1)]), Size::new(200.0, 400.0));
        assert_eq!(
            layout.frame_for(id(0)),
            Some(Rect::new(0.0, 0.0, 300.0, 100.0))
        );
        // Packing continues normally on the next row.
        assert_eq!(
            layout.frame_for(id(1)),
            Some(Rect::new(0.0, 100.0, 100.0, 200.0))
        );
        // The viewport query reports the overflowing item once.
        let visible = layout.elements_in(Rect::new(0.0, 0.0, 200.0, 400.0));
        assert_eq!(visible.iter().filter(|placed| placed.id == id(0)).count(), 1);
    }

    #[test]
    fn degenerate_container_defaults_to_one_column() {
        // A container narrower than one cell still lays out, one item per
        // row.
        let mut layout =
            QuiltLayout::new(Quilted::flat(&[(1, 1), (1, 1)]), Size::new(60.0, 400.0));
        assert!(layout.frame_for(id(0)).is_some());
        assert_eq!(
            layout.frame_for(id(1)).map(|frame| frame.y0),
            Some(100.0)
        );
    }

    #[test]
    fn prelayout_everything_reports_exact_extent_from_the_first_query() {
        let mut layout = three_columns(&[(1, 1); 20]);
        layout.set_prelayout_everything(true);
        layout.elements_in(Rect::new(0.0, 0.0, 300.0, 10.0));
        // ceil(20 / 3) = 7 rows.
        assert_eq!(layout.content_extent(), Size::new(300.0, 700.0));
    }

    #[test]
    fn prepare_extends_placement_past_the_viewport() {
        let mut layout = three_columns(&[(1, 1); 20]);
        layout.prepare(Rect::new(0.0, 0.0, 300.0, 250.0));
        // Rows 0..3 are placed (one row beyond the viewport's trailing
        // edge).
        assert_eq!(layout.content_extent(), Size::new(300.0, 400.0));
    }

    #[test]
    fn notify_inserted_covers_the_new_item_and_drops_the_memo() {
        let mut layout = three_columns(&[(1, 1); 6]);
        let rect = Rect::new(0.0, 0.0, 300.0, 400.0);
        assert_eq!(layout.elements_in(rect).len(), 6);

        layout.model_mut().groups[0].push(Footprint::new(2, 1));
        layout.notify_inserted(id(6));

        assert_eq!(
            layout.frame_for(id(6)),
            Some(Rect::new(0.0, 200.0, 200.0, 300.0))
        );
        // The stale memo for the same rect was dropped with the mutation.
        assert_eq!(layout.elements_in(rect).len(), 7);
    }

    #[test]
    fn interactive_move_target_reads_the_grid() {
        let mut layout = three_columns(&[(2, 2), (1, 1)]);
        layout.elements_in(Rect::new(0.0, 0.0, 300.0, 400.0));

        // Anywhere within the 2×2 block resolves to it.
        assert_eq!(
            layout.interactive_move_target(Point::new(150.0, 150.0)),
            Some(id(0))
        );
        assert_eq!(
            layout.interactive_move_target(Point::new(250.0, 50.0)),
            Some(id(1))
        );
        // Unoccupied and out-of-grid positions resolve to nothing.
        assert_eq!(
            layout.interactive_move_target(Point::new(250.0, 150.0)),
            None
        );
        assert_eq!(
            layout.interactive_move_target(Point::new(-5.0, 50.0)),
            None
        );
    }

    #[test]
    fn config_changes_invalidate_only_when_they_change_something() {
        let mut layout = three_columns(&[(1, 1); 6]);
        layout.elements_in(Rect::new(0.0, 0.0, 300.0, 400.0));
        assert_eq!(layout.content_extent(), Size::new(300.0, 200.0));

        // Same values: the cache survives.
        layout.set_cell_size(Size::new(100.0, 100.0));
        layout.set_axis(Axis::Vertical);
        layout.set_container(Size::new(300.0, 400.0));
        assert_eq!(layout.content_extent(), Size::new(300.0, 200.0));

        // A real change drops it.
        layout.set_cell_size(Size::new(50.0, 50.0));
        assert_eq!(layout.content_extent(), Size::new(300.0, 50.0));
    }
}
