// Copyright 2025 the Quilt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrolls a viewport over a gallery of mixed-size tiles and prints what
//! the layout hands back at each step.

use kurbo::{Rect, Size};
use quilt_layout::{Footprint, ItemId, ItemSource, QuiltLayout, SizeProvider};

/// A flat gallery with deterministically varied tile sizes: mostly 1×1,
/// some 2-cell, the occasional 3-cell edge, in the spirit of a photo wall.
struct Gallery {
    count: usize,
}

impl Gallery {
    /// Weighted edge length: 1 three times out of six, 2 twice, 3 once.
    fn edge(seed: usize) -> u32 {
        match seed % 6 {
            0..=2 => 1,
            5 => 3,
            _ => 2,
        }
    }
}

impl ItemSource for Gallery {
    fn group_count(&self) -> usize {
        1
    }

    fn item_count(&self, _group: usize) -> usize {
        self.count
    }
}

impl SizeProvider for Gallery {
    fn footprint(&self, item: ItemId) -> Footprint {
        Footprint::new(Self::edge(item.item * 7 + 1), Self::edge(item.item * 5 + 3))
    }
}

fn main() {
    let gallery = Gallery { count: 40 };
    // A 400px-wide container with 100px cells: four columns.
    let container = Size::new(400.0, 600.0);
    let mut layout = QuiltLayout::new(gallery, container);

    for step in 0..4 {
        let viewport = Rect::new(
            0.0,
            f64::from(step) * 600.0,
            container.width,
            f64::from(step + 1) * 600.0,
        );
        println!("viewport {viewport:?}:");
        for placed in layout.elements_in(viewport) {
            println!("  item {:>2} -> {:?}", placed.id.item, placed.frame);
        }
        let extent = layout.content_extent();
        println!("content so far: {} x {}\n", extent.width, extent.height);
    }
}
