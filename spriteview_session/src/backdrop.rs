// Copyright 2025 the Spriteview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The light/dark checkerboard drawn behind the sprite to show transparency.

use kurbo::{Point, Rect};
use spriteview_view2d::ViewportCamera;

use crate::config::sanitize_tile_size;

/// Tile shade, chosen by the parity of the tile's running index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shade {
    /// Even index.
    Light,
    /// Odd index.
    Dark,
}

/// One checker tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CheckerTile {
    /// Footprint in image space, clipped to the image.
    pub image_rect: Rect,
    /// Footprint in screen space at the time of the last rebuild.
    pub screen_rect: Rect,
    /// Light or dark.
    pub shade: Shade,
}

/// Cached checker tiles covering the loaded image.
///
/// Tiles are produced column by column: the outer loop walks x from the
/// image's left edge, the inner loop walks y from the top edge, both in
/// steps of the tile size. A running index increments once per tile and
/// picks the shade by parity, so consecutive tiles always alternate.
///
/// Every [`CheckerBackdrop::rebuild`] regenerates all tiles. The cost is
/// proportional to the image area over the tile area, per rebuild.
#[derive(Clone, Debug)]
pub struct CheckerBackdrop {
    tile_size: f64,
    tiles: Vec<CheckerTile>,
    generation: u64,
}

impl CheckerBackdrop {
    /// Creates an empty backdrop. Invalid tile sizes fall back to 16.
    #[must_use]
    pub fn new(tile_size: f64) -> Self {
        Self {
            tile_size: sanitize_tile_size(tile_size),
            tiles: Vec::new(),
            generation: 0,
        }
    }

    /// Tile edge length in image units.
    #[must_use]
    pub fn tile_size(&self) -> f64 {
        self.tile_size
    }

    /// Regenerates all tiles covering `footprint`, the image's extent in
    /// image space, as seen through `camera`.
    ///
    /// Tile steps start at the footprint's top-left corner.
    pub fn rebuild(&mut self, footprint: Rect, camera: &ViewportCamera, window_center: Point) {
        self.tiles.clear();
        let width = footprint.width();
        let height = footprint.height();
        let step = self.tile_size;

        let mut index = 0_usize;
        let mut col = 0_u32;
        loop {
            let left = f64::from(col) * step;
            if left >= width {
                break;
            }
            let x0 = footprint.x0 + left;
            let x1 = (x0 + step).min(footprint.x1);
            let mut row = 0_u32;
            loop {
                let top = f64::from(row) * step;
                if top >= height {
                    break;
                }
                let y0 = footprint.y0 + top;
                let y1 = (y0 + step).min(footprint.y1);
                let image_rect = Rect::new(x0, y0, x1, y1);
                self.tiles.push(CheckerTile {
                    image_rect,
                    screen_rect: camera.to_screen_rect(image_rect, window_center),
                    shade: if index % 2 == 0 {
                        Shade::Light
                    } else {
                        Shade::Dark
                    },
                });
                index += 1;
                row += 1;
            }
            col += 1;
        }
        self.generation += 1;
    }

    /// Drops all tiles, e.g. when no image is loaded.
    ///
    /// This does not count as a rebuild.
    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    /// Tiles from the last rebuild, in iteration order.
    #[must_use]
    pub fn tiles(&self) -> &[CheckerTile] {
        &self.tiles
    }

    /// How many times [`CheckerBackdrop::rebuild`] has run.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Default for CheckerBackdrop {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_TILE_SIZE)
    }
}
