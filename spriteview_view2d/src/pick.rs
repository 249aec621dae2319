// Copyright 2025 the Spriteview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolving the image pixel under a screen-space cursor.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Vec2};

use crate::bounds::ImageBounds;
use crate::camera::ViewportCamera;
use crate::modes::PickRounding;

/// Integer pixel position in image space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct PixelCoordinate {
    /// Column, in `[0, width)`.
    pub col: u32,
    /// Row, in `[0, height)`.
    pub row: u32,
}

impl PixelCoordinate {
    /// Creates a pixel coordinate.
    #[must_use]
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// The unit square `[col, col + 1) x [row, row + 1)`.
    ///
    /// This is the on-screen footprint under [`PickRounding::Floor`]; see
    /// [`PixelPicker::pixel_footprint`] for the footprint that matches a
    /// picker's rounding.
    #[must_use]
    pub fn image_rect(self) -> Rect {
        let x = f64::from(self.col);
        let y = f64::from(self.row);
        Rect::new(x, y, x + 1.0, y + 1.0)
    }
}

/// Result of a successful pick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelPick {
    /// The picked pixel.
    pub pixel: PixelCoordinate,
    /// Screen-space rectangle covering exactly that pixel.
    pub highlight: Rect,
}

/// Stateless pixel picker.
///
/// The picker only carries its rounding mode; every result is derived from
/// the camera, bounds and cursor passed in.
///
/// The rounding mode also fixes where pixels sit: pixel `k` occupies
/// `[k + bias, k + 1 + bias)` on each axis, so the pixel that gets picked is
/// always the one drawn under the cursor. Draw the image at
/// [`PixelPicker::image_footprint`] to keep the two in agreement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PixelPicker {
    rounding: PickRounding,
}

impl PixelPicker {
    /// Creates a picker with the given rounding mode.
    #[must_use]
    pub const fn new(rounding: PickRounding) -> Self {
        Self { rounding }
    }

    /// Returns the rounding mode.
    #[must_use]
    pub const fn rounding(&self) -> PickRounding {
        self.rounding
    }

    /// Resolves the pixel under `cursor_screen`, clamped into the image.
    ///
    /// The image must have at least one pixel; use [`PixelPicker::pick`]
    /// when that is not guaranteed.
    #[must_use]
    pub fn pixel_under_cursor(
        &self,
        cursor_screen: Point,
        camera: &ViewportCamera,
        bounds: &ImageBounds,
        window_center: Point,
    ) -> PixelCoordinate {
        debug_assert!(!bounds.is_empty(), "picking requires a non-empty image");
        let p = camera.to_image(cursor_screen, window_center);
        let bias = self.rounding.bias();
        PixelCoordinate {
            col: clamp_axis((p.x - bias).floor(), bounds.width()),
            row: clamp_axis((p.y - bias).floor(), bounds.height()),
        }
    }

    /// Image-space rectangle covered by `pixel` under this rounding mode.
    #[must_use]
    pub fn pixel_footprint(&self, pixel: PixelCoordinate) -> Rect {
        pixel.image_rect() + self.origin_offset()
    }

    /// Image-space rectangle covered by the whole image under this rounding
    /// mode.
    #[must_use]
    pub fn image_footprint(&self, bounds: &ImageBounds) -> Rect {
        bounds.rect() + self.origin_offset()
    }

    /// The screen-space rectangle covering exactly `pixel`.
    #[must_use]
    pub fn highlight_rect(
        &self,
        pixel: PixelCoordinate,
        camera: &ViewportCamera,
        window_center: Point,
    ) -> Rect {
        camera.to_screen_rect(self.pixel_footprint(pixel), window_center)
    }

    /// Picks the pixel under the cursor along with its highlight rectangle.
    ///
    /// Returns `None` if the image has no pixels.
    #[must_use]
    pub fn pick(
        &self,
        cursor_screen: Point,
        camera: &ViewportCamera,
        bounds: &ImageBounds,
        window_center: Point,
    ) -> Option<PixelPick> {
        if bounds.is_empty() {
            return None;
        }
        let pixel = self.pixel_under_cursor(cursor_screen, camera, bounds, window_center);
        Some(PixelPick {
            pixel,
            highlight: self.highlight_rect(pixel, camera, window_center),
        })
    }

    /// Returns `true` if `cursor_screen` lies over the image.
    #[must_use]
    pub fn contains(
        &self,
        cursor_screen: Point,
        camera: &ViewportCamera,
        bounds: &ImageBounds,
        window_center: Point,
    ) -> bool {
        let p = camera.to_image(cursor_screen, window_center);
        let r = self.image_footprint(bounds);
        p.x >= r.x0 && p.x < r.x1 && p.y >= r.y0 && p.y < r.y1
    }

    fn origin_offset(&self) -> Vec2 {
        let bias = self.rounding.bias();
        Vec2::new(bias, bias)
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "value is clamped into [0, extent - 1] before the cast"
)]
fn clamp_axis(v: f64, extent: u32) -> u32 {
    let max = f64::from(extent.saturating_sub(1));
    if v.is_nan() {
        return 0;
    }
    v.clamp(0.0, max) as u32
}
