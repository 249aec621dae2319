// Copyright 2025 the Spriteview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

/// Pixel extent of the loaded image.
///
/// Pixel indices run over `[0, width) x [0, height)`. Where those pixels
/// sit in image space depends on the picker's rounding mode, see
/// [`PixelPicker::image_footprint`](crate::PixelPicker::image_footprint).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageBounds {
    width: u32,
    height: u32,
    center: Point,
}

impl ImageBounds {
    /// Creates bounds for a `width` x `height` image.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            center: Point::new(f64::from(width) / 2.0, f64::from(height) / 2.0),
        }
    }

    /// Image width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Center of the image in image space.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// The image's full extent in image space.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }

    /// Returns `true` if the image has no pixels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::ImageBounds;

    #[test]
    fn center_is_half_extent() {
        let bounds = ImageBounds::new(10, 7);
        assert_eq!(bounds.center().x, 5.0);
        assert_eq!(bounds.center().y, 3.5);
        assert_eq!(bounds.rect().area(), 70.0);
        assert!(!bounds.is_empty());
        assert!(ImageBounds::new(0, 4).is_empty());
    }
}
