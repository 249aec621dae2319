// Copyright 2025 the Spriteview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Rect, Vec2};

use crate::modes::ZoomAnchor;

/// Smallest zoom factor reachable by default (`2^-8`).
pub const DEFAULT_MIN_ZOOM: f64 = 1.0 / 256.0;
/// Largest zoom factor reachable by default (`2^8`).
pub const DEFAULT_MAX_ZOOM: f64 = 256.0;

/// Pan + zoom camera over a loaded image.
///
/// The camera maps image space into screen space in three steps:
/// 1. translate by `-pan`,
/// 2. scale by `zoom` about the anchor center (the image center),
/// 3. translate by the window center.
///
/// So with zero pan the anchor center lands on the window center, and
/// `pan` is expressed in image units. The window center is passed to each
/// conversion rather than stored, so a resize never leaves stale state here.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportCamera {
    pan: Vec2,
    zoom: f64,
    anchor_center: Point,
    min_zoom: f64,
    max_zoom: f64,
    zoom_anchor: ZoomAnchor,
}

impl Default for ViewportCamera {
    fn default() -> Self {
        Self::new(Point::ORIGIN)
    }
}

impl ViewportCamera {
    /// Creates a camera anchored at `anchor_center` with zoom `1.0` and no pan.
    ///
    /// Zoom is clamped to `[2^-8, 2^8]` by default.
    #[must_use]
    pub fn new(anchor_center: Point) -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
            anchor_center,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            zoom_anchor: ZoomAnchor::default(),
        }
    }

    /// Current pan offset in image units.
    #[must_use]
    pub fn pan_offset(&self) -> Vec2 {
        self.pan
    }

    /// Current uniform zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Image-space point that zoom scales about.
    #[must_use]
    pub fn anchor_center(&self) -> Point {
        self.anchor_center
    }

    /// Returns the zoom anchoring behavior.
    #[must_use]
    pub fn zoom_anchor(&self) -> ZoomAnchor {
        self.zoom_anchor
    }

    /// Sets the zoom anchoring behavior.
    pub fn set_zoom_anchor(&mut self, anchor: ZoomAnchor) {
        self.zoom_anchor = anchor;
    }

    /// Sets the minimum and maximum zoom factors.
    ///
    /// The provided range is normalized so that `min_zoom <= max_zoom`, and
    /// the current zoom is clamped into the new range. Limits that are not
    /// finite and strictly positive are rejected and leave the camera as it
    /// was.
    ///
    /// Zoom moves in powers of two; limits that are powers of two keep every
    /// reachable zoom a power of two.
    ///
    /// Returns `true` if the limits were applied.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) -> bool {
        let usable = |z: f64| z.is_finite() && z > 0.0;
        if !usable(min_zoom) || !usable(max_zoom) {
            return false;
        }
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = self.zoom.clamp(self.min_zoom, self.max_zoom);
        true
    }

    /// Returns the `(min, max)` zoom limits.
    #[must_use]
    pub fn zoom_limits(&self) -> (f64, f64) {
        (self.min_zoom, self.max_zoom)
    }

    /// Resets to zoom `1.0` and zero pan around a new anchor center.
    ///
    /// Called whenever a new image is loaded.
    pub fn reset(&mut self, anchor_center: Point) {
        self.anchor_center = anchor_center;
        self.pan = Vec2::ZERO;
        self.zoom = 1.0_f64.clamp(self.min_zoom, self.max_zoom);
    }

    /// Pans by a screen-space delta.
    ///
    /// `delta_screen` is `previous_cursor - current_cursor`, so the image
    /// follows the cursor while dragging. The pan offset moves by
    /// `delta_screen / zoom` image units.
    ///
    /// Returns `true` if the camera changed.
    pub fn pan(&mut self, delta_screen: Vec2) -> bool {
        if delta_screen == Vec2::ZERO || !delta_screen.is_finite() {
            return false;
        }
        self.pan += delta_screen / self.zoom;
        true
    }

    /// Multiplies the zoom factor by `2^scroll_delta`, clamped to the zoom limits.
    ///
    /// With [`ZoomAnchor::ImageCenter`] the image point at the window center
    /// stays put; with [`ZoomAnchor::Cursor`] the image point under `cursor`
    /// stays put.
    ///
    /// Returns `true` if the camera changed.
    pub fn zoom_at_cursor(
        &mut self,
        scroll_delta: f64,
        cursor: Point,
        window_center: Point,
    ) -> bool {
        if scroll_delta == 0.0 || !scroll_delta.is_finite() {
            return false;
        }
        let old_zoom = self.zoom;
        let new_zoom =
            (old_zoom * 2.0_f64.powf(scroll_delta)).clamp(self.min_zoom, self.max_zoom);
        if new_zoom == old_zoom {
            return false;
        }

        match self.zoom_anchor {
            ZoomAnchor::ImageCenter => self.zoom = new_zoom,
            ZoomAnchor::Cursor => {
                let before = self.to_image(cursor, window_center);
                self.zoom = new_zoom;
                let after = self.to_image(cursor, window_center);
                self.pan += before - after;
            }
        }
        true
    }

    /// Converts an image-space point into screen coordinates.
    #[must_use]
    pub fn to_screen(&self, image_point: Point, window_center: Point) -> Point {
        let local = (image_point - self.anchor_center) - self.pan;
        window_center + local * self.zoom
    }

    /// Converts a screen-space point into image coordinates.
    ///
    /// This is the exact algebraic inverse of [`ViewportCamera::to_screen`].
    #[must_use]
    pub fn to_image(&self, screen_point: Point, window_center: Point) -> Point {
        let local = (screen_point - window_center) / self.zoom;
        self.anchor_center + self.pan + local
    }

    /// Converts an image-space rectangle into screen coordinates.
    #[must_use]
    pub fn to_screen_rect(&self, rect: Rect, window_center: Point) -> Rect {
        // Zoom is a positive uniform scale, so mapping two corners is enough.
        Rect::from_points(
            self.to_screen(rect.origin(), window_center),
            self.to_screen(Point::new(rect.x1, rect.y1), window_center),
        )
    }

    /// Converts a screen-space rectangle into image coordinates.
    #[must_use]
    pub fn to_image_rect(&self, rect: Rect, window_center: Point) -> Rect {
        Rect::from_points(
            self.to_image(rect.origin(), window_center),
            self.to_image(Point::new(rect.x1, rect.y1), window_center),
        )
    }

    /// The image → screen transform as an affine matrix.
    #[must_use]
    pub fn world_to_screen(&self, window_center: Point) -> Affine {
        Affine::translate(window_center.to_vec2())
            * Affine::scale(self.zoom)
            * Affine::translate(-(self.anchor_center.to_vec2() + self.pan))
    }

    /// Snapshot of the current camera state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CameraDebugInfo {
        CameraDebugInfo {
            pan: self.pan,
            zoom: self.zoom,
            anchor_center: self.anchor_center,
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
            zoom_anchor: self.zoom_anchor,
        }
    }
}

/// Debug snapshot of a [`ViewportCamera`] state.
#[derive(Clone, Copy, Debug)]
pub struct CameraDebugInfo {
    /// Current pan offset in image units.
    pub pan: Vec2,
    /// Current uniform zoom factor.
    pub zoom: f64,
    /// Image-space point that zoom scales about.
    pub anchor_center: Point,
    /// Minimum zoom factor.
    pub min_zoom: f64,
    /// Maximum zoom factor.
    pub max_zoom: f64,
    /// Zoom anchoring behavior.
    pub zoom_anchor: ZoomAnchor,
}
