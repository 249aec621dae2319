// Copyright 2025 the Spriteview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use spriteview_view2d::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, PickRounding, ZoomAnchor};

/// Default checker tile edge, in image units.
pub const DEFAULT_TILE_SIZE: f64 = 16.0;

/// Tunables for an [`EditorSession`](crate::EditorSession).
///
/// All fields have working defaults; use the `with_*` methods to override
/// individual settings:
///
/// ```rust
/// use spriteview_session::SessionConfig;
/// use spriteview_view2d::ZoomAnchor;
///
/// let config = SessionConfig::default()
///     .with_zoom_anchor(ZoomAnchor::Cursor)
///     .with_status_bar(false);
/// assert_eq!(config.checker_tile_size, 16.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SessionConfig {
    /// Edge length of a checker tile in image units.
    pub checker_tile_size: f64,
    /// Color of even-indexed checker tiles.
    pub checker_light: Color,
    /// Color of odd-indexed checker tiles.
    pub checker_dark: Color,
    /// Color the surface is cleared to each frame.
    pub background: Color,
    /// Outline color of the picked-pixel highlight.
    pub highlight: Color,
    /// Outline width of the picked-pixel highlight, in screen units.
    pub highlight_width: f64,
    /// Smallest reachable zoom factor.
    pub min_zoom: f64,
    /// Largest reachable zoom factor.
    pub max_zoom: f64,
    /// Which point zoom scales about.
    pub zoom_anchor: ZoomAnchor,
    /// How a cursor position rounds to a pixel.
    pub pick_rounding: PickRounding,
    /// Whether to draw the status bar.
    pub status_bar: bool,
    /// Status bar height in screen units.
    pub status_bar_height: f64,
    /// Status bar fill color.
    pub status_bar_color: Color,
    /// Status text color.
    pub status_text_color: Color,
    /// Status text color while a notification is shown.
    pub notification_color: Color,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            checker_tile_size: DEFAULT_TILE_SIZE,
            checker_light: Color::from_rgb8(0xcc, 0xcc, 0xcc),
            checker_dark: Color::from_rgb8(0x99, 0x99, 0x99),
            background: Color::new([0.25, 0.265, 0.29, 1.0]),
            highlight: Color::from_rgb8(0xff, 0xff, 0x00),
            highlight_width: 1.0,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            zoom_anchor: ZoomAnchor::ImageCenter,
            pick_rounding: PickRounding::HalfPixelBias,
            status_bar: true,
            status_bar_height: 20.0,
            status_bar_color: Color::from_rgb8(0x1e, 0x1f, 0x22),
            status_text_color: Color::from_rgb8(0xe6, 0xe6, 0xe6),
            notification_color: Color::from_rgb8(0xff, 0x6b, 0x6b),
        }
    }
}

impl SessionConfig {
    /// Sets the checker tile size. Non-positive or non-finite sizes fall back
    /// to [`DEFAULT_TILE_SIZE`].
    #[must_use]
    pub fn with_checker_tile_size(mut self, size: f64) -> Self {
        self.checker_tile_size = sanitize_tile_size(size);
        self
    }

    /// Sets the two checker colors.
    #[must_use]
    pub fn with_checker_colors(mut self, light: Color, dark: Color) -> Self {
        self.checker_light = light;
        self.checker_dark = dark;
        self
    }

    /// Sets the zoom limits.
    ///
    /// Each limit is rounded inward to a power of two. Limits that are not
    /// finite and positive, or that leave no power of two between them, fall
    /// back to [`DEFAULT_MIN_ZOOM`] and [`DEFAULT_MAX_ZOOM`].
    #[must_use]
    pub fn with_zoom_limits(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        (self.min_zoom, self.max_zoom) = sanitize_zoom_limits(min_zoom, max_zoom);
        self
    }

    /// Sets the zoom anchor.
    #[must_use]
    pub fn with_zoom_anchor(mut self, anchor: ZoomAnchor) -> Self {
        self.zoom_anchor = anchor;
        self
    }

    /// Sets the pick rounding.
    #[must_use]
    pub fn with_pick_rounding(mut self, rounding: PickRounding) -> Self {
        self.pick_rounding = rounding;
        self
    }

    /// Enables or disables the status bar.
    #[must_use]
    pub fn with_status_bar(mut self, enabled: bool) -> Self {
        self.status_bar = enabled;
        self
    }
}

pub(crate) fn sanitize_tile_size(size: f64) -> f64 {
    if size.is_finite() && size > 0.0 {
        size
    } else {
        DEFAULT_TILE_SIZE
    }
}

pub(crate) fn sanitize_zoom_limits(min_zoom: f64, max_zoom: f64) -> (f64, f64) {
    let usable = |z: f64| z.is_finite() && z > 0.0;
    if !usable(min_zoom) || !usable(max_zoom) {
        return (DEFAULT_MIN_ZOOM, DEFAULT_MAX_ZOOM);
    }
    let (lo, hi) = if min_zoom <= max_zoom {
        (min_zoom, max_zoom)
    } else {
        (max_zoom, min_zoom)
    };
    let lo = lo.log2().ceil().exp2();
    let hi = hi.log2().floor().exp2();
    if lo <= hi {
        (lo, hi)
    } else {
        (DEFAULT_MIN_ZOOM, DEFAULT_MAX_ZOOM)
    }
}
