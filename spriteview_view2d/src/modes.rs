// Copyright 2025 the Spriteview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Which point stays fixed on screen when the zoom factor changes.
///
/// This enum is consulted by [`crate::ViewportCamera::zoom_at_cursor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZoomAnchor {
    /// Zoom about the image point currently shown at the window center.
    ///
    /// With zero pan this is the image center, which is what the original
    /// viewer prototypes did.
    #[default]
    ImageCenter,
    /// Keep the image point under the cursor fixed while zooming.
    Cursor,
}

/// How a continuous image-space position is rounded to a pixel index.
///
/// This mode is consulted by [`crate::PixelPicker`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PickRounding {
    /// `floor(v - 0.5)` per axis.
    ///
    /// Position `v` selects pixel `k` for `v` in `[k + 0.5, k + 1.5)`, so a
    /// cursor exactly on a pixel's left/top edge selects the previous pixel
    /// (or pixel 0 after clamping at the image edge).
    #[default]
    HalfPixelBias,
    /// `floor(v)` per axis: position `v` selects pixel `k` for `v` in `[k, k + 1)`.
    Floor,
}

impl PickRounding {
    /// Offset subtracted from an image-space coordinate before flooring.
    #[must_use]
    pub const fn bias(self) -> f64 {
        match self {
            Self::HalfPixelBias => 0.5,
            Self::Floor => 0.0,
        }
    }
}
