// Copyright 2025 the Spriteview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spriteview View 2D: camera and pixel picking over a loaded image.
//!
//! This crate provides small, headless models for looking at a raster image
//! through a window. It focuses on:
//! - Camera state (pan + zoom) and the screen ↔ image transform.
//! - Resolving the image pixel under a cursor and its on‑screen footprint.
//!
//! It does **not** own any image data or rendering backend. Callers are
//! expected to:
//! - Keep the window center themselves and pass it to each conversion.
//! - Route drag and scroll input into [`ViewportCamera::pan`] and
//!   [`ViewportCamera::zoom_at_cursor`] at a higher layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use spriteview_view2d::{ImageBounds, PixelCoordinate, PixelPicker, ViewportCamera};
//!
//! let bounds = ImageBounds::new(32, 32);
//! let mut camera = ViewportCamera::new(bounds.center());
//! let window_center = Point::new(400.0, 300.0);
//!
//! // Two scroll notches in: 4x zoom.
//! camera.zoom_at_cursor(2.0, window_center, window_center);
//! // Drag the image 8 screen units to the right.
//! camera.pan(Vec2::new(-8.0, 0.0));
//!
//! let cursor = camera.to_screen(Point::new(5.5, 7.5), window_center);
//! let picked = PixelPicker::default().pixel_under_cursor(cursor, &camera, &bounds, window_center);
//! assert_eq!(picked, PixelCoordinate::new(5, 7));
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform and only changes in powers of two (`zoom *= 2^delta`),
//!   clamped to configurable limits so it never reaches zero or infinity.
//! - Pan is stored in image units; a screen‑space drag of `d` moves the view
//!   by `d / zoom`.
//! - Zoom anchoring and pick rounding are selectable, see [`ZoomAnchor`] and
//!   [`PickRounding`].
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod camera;
mod modes;
mod pick;

pub use bounds::ImageBounds;
pub use camera::{CameraDebugInfo, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, ViewportCamera};
pub use modes::{PickRounding, ZoomAnchor};
pub use pick::{PixelCoordinate, PixelPick, PixelPicker};
