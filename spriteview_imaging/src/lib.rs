// Copyright 2025 the Spriteview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spriteview Imaging: backend-agnostic draw ops and backend traits.
//!
//! This crate defines the small vocabulary a viewer session uses to describe
//! one frame, and the traits a presentation surface implements to consume it.
//!
//! # Position in the stack
//!
//! - **Session**: camera, picking, checker backdrop and command line. It
//!   decides *what* to draw each tick.
//! - **Draw ops (this crate)**: colored rectangles, an image blit and a line
//!   of status text, expressed as plain data.
//! - **Backends**: whatever the presentation surface uses (GL, wgpu, a CPU
//!   rasterizer) implementing [`ImagingBackend`].
//!
//! # Core concepts
//!
//! - **Resources**: images are uploaded once through [`ResourceBackend`] and
//!   referenced by an opaque [`ImageId`] until destroyed.
//! - **Draw ops**: [`DrawOp`] values carry their own color; there is no
//!   implicit paint state between ops.
//! - **Frames**: a frame is the ordered run of ops between two
//!   [`ImagingBackend::end_frame`] calls. Later ops paint over earlier ones.
//!
//! # Example
//!
//! ```ignore
//! # use spriteview_imaging::*;
//! # use kurbo::Rect;
//! # use peniko::Color;
//! # struct MyBackend { /* implements ResourceBackend + ImagingBackend */ }
//! let mut backend = MyBackend { /* ... */ };
//!
//! backend.draw(DrawOp::Clear { color: Color::BLACK });
//! backend.fill_rect(Rect::new(0.0, 0.0, 16.0, 16.0), Color::WHITE);
//! backend.end_frame();
//! ```

#![no_std]

extern crate alloc;

use alloc::string::String;
use kurbo::{Point, Rect};
pub use peniko::Color;

/// Identifier for an image resource.
///
/// This is a small, opaque handle that is stable for the lifetime of the
/// resource. Images are created once per load and reused across frames
/// until explicitly destroyed.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageId(pub u32);

/// Description of an image resource.
///
/// Pixel data accompanying a descriptor is tightly packed, row-major,
/// unpremultiplied RGBA8: `width * height * 4` bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ImageDesc {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageDesc {
    /// Number of bytes of RGBA8 pixel data this image needs.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}

/// Draw operations, all in screen coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill the whole surface with a color.
    Clear {
        /// Fill color.
        color: Color,
    },
    /// Fill an axis-aligned rectangle.
    FillRect {
        /// Rectangle to fill.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// Stroke the outline of an axis-aligned rectangle.
    ///
    /// The stroke is centered on the rectangle edges.
    StrokeRect {
        /// Rectangle to outline.
        rect: Rect,
        /// Stroke width in screen units.
        width: f64,
        /// Stroke color.
        color: Color,
    },
    /// Draw a whole image stretched to a destination rectangle.
    ///
    /// Backends should sample with nearest-neighbor filtering so that pixel
    /// art stays crisp under magnification.
    DrawImage {
        /// Image resource to draw.
        image: ImageId,
        /// Destination rectangle.
        dst: Rect,
    },
    /// Draw a single line of text with its baseline-left at `origin`.
    ///
    /// Font choice and layout are up to the backend.
    Text {
        /// Baseline-left anchor.
        origin: Point,
        /// The text.
        text: String,
        /// Text color.
        color: Color,
    },
}

/// Backend that owns image resources.
pub trait ResourceBackend {
    /// Upload an image and return its handle.
    ///
    /// `pixels` holds [`ImageDesc::byte_len`] bytes of RGBA8 data.
    fn create_image(&mut self, desc: ImageDesc, pixels: &[u8]) -> ImageId;

    /// Release an image. Destroying an unknown or already destroyed handle is
    /// a no-op.
    fn destroy_image(&mut self, id: ImageId);
}

/// Minimal imaging backend trait.
///
/// Ops are applied in the order given. A frame ends with
/// [`ImagingBackend::end_frame`], after which the backend may present.
pub trait ImagingBackend: ResourceBackend {
    /// Apply a draw operation.
    fn draw(&mut self, op: DrawOp);

    /// Mark the end of the current frame.
    fn end_frame(&mut self) {}

    /// Fill a rectangle.
    ///
    /// This is equivalent to `self.draw(DrawOp::FillRect { rect, color })`.
    #[inline]
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.draw(DrawOp::FillRect { rect, color });
    }

    /// Outline a rectangle.
    ///
    /// This is equivalent to `self.draw(DrawOp::StrokeRect { rect, width, color })`.
    #[inline]
    fn stroke_rect(&mut self, rect: Rect, width: f64, color: Color) {
        self.draw(DrawOp::StrokeRect { rect, width, color });
    }

    /// Submit a whole frame's worth of ops and end the frame.
    fn submit(&mut self, ops: impl IntoIterator<Item = DrawOp>)
    where
        Self: Sized,
    {
        for op in ops {
            self.draw(op);
        }
        self.end_frame();
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[derive(Default)]
    struct Collect {
        ops: Vec<DrawOp>,
        frames: u32,
        next_image: u32,
    }

    impl ResourceBackend for Collect {
        fn create_image(&mut self, _desc: ImageDesc, _pixels: &[u8]) -> ImageId {
            self.next_image += 1;
            ImageId(self.next_image)
        }

        fn destroy_image(&mut self, _id: ImageId) {}
    }

    impl ImagingBackend for Collect {
        fn draw(&mut self, op: DrawOp) {
            self.ops.push(op);
        }

        fn end_frame(&mut self) {
            self.frames += 1;
        }
    }

    #[test]
    fn helpers_forward_to_draw() {
        let mut backend = Collect::default();
        let rect = Rect::new(0.0, 0.0, 4.0, 4.0);
        backend.fill_rect(rect, Color::WHITE);
        backend.stroke_rect(rect, 1.0, Color::BLACK);
        assert_eq!(
            backend.ops,
            [
                DrawOp::FillRect {
                    rect,
                    color: Color::WHITE
                },
                DrawOp::StrokeRect {
                    rect,
                    width: 1.0,
                    color: Color::BLACK
                },
            ]
        );
    }

    #[test]
    fn submit_ends_the_frame() {
        let mut backend = Collect::default();
        let image = backend.create_image(
            ImageDesc {
                width: 1,
                height: 1,
            },
            &[0, 0, 0, 255],
        );
        backend.submit([
            DrawOp::Clear {
                color: Color::BLACK,
            },
            DrawOp::DrawImage {
                image,
                dst: Rect::new(0.0, 0.0, 1.0, 1.0),
            },
        ]);
        assert_eq!(backend.ops.len(), 2);
        assert_eq!(backend.frames, 1);
    }

    #[test]
    fn byte_len_is_rgba8() {
        let desc = ImageDesc {
            width: 3,
            height: 2,
        };
        assert_eq!(desc.byte_len(), 24);
    }
}
