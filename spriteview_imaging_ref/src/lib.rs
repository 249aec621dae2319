// Copyright 2025 the Spriteview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spriteview Imaging Reference Backend.
//!
//! This crate provides a small, stateful implementation of
//! [`ImagingBackend`] and [`ResourceBackend`] for **op recording**.
//!
//! It is intentionally *not* a renderer:
//! - It does **not** rasterize to pixels.
//! - It is intended for tests and debugging that want to assert on the ops
//!   a session emits, frame by frame, and on which images are alive.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use spriteview_imaging::{Color, DrawOp, ImageDesc, ImageId, ImagingBackend, ResourceBackend};

/// Simple recording implementation of the imaging backend.
///
/// This backend:
/// - Stores image descriptors and pixels in a vector keyed by their IDs,
/// - Collects ops into the current frame until `end_frame`,
/// - Keeps every finished frame for later inspection.
#[derive(Default, Debug)]
pub struct RefBackend {
    images: Vec<Option<(ImageDesc, Vec<u8>)>>,
    pending: Vec<DrawOp>,
    frames: Vec<Vec<DrawOp>>,
}

impl RefBackend {
    /// Ops drawn since the last `end_frame`.
    pub fn pending(&self) -> &[DrawOp] {
        &self.pending
    }

    /// All finished frames, oldest first.
    pub fn frames(&self) -> &[Vec<DrawOp>] {
        &self.frames
    }

    /// The most recently finished frame.
    pub fn last_frame(&self) -> Option<&[DrawOp]> {
        self.frames.last().map(Vec::as_slice)
    }

    /// `(rect, color)` of every `FillRect` in the most recent frame, in order.
    pub fn last_fill_rects(&self) -> Vec<(Rect, Color)> {
        self.last_frame()
            .unwrap_or_default()
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillRect { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }

    /// Returns the descriptor and pixels of a live image.
    pub fn image(&self, id: ImageId) -> Option<&(ImageDesc, Vec<u8>)> {
        self.images.get(id.0 as usize)?.as_ref()
    }

    /// Number of images that have been created and not destroyed.
    pub fn live_images(&self) -> usize {
        self.images.iter().filter(|slot| slot.is_some()).count()
    }

    /// Clears recorded frames and pending ops but keeps resources.
    pub fn clear_frames(&mut self) {
        self.pending.clear();
        self.frames.clear();
    }
}

impl ResourceBackend for RefBackend {
    fn create_image(&mut self, desc: ImageDesc, pixels: &[u8]) -> ImageId {
        let id =
            u32::try_from(self.images.len()).expect("RefBackend: too many images for u32 ImageId");
        self.images.push(Some((desc, pixels.to_vec())));
        ImageId(id)
    }

    fn destroy_image(&mut self, id: ImageId) {
        let idx = id.0 as usize;
        if let Some(slot) = self.images.get_mut(idx) {
            *slot = None;
        }
    }
}

impl ImagingBackend for RefBackend {
    fn draw(&mut self, op: DrawOp) {
        self.pending.push(op);
    }

    fn end_frame(&mut self) {
        let frame = core::mem::take(&mut self.pending);
        self.frames.push(frame);
    }
}
