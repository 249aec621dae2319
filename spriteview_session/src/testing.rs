// Copyright 2025 the Spriteview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless surface and in-memory loader shared by the unit tests.

use std::collections::HashMap;
use std::io;

use kurbo::Size;
use spriteview_event_state::InputEvent;
use spriteview_imaging::{DrawOp, ImageDesc, ImageId, ImagingBackend, ResourceBackend};
use spriteview_imaging_ref::RefBackend;

use crate::error::LoadError;
use crate::pixels::{ImageLoader, ImagePixels};
use crate::surface::PresentationSurface;

/// Routes `tracing` output to the test harness; safe to call repeatedly.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// A `width` x `height` image whose pixel `(c, r)` is `[c * 8, r * 8, 0x40, 0xff]`.
pub(crate) fn gradient(width: u32, height: u32) -> ImagePixels {
    let mut rgba = Vec::new();
    for row in 0..height {
        for col in 0..width {
            let r = u8::try_from(col * 8).unwrap();
            let g = u8::try_from(row * 8).unwrap();
            rgba.extend_from_slice(&[r, g, 0x40, 0xff]);
        }
    }
    ImagePixels::new("gradient", width, height, rgba).unwrap()
}

/// Serves images from a map; anything else is "not found".
#[derive(Debug, Default)]
pub(crate) struct MemLoader {
    pub(crate) images: HashMap<String, ImagePixels>,
    pub(crate) requests: Vec<String>,
}

impl MemLoader {
    pub(crate) fn with(mut self, path: &str, pixels: ImagePixels) -> Self {
        self.images.insert(path.to_owned(), pixels);
        self
    }
}

impl ImageLoader for MemLoader {
    fn load_image(&mut self, path: &str) -> Result<ImagePixels, LoadError> {
        self.requests.push(path.to_owned());
        self.images.get(path).cloned().ok_or_else(|| LoadError::Io {
            path: path.to_owned(),
            source: io::Error::from(io::ErrorKind::NotFound),
        })
    }
}

/// A windowless surface: scripted events in, recorded frames out.
#[derive(Debug)]
pub(crate) struct FakeSurface {
    pub(crate) size: Size,
    pub(crate) queued: Vec<InputEvent>,
    pub(crate) backend: RefBackend,
    pub(crate) loader: MemLoader,
}

impl FakeSurface {
    pub(crate) fn new(width: f64, height: f64, loader: MemLoader) -> Self {
        Self {
            size: Size::new(width, height),
            queued: Vec::new(),
            backend: RefBackend::default(),
            loader,
        }
    }

    pub(crate) fn push(&mut self, event: InputEvent) {
        self.queued.push(event);
    }

    pub(crate) fn type_text(&mut self, text: &str) {
        self.queued.extend(text.chars().map(InputEvent::TextTyped));
    }

    pub(crate) fn last_frame(&self) -> &[DrawOp] {
        self.backend.last_frame().unwrap_or_default()
    }
}

impl ResourceBackend for FakeSurface {
    fn create_image(&mut self, desc: ImageDesc, pixels: &[u8]) -> ImageId {
        self.backend.create_image(desc, pixels)
    }

    fn destroy_image(&mut self, id: ImageId) {
        self.backend.destroy_image(id);
    }
}

impl ImagingBackend for FakeSurface {
    fn draw(&mut self, op: DrawOp) {
        self.backend.draw(op);
    }

    fn end_frame(&mut self) {
        self.backend.end_frame();
    }
}

impl ImageLoader for FakeSurface {
    fn load_image(&mut self, path: &str) -> Result<ImagePixels, LoadError> {
        self.loader.load_image(path)
    }
}

impl PresentationSurface for FakeSurface {
    fn window_size(&self) -> Size {
        self.size
    }

    fn drain_events(&mut self) -> Vec<InputEvent> {
        core::mem::take(&mut self.queued)
    }
}
