// Copyright 2025 the Spriteview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spriteview Session: the state and per-tick loop of a sprite viewer.
//!
//! An [`EditorSession`] ties together the pieces from the lower crates:
//! - a [`ViewportCamera`](spriteview_view2d::ViewportCamera) for pan and zoom,
//! - a [`PixelPicker`](spriteview_view2d::PixelPicker) for the pixel under the cursor,
//! - a [`CheckerBackdrop`] behind the sprite,
//! - a modal [`CommandLine`](spriteview_event_state::CommandLine) accepting `:e <path>` and `:q`.
//!
//! Each [`EditorSession::tick`] polls a [`PresentationSurface`] for its size
//! and input, updates state, and submits one frame of
//! [`DrawOp`](spriteview_imaging::DrawOp)s. Window creation, decoding and
//! rasterization stay behind that trait.
//!
//! The pieces can also be driven directly:
//!
//! ```rust
//! use spriteview_session::{EditorSession, ImageLoader, ImagePixels, LoadError};
//! use spriteview_imaging::DrawOp;
//!
//! struct Solid;
//!
//! impl ImageLoader for Solid {
//!     fn load_image(&mut self, path: &str) -> Result<ImagePixels, LoadError> {
//!         ImagePixels::new(path, 20, 20, vec![0xff; 20 * 20 * 4])
//!     }
//! }
//!
//! let mut session = EditorSession::default();
//! session.set_window_size(kurbo::Size::new(320.0, 240.0));
//! session.dispatch("e sprite.png", &mut Solid);
//! assert!(session.refresh_backdrop());
//!
//! // 20x20 with 16-unit tiles: two columns of two.
//! assert_eq!(session.backdrop().tiles().len(), 4);
//! let ops = session.render();
//! assert!(matches!(ops[0], DrawOp::Clear { .. }));
//! assert_eq!(session.status_line(), "sprite.png 20x20 100%");
//! ```
//!
//! Failures never propagate out of the loop: a bad command or an unreadable
//! file becomes a [`Notification`] in the status bar and is logged with
//! `tracing`.

mod backdrop;
mod config;
mod error;
mod notify;
mod pixels;
mod render;
mod session;
mod surface;

#[cfg(test)]
mod testing;

pub use backdrop::{CheckerBackdrop, CheckerTile, Shade};
pub use config::{DEFAULT_TILE_SIZE, SessionConfig};
pub use error::LoadError;
pub use notify::Notification;
pub use pixels::{FsImageLoader, ImageLoader, ImagePixels};
pub use session::{EditorSession, LoadedImage};
pub use surface::PresentationSurface;
