// Copyright 2025 the Spriteview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use spriteview_event_state::InputEvent;
use spriteview_imaging::ImagingBackend;

use crate::pixels::ImageLoader;

/// Everything a session needs from the window it lives in.
///
/// Implementors own window creation, the graphics context, event polling,
/// image decoding and rasterization. Each [`EditorSession::tick`] polls the
/// size once, drains events once and submits one frame.
///
/// [`EditorSession::tick`]: crate::EditorSession::tick
pub trait PresentationSurface: ImagingBackend + ImageLoader {
    /// Current drawable size in screen units.
    fn window_size(&self) -> Size;

    /// All input events received since the previous call, oldest first.
    fn drain_events(&mut self) -> Vec<InputEvent>;
}
