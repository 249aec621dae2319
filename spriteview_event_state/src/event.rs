// Copyright 2025 the Spriteview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use ui_events::keyboard::Key;

/// One raw input event delivered by the presentation surface.
///
/// Events are consumed in order, once per tick.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// A character was typed (after keyboard layout translation).
    TextTyped(char),
    /// A key was pressed.
    ///
    /// `repeat` is `true` for auto-repeat while the key is held. Only
    /// Backspace acts on repeats; Enter and Escape act on the initial press.
    KeyPressed {
        /// The logical key.
        key: Key,
        /// Whether this is an auto-repeat.
        repeat: bool,
    },
    /// Drag movement while the drag input is held, as `previous - current`.
    MouseDragDelta(Vec2),
    /// Scroll wheel movement in notches; positive zooms in.
    MouseScroll(f64),
    /// The cursor moved to a new screen position.
    MouseMoved(Point),
    /// The drag input was pressed at a screen position.
    ///
    /// For surfaces that report absolute positions only: subsequent
    /// [`InputEvent::MouseMoved`] events pan the camera until
    /// [`InputEvent::DragReleased`].
    DragPressed(Point),
    /// The drag input was released.
    DragReleased,
}

impl InputEvent {
    /// Convenience constructor for an initial (non-repeat) key press.
    #[must_use]
    pub fn key(key: Key) -> Self {
        Self::KeyPressed { key, repeat: false }
    }
}
