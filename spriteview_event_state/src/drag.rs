// Copyright 2025 the Spriteview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: turn absolute pointer positions into camera pan deltas.
//!
//! ## Usage
//!
//! 1) Start a drag by calling [`DragState::start`] with the pointer position.
//! 2) On each move, call [`DragState::update`] to get `previous - current`,
//!    which is the delta the camera pans by so the image follows the pointer.
//! 3) End the drag with [`DragState::end`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use spriteview_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//!
//! drag.start(Point::new(10.0, 20.0));
//! assert!(drag.is_dragging());
//!
//! // Pointer moves right and down by 5: the pan delta points the other way.
//! let delta = drag.update(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(delta.x, -5.0);
//! assert_eq!(delta.y, -5.0);
//! ```

use kurbo::{Point, Vec2};

/// Tracks the pointer while the drag input is held.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    last_pos: Option<Point>,
}

impl DragState {
    /// Start tracking a drag from the given position.
    pub fn start(&mut self, pos: Point) {
        self.last_pos = Some(pos);
    }

    /// Record a new pointer position, returning `previous - current`.
    ///
    /// Returns `None` when no drag is active or the pointer did not move.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let last_pos = self.last_pos.as_mut()?;
        let delta = *last_pos - pos;
        *last_pos = pos;
        (delta != Vec2::ZERO).then_some(delta)
    }

    /// End the current drag and reset state.
    pub fn end(&mut self) {
        self.last_pos = None;
    }

    /// Returns `true` while a drag is active.
    pub fn is_dragging(&self) -> bool {
        self.last_pos.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_drag_state_is_not_dragging() {
        let drag = DragState::default();
        assert!(!drag.is_dragging());
    }

    #[test]
    fn update_returns_previous_minus_current() {
        let mut drag = DragState::default();
        drag.start(Point::new(10.0, 20.0));

        assert_eq!(drag.update(Point::new(15.0, 25.0)), Some(Vec2::new(-5.0, -5.0)));
        assert_eq!(drag.update(Point::new(12.0, 30.0)), Some(Vec2::new(3.0, -5.0)));
    }

    #[test]
    fn update_returns_none_when_not_dragging() {
        let mut drag = DragState::default();
        assert_eq!(drag.update(Point::new(15.0, 25.0)), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn stationary_pointer_yields_no_delta() {
        let mut drag = DragState::default();
        drag.start(Point::new(1.0, 1.0));
        assert_eq!(drag.update(Point::new(1.0, 1.0)), None);
        assert!(drag.is_dragging());
    }

    #[test]
    fn end_resets_state() {
        let mut drag = DragState::default();
        drag.start(Point::new(10.0, 20.0));
        drag.end();
        assert!(!drag.is_dragging());
        assert_eq!(drag.update(Point::new(0.0, 0.0)), None);
    }
}
