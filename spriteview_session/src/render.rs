// Copyright 2025 the Spriteview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame draw list and status line.

use core::fmt::Write as _;

use kurbo::{Point, Rect};
use spriteview_event_state::InputMode;
use spriteview_imaging::DrawOp;

use crate::backdrop::Shade;
use crate::session::EditorSession;

/// Horizontal inset of the status text from the window's left edge.
const STATUS_TEXT_INSET: f64 = 8.0;
/// Distance from the window's bottom edge to the status text baseline.
const STATUS_TEXT_BASELINE: f64 = 6.0;

impl EditorSession {
    /// Builds the draw list for the current state.
    ///
    /// Order is: clear, checker tiles, sprite, pixel highlight, status bar.
    /// Tiles come from the cached backdrop, so call
    /// [`EditorSession::refresh_backdrop`] first if the camera moved.
    #[must_use]
    pub fn render(&self) -> Vec<DrawOp> {
        let config = self.config();
        let window_center = self.window_center();
        let mut ops = vec![DrawOp::Clear {
            color: config.background,
        }];

        if let (Some(image), Some(footprint)) = (self.image(), self.image_footprint()) {
            ops.extend(self.backdrop().tiles().iter().map(|tile| DrawOp::FillRect {
                rect: tile.screen_rect,
                color: match tile.shade {
                    Shade::Light => config.checker_light,
                    Shade::Dark => config.checker_dark,
                },
            }));
            if let Some(handle) = image.handle() {
                ops.push(DrawOp::DrawImage {
                    image: handle,
                    dst: self.camera().to_screen_rect(footprint, window_center),
                });
            }
            if let Some(pick) = self.picked_pixel() {
                ops.push(DrawOp::StrokeRect {
                    rect: pick.highlight,
                    width: config.highlight_width,
                    color: config.highlight,
                });
            }
        }

        if config.status_bar {
            let size = self.window_size();
            let top = (size.height - config.status_bar_height).max(0.0);
            ops.push(DrawOp::FillRect {
                rect: Rect::new(0.0, top, size.width, size.height),
                color: config.status_bar_color,
            });
            ops.push(DrawOp::Text {
                origin: Point::new(STATUS_TEXT_INSET, size.height - STATUS_TEXT_BASELINE),
                text: self.status_line(),
                color: if self.notification().is_some() && self.mode() == InputMode::Navigate {
                    config.notification_color
                } else {
                    config.status_text_color
                },
            });
        }
        ops
    }

    /// The single line of text shown in the status bar.
    ///
    /// - Command mode: `:` followed by the typed buffer.
    /// - A pending notification: its message.
    /// - An image loaded: path, size, the hovered pixel and its color when
    ///   the cursor is over the image, and the zoom as a percentage.
    /// - Otherwise `no image`.
    #[must_use]
    pub fn status_line(&self) -> String {
        if self.mode() == InputMode::Command {
            return format!(":{}", self.command_buffer());
        }
        if let Some(notification) = self.notification() {
            return notification.message.clone();
        }
        let Some(image) = self.image() else {
            return String::from("no image");
        };

        // Writing into a String cannot fail.
        let mut line = String::new();
        let bounds = image.bounds();
        let _ = write!(line, "{} {}x{}", image.path(), bounds.width(), bounds.height());
        if self.cursor_over_image()
            && let Some(pick) = self.picked_pixel()
        {
            let _ = write!(line, " ({}, {})", pick.pixel.col, pick.pixel.row);
            if let Some([r, g, b, a]) = image.pixels().rgba8(pick.pixel) {
                let _ = write!(line, " #{r:02x}{g:02x}{b:02x}{a:02x}");
            }
        }
        let _ = write!(line, " {}%", self.camera().zoom() * 100.0);
        line
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};
    use spriteview_event_state::{InputEvent, Key, NamedKey};
    use spriteview_imaging::DrawOp;

    use crate::config::SessionConfig;
    use crate::session::EditorSession;
    use crate::testing::{FakeSurface, MemLoader, gradient, init_tracing};

    fn open(config: SessionConfig) -> (EditorSession, FakeSurface) {
        init_tracing();
        let mut session = EditorSession::new(config);
        let mut surface = FakeSurface::new(
            640.0,
            480.0,
            MemLoader::default().with("samples/cat.png", gradient(32, 32)),
        );
        surface.type_text(":e samples/cat.png");
        surface.push(InputEvent::key(Key::Named(NamedKey::Enter)));
        session.tick(&mut surface);
        (session, surface)
    }

    #[test]
    fn empty_session_draws_background_and_status() {
        let mut session = EditorSession::default();
        let mut surface = FakeSurface::new(200.0, 100.0, MemLoader::default());
        session.tick(&mut surface);

        let config = SessionConfig::default();
        assert_eq!(
            surface.last_frame(),
            [
                DrawOp::Clear {
                    color: config.background
                },
                DrawOp::FillRect {
                    rect: Rect::new(0.0, 80.0, 200.0, 100.0),
                    color: config.status_bar_color,
                },
                DrawOp::Text {
                    origin: Point::new(8.0, 94.0),
                    text: "no image".into(),
                    color: config.status_text_color,
                },
            ]
        );
    }

    #[test]
    fn frame_is_layered_back_to_front() {
        let (_, surface) = open(SessionConfig::default());
        let kinds: Vec<&str> = surface
            .last_frame()
            .iter()
            .map(|op| match op {
                DrawOp::Clear { .. } => "clear",
                DrawOp::FillRect { .. } => "fill",
                DrawOp::StrokeRect { .. } => "stroke",
                DrawOp::DrawImage { .. } => "image",
                DrawOp::Text { .. } => "text",
            })
            .collect();
        assert_eq!(
            kinds,
            ["clear", "fill", "fill", "fill", "fill", "image", "stroke", "fill", "text"]
        );
    }

    #[test]
    fn checker_tiles_alternate_configured_colors() {
        let config = SessionConfig::default();
        let (session, surface) = open(config.clone());
        let fills = surface.backend.last_fill_rects();
        let tiles = &fills[..session.backdrop().tiles().len()];
        assert_eq!(
            tiles,
            [
                (Rect::new(304.0, 224.0, 320.0, 240.0), config.checker_light),
                (Rect::new(304.0, 240.0, 320.0, 256.0), config.checker_dark),
                (Rect::new(320.0, 224.0, 336.0, 240.0), config.checker_light),
                (Rect::new(320.0, 240.0, 336.0, 256.0), config.checker_dark),
            ]
        );
    }

    #[test]
    fn status_bar_can_be_disabled() {
        let (_, surface) = open(SessionConfig::default().with_status_bar(false));
        assert!(
            !surface
                .last_frame()
                .iter()
                .any(|op| matches!(op, DrawOp::Text { .. }))
        );
    }

    #[test]
    fn status_line_reports_pixel_under_cursor() {
        let (mut session, mut surface) = open(SessionConfig::default());
        assert_eq!(session.status_line(), "samples/cat.png 32x32 100%");

        surface.push(InputEvent::MouseMoved(Point::new(320.0, 240.0)));
        surface.push(InputEvent::MouseScroll(1.0));
        session.tick(&mut surface);
        // At zoom 2 the window center still shows the image center.
        assert_eq!(
            session.status_line(),
            "samples/cat.png 32x32 (16, 16) #808040ff 200%"
        );

        surface.type_text(":e ");
        session.tick(&mut surface);
        assert_eq!(session.status_line(), ":e ");
    }

    #[test]
    fn highlight_uses_configured_stroke() {
        let config = SessionConfig::default();
        let (mut session, mut surface) = open(config.clone());
        surface.push(InputEvent::MouseMoved(Point::new(305.5, 225.5)));
        session.tick(&mut surface);

        let stroke = surface
            .last_frame()
            .iter()
            .find(|op| matches!(op, DrawOp::StrokeRect { .. }))
            .cloned();
        assert_eq!(
            stroke,
            Some(DrawOp::StrokeRect {
                rect: Rect::new(305.0, 225.0, 306.0, 226.0),
                width: config.highlight_width,
                color: config.highlight,
            })
        );
    }

    #[test]
    fn notifications_use_their_own_color() {
        let config = SessionConfig::default();
        let (mut session, mut surface) = open(config.clone());
        surface.type_text(":e nope.png");
        surface.push(InputEvent::key(Key::Named(NamedKey::Enter)));
        session.tick(&mut surface);

        let text = surface.last_frame().iter().find_map(|op| match op {
            DrawOp::Text { text, color, .. } => Some((text.clone(), *color)),
            _ => None,
        });
        let (text, color) = text.unwrap();
        assert!(text.starts_with("cannot read nope.png"), "{text}");
        assert_eq!(color, config.notification_color);
    }
}
