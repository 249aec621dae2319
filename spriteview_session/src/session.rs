// Copyright 2025 the Spriteview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};
use spriteview_event_state::drag::DragState;
use spriteview_event_state::{Command, CommandLine, CommandLineEvent, InputEvent, InputMode};
use spriteview_imaging::{ImageId, ResourceBackend};
use spriteview_view2d::{ImageBounds, PixelPick, PixelPicker, ViewportCamera};
use tracing::{debug, info, warn};

use crate::backdrop::CheckerBackdrop;
use crate::config::{SessionConfig, sanitize_zoom_limits};
use crate::notify::Notification;
use crate::pixels::{ImageLoader, ImagePixels};
use crate::surface::PresentationSurface;

/// The active sprite.
#[derive(Debug)]
pub struct LoadedImage {
    path: String,
    pixels: ImagePixels,
    bounds: ImageBounds,
    handle: Option<ImageId>,
}

impl LoadedImage {
    /// Path the image was loaded from, as typed.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Decoded pixels.
    #[must_use]
    pub fn pixels(&self) -> &ImagePixels {
        &self.pixels
    }

    /// Image-space bounds.
    #[must_use]
    pub fn bounds(&self) -> &ImageBounds {
        &self.bounds
    }

    /// Backend handle, once uploaded.
    #[must_use]
    pub fn handle(&self) -> Option<ImageId> {
        self.handle
    }
}

/// All state of one viewer session.
///
/// The session owns the camera, the loaded image, the command line and the
/// cached checker backdrop. It is driven one tick at a time by
/// [`EditorSession::tick`], or piecewise through
/// [`EditorSession::handle_event`] and [`EditorSession::render`].
#[derive(Debug)]
pub struct EditorSession {
    config: SessionConfig,
    camera: ViewportCamera,
    picker: PixelPicker,
    command_line: CommandLine,
    drag: DragState,
    image: Option<LoadedImage>,
    retired: Vec<ImageId>,
    window_size: Size,
    cursor: Point,
    backdrop: CheckerBackdrop,
    backdrop_dirty: bool,
    notification: Option<Notification>,
    quit_requested: bool,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl EditorSession {
    /// Creates a session with no image loaded, in Navigate mode.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let mut camera = ViewportCamera::default();
        let (min_zoom, max_zoom) = sanitize_zoom_limits(config.min_zoom, config.max_zoom);
        camera.set_zoom_limits(min_zoom, max_zoom);
        camera.set_zoom_anchor(config.zoom_anchor);
        Self {
            picker: PixelPicker::new(config.pick_rounding),
            backdrop: CheckerBackdrop::new(config.checker_tile_size),
            config,
            camera,
            command_line: CommandLine::new(),
            drag: DragState::default(),
            image: None,
            retired: Vec::new(),
            window_size: Size::ZERO,
            cursor: Point::ZERO,
            backdrop_dirty: true,
            notification: None,
            quit_requested: false,
        }
    }

    /// The configuration this session was created with.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &ViewportCamera {
        &self.camera
    }

    /// Current input mode.
    #[must_use]
    pub fn mode(&self) -> InputMode {
        self.command_line.mode()
    }

    /// Text typed after `:` so far; empty in Navigate mode.
    #[must_use]
    pub fn command_buffer(&self) -> &str {
        self.command_line.buffer()
    }

    /// The active sprite, if any.
    #[must_use]
    pub fn image(&self) -> Option<&LoadedImage> {
        self.image.as_ref()
    }

    /// The pending notification, if any.
    #[must_use]
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// The checker backdrop as of the last rebuild.
    #[must_use]
    pub fn backdrop(&self) -> &CheckerBackdrop {
        &self.backdrop
    }

    /// Whether the backdrop will be rebuilt on the next refresh.
    #[must_use]
    pub fn backdrop_dirty(&self) -> bool {
        self.backdrop_dirty
    }

    /// Last known cursor position in screen space.
    #[must_use]
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Last known window size.
    #[must_use]
    pub fn window_size(&self) -> Size {
        self.window_size
    }

    /// Center of the window in screen space.
    #[must_use]
    pub fn window_center(&self) -> Point {
        Point::new(self.window_size.width / 2.0, self.window_size.height / 2.0)
    }

    /// Whether `:q` was issued.
    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// The pixel under the cursor and its highlight, when an image is loaded.
    #[must_use]
    pub fn picked_pixel(&self) -> Option<PixelPick> {
        let image = self.image.as_ref()?;
        self.picker
            .pick(self.cursor, &self.camera, &image.bounds, self.window_center())
    }

    /// Where the loaded image sits in image space.
    ///
    /// The sprite, its checker backdrop and the pick highlight all use this
    /// footprint, so the picked pixel is the one drawn under the cursor.
    #[must_use]
    pub fn image_footprint(&self) -> Option<Rect> {
        let image = self.image.as_ref()?;
        Some(self.picker.image_footprint(&image.bounds))
    }

    /// Whether the cursor is over the image.
    #[must_use]
    pub fn cursor_over_image(&self) -> bool {
        self.image.as_ref().is_some_and(|image| {
            self.picker
                .contains(self.cursor, &self.camera, &image.bounds, self.window_center())
        })
    }

    /// Records the current window size; a change invalidates the backdrop.
    pub fn set_window_size(&mut self, size: Size) {
        if size == self.window_size {
            return;
        }
        debug!(width = size.width, height = size.height, "window resized");
        self.window_size = size;
        self.backdrop_dirty = true;
    }

    /// Routes one input event.
    ///
    /// `loader` is only used when the event submits an `:e` command.
    pub fn handle_event(&mut self, event: InputEvent, loader: &mut impl ImageLoader) {
        let navigating = self.mode() == InputMode::Navigate;
        match event {
            InputEvent::TextTyped(ch) => match self.command_line.text(ch) {
                CommandLineEvent::Entered => {
                    debug!("command mode");
                    self.notification = None;
                }
                CommandLineEvent::Passthrough => self.notification = None,
                _ => {}
            },
            InputEvent::KeyPressed { key, repeat } => match self.command_line.key(&key, repeat) {
                CommandLineEvent::Passthrough => self.notification = None,
                CommandLineEvent::Cancelled => debug!("command cancelled"),
                CommandLineEvent::Submitted(text) => self.dispatch(&text, loader),
                _ => {}
            },
            InputEvent::MouseDragDelta(delta) => {
                if navigating && self.camera.pan(delta) {
                    self.backdrop_dirty = true;
                }
            }
            InputEvent::MouseScroll(notches) => {
                if navigating
                    && self
                        .camera
                        .zoom_at_cursor(notches, self.cursor, self.window_center())
                {
                    self.backdrop_dirty = true;
                }
            }
            InputEvent::MouseMoved(pos) => {
                self.cursor = pos;
                if let Some(delta) = self.drag.update(pos)
                    && navigating
                    && self.camera.pan(delta)
                {
                    self.backdrop_dirty = true;
                }
            }
            InputEvent::DragPressed(pos) => {
                self.cursor = pos;
                self.drag.start(pos);
            }
            InputEvent::DragReleased => self.drag.end(),
        }
    }

    /// Parses and executes a submitted command line (without the `:`).
    ///
    /// Failures become a notification; nothing here returns an error.
    pub fn dispatch(&mut self, text: &str, loader: &mut impl ImageLoader) {
        match Command::parse(text) {
            Ok(Command::Edit(path)) => self.load(&path, loader),
            Ok(Command::Quit) => {
                info!("quit requested");
                self.quit_requested = true;
            }
            Ok(Command::Nothing) => {}
            Err(err) => {
                warn!(command = text, %err, "rejected command");
                self.notification = Some(Notification::from_error(&err));
            }
        }
    }

    /// Loads `path` as the active sprite.
    ///
    /// On success the camera is reset to zoom 1 around the new image center
    /// and the backdrop is invalidated. On failure nothing changes except the
    /// notification.
    pub fn load(&mut self, path: &str, loader: &mut impl ImageLoader) {
        match loader.load_image(path) {
            Ok(pixels) => {
                let bounds = pixels.bounds();
                info!(path, width = bounds.width(), height = bounds.height(), "loaded image");
                self.camera.reset(self.picker.image_footprint(&bounds).center());
                if let Some(handle) = self.image.take().and_then(|old| old.handle) {
                    self.retired.push(handle);
                }
                self.image = Some(LoadedImage {
                    path: path.to_owned(),
                    pixels,
                    bounds,
                    handle: None,
                });
                self.notification = None;
                self.backdrop_dirty = true;
            }
            Err(err) => {
                warn!(path, %err, "image load failed");
                self.notification = Some(Notification::from_error(&err));
            }
        }
    }

    /// Uploads a newly loaded image and releases replaced ones.
    pub fn sync_resources(&mut self, backend: &mut impl ResourceBackend) {
        for handle in self.retired.drain(..) {
            backend.destroy_image(handle);
        }
        if let Some(image) = &mut self.image
            && image.handle.is_none()
        {
            image.handle = Some(backend.create_image(image.pixels.desc(), image.pixels.as_bytes()));
        }
    }

    /// Rebuilds the checker backdrop if anything it depends on changed.
    ///
    /// Returns `true` if a rebuild happened.
    pub fn refresh_backdrop(&mut self) -> bool {
        if !self.backdrop_dirty {
            return false;
        }
        self.backdrop_dirty = false;
        let window_center = self.window_center();
        match &self.image {
            Some(image) => {
                let footprint = self.picker.image_footprint(&image.bounds);
                self.backdrop.rebuild(footprint, &self.camera, window_center);
                debug!(tiles = self.backdrop.tiles().len(), "rebuilt checker backdrop");
                true
            }
            None => {
                self.backdrop.clear();
                false
            }
        }
    }

    /// Runs one frame: poll size, drain events, refresh derived state, draw.
    pub fn tick<S: PresentationSurface>(&mut self, surface: &mut S) {
        self.set_window_size(surface.window_size());
        for event in surface.drain_events() {
            self.handle_event(event, surface);
        }
        self.sync_resources(surface);
        self.refresh_backdrop();
        surface.submit(self.render());
    }
}
