// Copyright 2025 the Spriteview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-mode keyboard routing: free navigation vs. a typed `:` command line.
//!
//! ```text
//!            ':' typed
//! Navigate ───────────▶ Command ──┐ printable char: append
//!    ▲                     │  ▲   │ Backspace (press/repeat): pop
//!    └─── Escape / Enter ──┘  └───┘
//! ```
//!
//! [`CommandLine`] only tracks the mode and the buffer. What to do with a
//! submitted command, and what navigation keys mean, is up to the caller.

use alloc::string::String;
use ui_events::keyboard::{Key, NamedKey};

/// Current input mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Input manipulates the camera.
    #[default]
    Navigate,
    /// Input edits the command buffer.
    Command,
}

/// What a key or character did to the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandLineEvent {
    /// Not consumed; the caller may treat it as a navigation keypress.
    Passthrough,
    /// Switched from Navigate to Command with an empty buffer.
    Entered,
    /// The buffer was edited (or an edit was a no-op).
    Edited,
    /// Consumed in Command mode without effect.
    Ignored,
    /// Escape: back to Navigate, buffer discarded.
    Cancelled,
    /// Enter: back to Navigate; the buffer contents to dispatch.
    Submitted(String),
}

/// The modal command line state machine.
#[derive(Clone, Debug, Default)]
pub struct CommandLine {
    mode: InputMode,
    buffer: String,
}

impl CommandLine {
    /// Creates a command line in Navigate mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Current buffer; always empty in Navigate mode.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Returns `true` in Command mode.
    #[must_use]
    pub fn is_command(&self) -> bool {
        self.mode == InputMode::Command
    }

    /// Feeds a typed character.
    pub fn text(&mut self, ch: char) -> CommandLineEvent {
        match self.mode {
            InputMode::Navigate if ch == ':' => {
                self.mode = InputMode::Command;
                self.buffer.clear();
                CommandLineEvent::Entered
            }
            InputMode::Navigate => CommandLineEvent::Passthrough,
            InputMode::Command if ch.is_control() => CommandLineEvent::Ignored,
            InputMode::Command => {
                self.buffer.push(ch);
                CommandLineEvent::Edited
            }
        }
    }

    /// Feeds a key press.
    ///
    /// Backspace acts on both initial presses and repeats; Enter and Escape
    /// ignore repeats so a held key cannot submit twice.
    pub fn key(&mut self, key: &Key, repeat: bool) -> CommandLineEvent {
        if self.mode == InputMode::Navigate {
            return CommandLineEvent::Passthrough;
        }
        match key {
            Key::Named(NamedKey::Backspace) => {
                self.buffer.pop();
                CommandLineEvent::Edited
            }
            Key::Named(NamedKey::Escape) if !repeat => {
                self.mode = InputMode::Navigate;
                self.buffer.clear();
                CommandLineEvent::Cancelled
            }
            Key::Named(NamedKey::Enter) if !repeat => {
                self.mode = InputMode::Navigate;
                CommandLineEvent::Submitted(core::mem::take(&mut self.buffer))
            }
            _ => CommandLineEvent::Ignored,
        }
    }
}
