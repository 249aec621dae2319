// Copyright 2025 the Spriteview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spriteview Event State: input events and the modal command line.
//!
//! This crate provides the small state machines that sit between raw input
//! from a presentation surface and the viewer session:
//!
//! - [`InputEvent`]: the raw events a surface delivers each tick.
//! - [`drag`]: turn absolute pointer positions into pan deltas.
//! - [`mode`]: the Navigate / Command two-state machine and its buffer.
//! - [`command`]: parsing a submitted command line into a [`Command`].
//!
//! Nothing here touches the camera or loads images; the session crate wires
//! these pieces to those effects.
//!
//! ## Command entry
//!
//! ```rust
//! use spriteview_event_state::{Command, CommandLine, CommandLineEvent, InputMode};
//! use ui_events::keyboard::{Key, NamedKey};
//!
//! let mut line = CommandLine::new();
//! for ch in ":e samples/cat.png".chars() {
//!     line.text(ch);
//! }
//! assert_eq!(line.mode(), InputMode::Command);
//!
//! let CommandLineEvent::Submitted(text) = line.key(&Key::Named(NamedKey::Enter), false) else {
//!     unreachable!();
//! };
//! assert_eq!(line.mode(), InputMode::Navigate);
//! assert_eq!(Command::parse(&text), Ok(Command::Edit("samples/cat.png".into())));
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod command;
pub mod drag;
mod event;
pub mod mode;

pub use command::{Command, CommandError};
pub use event::InputEvent;
pub use mode::{CommandLine, CommandLineEvent, InputMode};
pub use ui_events::keyboard::{Key, NamedKey};
