// Copyright 2025 the Spriteview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A one-line message about something that did not happen as asked.
///
/// It replaces the status line until the next navigation keypress or until
/// the command line is entered again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// The message.
    pub message: String,
}

impl Notification {
    /// Creates a notification from anything displayable, such as an error.
    pub fn from_error(err: &impl core::fmt::Display) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}
