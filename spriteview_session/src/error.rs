// Copyright 2025 the Spriteview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io;

/// Why an image could not be made the active sprite.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// Path as typed by the user.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The file was read but could not be decoded.
    #[error("cannot decode {path}: {source}")]
    Decode {
        /// Path as typed by the user.
        path: String,
        /// Underlying decoder error.
        #[source]
        source: image::ImageError,
    },
    /// The image has no pixels.
    #[error("{path} has no pixels")]
    Empty {
        /// Path as typed by the user.
        path: String,
    },
    /// The pixel buffer does not match the stated dimensions.
    #[error("pixel buffer is {found} bytes, expected {expected}")]
    SizeMismatch {
        /// Bytes required by `width * height * 4`.
        expected: usize,
        /// Bytes supplied.
        found: usize,
    },
}
