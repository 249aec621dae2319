// Copyright 2025 the Spriteview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoded sprite pixels and the capability to load them.

use std::path::Path;

use peniko::Color;
use spriteview_imaging::ImageDesc;
use spriteview_view2d::{ImageBounds, PixelCoordinate};

use crate::error::LoadError;

/// A decoded image: tightly packed, row-major, unpremultiplied RGBA8.
#[derive(Clone, PartialEq, Eq)]
pub struct ImagePixels {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl core::fmt::Debug for ImagePixels {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ImagePixels")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("rgba", &format_args!("[{} bytes]", self.rgba.len()))
            .finish()
    }
}

impl ImagePixels {
    /// Wraps an RGBA8 buffer, checking that it matches the dimensions.
    ///
    /// `path` is only used for error reporting.
    pub fn new(path: &str, width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, LoadError> {
        if width == 0 || height == 0 {
            return Err(LoadError::Empty {
                path: path.to_owned(),
            });
        }
        let expected = ImageDesc { width, height }.byte_len();
        if rgba.len() != expected {
            return Err(LoadError::SizeMismatch {
                expected,
                found: rgba.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.rgba
    }

    /// Image-space bounds of this image.
    #[must_use]
    pub fn bounds(&self) -> ImageBounds {
        ImageBounds::new(self.width, self.height)
    }

    /// Resource descriptor for uploading to a backend.
    #[must_use]
    pub fn desc(&self) -> ImageDesc {
        ImageDesc {
            width: self.width,
            height: self.height,
        }
    }

    /// The four RGBA bytes of a pixel, or `None` outside the image.
    #[must_use]
    pub fn rgba8(&self, pixel: PixelCoordinate) -> Option<[u8; 4]> {
        if pixel.col >= self.width || pixel.row >= self.height {
            return None;
        }
        let idx = (pixel.row as usize * self.width as usize + pixel.col as usize) * 4;
        let px = self.rgba.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// The sampled color of a pixel, or `None` outside the image.
    #[must_use]
    pub fn color(&self, pixel: PixelCoordinate) -> Option<Color> {
        let [r, g, b, a] = self.rgba8(pixel)?;
        Some(Color::from_rgba8(r, g, b, a))
    }
}

/// Capability to turn a path into pixels.
///
/// Loading is synchronous and only happens on an explicit `:e` command.
pub trait ImageLoader {
    /// Loads and decodes the image at `path`.
    fn load_image(&mut self, path: &str) -> Result<ImagePixels, LoadError>;
}

/// Loads images from the filesystem with the `image` crate.
///
/// Paths are resolved relative to `root` when one is set, otherwise relative
/// to the process working directory.
#[derive(Clone, Debug, Default)]
pub struct FsImageLoader {
    root: Option<std::path::PathBuf>,
}

impl FsImageLoader {
    /// Creates a loader resolving paths against the working directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a loader resolving relative paths against `root`.
    #[must_use]
    pub fn with_root(root: impl Into<std::path::PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }
}

impl ImageLoader for FsImageLoader {
    fn load_image(&mut self, path: &str) -> Result<ImagePixels, LoadError> {
        let full = match &self.root {
            Some(root) => root.join(path),
            None => Path::new(path).to_path_buf(),
        };
        let decoded = image::open(&full).map_err(|err| match err {
            image::ImageError::IoError(source) => LoadError::Io {
                path: path.to_owned(),
                source,
            },
            source => LoadError::Decode {
                path: path.to_owned(),
                source,
            },
        })?;
        let rgba = decoded.into_rgba8();
        let (width, height) = rgba.dimensions();
        ImagePixels::new(path, width, height, rgba.into_raw())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn checker_2x2() -> ImagePixels {
        #[rustfmt::skip]
        let rgba = vec![
            255, 0, 0, 255,    0, 255, 0, 255,
            0, 0, 255, 255,    255, 255, 255, 0,
        ];
        ImagePixels::new("mem", 2, 2, rgba).unwrap()
    }

    #[test]
    fn samples_row_major() {
        let img = checker_2x2();
        assert_eq!(img.rgba8(PixelCoordinate::new(1, 0)), Some([0, 255, 0, 255]));
        assert_eq!(img.rgba8(PixelCoordinate::new(0, 1)), Some([0, 0, 255, 255]));
        assert_eq!(img.rgba8(PixelCoordinate::new(2, 0)), None);
        assert_eq!(
            img.color(PixelCoordinate::new(1, 1)),
            Some(Color::from_rgba8(255, 255, 255, 0))
        );
    }

    #[test]
    fn rejects_bad_buffers() {
        assert!(matches!(
            ImagePixels::new("a.png", 0, 3, Vec::new()),
            Err(LoadError::Empty { .. })
        ));
        assert!(matches!(
            ImagePixels::new("a.png", 2, 2, vec![0; 15]),
            Err(LoadError::SizeMismatch {
                expected: 16,
                found: 15
            })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let mut loader = FsImageLoader::new();
        let err = loader
            .load_image("definitely/not/here.png")
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }), "{err:?}");
        assert!(err.to_string().starts_with("cannot read definitely/not/here.png"));
    }

    #[test]
    fn decodes_png_from_disk() {
        let dir = std::env::temp_dir().join(format!("spriteview-load-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let img = image::RgbaImage::from_raw(3, 2, (0..24).collect()).unwrap();
        img.save(dir.join("tiny.png")).unwrap();

        let mut loader = FsImageLoader::with_root(&dir);
        let pixels = loader.load_image("tiny.png").unwrap();
        assert_eq!((pixels.width(), pixels.height()), (3, 2));
        assert_eq!(pixels.rgba8(PixelCoordinate::new(2, 1)), Some([20, 21, 22, 23]));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn garbage_is_decode_error() {
        let dir = std::env::temp_dir().join(format!("spriteview-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let mut file = std::fs::File::create(dir.join("bad.png")).unwrap();
        file.write_all(b"not a png at all").unwrap();
        drop(file);

        let err = FsImageLoader::with_root(&dir).load_image("bad.png").unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }), "{err:?}");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
