//! Decoded bitmap backing for image textures.

use std::path::Path;

use thiserror::Error;

/// Errors that can occur while loading a texture image.
#[derive(Error, Debug)]
pub enum TextureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decoding error: {0}")]
    Image(#[from] image::ImageError),
}

pub type TextureResult<T> = Result<T, TextureError>;

/// A read-only decoded bitmap: width, height, and packed RGB8 pixels.
///
/// A failed load is represented by the zero-height sentinel rather than an
/// error, so a missing texture file never kills a render.
#[derive(Clone, Debug, Default)]
pub struct RasterImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterImage {
    /// The zero-height sentinel standing in for missing image data.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create an image from packed RGB8 data (row-major, top row first).
    ///
    /// Panics in debug builds if the buffer size does not match.
    pub fn from_rgb8(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), (width * height * 3) as usize);
        Self {
            width,
            height,
            data,
        }
    }

    /// Decode an image file, propagating failures to the caller.
    pub fn load(path: impl AsRef<Path>) -> TextureResult<Self> {
        let img = image::open(path.as_ref())?;
        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();

        log::debug!(
            "loaded texture image {} ({}x{})",
            path.as_ref().display(),
            width,
            height
        );

        Ok(Self::from_rgb8(width, height, rgb.into_raw()))
    }

    /// Decode an image file, falling back to the empty sentinel on failure.
    pub fn open(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(image) => image,
            Err(err) => {
                log::warn!(
                    "failed to load texture image {}: {}",
                    path.as_ref().display(),
                    err
                );
                Self::empty()
            }
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Byte-triplet lookup by (column, row), clamped to the image bounds.
    ///
    /// Returns magenta for the empty sentinel so out-of-contract callers are
    /// visible; `ImageTexture` checks `height()` first and never gets here.
    pub fn pixel(&self, i: u32, j: u32) -> [u8; 3] {
        if self.data.is_empty() {
            return [255, 0, 255];
        }

        let i = i.min(self.width - 1);
        let j = j.min(self.height - 1);
        let idx = ((j * self.width + i) * 3) as usize;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sentinel() {
        let img = RasterImage::empty();
        assert_eq!(img.height(), 0);
        assert_eq!(img.width(), 0);
        assert_eq!(img.pixel(3, 5), [255, 0, 255]);
    }

    #[test]
    fn test_pixel_lookup_and_clamping() {
        // 2x2 image: red, green / blue, white
        let data = vec![
            255, 0, 0, 0, 255, 0, //
            0, 0, 255, 255, 255, 255,
        ];
        let img = RasterImage::from_rgb8(2, 2, data);

        assert_eq!(img.pixel(0, 0), [255, 0, 0]);
        assert_eq!(img.pixel(1, 0), [0, 255, 0]);
        assert_eq!(img.pixel(0, 1), [0, 0, 255]);
        assert_eq!(img.pixel(1, 1), [255, 255, 255]);

        // Out-of-bounds indices clamp to the last row/column
        assert_eq!(img.pixel(9, 9), [255, 255, 255]);
    }

    #[test]
    fn test_open_missing_file_falls_back() {
        let img = RasterImage::open("definitely/not/a/real/file.png");
        assert_eq!(img.height(), 0);
    }
}
