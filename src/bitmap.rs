//! Bitmap decoding into interleaved RGB bytes.
//!
//! The decoder owns its pixel bytes only until the grayscale conversion has
//! consumed them. [`imread_gray`] moves the decoded [`Bitmap`] into the
//! conversion scope, so the bytes are released whether conversion succeeds
//! or fails.

use std::path::{Path, PathBuf};

use crate::grayscale::to_grayscale_with_max;
use crate::mat::{Mat, MatError};

/// Errors that can occur while reading a bitmap into a [`Mat`].
#[derive(Debug, thiserror::Error)]
pub enum BitmapError {
    #[error("failed to decode image '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("raw bitmap holds {actual} bytes, expected {expected} for {width}x{height} RGB")]
    Length {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Mat(#[from] MatError),
}

/// A decoded bitmap: RGB triplets, top row first.
#[derive(Debug, Clone)]
pub struct Bitmap {
    /// Raw pixel data, 3 bytes per pixel
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl Bitmap {
    /// Number of bytes per pixel (3 for RGB).
    pub const BYTES_PER_PIXEL: usize = 3;

    /// Decode an image file. Any alpha channel is dropped and palettized or
    /// 16-bit input is expanded to 8-bit RGB.
    pub fn open(path: &Path) -> Result<Self, BitmapError> {
        let img = image::open(path)
            .map_err(|source| BitmapError::Decode {
                path: path.to_path_buf(),
                source,
            })?
            .into_rgb8();
        let width = img.width();
        let height = img.height();
        log::debug!("Decoded {} ({}x{})", path.display(), width, height);
        Ok(Self {
            data: img.into_raw(),
            width,
            height,
        })
    }

    /// Wrap bytes that were decoded elsewhere.
    pub fn from_raw(data: Vec<u8>, width: u32, height: u32) -> Result<Self, BitmapError> {
        let expected = width as usize * height as usize * Self::BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(BitmapError::Length {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Number of pixels in the bitmap.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Convert to an inverted, normalized grayscale matrix.
    ///
    /// Consumes the bitmap; its bytes are freed before this returns.
    pub fn into_gray(self) -> Result<Mat, MatError> {
        self.into_gray_with_max().map(|(gray, _)| gray)
    }

    /// Same as [`Bitmap::into_gray`], also returning the largest value in the
    /// converted matrix.
    pub fn into_gray_with_max(self) -> Result<(Mat, f32), MatError> {
        let gray =
            to_grayscale_with_max(&self.data, self.width as usize, self.height as usize);
        self.release();
        gray
    }

    /// Free the decoded pixel bytes.
    pub fn release(self) {
        log::debug!("Released bitmap {}x{}", self.width, self.height);
    }
}

/// Read an image file straight into a grayscale [`Mat`].
///
/// Same as [`to_grayscale`](crate::grayscale::to_grayscale) on the decoded
/// bytes, except the decoder memory is released as soon as the matrix exists.
pub fn imread_gray(path: &Path) -> Result<Mat, BitmapError> {
    imread_gray_with_max(path).map(|(gray, _)| gray)
}

/// [`imread_gray`] plus the largest value in the converted matrix.
pub fn imread_gray_with_max(path: &Path) -> Result<(Mat, f32), BitmapError> {
    let bitmap = Bitmap::open(path)?;
    Ok(bitmap.into_gray_with_max()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_length_check() {
        let err = Bitmap::from_raw(vec![0; 5], 1, 2).unwrap_err();
        assert!(matches!(
            err,
            BitmapError::Length {
                expected: 6,
                actual: 5,
                ..
            }
        ));
    }

    #[test]
    fn test_into_gray_single_pixel() {
        let bitmap = Bitmap::from_raw(vec![255, 0, 0], 1, 1).unwrap();
        let gray = bitmap.into_gray().unwrap();
        assert_eq!(gray.data(), &[0.0]);
    }

    #[test]
    fn test_into_gray_zero_sized_bitmap() {
        let bitmap = Bitmap::from_raw(Vec::new(), 0, 3).unwrap();
        assert!(matches!(
            bitmap.into_gray(),
            Err(MatError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_open_missing_file() {
        let err = Bitmap::open(Path::new("/nonexistent/graymat/missing.bmp")).unwrap_err();
        assert!(matches!(err, BitmapError::Decode { .. }));
        assert!(err.to_string().contains("missing.bmp"));
    }
}
