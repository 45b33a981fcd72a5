//! RGB to grayscale conversion using Euclidean colour magnitude.

use crate::mat::{Mat, MatError};

/// Convert interleaved RGB bytes to an inverted, normalized grayscale matrix.
///
/// Each pixel's intensity is the Euclidean magnitude of its colour:
/// `V = sqrt(R² + G² + B²)`, ranging from 0 to about 441.67. Once every
/// pixel is known, the buffer is scaled so the brightest input pixel maps to
/// `0` and black maps to [`BRIGHTNESS_CEILING`](crate::mat::BRIGHTNESS_CEILING).
/// An all-black image has a zero maximum and stays all zeros.
///
/// # Arguments
/// * `pixels` - RGB triplets in row-major pixel order, `3 * width * height` bytes
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Errors
/// [`MatError::PixelCountMismatch`] when `pixels` does not hold exactly three
/// bytes per pixel (checked before anything is allocated), otherwise any
/// [`Mat::generate`] error.
pub fn to_grayscale(pixels: &[u8], width: usize, height: usize) -> Result<Mat, MatError> {
    to_grayscale_with_max(pixels, width, height).map(|(gray, _)| gray)
}

/// Same as [`to_grayscale`], also returning the largest value left in the
/// buffer after inversion.
pub fn to_grayscale_with_max(
    pixels: &[u8],
    width: usize,
    height: usize,
) -> Result<(Mat, f32), MatError> {
    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(3))
        .ok_or(MatError::Overflow { width, height })?;
    if pixels.len() != expected {
        return Err(MatError::PixelCountMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    let mut gray = Mat::generate(width, height, false)?;
    let cmax = to_grayscale_into(pixels, &mut gray)?;
    Ok((gray, cmax))
}

/// Convert RGB bytes into an existing matrix, reusing its storage.
///
/// The matrix shape decides how many pixels are read. Returns the largest
/// value left in the buffer after inversion.
pub fn to_grayscale_into(pixels: &[u8], gray: &mut Mat) -> Result<f32, MatError> {
    let expected = gray.len() * 3;
    if pixels.len() != expected {
        return Err(MatError::PixelCountMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    let mut max = 0.0f32;
    for (out, rgb) in gray.data_mut().iter_mut().zip(pixels.chunks_exact(3)) {
        let r = rgb[0] as f32;
        let g = rgb[1] as f32;
        let b = rgb[2] as f32;
        let magnitude = (r * r + g * g + b * b).sqrt();
        if magnitude > max {
            max = magnitude;
        }
        *out = magnitude;
    }

    Ok(gray.normalize_with_max(max, true))
}
