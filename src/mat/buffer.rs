//! Owned single-channel f32 buffer in row-major layout.

use super::MatError;

/// Two-dimensional matrix of `f32` values, row-major.
///
/// The element at column `x`, row `y` lives at index `y * width + x`. Width
/// and height are always at least 1 and `data().len()` is always
/// `width * height`. Each `Mat` exclusively owns its storage; the only way to
/// share contents is an explicit [`Mat::copy`].
#[derive(Debug, Clone, PartialEq)]
pub struct Mat {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl Mat {
    /// Allocate a `width x height` matrix.
    ///
    /// Every element starts at `0.0` whether or not `zeroed` is set. The flag
    /// is kept for callers that distinguish the two allocation styles, but
    /// the observable result is identical.
    ///
    /// # Errors
    /// * [`MatError::InvalidDimensions`] if either dimension is zero
    /// * [`MatError::Overflow`] if the element or byte count overflows `usize`
    /// * [`MatError::AllocationFailed`] if the allocator refuses the request
    pub fn generate(width: usize, height: usize, zeroed: bool) -> Result<Self, MatError> {
        if width < 1 || height < 1 {
            return Err(MatError::InvalidDimensions { width, height });
        }

        let pixel_count = width
            .checked_mul(height)
            .ok_or(MatError::Overflow { width, height })?;
        let bytes = pixel_count
            .checked_mul(std::mem::size_of::<f32>())
            .ok_or(MatError::Overflow { width, height })?;

        let mut data = Vec::new();
        data.try_reserve_exact(pixel_count)
            .map_err(|_| MatError::AllocationFailed { bytes })?;
        data.resize(pixel_count, 0.0);

        log::debug!(
            "Allocated Mat {}x{} ({} bytes, zeroed={})",
            width,
            height,
            bytes,
            zeroed
        );

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a matrix from existing row-major values.
    ///
    /// # Errors
    /// [`MatError::InvalidDimensions`] for a zero dimension and
    /// [`MatError::DataLength`] when `data.len() != width * height`.
    pub fn from_vec(width: usize, height: usize, data: Vec<f32>) -> Result<Self, MatError> {
        if width < 1 || height < 1 {
            return Err(MatError::InvalidDimensions { width, height });
        }
        let expected = width
            .checked_mul(height)
            .ok_or(MatError::Overflow { width, height })?;
        if data.len() != expected {
            return Err(MatError::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Deep copy into freshly allocated storage.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Release the matrix and its storage.
    ///
    /// Consumes `self`, so a buffer can only ever be released once. Dropping
    /// the value has the same effect; this exists for call sites that want the
    /// hand-off to read explicitly.
    pub fn release(self) {
        log::debug!("Released Mat {}x{}", self.width, self.height);
        drop(self);
    }

    /// Width in elements
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in elements
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of elements (`width * height`)
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: a matrix holds at least one element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether `other` has the same width and height.
    #[inline]
    pub fn same_shape(&self, other: &Mat) -> bool {
        self.width == other.width && self.height == other.height
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    /// Get the value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.index(x, y)]
    }

    #[inline]
    /// Set the value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.index(x, y);
        self.data[i] = v;
    }

    /// Row-major view of all elements.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Mutable row-major view of all elements. The length cannot change.
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, f32> {
        self.data.chunks_exact(self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_rejects_zero_width() {
        assert_eq!(
            Mat::generate(0, 3, true),
            Err(MatError::InvalidDimensions {
                width: 0,
                height: 3
            })
        );
    }

    #[test]
    fn test_generate_rejects_zero_height() {
        assert!(matches!(
            Mat::generate(3, 0, false),
            Err(MatError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_generate_overflow() {
        assert!(matches!(
            Mat::generate(usize::MAX, 2, true),
            Err(MatError::Overflow { .. })
        ));
    }

    #[test]
    fn test_index_is_row_major() {
        let mat = Mat::generate(4, 3, true).unwrap();
        assert_eq!(mat.index(0, 0), 0);
        assert_eq!(mat.index(3, 0), 3);
        assert_eq!(mat.index(0, 1), 4);
        assert_eq!(mat.index(2, 2), 10);
    }

    #[test]
    fn test_get_set() {
        let mut mat = Mat::generate(2, 2, false).unwrap();
        mat.set(1, 0, 7.5);
        assert_eq!(mat.get(1, 0), 7.5);
        assert_eq!(mat.data(), &[0.0, 7.5, 0.0, 0.0]);
    }

    #[test]
    fn test_from_vec_length_check() {
        assert_eq!(
            Mat::from_vec(2, 2, vec![1.0, 2.0, 3.0]),
            Err(MatError::DataLength {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_rows() {
        let mat = Mat::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let rows: Vec<&[f32]> = mat.rows().collect();
        assert_eq!(rows, vec![&[1.0, 2.0][..], &[3.0, 4.0][..], &[5.0, 6.0][..]]);
    }
}
