//! Buffer error types.

/// Errors raised while creating or combining [`Mat`](super::Mat) buffers.
///
/// Allocation and dimension failures have always been treated as
/// non-recoverable by callers: the command-line front end reports them and
/// exits. Library users are free to decide otherwise.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MatError {
    /// Width or height below 1
    #[error("invalid matrix dimensions {width}x{height}: width and height must be at least 1")]
    InvalidDimensions { width: usize, height: usize },

    /// `width * height` does not fit in memory addressing
    #[error("matrix dimensions {width}x{height} overflow the addressable size")]
    Overflow { width: usize, height: usize },

    /// The allocator refused the request
    #[error("unable to allocate memory for matrix ({bytes} bytes requested)")]
    AllocationFailed { bytes: usize },

    /// Two buffers combined elementwise have different shapes
    #[error("shape mismatch: {left_width}x{left_height} vs {right_width}x{right_height}")]
    ShapeMismatch {
        left_width: usize,
        left_height: usize,
        right_width: usize,
        right_height: usize,
    },

    /// Backing data length differs from `width * height`
    #[error("expected {expected} elements for the matrix, got {actual}")]
    DataLength { expected: usize, actual: usize },

    /// Raw RGB input does not hold exactly three bytes per pixel
    #[error("expected {expected} RGB bytes for the image, got {actual}")]
    PixelCountMismatch { expected: usize, actual: usize },
}
