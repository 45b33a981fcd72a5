//! Row-major `f32` image buffer and the numeric transforms applied to it.
//!
//! The [`Mat`] type owns a contiguous block of `width * height` floats. All
//! transforms mutate the receiver in place and never resize it:
//!
//! 1. **Elementwise** - unary and binary closures over every element
//! 2. **Normalization** - rescale to [`BRIGHTNESS_CEILING`], optionally inverted
//! 3. **Thresholding** - binarize against a cutoff

mod buffer;
mod elementwise;
mod error;
mod normalize;
mod threshold;

pub use buffer::Mat;
pub use elementwise::{apply_binary, multiply};
pub use error::MatError;
pub use normalize::BRIGHTNESS_CEILING;
pub use threshold::{THRESHOLD_HIGH, THRESHOLD_LOW};
