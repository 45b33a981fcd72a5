//! Elementwise transforms over one or two buffers.

use super::{Mat, MatError};

impl Mat {
    /// Replace every element `v` with `f(v)`.
    ///
    /// Elements are visited in row-major order, so stateful closures see a
    /// deterministic sequence.
    pub fn apply_unary<F>(&mut self, mut f: F)
    where
        F: FnMut(f32) -> f32,
    {
        for v in self.data_mut() {
            *v = f(*v);
        }
    }
}

/// Combine two same-shaped buffers, writing `f(x[i], y[i])` into `y[i]`.
///
/// `x` is only read. `y` is both input and output.
///
/// # Errors
/// [`MatError::ShapeMismatch`] if the shapes differ; `y` is left untouched.
pub fn apply_binary<F>(x: &Mat, y: &mut Mat, mut f: F) -> Result<(), MatError>
where
    F: FnMut(f32, f32) -> f32,
{
    if !x.same_shape(y) {
        return Err(MatError::ShapeMismatch {
            left_width: x.width(),
            left_height: x.height(),
            right_width: y.width(),
            right_height: y.height(),
        });
    }

    for (out, &a) in y.data_mut().iter_mut().zip(x.data()) {
        *out = f(a, *out);
    }
    Ok(())
}

/// Product of two values, for use with [`apply_binary`].
#[inline]
pub fn multiply(a: f32, b: f32) -> f32 {
    a * b
}
