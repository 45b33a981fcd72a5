//! Rescaling to the display brightness range.

use super::Mat;

/// Upper bound that normalization scales values toward (8-bit display range).
pub const BRIGHTNESS_CEILING: f32 = 255.0;

impl Mat {
    /// Largest element, or `0.0` when nothing exceeds `f32::MIN_POSITIVE`.
    ///
    /// The scan is seeded at the smallest positive normal float, so a buffer
    /// of zeros, negatives or denormals has no usable maximum and reports
    /// `0.0`.
    pub fn max_value(&self) -> f32 {
        let max = self
            .data()
            .iter()
            .fold(f32::MIN_POSITIVE, |max, &v| if v > max { v } else { max });

        if max > f32::MIN_POSITIVE {
            max
        } else {
            0.0
        }
    }

    /// Scale every element so that `max` maps to [`BRIGHTNESS_CEILING`].
    ///
    /// With `inverted` set, each value `v` becomes `CEILING - v * alpha`
    /// instead of `v * alpha`, where `alpha = CEILING / max`.
    ///
    /// A `max` of zero leaves the buffer untouched and returns `0.0`.
    ///
    /// # Returns
    /// The largest value present after the transform. Under inversion this is
    /// produced by the smallest input, so it is not necessarily the ceiling.
    pub fn normalize_with_max(&mut self, max: f32, inverted: bool) -> f32 {
        if max == 0.0 {
            log::debug!("normalize skipped: zero maximum");
            return 0.0;
        }

        let alpha = BRIGHTNESS_CEILING / max;
        let mut cmax = f32::NEG_INFINITY;

        if inverted {
            for v in self.data_mut() {
                let val = BRIGHTNESS_CEILING - *v * alpha;
                if val > cmax {
                    cmax = val;
                }
                *v = val;
            }
        } else {
            for v in self.data_mut() {
                let val = *v * alpha;
                if val > cmax {
                    cmax = val;
                }
                *v = val;
            }
        }

        log::debug!(
            "normalized {}x{} with max={} inverted={} -> {}",
            self.width(),
            self.height(),
            max,
            inverted,
            cmax
        );
        cmax
    }

    /// Find the current maximum and scale it to [`BRIGHTNESS_CEILING`].
    ///
    /// Two passes over the data. Callers that already know the reference
    /// maximum (e.g. a global max shared across channels) should call
    /// [`Mat::normalize_with_max`] directly.
    pub fn normalize(&mut self) -> f32 {
        let max = self.max_value();
        self.normalize_with_max(max, false)
    }
}
