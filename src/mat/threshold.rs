//! Binary threshold classification.

use super::Mat;

/// Output level for elements above the threshold
pub const THRESHOLD_HIGH: f32 = 255.0;
/// Output level for elements at or below the threshold
pub const THRESHOLD_LOW: f32 = 0.0;

impl Mat {
    /// Binarize in place.
    ///
    /// Each element is rounded to the nearest integer (halfway cases away
    /// from zero) and becomes [`THRESHOLD_HIGH`] if strictly greater than
    /// `threshold`, [`THRESHOLD_LOW`] otherwise. Irreversible.
    pub fn suppress_threshold(&mut self, threshold: f32) {
        self.apply_unary(|v| {
            if v.round() > threshold {
                THRESHOLD_HIGH
            } else {
                THRESHOLD_LOW
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suppress_threshold_strictly_greater() {
        let mut mat = Mat::from_vec(3, 1, vec![99.0, 100.0, 101.0]).unwrap();
        mat.suppress_threshold(100.0);
        assert_eq!(mat.data(), &[0.0, 0.0, 255.0]);
    }

    #[test]
    fn test_suppress_threshold_rounds_first() {
        // 100.5 rounds to 101, 100.4 rounds to 100
        let mut mat = Mat::from_vec(2, 1, vec![100.5, 100.4]).unwrap();
        mat.suppress_threshold(100.0);
        assert_eq!(mat.data(), &[255.0, 0.0]);
    }

    #[test]
    fn test_suppress_threshold_fractional_cutoff() {
        let mut mat = Mat::from_vec(2, 1, vec![10.2, 10.6]).unwrap();
        mat.suppress_threshold(10.5);
        assert_eq!(mat.data(), &[0.0, 255.0]);
    }
}
