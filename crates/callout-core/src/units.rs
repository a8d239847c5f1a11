//! Density-independent unit conversion.
//!
//! Label dimensions are specified in density-independent units (dp) and
//! converted to device pixels through a single linear scale factor. Inset
//! components are rounded to the nearest whole pixel on conversion; values
//! already expressed in pixels are passed through untouched by callers.

use crate::geometry::Insets;

/// A display density scale factor for converting density-independent
/// units to device pixels.
///
/// The conversion is linear: `px = dp * factor`. [`Density::MEDIUM`]
/// (factor 1.0) is the baseline density where one dp equals one pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density {
    factor: f32,
}

impl Density {
    /// Baseline density: one density-independent unit equals one pixel.
    pub const MEDIUM: Density = Density { factor: 1.0 };

    /// Creates a density with the given scale factor.
    pub fn new(factor: f32) -> Self {
        Self { factor }
    }

    /// Returns the scale factor of this density.
    pub fn factor(self) -> f32 {
        self.factor
    }

    /// Converts a density-independent length to pixels.
    pub fn dp_to_px(self, dp: f32) -> f32 {
        dp * self.factor
    }

    /// Converts a density-independent length to pixels, rounded to the
    /// nearest whole pixel. Used for inset components and fixed view
    /// dimensions.
    pub fn dp_to_px_rounded(self, dp: f32) -> f32 {
        self.dp_to_px(dp).round()
    }

    /// Converts four density-independent inset components (left, top,
    /// right, bottom) into pixel [`Insets`], rounding each side to the
    /// nearest whole pixel.
    pub fn insets_from_dp(self, left: f32, top: f32, right: f32, bottom: f32) -> Insets {
        Insets::new(
            self.dp_to_px_rounded(top),
            self.dp_to_px_rounded(right),
            self.dp_to_px_rounded(bottom),
            self.dp_to_px_rounded(left),
        )
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::MEDIUM
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_medium_density_is_identity() {
        let density = Density::MEDIUM;
        assert_approx_eq!(f32, density.dp_to_px(16.0), 16.0);
        assert_approx_eq!(f32, density.dp_to_px_rounded(16.0), 16.0);
    }

    #[test]
    fn test_dp_to_px_is_linear() {
        let density = Density::new(2.5);
        assert_approx_eq!(f32, density.dp_to_px(4.0), 10.0);
        assert_approx_eq!(f32, density.dp_to_px(0.0), 0.0);
    }

    #[test]
    fn test_dp_to_px_rounded_rounds_to_nearest() {
        let density = Density::new(1.5);
        // 3 * 1.5 = 4.5 rounds up
        assert_approx_eq!(f32, density.dp_to_px_rounded(3.0), 5.0);
        // 2.9 * 1.5 = 4.35 rounds down
        assert_approx_eq!(f32, density.dp_to_px_rounded(2.9), 4.0);
    }

    #[test]
    fn test_insets_from_dp_converts_each_side() {
        let density = Density::new(2.0);
        let insets = density.insets_from_dp(1.0, 2.0, 3.0, 4.0);

        assert_approx_eq!(f32, insets.left(), 2.0);
        assert_approx_eq!(f32, insets.top(), 4.0);
        assert_approx_eq!(f32, insets.right(), 6.0);
        assert_approx_eq!(f32, insets.bottom(), 8.0);
    }

    #[test]
    fn test_default_density_is_medium() {
        assert_eq!(Density::default(), Density::MEDIUM);
    }
}
