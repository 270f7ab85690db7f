//! Numeric helpers shared by every indicator variant.
//!
//! Sizes are expressed in logical units. [`PixelRatio`] maps them onto the
//! device pixel grid so dot edges land on whole physical pixels.

/// Clamp `value` into `[min, max]`.
///
/// Unlike [`f32::clamp`] this never panics: when `min > max` the result is
/// `min`.
///
/// ```
/// use dotpager_core::numeric::clamp;
///
/// assert_eq!(clamp(-1.0, 0.0, 4.0), 0.0);
/// assert_eq!(clamp(2.5, 0.0, 4.0), 2.5);
/// assert_eq!(clamp(9.0, 0.0, 4.0), 4.0);
/// ```
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    min.max(value.min(max))
}

/// Device pixel density: how many physical pixels make up one logical unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRatio(f32);

impl PixelRatio {
    /// A ratio of one physical pixel per logical unit.
    pub const ONE: Self = Self(1.0);

    /// Create a pixel ratio.
    ///
    /// Non-finite or non-positive ratios fall back to `1.0`.
    pub fn new(ratio: f32) -> Self {
        if ratio.is_finite() && ratio > 0.0 {
            Self(ratio)
        } else {
            tracing::warn!(
                target: crate::logging::targets::NUMERIC,
                ratio,
                "invalid pixel ratio, using 1.0"
            );
            Self::ONE
        }
    }

    /// The raw ratio.
    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }

    /// Round a logical size to the nearest value that covers a whole number
    /// of physical pixels.
    #[inline]
    pub fn round_to_nearest_pixel(self, value: f32) -> f32 {
        (value * self.0).round() / self.0
    }
}

impl Default for PixelRatio {
    fn default() -> Self {
        Self::ONE
    }
}

/// Round `value` so that half of it is a whole number of device pixels.
///
/// Dots are centered on their layout slot, so both halves of the size must
/// be pixel aligned for the edges to stay crisp on fractional densities.
/// The operation is idempotent.
#[inline]
pub fn even_pixel_round(value: f32, ratio: PixelRatio) -> f32 {
    ratio.round_to_nearest_pixel(value / 2.0) * 2.0
}
