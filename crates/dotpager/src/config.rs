//! Indicator configuration.
//!
//! [`IndicatorConfig`] holds every styling option of a [`PageIndicator`]. It
//! can be built in code with the `with_*` builder methods or loaded from
//! TOML, where every key is optional:
//!
//! ```toml
//! count = 5
//! variant = "beads"
//! size = 8
//! color = "#574ae2"
//! active_color = "white"
//! duration_ms = 300
//! easing = "ease-in-out"
//! ```
//!
//! [`PageIndicator`]: crate::PageIndicator

use std::path::Path;
use std::time::Duration;

use dotpager_core::logging::targets;
use dotpager_core::{Easing, PixelRatio, Timing};
use dotpager_render::{Color, Orientation};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::variant::Variant;

/// Styling and behavior of a page indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndicatorConfig {
    /// Number of dots. Must be at least one.
    pub count: usize,
    /// Visual style.
    pub variant: Variant,
    /// Spacing between dots along the main axis.
    pub gap: f32,
    /// Dot thickness, rounded to an even number of device pixels.
    pub size: f32,
    /// Base dot color.
    pub color: Color,
    /// Color of the active dot. Falls back to `color`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_color: Option<Color>,
    /// Opacity of inactive dots, clamped to `[0, 1]`.
    pub opacity: f32,
    /// Growth factor of the active bead.
    pub scale: f32,
    /// Length of the active dash (Morse) or of each segment (Train).
    ///
    /// Defaults to four times the dot size. A Train indicator without a
    /// dash size, or with a zero one, measures its segments from the space
    /// it is laid out in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_size: Option<f32>,
    /// Length of a page change animation in milliseconds.
    pub duration_ms: u64,
    /// Lay dots out top to bottom instead of left to right.
    pub vertical: bool,
    /// Corner radius, clamped to `[0, size / 2]`. Defaults to fully round.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    /// Curve of page change animations.
    pub easing: Easing,
    /// Device pixels per logical unit, used for pixel rounding.
    pub pixel_ratio: f32,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            count: 1,
            variant: Variant::Morse,
            gap: 6.0,
            size: 6.0,
            color: Color::BLACK,
            active_color: None,
            opacity: 0.5,
            scale: 1.5,
            dash_size: None,
            duration_ms: 500,
            vertical: false,
            border_radius: None,
            easing: Easing::EaseOutCubic,
            pixel_ratio: 1.0,
        }
    }
}

impl IndicatorConfig {
    /// Create a default configuration for `count` dots.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            target: targets::CONFIG,
            path = %path.display(),
            variant = %config.variant,
            count = config.count,
            "loaded indicator config"
        );
        Ok(config)
    }

    /// Render the configuration as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Write the configuration to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let text = self.to_toml_string()?;
        std::fs::write(path, text).map_err(|e| ConfigError::io(path, e))
    }

    /// Check the values that clamping cannot repair.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.count == 0 {
            return Err(ConfigError::InvalidCount(self.count));
        }

        let fields = [
            ("gap", Some(self.gap)),
            ("size", Some(self.size)),
            ("opacity", Some(self.opacity)),
            ("scale", Some(self.scale)),
            ("dash_size", self.dash_size),
            ("border_radius", self.border_radius),
            ("pixel_ratio", Some(self.pixel_ratio)),
        ];
        for (field, value) in fields {
            if let Some(value) = value.filter(|v| !v.is_finite()) {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        Ok(())
    }

    /// The active color, falling back to the base color.
    pub fn resolved_active_color(&self) -> Color {
        self.active_color.unwrap_or(self.color)
    }

    /// Layout direction.
    pub fn orientation(&self) -> Orientation {
        Orientation::from_vertical(self.vertical)
    }

    /// Pixel ratio used for rounding.
    pub fn pixel_ratio(&self) -> PixelRatio {
        PixelRatio::new(self.pixel_ratio)
    }

    /// Timing of page change animations.
    pub fn timing(&self) -> Timing {
        Timing::new(Duration::from_millis(self.duration_ms), self.easing)
    }

    // =========================================================================
    // Builder Pattern Methods
    // =========================================================================

    /// Set the dot count using builder pattern.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Set the variant using builder pattern.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the gap using builder pattern.
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Set the dot size using builder pattern.
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set the base color using builder pattern.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the active color using builder pattern.
    pub fn with_active_color(mut self, color: Color) -> Self {
        self.active_color = Some(color);
        self
    }

    /// Set the inactive opacity using builder pattern.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Set the bead growth factor using builder pattern.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Set the dash length using builder pattern.
    pub fn with_dash_size(mut self, dash_size: f32) -> Self {
        self.dash_size = Some(dash_size);
        self
    }

    /// Set the animation duration using builder pattern.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration_ms = duration.as_millis().try_into().unwrap_or(u64::MAX);
        self
    }

    /// Set vertical layout using builder pattern.
    pub fn with_vertical(mut self, vertical: bool) -> Self {
        self.vertical = vertical;
        self
    }

    /// Set the corner radius using builder pattern.
    pub fn with_border_radius(mut self, radius: f32) -> Self {
        self.border_radius = Some(radius);
        self
    }

    /// Set the easing curve using builder pattern.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set the pixel ratio using builder pattern.
    pub fn with_pixel_ratio(mut self, ratio: f32) -> Self {
        self.pixel_ratio = ratio;
        self
    }
}
