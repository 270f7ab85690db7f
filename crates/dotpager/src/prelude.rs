//! Prelude module for dotpager.
//!
//! ```ignore
//! use dotpager::prelude::*;
//! ```
//!
//! This provides access to:
//! - The indicator and its configuration (`PageIndicator`, `IndicatorConfig`, `Variant`)
//! - Progress sources (`AnimatedValue`, `ScrollProgress`)
//! - Animation timing (`Easing`, `Timing`)
//! - Geometry and drawing (`Point`, `Size`, `Rect`, `Color`, `Renderer`)

// ============================================================================
// Indicator
// ============================================================================

pub use crate::indicator::{DotFrame, DotLayer, DotRenderer, DotStyle};
pub use crate::{ConfigError, IndicatorConfig, PageIndicator, ScrollProgress, Variant};

// ============================================================================
// Animation and Signals
// ============================================================================

pub use dotpager_core::{AnimatedValue, Easing, Signal, Timing};

// ============================================================================
// Geometry and Rendering
// ============================================================================

pub use dotpager_render::{
    Color, Orientation, Point, Rect, RecordingRenderer, Renderer, RoundedRect, Size,
};
