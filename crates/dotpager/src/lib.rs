//! dotpager - animated page indicators for paged views.
//!
//! This is the main crate. It re-exports the core building blocks and the
//! rendering vocabulary, and provides the indicator itself:
//!
//! - [`PageIndicator`]: the composite indicator, in three [`Variant`]s
//! - [`IndicatorConfig`]: styling, loadable from TOML
//! - [`ScrollProgress`]: progress derived from a scroll offset
//! - [`indicator`]: the per-dot renderers
//!
//! # Example
//!
//! ```
//! use dotpager::prelude::*;
//!
//! let config = IndicatorConfig::new(5)
//!     .with_variant(Variant::Train)
//!     .with_active_color(Color::WHITE);
//! let mut indicator = PageIndicator::from_config(config).unwrap();
//!
//! // Train segments are sized from the space the host gives the indicator.
//! indicator.handle_layout(Size::new(250.0, 12.0));
//! assert_eq!(indicator.metrics().stroke, 44.0);
//!
//! let mut renderer = RecordingRenderer::new();
//! renderer.begin_frame(Size::new(250.0, 12.0));
//! indicator.paint(&mut renderer, Rect::new(0.0, 0.0, 250.0, 12.0));
//! assert!(renderer.end_frame().draw_calls > 0);
//! ```

pub use dotpager_core::*;

/// Geometry, colors, and the renderer interface.
pub mod render {
    pub use dotpager_render::*;
}

mod config;
mod error;
pub mod indicator;
mod page_indicator;
pub mod prelude;
mod progress;
mod variant;

pub use config::IndicatorConfig;
pub use error::{ConfigError, ConfigResult};
pub use page_indicator::{IndicatorLayout, IndicatorMetrics, PageIndicator};
pub use progress::ScrollProgress;
pub use variant::{ParseVariantError, Variant};
