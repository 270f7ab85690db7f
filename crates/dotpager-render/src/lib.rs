//! Geometry, color, and the drawing interface for dotpager.
//!
//! This crate defines the vocabulary shared between an indicator and the
//! host that draws it:
//!
//! - **Types**: [`Point`], [`Size`], [`Rect`], [`RoundedRect`], [`Color`], and
//!   [`Orientation`]
//! - **Renderer**: the [`Renderer`] trait a host implements for its backend
//! - **Recording**: [`RecordingRenderer`], which resolves transforms, clips,
//!   and opacity into flat [`DrawCommand`]s
//!
//! # Example
//!
//! ```
//! use dotpager_render::{Color, RecordingRenderer, Rect, Renderer, RoundedRect, Size};
//!
//! let mut renderer = RecordingRenderer::new();
//! renderer.begin_frame(Size::new(64.0, 16.0));
//!
//! renderer.save();
//! renderer.clip_rect(Rect::new(0.0, 0.0, 3.0, 6.0));
//! renderer.fill_rounded_rect(RoundedRect::new(Rect::new(0.0, 0.0, 6.0, 6.0), 3.0), Color::BLACK);
//! renderer.restore();
//!
//! let stats = renderer.end_frame();
//! assert_eq!(stats.draw_calls, 1);
//! assert_eq!(renderer.commands()[0].shape().rect.width(), 3.0);
//! ```

mod recording;
mod renderer;
mod types;

pub use recording::{DrawCommand, RecordingRenderer};
pub use renderer::{FrameStats, Renderer};
pub use types::{Color, CornerRadii, Orientation, Point, Rect, RoundedRect, Size};
