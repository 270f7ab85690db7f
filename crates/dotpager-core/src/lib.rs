//! Core systems for dotpager.
//!
//! This crate provides the renderer-independent building blocks of the
//! dotpager page indicator:
//!
//! - **Numeric helpers**: clamping and device-pixel rounding
//! - **Interpolation**: piecewise-linear tables with clamped extrapolation
//! - **Animation**: easing curves, timing, and the shared [`AnimatedValue`]
//! - **Signal/Slot System**: change notification between indicator and host
//! - **Property System**: change-detecting values
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use dotpager_core::animation::{AnimatedValue, Timing};
//! use dotpager_core::interpolation::Interpolation;
//!
//! // The progress value every dot reads.
//! let progress = AnimatedValue::new(0.0);
//!
//! // Dot 1 is dim away from page 1 and bright on it.
//! let opacity = Interpolation::window(1.0, [0.5, 1.0, 0.5]);
//! assert_eq!(opacity.sample(progress.value()), 0.5);
//!
//! let start = Instant::now();
//! progress.animate_to_at(1.0, Timing::default(), start);
//! progress.tick_at(start + Duration::from_secs(1));
//! assert_eq!(opacity.sample(progress.value()), 1.0);
//! ```

pub mod animation;
mod error;
pub mod interpolation;
pub mod logging;
pub mod numeric;
pub mod property;
pub mod signal;

pub use animation::{AnimatedValue, AnimationState, Easing, Timing};
pub use error::{CoreError, Result};
pub use interpolation::{Extrapolate, Interpolation};
pub use logging::PerfSpan;
pub use numeric::{PixelRatio, clamp, even_pixel_round};
pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
