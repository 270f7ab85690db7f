//! Animation support for dotpager.
//!
//! This module provides easing functions, timing curves, and the shared
//! [`AnimatedValue`] that drives every indicator dot.
//!
//! # Easing Functions
//!
//! Easing functions control the rate of change during animations. They take a
//! normalized progress value `t` (0.0 to 1.0) and return a transformed value.
//!
//! # Example
//!
//! ```
//! use dotpager_core::animation::{Easing, ease};
//!
//! let eased = ease(Easing::EaseInOut, 0.5);
//! assert_eq!(eased, 0.5);
//! ```

mod easing;
mod timing;
mod value;

pub use easing::{Easing, ParseEasingError, ease, lerp_eased};
pub use timing::{AnimationState, Timing};
pub use value::AnimatedValue;
