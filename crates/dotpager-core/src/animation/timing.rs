//! Timing curves and animation state.
//!
//! A [`Timing`] describes how long a value takes to reach its target and
//! which easing curve it follows on the way.

use std::time::{Duration, Instant};

use super::easing::{Easing, ease};

/// Duration and easing of a timing animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Time to reach the target.
    pub duration: Duration,
    /// Curve applied to the normalized elapsed time.
    pub easing: Easing,
}

impl Timing {
    /// Create a timing with the given duration and easing.
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// A zero-length timing: the value jumps straight to its target.
    pub const fn immediate() -> Self {
        Self::new(Duration::ZERO, Easing::Linear)
    }

    /// Set the duration using builder pattern.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the easing using builder pattern.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::new(Duration::from_millis(500), Easing::EaseOutCubic)
    }
}

/// Current state of an animated value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AnimationState {
    /// No animation in progress.
    #[default]
    Idle,
    /// An animation is running.
    Running {
        /// Eased progress from 0.0 to 1.0.
        progress: f32,
        /// Value the animation started from.
        from: f32,
        /// Value the animation is heading to.
        to: f32,
    },
}

impl AnimationState {
    /// Check if an animation is currently in progress.
    pub fn is_running(&self) -> bool {
        matches!(self, AnimationState::Running { .. })
    }

    /// Get the eased progress if running.
    pub fn progress(&self) -> Option<f32> {
        match self {
            AnimationState::Running { progress, .. } => Some(*progress),
            AnimationState::Idle => None,
        }
    }
}

/// An in-flight timing animation between two values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TimingAnimation {
    pub from: f32,
    pub to: f32,
    pub start_time: Instant,
    pub timing: Timing,
}

impl TimingAnimation {
    pub fn new(from: f32, to: f32, start_time: Instant, timing: Timing) -> Self {
        Self {
            from,
            to,
            start_time,
            timing,
        }
    }

    /// Raw (uneased) progress at `now`, in `[0, 1]`.
    pub fn raw_progress(&self, now: Instant) -> f32 {
        if self.timing.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start_time);
        (elapsed.as_secs_f32() / self.timing.duration.as_secs_f32()).min(1.0)
    }

    /// Sample the animation at `now`.
    ///
    /// Returns the value and the eased progress. The final sample lands on
    /// `to` exactly.
    pub fn sample(&self, now: Instant) -> (f32, f32) {
        let raw = self.raw_progress(now);
        if raw >= 1.0 {
            return (self.to, 1.0);
        }
        let eased = ease(self.timing.easing, raw);
        (self.from + (self.to - self.from) * eased, eased)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timing() {
        let t = Timing::default();
        assert_eq!(t.duration, Duration::from_millis(500));
        assert_eq!(t.easing, Easing::EaseOutCubic);
    }

    #[test]
    fn test_animation_state() {
        let state = AnimationState::Running {
            progress: 0.5,
            from: 0.0,
            to: 1.0,
        };
        assert!(state.is_running());
        assert_eq!(state.progress(), Some(0.5));

        let idle = AnimationState::Idle;
        assert!(!idle.is_running());
        assert_eq!(idle.progress(), None);
    }

    #[test]
    fn test_sample_linear() {
        let start = Instant::now();
        let anim = TimingAnimation::new(
            1.0,
            3.0,
            start,
            Timing::new(Duration::from_millis(100), Easing::Linear),
        );
        assert_eq!(anim.sample(start), (1.0, 0.0));
        let (mid, p) = anim.sample(start + Duration::from_millis(50));
        assert!((mid - 2.0).abs() < 1e-4);
        assert!((p - 0.5).abs() < 1e-4);
        assert_eq!(anim.sample(start + Duration::from_millis(100)), (3.0, 1.0));
        assert_eq!(anim.sample(start + Duration::from_secs(9)), (3.0, 1.0));
    }

    #[test]
    fn test_zero_duration_completes() {
        let start = Instant::now();
        let anim = TimingAnimation::new(0.0, 4.0, start, Timing::immediate());
        assert_eq!(anim.sample(start), (4.0, 1.0));
    }

    #[test]
    fn test_sample_before_start_holds_origin() {
        let start = Instant::now() + Duration::from_secs(1);
        let anim = TimingAnimation::new(2.0, 0.0, start, Timing::default());
        assert_eq!(anim.sample(Instant::now()), (2.0, 0.0));
    }
}
