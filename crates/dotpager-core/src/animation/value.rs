//! The shared animated scalar.
//!
//! An [`AnimatedValue`] is the single progress value that every dot of an
//! indicator reads. It has exactly one writer at a time: either a timing
//! animation started with [`AnimatedValue::animate_to`], or a live feed
//! (such as a scroll offset) calling [`AnimatedValue::set_value`].

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use parking_lot::RwLock;

use super::timing::{AnimationState, Timing, TimingAnimation};
use crate::logging::targets;
use crate::signal::Signal;

#[derive(Debug)]
struct ValueState {
    value: f32,
    animation: Option<TimingAnimation>,
}

struct Inner {
    state: RwLock<ValueState>,
    value_changed: Signal<f32>,
    finished: Signal<f32>,
}

/// A cheaply cloneable handle to an animatable `f32`.
///
/// Clones share the same underlying value, so a host can hand one clone to
/// an indicator and keep another to feed it.
///
/// # Example
///
/// ```
/// use std::time::{Duration, Instant};
/// use dotpager_core::animation::{AnimatedValue, Easing, Timing};
///
/// let progress = AnimatedValue::new(0.0);
/// let start = Instant::now();
/// let timing = Timing::new(Duration::from_millis(200), Easing::Linear);
///
/// assert!(progress.animate_to_at(2.0, timing, start));
/// progress.tick_at(start + Duration::from_millis(100));
/// assert!((progress.value() - 1.0).abs() < 1e-4);
///
/// progress.tick_at(start + Duration::from_millis(200));
/// assert_eq!(progress.value(), 2.0);
/// assert!(!progress.is_animating());
/// ```
#[derive(Clone)]
pub struct AnimatedValue {
    inner: Arc<Inner>,
}

impl AnimatedValue {
    /// Create a value at rest.
    pub fn new(value: f32) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: RwLock::new(ValueState {
                    value,
                    animation: None,
                }),
                value_changed: Signal::new(),
                finished: Signal::new(),
            }),
        }
    }

    /// The current value.
    pub fn value(&self) -> f32 {
        self.inner.state.read().value
    }

    /// Where the value is heading: the in-flight target, or the current
    /// value when at rest.
    pub fn target(&self) -> f32 {
        let state = self.inner.state.read();
        state.animation.map_or(state.value, |anim| anim.to)
    }

    /// Whether a timing animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.inner.state.read().animation.is_some()
    }

    /// Whether two handles share the same underlying value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Emitted with the new value whenever it changes.
    pub fn value_changed(&self) -> &Signal<f32> {
        &self.inner.value_changed
    }

    /// Emitted with the final value when a timing animation completes.
    pub fn finished(&self) -> &Signal<f32> {
        &self.inner.finished
    }

    /// Assign the value immediately.
    ///
    /// Any in-flight animation is dropped. The value is stored as given;
    /// live feeds may legitimately overshoot the page range mid-gesture.
    pub fn set_value(&self, value: f32) {
        let changed = {
            let mut state = self.inner.state.write();
            if state.animation.take().is_some() {
                tracing::trace!(target: targets::ANIMATION, "animation superseded by direct assignment");
            }
            let changed = state.value != value;
            state.value = value;
            changed
        };

        if changed {
            self.inner.value_changed.emit(value);
        }
    }

    /// Animate towards `target`, starting now.
    ///
    /// See [`animate_to_at`](Self::animate_to_at).
    pub fn animate_to(&self, target: f32, timing: Timing) -> bool {
        self.animate_to_at(target, timing, Instant::now())
    }

    /// Animate towards `target`, treating `now` as the start time.
    ///
    /// An in-flight animation is redirected: the new one starts from the
    /// value sampled at `now`, so there is no jump. Returns `false` without
    /// touching anything when `target` is already the destination.
    pub fn animate_to_at(&self, target: f32, timing: Timing, now: Instant) -> bool {
        let (value, changed, completed) = {
            let mut state = self.inner.state.write();

            let from = match state.animation {
                Some(anim) if anim.to == target => return false,
                Some(anim) => {
                    let (sampled, _) = anim.sample(now);
                    tracing::debug!(
                        target: targets::ANIMATION,
                        from = sampled,
                        previous_target = anim.to,
                        target,
                        "redirecting animation"
                    );
                    sampled
                }
                None if state.value == target => return false,
                None => {
                    tracing::debug!(
                        target: targets::ANIMATION,
                        from = state.value,
                        target,
                        duration_ms = timing.duration.as_millis() as u64,
                        easing = %timing.easing,
                        "starting animation"
                    );
                    state.value
                }
            };

            let (value, completed) = if timing.duration.is_zero() {
                state.animation = None;
                (target, true)
            } else {
                state.animation = Some(TimingAnimation::new(from, target, now, timing));
                (from, false)
            };
            let changed = state.value != value;
            state.value = value;
            (value, changed, completed)
        };

        if changed {
            self.inner.value_changed.emit(value);
        }
        if completed {
            self.inner.finished.emit(value);
        }
        true
    }

    /// Advance the animation to the current instant.
    pub fn tick(&self) -> AnimationState {
        self.tick_at(Instant::now())
    }

    /// Advance the animation to `now`.
    ///
    /// Updates the value, emits `value_changed` when it moved, and `finished`
    /// when the animation reached its target on this tick.
    pub fn tick_at(&self, now: Instant) -> AnimationState {
        let (value, changed, state_out) = {
            let mut state = self.inner.state.write();
            let Some(anim) = state.animation else {
                return AnimationState::Idle;
            };

            let (value, progress) = anim.sample(now);
            let changed = state.value != value;
            state.value = value;

            if anim.raw_progress(now) >= 1.0 {
                state.animation = None;
                (value, changed, AnimationState::Idle)
            } else {
                (
                    value,
                    changed,
                    AnimationState::Running {
                        progress,
                        from: anim.from,
                        to: anim.to,
                    },
                )
            }
        };

        if changed {
            self.inner.value_changed.emit(value);
        }
        if !state_out.is_running() {
            tracing::trace!(target: targets::ANIMATION, value, "animation finished");
            self.inner.finished.emit(value);
        }
        state_out
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl fmt::Debug for AnimatedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.read();
        f.debug_struct("AnimatedValue")
            .field("value", &state.value)
            .field("animation", &state.animation)
            .finish()
    }
}

static_assertions::assert_impl_all!(AnimatedValue: Send, Sync);
