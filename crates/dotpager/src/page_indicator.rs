//! The composite page indicator.
//!
//! [`PageIndicator`] owns one [`DotRenderer`] per page, feeds them all the
//! same progress value, and lays them out in a row or column.
//!
//! # Progress Sources
//!
//! The progress value comes from one of two places:
//!
//! - **Discrete**: the indicator owns the value and animates it whenever
//!   [`PageIndicator::set_current`] picks a new page.
//! - **External**: the host hands in a live [`AnimatedValue`], typically from
//!   a [`ScrollProgress`](crate::ScrollProgress), and the indicator only
//!   reads it.
//!
//! Switching between the two is up to the host.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use dotpager::{IndicatorConfig, PageIndicator, Variant};
//!
//! let config = IndicatorConfig::new(5).with_variant(Variant::Beads);
//! let mut indicator = PageIndicator::from_config(config).unwrap();
//!
//! let start = Instant::now();
//! assert!(indicator.set_current_at(2, start));
//! indicator.tick_at(start + Duration::from_secs(1));
//!
//! assert_eq!(indicator.progress(), 2.0);
//! let frames = indicator.frames();
//! assert_eq!(frames[2].style.scale, 1.5);
//! assert_eq!(frames[0].style.scale, 1.0);
//! ```

use std::fmt;
use std::time::Instant;

use dotpager_core::logging::targets;
use dotpager_core::{AnimatedValue, PerfSpan, Property, Signal, clamp, even_pixel_round};
use dotpager_render::{Orientation, Rect, Renderer, Size};

use crate::config::IndicatorConfig;
use crate::error::ConfigResult;
use crate::indicator::{DotFrame, DotParams, DotRenderer, axis_rect, dot_renderer};
use crate::variant::Variant;

/// Where the progress value comes from.
#[derive(Debug, Clone)]
enum ProgressSource {
    /// Owned by the indicator and animated on page changes.
    Owned(AnimatedValue),
    /// Driven by the host.
    External(AnimatedValue),
}

impl ProgressSource {
    fn value(&self) -> &AnimatedValue {
        match self {
            Self::Owned(value) | Self::External(value) => value,
        }
    }
}

/// Sizes derived from the configuration, after rounding and clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorMetrics {
    /// Dot thickness, rounded to an even number of device pixels.
    pub pixel_size: f32,
    /// Configured dash length (or four dot sizes), pixel rounded.
    pub pixel_dash: f32,
    /// Corner radius, clamped to `[0, pixel_size / 2]`.
    pub radius: f32,
    /// Inactive opacity, clamped to `[0, 1]`.
    pub opacity: f32,
    /// Main-axis length passed to the dots as their dash: the Morse dash,
    /// or the Train segment length (measured when no dash is configured).
    pub stroke: f32,
}

/// Result of laying out an indicator in a rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorLayout {
    /// The rectangle the indicator was laid out in.
    pub bounds: Rect,
    /// One slot per dot, in index order, gap margins included.
    pub slots: Vec<Rect>,
}

impl IndicatorLayout {
    /// The rectangle spanning all slots.
    pub fn content(&self) -> Rect {
        match (self.slots.first(), self.slots.last()) {
            (Some(first), Some(last)) => {
                let left = self.slots.iter().map(Rect::left).fold(first.left(), f32::min);
                let top = self.slots.iter().map(Rect::top).fold(first.top(), f32::min);
                let right = self.slots.iter().map(Rect::right).fold(last.right(), f32::max);
                let bottom = self.slots.iter().map(Rect::bottom).fold(last.bottom(), f32::max);
                Rect::new(left, top, right - left, bottom - top)
            }
            _ => Rect::from_origin_size(self.bounds.center(), Size::ZERO),
        }
    }
}

/// An animated page indicator.
///
/// # Signals
///
/// - `current_changed(usize)`: emitted when the current page changes
/// - `layout_changed(Size)`: emitted when [`handle_layout`](Self::handle_layout)
///   sees a new size
pub struct PageIndicator {
    config: IndicatorConfig,
    current: Property<usize>,
    source: ProgressSource,
    /// Last size passed to `handle_layout`, used to measure Train segments.
    last_layout: Option<Size>,
    metrics: IndicatorMetrics,
    dots: Vec<Box<dyn DotRenderer>>,

    /// Signal emitted when the current page changes.
    pub current_changed: Signal<usize>,
    /// Signal emitted when the indicator is laid out at a new size.
    pub layout_changed: Signal<Size>,
}

impl PageIndicator {
    /// Create an indicator with `count` dots and default styling.
    ///
    /// A count of zero is raised to one.
    pub fn new(count: usize) -> Self {
        if count == 0 {
            tracing::warn!(target: targets::INDICATOR, "indicator needs at least one dot, using 1");
        }
        Self::build(IndicatorConfig::new(count.max(1)))
    }

    /// Create an indicator from a configuration.
    pub fn from_config(config: IndicatorConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: IndicatorConfig) -> Self {
        let mut indicator = Self {
            config,
            current: Property::new(0),
            source: ProgressSource::Owned(AnimatedValue::new(0.0)),
            last_layout: None,
            metrics: IndicatorMetrics {
                pixel_size: 0.0,
                pixel_dash: 0.0,
                radius: 0.0,
                opacity: 0.0,
                stroke: 0.0,
            },
            dots: Vec::new(),
            current_changed: Signal::new(),
            layout_changed: Signal::new(),
        };
        indicator.rebuild();
        tracing::debug!(
            target: targets::INDICATOR,
            count = indicator.config.count,
            variant = %indicator.config.variant,
            "created page indicator"
        );
        indicator
    }

    /// Start on `index` without animating.
    pub fn with_current(self, index: usize) -> Self {
        let index = self.clamp_index(index);
        self.current.set_silent(index);
        if let ProgressSource::Owned(value) = &self.source {
            value.set_value(index as f32);
        }
        self
    }

    /// Read progress from `progress` instead of animating page changes.
    pub fn with_external_progress(mut self, progress: AnimatedValue) -> Self {
        self.set_external_progress(Some(progress));
        self
    }

    // =========================================================================
    // Progress
    // =========================================================================

    /// The current page in discrete mode.
    pub fn current(&self) -> usize {
        self.current.get()
    }

    /// Animate to page `index`.
    ///
    /// See [`set_current_at`](Self::set_current_at).
    pub fn set_current(&mut self, index: usize) -> bool {
        self.set_current_at(index, Instant::now())
    }

    /// Animate to page `index`, treating `now` as the start of the
    /// animation.
    ///
    /// The index is clamped to the last page before it is stored, so an
    /// out-of-range page is never observable. An animation already heading
    /// to the same page continues undisturbed. Returns whether a new
    /// animation started.
    ///
    /// Ignored while an external progress source is attached.
    pub fn set_current_at(&mut self, index: usize, now: Instant) -> bool {
        let ProgressSource::Owned(value) = &self.source else {
            tracing::debug!(
                target: targets::INDICATOR,
                index,
                "set_current ignored: progress is driven externally"
            );
            return false;
        };

        let clamped = self.clamp_index(index);
        if clamped != index {
            tracing::debug!(target: targets::INDICATOR, index, clamped, "clamped page index");
        }

        let changed = self.current.set(clamped);
        let started = value.animate_to_at(clamped as f32, self.config.timing(), now);
        if started {
            tracing::trace!(target: targets::INDICATOR, page = clamped, "animating to page");
        }
        if changed {
            self.current_changed.emit(clamped);
        }
        started
    }

    /// Advance the page change animation to the current instant.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// Advance the page change animation to `now`.
    ///
    /// Returns whether the progress moved, meaning the indicator needs to be
    /// repainted. External progress is never advanced here.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        match &self.source {
            ProgressSource::Owned(value) if value.is_animating() => {
                value.tick_at(now);
                true
            }
            _ => false,
        }
    }

    /// The progress value the dots are drawn at.
    ///
    /// External progress is reported as-is and may lie outside the page
    /// range during overscroll.
    pub fn progress(&self) -> f32 {
        self.source.value().value()
    }

    /// A handle to the progress value.
    pub fn progress_handle(&self) -> AnimatedValue {
        self.source.value().clone()
    }

    /// Whether a page change animation is in flight.
    pub fn is_animating(&self) -> bool {
        matches!(&self.source, ProgressSource::Owned(value) if value.is_animating())
    }

    /// Whether progress is driven by the host.
    pub fn is_external(&self) -> bool {
        matches!(self.source, ProgressSource::External(_))
    }

    /// Attach (`Some`) or detach (`None`) an external progress source.
    ///
    /// Detaching returns to discrete mode, resting wherever the external
    /// value last was, so a following [`set_current`](Self::set_current)
    /// animates from there without a jump. The current page becomes the one
    /// nearest that value, without emitting `current_changed`. Detaching
    /// while already in discrete mode does nothing.
    pub fn set_external_progress(&mut self, progress: Option<AnimatedValue>) {
        match progress {
            Some(value) => {
                tracing::debug!(target: targets::INDICATOR, "attached external progress");
                self.source = ProgressSource::External(value);
            }
            None => {
                let ProgressSource::External(external) = &self.source else {
                    return;
                };
                let last = external.value();
                let page = self.nearest_page(last);
                self.current.set_silent(page);
                tracing::debug!(
                    target: targets::INDICATOR,
                    progress = last,
                    page,
                    "returned to discrete progress"
                );
                self.source = ProgressSource::Owned(AnimatedValue::new(last));
            }
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// The configuration in use.
    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// Number of dots.
    pub fn count(&self) -> usize {
        self.config.count
    }

    /// Visual style.
    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    /// Layout direction.
    pub fn orientation(&self) -> Orientation {
        self.config.orientation()
    }

    /// Sizes derived from the configuration.
    pub fn metrics(&self) -> IndicatorMetrics {
        self.metrics
    }

    /// Replace the whole configuration.
    pub fn set_config(&mut self, config: IndicatorConfig) -> ConfigResult<bool> {
        config.validate()?;
        Ok(self.apply(config))
    }

    /// Change the number of dots. A count of zero is raised to one.
    ///
    /// If the current page no longer exists the indicator animates to the
    /// new last page.
    pub fn set_count(&mut self, count: usize) -> bool {
        if count == 0 {
            tracing::warn!(target: targets::INDICATOR, "indicator needs at least one dot, using 1");
        }
        let config = self.config.clone().with_count(count.max(1));
        self.apply(config)
    }

    /// Change the visual style.
    pub fn set_variant(&mut self, variant: Variant) -> bool {
        let config = self.config.clone().with_variant(variant);
        self.apply(config)
    }

    /// Change the layout direction.
    pub fn set_orientation(&mut self, orientation: Orientation) -> bool {
        let config = self.config.clone().with_vertical(orientation.is_vertical());
        self.apply(config)
    }

    fn apply(&mut self, config: IndicatorConfig) -> bool {
        if config == self.config {
            return false;
        }
        let previous = std::mem::replace(&mut self.config, config);
        self.rebuild();
        tracing::debug!(
            target: targets::INDICATOR,
            count = self.config.count,
            variant = %self.config.variant,
            vertical = self.config.vertical,
            previous_variant = %previous.variant,
            "indicator reconfigured"
        );

        let clamped = self.clamp_index(self.current.get());
        if self.current.set(clamped) {
            if let ProgressSource::Owned(value) = &self.source {
                value.animate_to(clamped as f32, self.config.timing());
            }
            self.current_changed.emit(clamped);
        }
        true
    }

    fn clamp_index(&self, index: usize) -> usize {
        index.min(self.config.count.saturating_sub(1))
    }

    /// The page closest to `progress`, within the page range.
    fn nearest_page(&self, progress: f32) -> usize {
        let rounded = progress.round();
        if rounded.is_nan() || rounded <= 0.0 {
            0
        } else {
            self.clamp_index(rounded as usize)
        }
    }

    /// Recompute metrics and rebuild the per-dot renderers.
    fn rebuild(&mut self) {
        self.metrics = self.compute_metrics();
        let params = self.dot_params();
        self.dots = (0..self.config.count)
            .map(|index| dot_renderer(self.config.variant, index, &params))
            .collect();
    }

    fn compute_metrics(&self) -> IndicatorMetrics {
        let config = &self.config;
        let ratio = config.pixel_ratio();
        let pixel_size = even_pixel_round(config.size, ratio);
        let default_dash = even_pixel_round(pixel_size * 4.0, ratio);
        let pixel_dash = config
            .dash_size
            .map_or(default_dash, |dash| even_pixel_round(dash, ratio));
        let radius = clamp(
            config.border_radius.unwrap_or(pixel_size / 2.0),
            0.0,
            pixel_size / 2.0,
        );
        let opacity = clamp(config.opacity, 0.0, 1.0);

        let stroke = match config.variant {
            Variant::Train if self.measures_stroke(pixel_dash) => self
                .measured_stroke()
                .unwrap_or(default_dash),
            Variant::Morse => pixel_dash.max(pixel_size * 2.0),
            _ => pixel_dash,
        };

        IndicatorMetrics {
            pixel_size,
            pixel_dash,
            radius,
            opacity,
            stroke,
        }
    }

    /// Train segments are measured from the layout when no dash length is
    /// configured or it rounds to zero.
    fn measures_stroke(&self, pixel_dash: f32) -> bool {
        self.config.variant == Variant::Train
            && (self.config.dash_size.is_none() || pixel_dash == 0.0)
    }

    fn measured_stroke(&self) -> Option<f32> {
        let size = self.last_layout?;
        let main = size.main(self.config.orientation());
        Some((main / self.config.count as f32 - self.config.gap).max(0.0))
    }

    fn dot_params(&self) -> DotParams {
        DotParams {
            count: self.config.count,
            gap: self.config.gap,
            size: self.metrics.pixel_size,
            dash: self.metrics.stroke,
            radius: self.metrics.radius,
            opacity: self.metrics.opacity,
            scale: self.config.scale,
            color: self.config.color,
            active_color: self.config.resolved_active_color(),
            orientation: self.config.orientation(),
        }
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// The size the indicator wants.
    ///
    /// A Morse indicator reserves room for one full dash plus `count - 1`
    /// dots; the other variants need the sum of their slots.
    pub fn preferred_size(&self) -> Size {
        let orientation = self.orientation();
        let cross = self
            .dots
            .iter()
            .map(|dot| dot.slot_size().cross(orientation))
            .fold(0.0, f32::max);
        let main = match self.config.variant {
            Variant::Morse => {
                let n = self.config.count as f32;
                self.metrics.stroke + self.metrics.pixel_size * (n - 1.0) + self.config.gap * n
            }
            Variant::Beads | Variant::Train => self
                .dots
                .iter()
                .map(|dot| dot.slot_size().main(orientation))
                .sum(),
        };
        Size::from_axes(orientation, main, cross)
    }

    /// Tell the indicator the size it was given.
    ///
    /// A Train indicator without a configured dash length derives its
    /// segment length from this as `main / count - gap`. Returns whether
    /// anything changed.
    pub fn handle_layout(&mut self, size: Size) -> bool {
        if self.last_layout == Some(size) {
            return false;
        }
        self.last_layout = Some(size);

        let previous = self.metrics.stroke;
        if self.measures_stroke(self.metrics.pixel_dash) {
            self.rebuild();
            if self.metrics.stroke != previous {
                tracing::debug!(
                    target: targets::LAYOUT,
                    stroke = self.metrics.stroke,
                    previous,
                    "measured train segments"
                );
            }
        }

        tracing::trace!(target: targets::LAYOUT, width = size.width, height = size.height, "layout");
        self.layout_changed.emit(size);
        true
    }

    /// Slot rectangles for every dot, centered in `bounds` on both axes.
    pub fn layout(&self, bounds: Rect) -> IndicatorLayout {
        let orientation = self.orientation();
        let (main_start, cross_start) = match orientation {
            Orientation::Horizontal => (bounds.left(), bounds.top()),
            Orientation::Vertical => (bounds.top(), bounds.left()),
        };
        let bounds_main = bounds.size.main(orientation);
        let bounds_cross = bounds.size.cross(orientation);

        let total: f32 = self
            .dots
            .iter()
            .map(|dot| dot.slot_size().main(orientation))
            .sum();
        let mut cursor = main_start + (bounds_main - total) / 2.0;

        let slots = self
            .dots
            .iter()
            .map(|dot| {
                let slot = dot.slot_size();
                let main = slot.main(orientation);
                let cross = slot.cross(orientation);
                let rect = axis_rect(
                    orientation,
                    cursor,
                    main,
                    cross_start + (bounds_cross - cross) / 2.0,
                    cross,
                );
                cursor += main;
                rect
            })
            .collect();

        IndicatorLayout { bounds, slots }
    }

    // =========================================================================
    // Painting
    // =========================================================================

    /// Style and layers of every dot at the current progress.
    pub fn frames(&self) -> Vec<DotFrame> {
        let progress = self.progress();
        self.dots.iter().map(|dot| dot.frame(progress)).collect()
    }

    /// Paint the indicator centered in `bounds`.
    pub fn paint(&self, renderer: &mut impl Renderer, bounds: Rect) {
        let _span = PerfSpan::new("paint");
        let layout = self.layout(bounds);
        for (frame, slot) in self.frames().iter().zip(&layout.slots) {
            renderer.save();
            renderer.translate(slot.left(), slot.top());
            for layer in &frame.layers {
                layer.paint(renderer);
            }
            renderer.restore();
        }
    }
}

impl fmt::Debug for PageIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageIndicator")
            .field("config", &self.config)
            .field("current", &self.current.get())
            .field("source", &self.source)
            .field("metrics", &self.metrics)
            .field("last_layout", &self.last_layout)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(PageIndicator: Send, Sync);

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;
    use dotpager_render::{DrawCommand, RecordingRenderer};

    fn setup() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("dotpager=trace,dotpager_core=debug")
            .with_test_writer()
            .try_init();
    }

    fn indicator(count: usize, variant: Variant) -> PageIndicator {
        PageIndicator::from_config(IndicatorConfig::new(count).with_variant(variant)).unwrap()
    }

    #[test]
    fn test_metrics_defaults() {
        setup();
        let ind = indicator(5, Variant::Morse);
        let m = ind.metrics();
        assert_eq!(m.pixel_size, 6.0);
        assert_eq!(m.pixel_dash, 24.0);
        assert_eq!(m.radius, 3.0);
        assert_eq!(m.opacity, 0.5);
        assert_eq!(m.stroke, 24.0);
    }

    #[test]
    fn test_metrics_clamping() {
        let config = IndicatorConfig::new(3)
            .with_size(7.0)
            .with_opacity(1.7)
            .with_border_radius(40.0)
            .with_dash_size(5.0);
        let ind = PageIndicator::from_config(config).unwrap();
        let m = ind.metrics();
        // 7 / 2 = 3.5 rounds to 4 on a 1x display
        assert_eq!(m.pixel_size, 8.0);
        assert_eq!(m.opacity, 1.0);
        assert_eq!(m.radius, 4.0);
        // Morse dashes are never shorter than two dots.
        assert_eq!(m.stroke, 16.0);

        let negative = PageIndicator::from_config(
            IndicatorConfig::new(3).with_border_radius(-2.0).with_opacity(-1.0),
        )
        .unwrap();
        assert_eq!(negative.metrics().radius, 0.0);
        assert_eq!(negative.metrics().opacity, 0.0);
    }

    #[test]
    fn test_zero_count() {
        assert_eq!(PageIndicator::new(0).count(), 1);
        assert!(PageIndicator::from_config(IndicatorConfig::new(0)).is_err());
    }

    #[test]
    fn test_set_current_clamps_stored_index() {
        setup();
        let mut ind = indicator(3, Variant::Beads);
        let start = Instant::now();
        assert!(ind.set_current_at(10, start));
        assert_eq!(ind.current(), 2);
        ind.tick_at(start + Duration::from_secs(1));
        assert_eq!(ind.progress(), 2.0);
    }

    #[test]
    fn test_tick_reports_repaint() {
        let mut ind = indicator(3, Variant::Beads);
        let start = Instant::now();
        assert!(!ind.tick_at(start));
        ind.set_current_at(1, start);
        assert!(ind.is_animating());
        assert!(ind.tick_at(start + Duration::from_millis(100)));
        assert!(ind.tick_at(start + Duration::from_millis(500)));
        assert!(!ind.is_animating());
        assert!(!ind.tick_at(start + Duration::from_millis(600)));
    }

    #[test]
    fn test_current_changed_signal() {
        let mut ind = indicator(4, Variant::Morse);
        let emitted = Arc::new(AtomicUsize::new(usize::MAX));
        let emitted_clone = emitted.clone();
        ind.current_changed.connect(move |&page| {
            emitted_clone.store(page, Ordering::SeqCst);
        });

        ind.set_current(3);
        assert_eq!(emitted.load(Ordering::SeqCst), 3);

        ind.set_count(2);
        assert_eq!(ind.current(), 1);
        assert_eq!(emitted.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_external_progress_ignores_set_current() {
        let external = AnimatedValue::new(1.25);
        let mut ind = indicator(4, Variant::Morse).with_external_progress(external.clone());
        assert!(ind.is_external());
        assert!(!ind.set_current(3));
        assert_eq!(ind.current(), 0);
        assert_eq!(ind.progress(), 1.25);

        external.set_value(-0.5);
        assert_eq!(ind.progress(), -0.5);
        assert!(!ind.tick());

        // Detaching keeps the last value, and settling animates from it.
        ind.set_external_progress(None);
        assert!(!ind.is_external());
        assert_eq!(ind.progress(), -0.5);
        external.set_value(2.0);
        assert_eq!(ind.progress(), -0.5);

        let start = Instant::now();
        assert!(ind.set_current_at(0, start));
        ind.tick_at(start + Duration::from_secs(1));
        assert_eq!(ind.progress(), 0.0);
    }

    #[test]
    fn test_detach_without_external_keeps_animation() {
        let mut ind = indicator(5, Variant::Morse);
        let handle = ind.progress_handle();
        let start = Instant::now();
        assert!(ind.set_current_at(3, start));
        ind.tick_at(start + Duration::from_millis(50));
        let mid = ind.progress();
        assert!(mid > 0.0 && mid < 3.0);

        ind.set_external_progress(None);
        assert!(ind.is_animating());
        assert_eq!(ind.progress(), mid);

        ind.tick_at(start + Duration::from_secs(5));
        assert_eq!(ind.current(), 3);
        assert_eq!(ind.progress(), 3.0);
        // Handles taken before the detach still observe the same value.
        assert_eq!(handle.value(), 3.0);
    }

    #[test]
    fn test_detach_adopts_nearest_page() {
        let mut ind = indicator(4, Variant::Beads).with_current(2);
        let emitted = Arc::new(AtomicUsize::new(0));
        let emitted_clone = emitted.clone();
        ind.current_changed.connect(move |_| {
            emitted_clone.fetch_add(1, Ordering::SeqCst);
        });

        // Drag from page 2 back to page 0.
        let scroll = AnimatedValue::new(2.0);
        ind.set_external_progress(Some(scroll.clone()));
        scroll.set_value(0.2);
        ind.set_external_progress(None);
        assert_eq!(ind.current(), 0);
        assert_eq!(emitted.load(Ordering::SeqCst), 0);

        // Returning to the page the drag started from is a page change.
        let start = Instant::now();
        assert!(ind.set_current_at(2, start));
        assert_eq!(ind.current(), 2);
        assert_eq!(emitted.load(Ordering::SeqCst), 1);

        // Overscroll past either end settles on the nearest real page.
        let scroll = AnimatedValue::new(7.6);
        ind.set_external_progress(Some(scroll));
        ind.set_external_progress(None);
        assert_eq!(ind.current(), 3);
        let scroll = AnimatedValue::new(-1.4);
        ind.set_external_progress(Some(scroll));
        ind.set_external_progress(None);
        assert_eq!(ind.current(), 0);
    }

    #[test]
    fn test_with_current_does_not_animate() {
        let ind = indicator(5, Variant::Morse).with_current(3);
        assert_eq!(ind.current(), 3);
        assert_eq!(ind.progress(), 3.0);
        assert!(!ind.is_animating());
    }

    #[test]
    fn test_preferred_sizes() {
        let morse = indicator(5, Variant::Morse);
        // 24 + 6 * 4 + 6 * 5
        assert_eq!(morse.preferred_size(), Size::new(78.0, 6.0));

        let beads = indicator(5, Variant::Beads);
        assert_eq!(beads.preferred_size(), Size::new(60.0, 6.0));

        let mut train = indicator(5, Variant::Train);
        assert_eq!(train.preferred_size(), Size::new(150.0, 6.0));
        train.set_orientation(Orientation::Vertical);
        assert_eq!(train.preferred_size(), Size::new(6.0, 150.0));
    }

    #[test]
    fn test_train_measures_segments() {
        setup();
        let mut train = indicator(5, Variant::Train);
        let sizes = Arc::new(AtomicUsize::new(0));
        let sizes_clone = sizes.clone();
        train.layout_changed.connect(move |_| {
            sizes_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert!(train.handle_layout(Size::new(250.0, 20.0)));
        assert_eq!(train.metrics().stroke, 44.0);
        assert!(!train.handle_layout(Size::new(250.0, 20.0)));
        assert_eq!(sizes.load(Ordering::SeqCst), 1);

        // Orientation change measures along the new main axis.
        train.set_orientation(Orientation::Vertical);
        assert_eq!(train.metrics().stroke, 0.0);
        train.handle_layout(Size::new(20.0, 300.0));
        assert_eq!(train.metrics().stroke, 54.0);
    }

    #[test]
    fn test_train_with_explicit_dash_is_not_measured() {
        let config = IndicatorConfig::new(5)
            .with_variant(Variant::Train)
            .with_dash_size(10.0);
        let mut train = PageIndicator::from_config(config).unwrap();
        train.handle_layout(Size::new(250.0, 20.0));
        assert_eq!(train.metrics().stroke, 10.0);

        let zero = IndicatorConfig::new(5)
            .with_variant(Variant::Train)
            .with_dash_size(0.0);
        let mut train = PageIndicator::from_config(zero).unwrap();
        assert_eq!(train.metrics().stroke, 24.0);
        train.handle_layout(Size::new(250.0, 20.0));
        assert_eq!(train.metrics().stroke, 44.0);
    }

    #[test]
    fn test_layout_centers_slots() {
        let beads = indicator(3, Variant::Beads);
        let layout = beads.layout(Rect::new(10.0, 10.0, 100.0, 20.0));
        assert_eq!(layout.slots.len(), 3);
        // 3 slots of 12 in 100: start at 10 + 32
        assert_eq!(layout.slots[0], Rect::new(42.0, 17.0, 12.0, 6.0));
        assert_eq!(layout.slots[2], Rect::new(66.0, 17.0, 12.0, 6.0));
        assert_eq!(layout.content(), Rect::new(42.0, 17.0, 36.0, 6.0));
    }

    #[test]
    fn test_set_variant_rebuilds_dots() {
        let mut ind = indicator(3, Variant::Morse);
        assert!(ind.set_variant(Variant::Beads));
        assert!(!ind.set_variant(Variant::Beads));
        assert_eq!(ind.frames().len(), 3);
        assert_eq!(ind.frames()[0].style.scale, 1.5);
    }

    #[test]
    fn test_paint_records_layers() {
        let ind = indicator(3, Variant::Beads);
        let mut renderer = RecordingRenderer::new();
        renderer.begin_frame(Size::new(100.0, 20.0));
        ind.paint(&mut renderer, Rect::new(0.0, 0.0, 100.0, 20.0));
        let stats = renderer.end_frame();

        assert_eq!(stats.draw_calls, 3);
        assert_eq!(renderer.save_depth(), 0);

        // Dot 0 is active and grown by 1.5 about its center.
        let DrawCommand::FillRoundedRect { shape, opacity, .. } = renderer.commands()[0];
        assert_eq!(shape.rect, Rect::new(33.5, 5.5, 9.0, 9.0));
        assert_eq!(opacity, 1.0);
        let DrawCommand::FillRoundedRect { opacity, .. } = renderer.commands()[1];
        assert_eq!(opacity, 0.5);
    }
}
