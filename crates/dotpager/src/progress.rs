//! Scroll-driven progress.
//!
//! While the user drags a paged view, the indicator should follow the
//! finger rather than animate on its own. [`ScrollProgress`] turns raw scroll
//! offsets into a progress value that a [`PageIndicator`] reads as its
//! external source.
//!
//! ```
//! use dotpager::{PageIndicator, ScrollProgress};
//!
//! let scroll = ScrollProgress::new(320.0);
//! let mut indicator = PageIndicator::new(4);
//! indicator.set_external_progress(Some(scroll.handle()));
//!
//! scroll.on_scroll(480.0);
//! assert_eq!(indicator.progress(), 1.5);
//! ```
//!
//! [`PageIndicator`]: crate::PageIndicator

use dotpager_core::AnimatedValue;
use dotpager_core::logging::targets;

/// Derives a progress value from a scroll offset and a page length.
#[derive(Debug, Clone)]
pub struct ScrollProgress {
    page_length: f32,
    value: AnimatedValue,
}

impl ScrollProgress {
    /// Track scrolling over pages of `page_length` logical units.
    pub fn new(page_length: f32) -> Self {
        Self::with_value(page_length, AnimatedValue::new(0.0))
    }

    /// Track scrolling into an existing progress value.
    pub fn with_value(page_length: f32, value: AnimatedValue) -> Self {
        if !Self::is_valid_length(page_length) {
            tracing::warn!(
                target: targets::SCROLL,
                page_length,
                "page length must be positive, scroll offsets will be ignored until it is set"
            );
        }
        Self { page_length, value }
    }

    /// Length of one page along the scroll axis.
    pub fn page_length(&self) -> f32 {
        self.page_length
    }

    /// Change the page length, e.g. after the paged view was resized.
    ///
    /// Non-positive or non-finite lengths are ignored. Returns whether the
    /// length changed.
    pub fn set_page_length(&mut self, page_length: f32) -> bool {
        if !Self::is_valid_length(page_length) {
            tracing::warn!(target: targets::SCROLL, page_length, "ignoring invalid page length");
            return false;
        }
        if self.page_length == page_length {
            return false;
        }
        self.page_length = page_length;
        true
    }

    /// Feed a scroll offset.
    ///
    /// The progress becomes `offset / page_length` immediately, without
    /// clamping: overscroll past the first or last page shows up as
    /// progress outside the page range. Returns `false` when the page
    /// length is unusable and the offset was ignored.
    pub fn on_scroll(&self, offset: f32) -> bool {
        if !Self::is_valid_length(self.page_length) {
            tracing::warn!(
                target: targets::SCROLL,
                offset,
                page_length = self.page_length,
                "ignoring scroll offset"
            );
            return false;
        }
        let progress = offset / self.page_length;
        tracing::trace!(target: targets::SCROLL, offset, progress, "scroll");
        self.value.set_value(progress);
        true
    }

    /// The page a gesture ending at `offset` should settle on, for a view
    /// with `count` pages.
    pub fn page_for_offset(&self, offset: f32, count: usize) -> usize {
        let last = count.saturating_sub(1);
        if !Self::is_valid_length(self.page_length) {
            return 0;
        }
        let page = (offset / self.page_length).round();
        if page <= 0.0 {
            0
        } else {
            (page as usize).min(last)
        }
    }

    /// The current progress.
    pub fn value(&self) -> f32 {
        self.value.value()
    }

    /// A handle to the progress value, for handing to an indicator.
    pub fn handle(&self) -> AnimatedValue {
        self.value.clone()
    }

    fn is_valid_length(page_length: f32) -> bool {
        page_length.is_finite() && page_length > 0.0
    }
}
