//! Core renderer trait defining the drawing interface used by indicators.
//!
//! The [`Renderer`] trait is the only thing an indicator needs from its host:
//! a state stack, translation and scaling, opacity, clipping to (rounded)
//! rectangles, and filled (rounded) rectangles. Hosts implement it on top of
//! whatever backend they draw with.

use crate::types::{Color, Rect, RoundedRect, Size};

/// Statistics from a frame render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Number of fill commands that produced visible output.
    pub draw_calls: u32,
    /// Number of fill commands discarded because they were fully clipped or
    /// fully transparent.
    pub culled: u32,
}

/// The 2D drawing interface.
///
/// # Frame Lifecycle
///
/// ```ignore
/// renderer.begin_frame(viewport_size);
///
/// renderer.save();
/// renderer.translate(10.0, 10.0);
/// renderer.set_opacity(0.5);
/// renderer.fill_rounded_rect(RoundedRect::new(rect, 3.0), Color::BLACK);
/// renderer.restore();
///
/// let stats = renderer.end_frame();
/// ```
///
/// # State Stack
///
/// The renderer maintains a state stack that can be saved and restored.
/// This includes the transform, the clip region, and the opacity.
pub trait Renderer {
    /// Begin a new frame covering `viewport_size`.
    fn begin_frame(&mut self, viewport_size: Size);

    /// End the current frame.
    fn end_frame(&mut self) -> FrameStats;

    // =========================================================================
    // State Management
    // =========================================================================

    /// Save the current render state (transform, clip, opacity).
    fn save(&mut self);

    /// Restore the previously saved render state.
    fn restore(&mut self);

    // =========================================================================
    // Transform Operations
    // =========================================================================

    /// Apply a translation to the current transform.
    fn translate(&mut self, tx: f32, ty: f32);

    /// Apply a scale to the current transform.
    fn scale(&mut self, sx: f32, sy: f32);

    // =========================================================================
    // Opacity
    // =========================================================================

    /// Multiply the current opacity by `opacity`.
    ///
    /// Opacity composes the way nested layers do: a half-transparent layer
    /// inside another half-transparent layer ends up at a quarter.
    fn set_opacity(&mut self, opacity: f32);

    /// The effective opacity applied to subsequent fills.
    fn opacity(&self) -> f32;

    // =========================================================================
    // Clipping
    // =========================================================================

    /// Intersect the clip region with `rect`.
    fn clip_rect(&mut self, rect: Rect);

    /// Intersect the clip region with a rounded rectangle.
    fn clip_rounded_rect(&mut self, rect: RoundedRect);

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fill_rounded_rect(RoundedRect::from(rect), color);
    }

    /// Fill a rounded rectangle.
    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color);
}
