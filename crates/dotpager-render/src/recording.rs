//! A renderer that records resolved draw commands instead of drawing.
//!
//! [`RecordingRenderer`] applies the transform, clip, and opacity state of
//! the [`Renderer`] interface eagerly, so every recorded
//! [`DrawCommand`] is already in device coordinates with its final clip
//! applied. This makes it useful both for tests and for simple software
//! backends that only need to rasterize rounded rectangles.

use glam::{Affine2, Vec2};

use crate::renderer::{FrameStats, Renderer};
use crate::types::{Color, Point, Rect, RoundedRect, Size};

/// A fill that survived clipping, in device coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// A filled rounded rectangle.
    FillRoundedRect {
        /// The visible shape after clipping.
        shape: RoundedRect,
        /// The fill color.
        color: Color,
        /// The accumulated layer opacity at the time of the fill.
        opacity: f32,
    },
}

impl DrawCommand {
    /// The visible shape of the command.
    pub fn shape(&self) -> &RoundedRect {
        match self {
            Self::FillRoundedRect { shape, .. } => shape,
        }
    }

    /// The fill color with layer opacity applied.
    pub fn effective_color(&self) -> Color {
        match self {
            Self::FillRoundedRect { color, opacity, .. } => color.fade(*opacity),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct RenderState {
    transform: Affine2,
    clip: Option<RoundedRect>,
    opacity: f32,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            transform: Affine2::IDENTITY,
            clip: None,
            opacity: 1.0,
        }
    }
}

/// Records draw commands after resolving renderer state.
///
/// # Example
///
/// ```
/// use dotpager_render::{Color, DrawCommand, Rect, RecordingRenderer, Renderer, Size};
///
/// let mut renderer = RecordingRenderer::new();
/// renderer.begin_frame(Size::new(100.0, 100.0));
/// renderer.translate(10.0, 0.0);
/// renderer.set_opacity(0.5);
/// renderer.fill_rect(Rect::new(0.0, 0.0, 6.0, 6.0), Color::BLACK);
/// let stats = renderer.end_frame();
///
/// assert_eq!(stats.draw_calls, 1);
/// let DrawCommand::FillRoundedRect { shape, opacity, .. } = renderer.commands()[0];
/// assert_eq!(shape.rect, Rect::new(10.0, 0.0, 6.0, 6.0));
/// assert_eq!(opacity, 0.5);
/// ```
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    state: RenderState,
    stack: Vec<RenderState>,
    commands: Vec<DrawCommand>,
    stats: FrameStats,
}

impl RecordingRenderer {
    /// Create an empty recording renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands recorded so far.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the list empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Current depth of the save stack.
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    /// Current clip region in device coordinates, if any.
    pub fn clip_bounds(&self) -> Option<Rect> {
        self.state.clip.map(|clip| clip.rect)
    }

    fn map_rect(&self, rect: Rect) -> Rect {
        let a = self.state.transform.transform_point2(rect.origin.to_vec2());
        let b = self
            .state
            .transform
            .transform_point2(Vec2::new(rect.right(), rect.bottom()));
        Rect::from_corners(Point::from_vec2(a.min(b)), Point::from_vec2(a.max(b)))
    }

    fn map_rounded_rect(&self, shape: RoundedRect) -> RoundedRect {
        let m = self.state.transform.matrix2;
        let factor = m.x_axis.x.abs().min(m.y_axis.y.abs());
        RoundedRect::with_radii(self.map_rect(shape.rect), shape.radii.scaled(factor))
    }

    fn push_clip(&mut self, device: RoundedRect) {
        let clip = match self.state.clip {
            Some(current) => device
                .clipped(&current)
                .unwrap_or(RoundedRect::from(Rect::ZERO)),
            None => device,
        };
        self.state.clip = Some(clip);
    }
}

impl Renderer for RecordingRenderer {
    fn begin_frame(&mut self, viewport_size: Size) {
        self.stack.clear();
        self.commands.clear();
        self.stats = FrameStats::default();
        self.state = RenderState {
            clip: Some(RoundedRect::from(Rect::from_origin_size(
                Point::ZERO,
                viewport_size,
            ))),
            ..RenderState::default()
        };
    }

    fn end_frame(&mut self) -> FrameStats {
        if !self.stack.is_empty() {
            tracing::warn!(
                target: "dotpager_render::recording",
                depth = self.stack.len(),
                "frame ended with unbalanced save()"
            );
        }
        std::mem::take(&mut self.stats)
    }

    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => tracing::warn!(
                target: "dotpager_render::recording",
                "restore() without matching save()"
            ),
        }
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.state.transform =
            self.state.transform * Affine2::from_translation(Vec2::new(tx, ty));
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.state.transform = self.state.transform * Affine2::from_scale(Vec2::new(sx, sy));
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.state.opacity *= opacity.clamp(0.0, 1.0);
    }

    fn opacity(&self) -> f32 {
        self.state.opacity
    }

    fn clip_rect(&mut self, rect: Rect) {
        let device = RoundedRect::from(self.map_rect(rect));
        self.push_clip(device);
    }

    fn clip_rounded_rect(&mut self, rect: RoundedRect) {
        let device = self.map_rounded_rect(rect);
        self.push_clip(device);
    }

    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color) {
        let opacity = self.state.opacity;
        if opacity <= 0.0 || color.a <= 0.0 {
            self.stats.culled += 1;
            return;
        }

        let device = self.map_rounded_rect(rect);
        let visible = match self.state.clip {
            Some(clip) => device.clipped(&clip),
            None if device.rect.is_empty() => None,
            None => Some(device),
        };

        match visible {
            Some(shape) => {
                self.stats.draw_calls += 1;
                self.commands.push(DrawCommand::FillRoundedRect {
                    shape,
                    color,
                    opacity,
                });
            }
            None => self.stats.culled += 1,
        }
    }
}

static_assertions::assert_impl_all!(RecordingRenderer: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CornerRadii;

    fn only_shape(renderer: &RecordingRenderer) -> RoundedRect {
        assert_eq!(renderer.commands().len(), 1);
        *renderer.commands()[0].shape()
    }

    #[test]
    fn test_translate_and_scale() {
        let mut r = RecordingRenderer::new();
        r.translate(10.0, 5.0);
        r.scale(2.0, 2.0);
        r.fill_rounded_rect(RoundedRect::new(Rect::new(1.0, 1.0, 4.0, 4.0), 1.0), Color::RED);

        let shape = only_shape(&r);
        assert_eq!(shape.rect, Rect::new(12.0, 7.0, 8.0, 8.0));
        assert_eq!(shape.radii, CornerRadii::uniform(2.0));
    }

    #[test]
    fn test_scale_about_center_via_translate() {
        let mut r = RecordingRenderer::new();
        // Scale a 6x6 dot at (0,0) by 1.5 about its center (3,3).
        r.translate(3.0, 3.0);
        r.scale(1.5, 1.5);
        r.translate(-3.0, -3.0);
        r.fill_rect(Rect::new(0.0, 0.0, 6.0, 6.0), Color::BLACK);
        assert_eq!(only_shape(&r).rect, Rect::new(-1.5, -1.5, 9.0, 9.0));
    }

    #[test]
    fn test_save_restore() {
        let mut r = RecordingRenderer::new();
        r.save();
        r.translate(100.0, 0.0);
        r.set_opacity(0.5);
        r.restore();
        assert_eq!(r.opacity(), 1.0);
        r.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        assert_eq!(only_shape(&r).rect, Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(r.save_depth(), 0);

        // Unbalanced restore is tolerated.
        r.restore();
    }

    #[test]
    fn test_opacity_multiplies() {
        let mut r = RecordingRenderer::new();
        r.set_opacity(0.5);
        r.save();
        r.set_opacity(0.5);
        assert_eq!(r.opacity(), 0.25);
        r.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
        let color = r.commands()[0].effective_color();
        assert_eq!(color.a, 0.25);
        r.restore();
        assert_eq!(r.opacity(), 0.5);
    }

    #[test]
    fn test_transparent_fills_are_culled() {
        let mut r = RecordingRenderer::new();
        r.begin_frame(Size::new(50.0, 50.0));
        r.set_opacity(0.0);
        r.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK);
        let stats = r.end_frame();
        assert_eq!(stats, FrameStats { draw_calls: 0, culled: 1 });
        assert!(r.commands().is_empty());
    }

    #[test]
    fn test_clip_in_local_coordinates() {
        let mut r = RecordingRenderer::new();
        r.translate(20.0, 0.0);
        r.clip_rect(Rect::new(0.0, 0.0, 3.0, 6.0));
        r.translate(2.0, 0.0);
        r.fill_rounded_rect(RoundedRect::new(Rect::new(0.0, 0.0, 6.0, 6.0), 3.0), Color::BLACK);

        let shape = only_shape(&r);
        assert_eq!(shape.rect, Rect::new(22.0, 0.0, 1.0, 6.0));
        assert_eq!(shape.radii.top_left, 3.0);
        assert_eq!(shape.radii.top_right, 0.0);
        assert_eq!(r.clip_bounds(), Some(Rect::new(20.0, 0.0, 3.0, 6.0)));
    }

    #[test]
    fn test_nested_clips_intersect() {
        let mut r = RecordingRenderer::new();
        r.begin_frame(Size::new(100.0, 100.0));
        r.clip_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        r.clip_rect(Rect::new(20.0, 0.0, 10.0, 10.0));
        r.fill_rect(Rect::new(0.0, 0.0, 100.0, 100.0), Color::BLACK);
        let stats = r.end_frame();
        assert_eq!(stats.culled, 1);
        assert!(r.commands().is_empty());
    }

    #[test]
    fn test_viewport_clip() {
        let mut r = RecordingRenderer::new();
        r.begin_frame(Size::new(10.0, 10.0));
        r.fill_rect(Rect::new(5.0, 5.0, 10.0, 10.0), Color::BLACK);
        assert_eq!(only_shape(&r).rect, Rect::new(5.0, 5.0, 5.0, 5.0));
    }
}
