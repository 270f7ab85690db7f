//! The sliding-train segment.
//!
//! Each dot is a dim segment clipped to its rounded box. A highlight of the
//! same length slides through the segments as the progress moves, so the
//! active position reads as one block travelling along the track rather
//! than as individual dots lighting up.

use dotpager_core::Interpolation;
use dotpager_render::{RoundedRect, Size};

use super::{DotLayer, DotParams, DotRenderer, DotStyle, axis_rect, shift_main};

/// A segment with a highlight sliding through it.
#[derive(Debug, Clone)]
pub struct TrainDot {
    index: usize,
    params: DotParams,
    slide: Interpolation,
}

impl TrainDot {
    /// Build the segment at `index`. `params.dash` is the segment length.
    pub fn new(index: usize, params: &DotParams) -> Self {
        let stroke = params.dash;
        Self {
            index,
            params: *params,
            slide: Interpolation::window(index as f32, [-stroke, 0.0, stroke]),
        }
    }

    /// Main-axis length of the segment.
    pub fn stroke(&self) -> f32 {
        self.params.dash
    }
}

impl DotRenderer for TrainDot {
    fn index(&self) -> usize {
        self.index
    }

    fn slot_size(&self) -> Size {
        Size::from_axes(
            self.params.orientation,
            self.params.dash + self.params.gap,
            self.params.size,
        )
    }

    fn style(&self, progress: f32) -> DotStyle {
        DotStyle {
            opacity: self.params.opacity,
            overlay_opacity: 1.0,
            slide: self.slide.sample(progress),
            ..DotStyle::default()
        }
    }

    fn layers(&self, style: &DotStyle) -> Vec<DotLayer> {
        let p = &self.params;
        let segment = RoundedRect::new(
            axis_rect(p.orientation, p.gap / 2.0, p.dash, 0.0, p.size),
            p.radius,
        );
        let highlight = shift_main(segment, p.orientation, style.slide);

        vec![
            DotLayer::new(segment, p.color, style.opacity).with_clip(segment),
            DotLayer::new(highlight, p.active_color, style.overlay_opacity).with_clip(segment),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotpager_render::{Color, Orientation, Rect};

    fn params() -> DotParams {
        DotParams {
            count: 5,
            dash: 44.0,
            active_color: Color::BLUE,
            ..DotParams::default()
        }
    }

    #[test]
    fn test_slot_size() {
        let dot = TrainDot::new(0, &params());
        assert_eq!(dot.stroke(), 44.0);
        assert_eq!(dot.slot_size(), Size::new(50.0, 6.0));
    }

    #[test]
    fn test_slide_is_clamped_to_one_stroke() {
        let dot = TrainDot::new(2, &params());
        assert_eq!(dot.style(2.0).slide, 0.0);
        assert_eq!(dot.style(2.5).slide, 22.0);
        assert_eq!(dot.style(1.75).slide, -11.0);
        assert_eq!(dot.style(0.0).slide, -44.0);
        assert_eq!(dot.style(9.0).slide, 44.0);
    }

    #[test]
    fn test_base_layer_keeps_constant_opacity() {
        let dot = TrainDot::new(1, &params());
        for p in [0.0, 0.5, 1.0, 1.5, 4.0] {
            assert_eq!(dot.style(p).opacity, 0.5);
        }
    }

    #[test]
    fn test_highlight_visible_only_near_index() {
        let dot = TrainDot::new(1, &params());

        let active = dot.layers(&dot.style(1.0));
        let highlight = active[1].visible_shape().unwrap();
        assert_eq!(highlight.rect, Rect::new(3.0, 0.0, 44.0, 6.0));
        assert_eq!(active[1].color, Color::BLUE);
        assert_eq!(active[1].opacity, 1.0);

        let leaving = dot.layers(&dot.style(1.5));
        let highlight = leaving[1].visible_shape().unwrap();
        assert_eq!(highlight.rect, Rect::new(25.0, 0.0, 22.0, 6.0));
        // Corners cut by the segment box take the box's rounding.
        assert_eq!(highlight.radii.top_left, 3.0);

        let gone = dot.layers(&dot.style(3.0));
        assert!(gone[1].visible_shape().is_none());
        assert!(gone[0].visible_shape().is_some());
    }

    #[test]
    fn test_vertical_slide() {
        let vertical = DotParams {
            orientation: Orientation::Vertical,
            ..params()
        };
        let dot = TrainDot::new(0, &vertical);
        let layers = dot.layers(&dot.style(0.5));
        let highlight = layers[1].visible_shape().unwrap();
        assert_eq!(highlight.rect, Rect::new(0.0, 25.0, 6.0, 22.0));
    }
}
