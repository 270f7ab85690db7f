//! The dash-pair ("Morse") dot.
//!
//! Each dot is drawn as two halves of a dash, each clipped to its own box.
//! While inactive the halves slide towards each other until only a
//! `size`-long dot shows; on activation they slide apart into a full dash.
//! The whole dot also translates along the main axis so that the extra
//! length of the active dash pushes its successors aside instead of
//! overlapping them.

use dotpager_core::Interpolation;
use dotpager_render::{CornerRadii, RoundedRect, Size};

use super::{DotLayer, DotParams, DotRenderer, DotStyle, axis_rect, shift_main};

/// A dot that stretches into a dash when active.
#[derive(Debug, Clone)]
pub struct MorseDot {
    index: usize,
    params: DotParams,
    /// Main-axis length of the active dash, at least twice the dot size.
    dash: f32,
    translate: Interpolation,
    opacity: Interpolation,
    overlay_opacity: Option<Interpolation>,
    shift: Interpolation,
}

impl MorseDot {
    /// Build the dot at `index`.
    pub fn new(index: usize, params: &DotParams) -> Self {
        let dash = params.dash.max(params.size * 2.0);
        let offset = (dash - params.size) / 2.0;
        let overlay = params.overlay();
        let center = index as f32;
        let n = params.count as f32;

        Self {
            index,
            params: *params,
            dash,
            translate: Interpolation::window(
                center,
                [
                    offset * (n - 2.0 * center),
                    offset * (n - 2.0 * center - 1.0),
                    offset * (n - 2.0 * center - 2.0),
                ],
            ),
            opacity: Interpolation::window(
                center,
                [params.opacity, if overlay { 0.0 } else { 1.0 }, params.opacity],
            ),
            overlay_opacity: overlay.then(|| Interpolation::window(center, [0.0, 1.0, 0.0])),
            shift: Interpolation::window(center, [offset, 0.0, offset]),
        }
    }

    /// Main-axis length of the active dash.
    pub fn dash(&self) -> f32 {
        self.dash
    }
}

impl DotRenderer for MorseDot {
    fn index(&self) -> usize {
        self.index
    }

    fn slot_size(&self) -> Size {
        Size::from_axes(
            self.params.orientation,
            self.dash + self.params.gap,
            self.params.size,
        )
    }

    fn style(&self, progress: f32) -> DotStyle {
        DotStyle {
            opacity: self.opacity.sample(progress),
            overlay_opacity: self
                .overlay_opacity
                .as_ref()
                .map_or(0.0, |table| table.sample(progress)),
            offset: self.translate.sample(progress),
            shift: self.shift.sample(progress),
            ..DotStyle::default()
        }
    }

    fn layers(&self, style: &DotStyle) -> Vec<DotLayer> {
        let p = &self.params;
        let orientation = p.orientation;
        let half = self.dash / 2.0;
        let start = p.gap / 2.0 + style.offset;

        let lead_box = axis_rect(orientation, start, half, 0.0, p.size);
        let trail_box = axis_rect(orientation, start + half, half, 0.0, p.size);
        let lead = shift_main(
            RoundedRect::with_radii(lead_box, CornerRadii::leading(orientation, p.radius)),
            orientation,
            style.shift,
        );
        let trail = shift_main(
            RoundedRect::with_radii(trail_box, CornerRadii::trailing(orientation, p.radius)),
            orientation,
            -style.shift,
        );

        let mut layers = vec![
            DotLayer::new(lead, p.color, style.opacity).with_clip(lead_box.into()),
            DotLayer::new(trail, p.color, style.opacity).with_clip(trail_box.into()),
        ];
        if self.overlay_opacity.is_some() {
            layers.push(
                DotLayer::new(lead, p.active_color, style.overlay_opacity)
                    .with_clip(lead_box.into()),
            );
            layers.push(
                DotLayer::new(trail, p.active_color, style.overlay_opacity)
                    .with_clip(trail_box.into()),
            );
        }
        layers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotpager_render::{Color, Orientation, Rect};

    fn params(count: usize) -> DotParams {
        DotParams {
            count,
            gap: 6.0,
            size: 6.0,
            dash: 24.0,
            radius: 3.0,
            ..DotParams::default()
        }
    }

    fn visible(layers: &[DotLayer]) -> Vec<Rect> {
        layers
            .iter()
            .filter_map(|layer| layer.visible_shape())
            .map(|shape| shape.rect)
            .collect()
    }

    #[test]
    fn test_dash_is_at_least_twice_the_size() {
        let short = DotParams {
            dash: 4.0,
            ..params(3)
        };
        let dot = MorseDot::new(0, &short);
        assert_eq!(dot.dash(), 12.0);
        assert_eq!(dot.slot_size(), Size::new(18.0, 6.0));
    }

    #[test]
    fn test_active_style() {
        let dot = MorseDot::new(2, &params(5));
        let style = dot.style(2.0);
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.overlay_opacity, 0.0);
        assert_eq!(style.shift, 0.0);
        // offset * (n - 2i - 1) with offset (24 - 6) / 2 = 9
        assert_eq!(style.offset, 0.0);

        let first = MorseDot::new(0, &params(5));
        assert_eq!(first.style(0.0).offset, 36.0);
    }

    #[test]
    fn test_inactive_style_is_constant_outside_window() {
        let dot = MorseDot::new(2, &params(5));
        for p in [-3.0, 0.0, 1.0] {
            let style = dot.style(p);
            assert_eq!(style.opacity, 0.5);
            assert_eq!(style.shift, 9.0);
            assert_eq!(style.offset, 9.0 * 1.0);
        }
        for p in [3.0, 4.0, 10.0] {
            let style = dot.style(p);
            assert_eq!(style.opacity, 0.5);
            assert_eq!(style.shift, 9.0);
            assert_eq!(style.offset, -9.0);
        }
    }

    #[test]
    fn test_active_dot_shows_full_dash() {
        let dot = MorseDot::new(1, &params(3));
        let style = dot.style(1.0);
        let rects = visible(&dot.layers(&style));
        assert_eq!(rects.len(), 2);
        let start = 3.0 + style.offset;
        assert_eq!(rects[0], Rect::new(start, 0.0, 12.0, 6.0));
        assert_eq!(rects[1], Rect::new(start + 12.0, 0.0, 12.0, 6.0));
    }

    #[test]
    fn test_inactive_dot_shows_size_long_dot() {
        let dot = MorseDot::new(1, &params(3));
        let style = dot.style(0.0);
        let layers = dot.layers(&style);
        let rects = visible(&layers);
        // Two halves of size / 2 meeting in the middle of the slot.
        let start = 3.0 + style.offset;
        assert_eq!(rects[0], Rect::new(start + 9.0, 0.0, 3.0, 6.0));
        assert_eq!(rects[1], Rect::new(start + 12.0, 0.0, 3.0, 6.0));

        let lead = layers[0].visible_shape().unwrap();
        assert_eq!(lead.radii.top_left, 3.0);
        assert_eq!(lead.radii.bottom_left, 3.0);
        assert_eq!(lead.radii.top_right, 0.0);
        let trail = layers[1].visible_shape().unwrap();
        assert_eq!(trail.radii.bottom_right, 3.0);
        assert_eq!(trail.radii.top_left, 0.0);
    }

    #[test]
    fn test_vertical_halves_stack() {
        let vertical = DotParams {
            orientation: Orientation::Vertical,
            ..params(1)
        };
        let dot = MorseDot::new(0, &vertical);
        assert_eq!(dot.slot_size(), Size::new(6.0, 30.0));
        let style = dot.style(0.0);
        let rects = visible(&dot.layers(&style));
        assert_eq!(rects[0], Rect::new(0.0, 3.0, 6.0, 12.0));
        assert_eq!(rects[1], Rect::new(0.0, 15.0, 6.0, 12.0));
    }

    #[test]
    fn test_overlay_layers() {
        let overlay = DotParams {
            active_color: Color::RED,
            ..params(3)
        };
        let dot = MorseDot::new(1, &overlay);

        let active = dot.style(1.0);
        assert_eq!(active.opacity, 0.0);
        assert_eq!(active.overlay_opacity, 1.0);
        let layers = dot.layers(&active);
        assert_eq!(layers.len(), 4);
        assert_eq!(layers[2].color, Color::RED);
        assert_eq!(layers[2].opacity, 1.0);

        let halfway = dot.style(0.5);
        assert_eq!(halfway.opacity, 0.25);
        assert_eq!(halfway.overlay_opacity, 0.5);
    }
}
