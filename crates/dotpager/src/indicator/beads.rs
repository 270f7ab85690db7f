//! The scaling-bead dot.

use dotpager_core::Interpolation;
use dotpager_render::{RoundedRect, Size};

use super::{DotLayer, DotParams, DotRenderer, DotStyle, axis_rect};

/// A dot that grows by `scale` when active.
#[derive(Debug, Clone)]
pub struct BeadDot {
    index: usize,
    params: DotParams,
    scale: Interpolation,
    opacity: Interpolation,
    overlay_opacity: Option<Interpolation>,
}

impl BeadDot {
    /// Build the dot at `index`.
    pub fn new(index: usize, params: &DotParams) -> Self {
        let overlay = params.overlay();
        let center = index as f32;

        Self {
            index,
            params: *params,
            scale: Interpolation::window(center, [1.0, params.scale, 1.0]),
            opacity: Interpolation::window(
                center,
                [params.opacity, if overlay { 0.0 } else { 1.0 }, params.opacity],
            ),
            overlay_opacity: overlay.then(|| Interpolation::window(center, [0.0, 1.0, 0.0])),
        }
    }
}

impl DotRenderer for BeadDot {
    fn index(&self) -> usize {
        self.index
    }

    fn slot_size(&self) -> Size {
        Size::from_axes(
            self.params.orientation,
            self.params.size + self.params.gap,
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
            scale: self.scale.sample(progress),
            ..DotStyle::default()
        }
    }

    fn layers(&self, style: &DotStyle) -> Vec<DotLayer> {
        let p = &self.params;
        let bead = RoundedRect::new(
            axis_rect(p.orientation, p.gap / 2.0, p.size, 0.0, p.size),
            p.radius,
        );

        let mut layers = vec![DotLayer::new(bead, p.color, style.opacity).with_scale(style.scale)];
        if self.overlay_opacity.is_some() {
            layers.push(
                DotLayer::new(bead, p.active_color, style.overlay_opacity).with_scale(style.scale),
            );
        }
        layers
    }
}
