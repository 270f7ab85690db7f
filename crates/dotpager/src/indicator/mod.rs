//! Per-dot renderers.
//!
//! Every dot of an indicator is driven by the same progress value. A
//! [`DotRenderer`] maps that value through fixed three-point interpolation
//! tables anchored at `index - 1`, `index`, and `index + 1` and turns the
//! result into [`DotLayer`]s ready to paint.
//!
//! The three variants live in their own modules:
//!
//! - [`MorseDot`]: a dot that stretches into a dash when active
//! - [`BeadDot`]: a dot that grows when active
//! - [`TrainDot`]: a segment with a highlight sliding through it

mod beads;
mod morse;
mod train;

pub use beads::BeadDot;
pub use morse::MorseDot;
pub use train::TrainDot;

use dotpager_render::{Color, Orientation, Rect, Renderer, RoundedRect, Size};

use crate::variant::Variant;

/// Styling shared by every dot of one indicator.
///
/// Sizes are already pixel rounded and clamped; see
/// [`PageIndicator`](crate::PageIndicator) for how they are derived from an
/// [`IndicatorConfig`](crate::IndicatorConfig).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotParams {
    /// Number of dots in the indicator.
    pub count: usize,
    /// Spacing between neighbouring dots along the main axis.
    pub gap: f32,
    /// Cross-axis thickness of a dot, and its main-axis length when inactive.
    pub size: f32,
    /// Main-axis length of the active dash (Morse) or of each segment (Train).
    pub dash: f32,
    /// Corner radius.
    pub radius: f32,
    /// Opacity of inactive dots.
    pub opacity: f32,
    /// Growth factor of the active bead.
    pub scale: f32,
    /// Base color.
    pub color: Color,
    /// Color of the active dot.
    pub active_color: Color,
    /// Layout direction.
    pub orientation: Orientation,
}

impl DotParams {
    /// Whether the active color differs from the base color, in which case
    /// dots paint a second layer that cross-fades into the active color.
    #[inline]
    pub fn overlay(&self) -> bool {
        self.active_color != self.color
    }
}

impl Default for DotParams {
    fn default() -> Self {
        Self {
            count: 1,
            gap: 6.0,
            size: 6.0,
            dash: 24.0,
            radius: 3.0,
            opacity: 0.5,
            scale: 1.5,
            color: Color::BLACK,
            active_color: Color::BLACK,
            orientation: Orientation::Horizontal,
        }
    }
}

/// Interpolated attributes of one dot at one progress value.
///
/// Attributes a variant does not animate keep their neutral value: opacity
/// and scale `1.0`, offsets `0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotStyle {
    /// Opacity of the base layer.
    pub opacity: f32,
    /// Opacity of the active-color layer. Always `0.0` for variants or
    /// configurations without an overlay.
    pub overlay_opacity: f32,
    /// Scale applied about the dot center.
    pub scale: f32,
    /// Main-axis translation of the whole dot (Morse).
    pub offset: f32,
    /// Main-axis shift of the leading half towards the center (Morse). The
    /// trailing half moves by the same amount in the other direction.
    pub shift: f32,
    /// Main-axis translation of the sliding highlight (Train).
    pub slide: f32,
}

impl Default for DotStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            overlay_opacity: 0.0,
            scale: 1.0,
            offset: 0.0,
            shift: 0.0,
            slide: 0.0,
        }
    }
}

/// One filled shape of a dot, in slot coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotLayer {
    /// Shape before scaling.
    pub shape: RoundedRect,
    /// Region the shape is clipped to, if any. Not affected by `scale`.
    pub clip: Option<RoundedRect>,
    /// Fill color.
    pub color: Color,
    /// Layer opacity.
    pub opacity: f32,
    /// Scale applied about the center of `shape`.
    pub scale: f32,
}

impl DotLayer {
    /// A layer filling `shape` with no clip and no scale.
    pub fn new(shape: RoundedRect, color: Color, opacity: f32) -> Self {
        Self {
            shape,
            clip: None,
            color,
            opacity,
            scale: 1.0,
        }
    }

    /// Clip the layer to `clip`.
    pub fn with_clip(mut self, clip: RoundedRect) -> Self {
        self.clip = Some(clip);
        self
    }

    /// Scale the layer about the center of its shape.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// The shape after scaling and clipping, or `None` when it is clipped
    /// away entirely.
    pub fn visible_shape(&self) -> Option<RoundedRect> {
        let scaled = RoundedRect::with_radii(
            self.shape.rect.scale_about_center(self.scale),
            self.shape.radii.scaled(self.scale),
        );
        match &self.clip {
            Some(clip) => scaled.clipped(clip),
            None => Some(scaled),
        }
    }

    /// Paint the layer with its slot origin at the renderer's current
    /// origin.
    pub fn paint(&self, renderer: &mut impl Renderer) {
        renderer.save();
        if let Some(clip) = self.clip {
            renderer.clip_rounded_rect(clip);
        }
        if self.scale != 1.0 {
            let center = self.shape.rect.center();
            renderer.translate(center.x, center.y);
            renderer.scale(self.scale, self.scale);
            renderer.translate(-center.x, -center.y);
        }
        renderer.set_opacity(self.opacity);
        renderer.fill_rounded_rect(self.shape, self.color);
        renderer.restore();
    }
}

/// Everything needed to paint one dot at one progress value.
#[derive(Debug, Clone, PartialEq)]
pub struct DotFrame {
    /// Dot index.
    pub index: usize,
    /// Interpolated attributes.
    pub style: DotStyle,
    /// Layers in paint order, in slot coordinates.
    pub layers: Vec<DotLayer>,
}

/// A renderer for a single dot.
///
/// Implementations are built once per dot and hold their interpolation
/// tables; [`style`](Self::style) is then a pure function of the progress
/// value.
pub trait DotRenderer: Send + Sync {
    /// The dot's index.
    fn index(&self) -> usize;

    /// Size of the layout slot, gap margins included.
    fn slot_size(&self) -> Size;

    /// Interpolated attributes at `progress`.
    fn style(&self, progress: f32) -> DotStyle;

    /// Shapes to paint for `style`, in slot coordinates.
    fn layers(&self, style: &DotStyle) -> Vec<DotLayer>;

    /// Style and layers at `progress`.
    fn frame(&self, progress: f32) -> DotFrame {
        let style = self.style(progress);
        DotFrame {
            index: self.index(),
            layers: self.layers(&style),
            style,
        }
    }
}

/// Build the renderer for dot `index` of the given variant.
pub fn dot_renderer(variant: Variant, index: usize, params: &DotParams) -> Box<dyn DotRenderer> {
    match variant {
        Variant::Morse => Box::new(MorseDot::new(index, params)),
        Variant::Beads => Box::new(BeadDot::new(index, params)),
        Variant::Train => Box::new(TrainDot::new(index, params)),
    }
}

/// A rectangle given by its extent along the main and cross axes.
pub(crate) fn axis_rect(
    orientation: Orientation,
    main_start: f32,
    main_len: f32,
    cross_start: f32,
    cross_len: f32,
) -> Rect {
    match orientation {
        Orientation::Horizontal => Rect::new(main_start, cross_start, main_len, cross_len),
        Orientation::Vertical => Rect::new(cross_start, main_start, cross_len, main_len),
    }
}

/// Translate `shape` by `distance` along the main axis.
pub(crate) fn shift_main(shape: RoundedRect, orientation: Orientation, distance: f32) -> RoundedRect {
    let (dx, dy) = orientation.main_offset(distance);
    shape.offset(dx, dy)
}
