//! Basic geometry and color types for rendering.
//!
//! This module provides fundamental types used throughout the indicator: the
//! layout boxes of dots, their rounded shapes, and their colors.

use std::fmt;

use bytemuck::{Pod, Zeroable};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Convert to a glam Vec2.
    #[inline]
    pub fn to_vec2(self) -> glam::Vec2 {
        glam::Vec2::new(self.x, self.y)
    }

    /// Create from a glam Vec2.
    #[inline]
    pub fn from_vec2(v: glam::Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<glam::Vec2> for Point {
    fn from(v: glam::Vec2) -> Self {
        Self::from_vec2(v)
    }
}

/// A size in 2D space (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Build a size from lengths along the main and cross axes of
    /// `orientation`.
    #[inline]
    pub fn from_axes(orientation: Orientation, main: f32, cross: f32) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(main, cross),
            Orientation::Vertical => Self::new(cross, main),
        }
    }

    /// Length along the main axis of `orientation`.
    #[inline]
    pub fn main(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }

    /// Length along the cross axis of `orientation`.
    #[inline]
    pub fn cross(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => self.height,
            Orientation::Vertical => self.width,
        }
    }

    /// Check if the size has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self { width, height }
    }
}

/// Layout direction of an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Dots laid out left to right.
    #[default]
    Horizontal,
    /// Dots laid out top to bottom.
    Vertical,
}

impl Orientation {
    /// Orientation from a "vertical" flag.
    #[inline]
    pub fn from_vertical(vertical: bool) -> Self {
        if vertical {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }

    /// Whether this is [`Orientation::Vertical`].
    #[inline]
    pub fn is_vertical(self) -> bool {
        self == Self::Vertical
    }

    /// Unit offset `(dx, dy)` for a displacement of `distance` along the
    /// main axis.
    #[inline]
    pub fn main_offset(self, distance: f32) -> (f32, f32) {
        match self {
            Self::Horizontal => (distance, 0.0),
            Self::Vertical => (0.0, distance),
        }
    }
}

/// A rectangle defined by origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle from origin and size.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Create a rectangle from two corner points.
    pub fn from_corners(min: Point, max: Point) -> Self {
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Create a rectangle from its origin and size.
    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Zero rectangle at the origin.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Left edge x coordinate.
    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    /// Top edge y coordinate.
    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    /// Right edge x coordinate.
    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Bottom edge y coordinate.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Width of the rectangle.
    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    /// Height of the rectangle.
    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Center point of the rectangle.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Compute the intersection of two rectangles.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if left < right && top < bottom {
            Some(Rect::new(left, top, right - left, bottom - top))
        } else {
            None
        }
    }

    /// Offset the rectangle by a delta.
    #[inline]
    pub fn offset(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(
            self.origin.x + dx,
            self.origin.y + dy,
            self.size.width,
            self.size.height,
        )
    }

    /// Scale the rectangle about its center.
    pub fn scale_about_center(&self, factor: f32) -> Rect {
        let center = self.center();
        let width = self.width() * factor;
        let height = self.height() * factor;
        Rect::new(
            center.x - width / 2.0,
            center.y - height / 2.0,
            width,
            height,
        )
    }
}

/// Corner radii for a rounded rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    /// Same radius on every corner.
    #[inline]
    pub const fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// No rounding.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Radius on the two corners at the start of the main axis (left corners
    /// when horizontal, top corners when vertical).
    pub fn leading(orientation: Orientation, radius: f32) -> Self {
        match orientation {
            Orientation::Horizontal => Self {
                top_left: radius,
                bottom_left: radius,
                ..Self::ZERO
            },
            Orientation::Vertical => Self {
                top_left: radius,
                top_right: radius,
                ..Self::ZERO
            },
        }
    }

    /// Radius on the two corners at the end of the main axis.
    pub fn trailing(orientation: Orientation, radius: f32) -> Self {
        match orientation {
            Orientation::Horizontal => Self {
                top_right: radius,
                bottom_right: radius,
                ..Self::ZERO
            },
            Orientation::Vertical => Self {
                bottom_left: radius,
                bottom_right: radius,
                ..Self::ZERO
            },
        }
    }

    /// Whether all radii are zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.top_left == 0.0
            && self.top_right == 0.0
            && self.bottom_right == 0.0
            && self.bottom_left == 0.0
    }

    /// All radii multiplied by `factor`.
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            top_left: self.top_left * factor,
            top_right: self.top_right * factor,
            bottom_right: self.bottom_right * factor,
            bottom_left: self.bottom_left * factor,
        }
    }
}

/// A rectangle with rounded corners.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RoundedRect {
    pub rect: Rect,
    pub radii: CornerRadii,
}

impl RoundedRect {
    /// Create a rounded rectangle with the same radius on every corner.
    pub fn new(rect: Rect, radius: f32) -> Self {
        Self {
            rect,
            radii: CornerRadii::uniform(radius),
        }
    }

    /// Create a rounded rectangle with per-corner radii.
    pub fn with_radii(rect: Rect, radii: CornerRadii) -> Self {
        Self { rect, radii }
    }

    /// Whether this is a plain rectangle.
    pub fn is_rect(&self) -> bool {
        self.radii.is_zero()
    }

    /// Offset the shape by a delta.
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self {
            rect: self.rect.offset(dx, dy),
            radii: self.radii,
        }
    }

    /// Clip the shape to `clip`.
    ///
    /// Corners that the clip cuts away take the clip's rounding at that
    /// corner; corners that survive keep their own. Returns `None` when
    /// nothing is left.
    pub fn clipped(&self, clip: &RoundedRect) -> Option<Self> {
        let rect = self.rect.intersect(&clip.rect)?;
        let left_cut = rect.left() > self.rect.left();
        let right_cut = rect.right() < self.rect.right();
        let top_cut = rect.top() > self.rect.top();
        let bottom_cut = rect.bottom() < self.rect.bottom();

        let pick = |cut_a: bool, cut_b: bool, own: f32, theirs: f32| {
            if cut_a || cut_b { theirs } else { own }
        };
        Some(Self {
            rect,
            radii: CornerRadii {
                top_left: pick(left_cut, top_cut, self.radii.top_left, clip.radii.top_left),
                top_right: pick(right_cut, top_cut, self.radii.top_right, clip.radii.top_right),
                bottom_right: pick(
                    right_cut,
                    bottom_cut,
                    self.radii.bottom_right,
                    clip.radii.bottom_right,
                ),
                bottom_left: pick(
                    left_cut,
                    bottom_cut,
                    self.radii.bottom_left,
                    clip.radii.bottom_left,
                ),
            },
        })
    }
}

impl From<Rect> for RoundedRect {
    fn from(rect: Rect) -> Self {
        Self {
            rect,
            radii: CornerRadii::ZERO,
        }
    }
}

/// An RGBA color with premultiplied alpha.
///
/// In configuration files colors are written as `#rrggbb`, `#rrggbbaa`, or
/// a CSS color name such as `"white"`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new color from premultiplied RGBA components (0.0-1.0 range).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from non-premultiplied RGBA components.
    #[inline]
    pub fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r * a,
            g: g * a,
            b: b * a,
            a,
        }
    }

    /// Create a color from 8-bit RGBA components (0-255 range).
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Create a color from a hex string (e.g., "#FF0000" or "#FF0000FF").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        let len = hex.len();

        if (len != 6 && len != 8) || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        let a = if len == 8 {
            u8::from_str_radix(&hex[6..8], 16).ok()?
        } else {
            255
        };

        Some(Self::from_rgba8(r, g, b, a))
    }

    /// Look up a CSS color name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "transparent" => Self::TRANSPARENT,
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "red" => Self::RED,
            "lime" => Self::GREEN,
            "green" => Self::from_rgb8(0, 128, 0),
            "blue" => Self::BLUE,
            "yellow" => Self::YELLOW,
            "cyan" | "aqua" => Self::CYAN,
            "magenta" | "fuchsia" => Self::MAGENTA,
            "gray" | "grey" => Self::from_rgb8(128, 128, 128),
            "darkgray" | "darkgrey" => Self::from_rgb8(169, 169, 169),
            "lightgray" | "lightgrey" => Self::from_rgb8(211, 211, 211),
            "silver" => Self::from_rgb8(192, 192, 192),
            "orange" => Self::from_rgb8(255, 165, 0),
            "purple" => Self::from_rgb8(128, 0, 128),
            "navy" => Self::from_rgb8(0, 0, 128),
            "teal" => Self::from_rgb8(0, 128, 128),
            _ => return None,
        };
        Some(color)
    }

    /// Parse a hex string or a CSS color name.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.starts_with('#') {
            Self::from_hex(value)
        } else {
            Self::from_name(value)
        }
    }

    /// Return a new color with modified alpha.
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        if self.a == 0.0 {
            return Self::new(0.0, 0.0, 0.0, alpha);
        }
        // Unpremultiply, then repremultiply with new alpha
        let factor = alpha / self.a;
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
            a: alpha,
        }
    }

    /// Multiply every component by `opacity`.
    #[inline]
    pub fn fade(self, opacity: f32) -> Self {
        Self {
            r: self.r * opacity,
            g: self.g * opacity,
            b: self.b * opacity,
            a: self.a * opacity,
        }
    }

    /// Linear interpolation between two colors.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Convert to an array [r, g, b, a].
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Non-premultiplied 8-bit components.
    pub fn to_rgba8(self) -> [u8; 4] {
        let unmul = |c: f32| {
            if self.a > 0.0 {
                ((c / self.a).clamp(0.0, 1.0) * 255.0).round() as u8
            } else {
                0
            }
        };
        [
            unmul(self.r),
            unmul(self.g),
            unmul(self.b),
            (self.a.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }

    /// Hex form `#rrggbbaa` of the non-premultiplied color.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }

    // Common colors
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::from_rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::from_rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::from_rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Self = Self::from_rgb(1.0, 1.0, 0.0);
    pub const CYAN: Self = Self::from_rgb(0.0, 1.0, 1.0);
    pub const MAGENTA: Self = Self::from_rgb(1.0, 0.0, 1.0);
    pub const GRAY: Self = Self::from_rgb(0.5, 0.5, 0.5);
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ColorVisitor;

        impl Visitor<'_> for ColorVisitor {
            type Value = Color;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a hex color like \"#ff8800\" or a CSS color name")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Color, E> {
                Color::parse(value)
                    .ok_or_else(|| E::custom(format!("invalid color '{value}'")))
            }
        }

        deserializer.deserialize_str(ColorVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_geometry() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 70.0);
        assert_eq!(r.center(), Point::new(60.0, 45.0));
    }

    #[test]
    fn test_rect_intersect() {
        let r1 = Rect::new(0.0, 0.0, 100.0, 100.0);
        let r2 = Rect::new(50.0, 50.0, 100.0, 100.0);
        assert_eq!(r1.intersect(&r2), Some(Rect::new(50.0, 50.0, 50.0, 50.0)));
        assert!(r1.intersect(&Rect::new(200.0, 200.0, 50.0, 50.0)).is_none());
        // Touching edges do not intersect
        assert!(r1.intersect(&Rect::new(100.0, 0.0, 10.0, 10.0)).is_none());
    }

    #[test]
    fn test_scale_about_center() {
        let r = Rect::new(0.0, 0.0, 6.0, 6.0).scale_about_center(1.5);
        assert_eq!(r, Rect::new(-1.5, -1.5, 9.0, 9.0));
    }

    #[test]
    fn test_axes() {
        let s = Size::from_axes(Orientation::Vertical, 30.0, 6.0);
        assert_eq!(s, Size::new(6.0, 30.0));
        assert_eq!(s.main(Orientation::Vertical), 30.0);
        assert_eq!(s.cross(Orientation::Vertical), 6.0);
        assert_eq!(s.main(Orientation::Horizontal), 6.0);
        assert_eq!(Orientation::from_vertical(true), Orientation::Vertical);
        assert_eq!(Orientation::Vertical.main_offset(4.0), (0.0, 4.0));
    }

    #[test]
    fn test_leading_trailing_radii() {
        let lead = CornerRadii::leading(Orientation::Horizontal, 3.0);
        assert_eq!((lead.top_left, lead.bottom_left, lead.top_right), (3.0, 3.0, 0.0));
        let trail = CornerRadii::trailing(Orientation::Vertical, 3.0);
        assert_eq!((trail.bottom_left, trail.bottom_right, trail.top_left), (3.0, 3.0, 0.0));
    }

    #[test]
    fn test_rounded_rect_clipped_by_plain_rect() {
        let shape = RoundedRect::new(Rect::new(0.0, 0.0, 12.0, 6.0), 3.0);
        let clip = RoundedRect::from(Rect::new(4.0, 0.0, 20.0, 6.0));
        let clipped = shape.clipped(&clip).unwrap();
        assert_eq!(clipped.rect, Rect::new(4.0, 0.0, 8.0, 6.0));
        assert_eq!(clipped.radii.top_left, 0.0);
        assert_eq!(clipped.radii.bottom_left, 0.0);
        assert_eq!(clipped.radii.top_right, 3.0);
        assert_eq!(clipped.radii.bottom_right, 3.0);

        let far = RoundedRect::from(Rect::new(50.0, 0.0, 1.0, 1.0));
        assert!(shape.clipped(&far).is_none());
    }

    #[test]
    fn test_rounded_rect_clipped_by_rounded_box() {
        // A highlight sliding half out of its rounded segment.
        let segment = RoundedRect::new(Rect::new(0.0, 0.0, 10.0, 6.0), 3.0);
        let highlight = segment.offset(5.0, 0.0);
        let clipped = highlight.clipped(&segment).unwrap();
        assert_eq!(clipped.rect, Rect::new(5.0, 0.0, 5.0, 6.0));
        assert_eq!(clipped.radii, CornerRadii::uniform(3.0));
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF0000").unwrap();
        assert_eq!(c, Color::RED);

        let c2 = Color::from_hex("#00FF0080").unwrap();
        // Premultiplied alpha: g = 1.0 * 0.5 = 0.5
        assert!((c2.g - 0.5).abs() < 0.01);
        assert!((c2.a - 0.5).abs() < 0.01);

        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("#zzzzzz").is_none());
    }

    #[test]
    fn test_color_parse_names() {
        assert_eq!(Color::parse("white"), Some(Color::WHITE));
        assert_eq!(Color::parse("Black"), Some(Color::BLACK));
        assert_eq!(Color::parse(" #574ae2 "), Some(Color::from_rgb8(0x57, 0x4a, 0xe2)));
        assert_eq!(Color::parse("not-a-color"), None);
    }

    #[test]
    fn test_color_hex_round_trip() {
        let c = Color::from_rgba8(0xaa, 0x45, 0x86, 0xff);
        assert_eq!(c.to_hex(), "#aa4586ff");
        assert_eq!(Color::from_hex(&c.to_hex()), Some(c));
    }

    #[test]
    fn test_fade_and_with_alpha() {
        let c = Color::WHITE.fade(0.5);
        assert_eq!(c, Color::new(0.5, 0.5, 0.5, 0.5));
        let c = Color::WHITE.with_alpha(0.25);
        assert_eq!(c.a, 0.25);
        assert_eq!(c.r, 0.25);
    }
}
