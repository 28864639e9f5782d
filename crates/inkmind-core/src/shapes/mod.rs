//! Shape definitions for the whiteboard.

mod ellipse;
mod freehand;
mod rectangle;

pub use ellipse::Ellipse;
pub use freehand::Freehand;
pub use rectangle::Rectangle;

use kurbo::{BezPath, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    /// CSS hex notation without alpha (`#rrggbb`).
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha channel as a 0.0..=1.0 fraction.
    pub fn alpha(&self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Style properties for shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Stroke color.
    pub stroke_color: SerializableColor,
    /// Stroke width.
    pub stroke_width: f64,
    /// Fill color (None = no fill).
    pub fill_color: Option<SerializableColor>,
    /// Overall opacity (0.0 = fully transparent, 1.0 = fully opaque).
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

fn default_opacity() -> f64 {
    1.0
}

impl ShapeStyle {
    /// Get the stroke color as a peniko Color.
    pub fn stroke(&self) -> Color {
        self.stroke_color.into()
    }

    /// Set the stroke color from a peniko Color.
    pub fn set_stroke(&mut self, color: Color) {
        self.stroke_color = color.into();
    }

    /// Set the fill color from a peniko Color.
    pub fn set_fill(&mut self, color: Option<Color>) {
        self.fill_color = color.map(|c| c.into());
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_color: SerializableColor::black(),
            stroke_width: 2.0,
            fill_color: None,
            opacity: 1.0,
        }
    }
}

/// Type tag of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Free-form ink drawn with the pen.
    Freehand,
    Rectangle,
    Ellipse,
}

impl ShapeKind {
    /// Whether this kind is free-form ink rather than a geometric primitive.
    pub fn is_ink(self) -> bool {
        matches!(self, ShapeKind::Freehand)
    }
}

/// Geometric primitives a shape can be rewritten into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Primitive {
    Rectangle,
    Ellipse,
}

impl Primitive {
    /// The type tag a shape carries after conversion.
    pub fn kind(self) -> ShapeKind {
        match self {
            Primitive::Rectangle => ShapeKind::Rectangle,
            Primitive::Ellipse => ShapeKind::Ellipse,
        }
    }
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Get the bounding box in world coordinates.
    fn bounds(&self) -> Rect;

    /// Get the path representation for rendering and export.
    fn to_path(&self) -> BezPath;

    /// Get the style.
    fn style(&self) -> &ShapeStyle;

    /// Get mutable style.
    fn style_mut(&mut self) -> &mut ShapeStyle;
}

/// Enum wrapper for all shape types (for serialization).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Freehand(Freehand),
    Rectangle(Rectangle),
    Ellipse(Ellipse),
}

impl Shape {
    fn as_trait(&self) -> &dyn ShapeTrait {
        match self {
            Shape::Freehand(s) => s as &dyn ShapeTrait,
            Shape::Rectangle(s) => s as &dyn ShapeTrait,
            Shape::Ellipse(s) => s as &dyn ShapeTrait,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.as_trait().id()
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Freehand(_) => ShapeKind::Freehand,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Ellipse(_) => ShapeKind::Ellipse,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.as_trait().bounds()
    }

    pub fn to_path(&self) -> BezPath {
        self.as_trait().to_path()
    }

    pub fn style(&self) -> &ShapeStyle {
        self.as_trait().style()
    }

    pub fn style_mut(&mut self) -> &mut ShapeStyle {
        match self {
            Shape::Freehand(s) => s.style_mut(),
            Shape::Rectangle(s) => s.style_mut(),
            Shape::Ellipse(s) => s.style_mut(),
        }
    }

    /// Whether this shape is free-form ink.
    pub fn is_ink(&self) -> bool {
        self.kind().is_ink()
    }

    /// Rebuild this shape as a geometric primitive filling its bounding box.
    ///
    /// The id and style carry over; the original geometry is discarded.
    pub fn into_primitive(self, primitive: Primitive) -> Shape {
        let id = self.id();
        let bounds = self.bounds();
        let style = self.style().clone();
        match primitive {
            Primitive::Rectangle => Shape::Rectangle(Rectangle::with_id(id, bounds, style)),
            Primitive::Ellipse => Shape::Ellipse(Ellipse::with_id(id, bounds, style)),
        }
    }
}

impl From<Freehand> for Shape {
    fn from(shape: Freehand) -> Self {
        Shape::Freehand(shape)
    }
}

impl From<Rectangle> for Shape {
    fn from(shape: Rectangle) -> Self {
        Shape::Rectangle(shape)
    }
}

impl From<Ellipse> for Shape {
    fn from(shape: Ellipse) -> Self {
        Shape::Ellipse(shape)
    }
}

/// Create a fresh shape identifier.
pub(crate) fn new_id() -> ShapeId {
    Uuid::new_v4()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn test_ink_tag() {
        assert!(ShapeKind::Freehand.is_ink());
        assert!(!ShapeKind::Rectangle.is_ink());
        assert!(!ShapeKind::Ellipse.is_ink());
    }

    #[test]
    fn test_into_primitive_keeps_id_and_style() {
        let mut freehand = Freehand::from_points(vec![
            Point::new(10.0, 20.0),
            Point::new(60.0, 25.0),
            Point::new(30.0, 80.0),
        ]);
        freehand.style.stroke_width = 4.0;
        let shape = Shape::from(freehand);
        let id = shape.id();

        let converted = shape.into_primitive(Primitive::Rectangle);
        assert_eq!(converted.id(), id);
        assert_eq!(converted.kind(), ShapeKind::Rectangle);
        assert!((converted.style().stroke_width - 4.0).abs() < f64::EPSILON);

        let bounds = converted.bounds();
        assert!((bounds.x0 - 10.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 60.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_color_hex() {
        let color = SerializableColor::new(59, 130, 246, 255);
        assert_eq!(color.to_hex(), "#3b82f6");
        assert!((color.alpha() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_style_colors() {
        let mut style = ShapeStyle::default();
        style.set_stroke(Color::from_rgba8(10, 20, 30, 255));
        style.set_fill(Some(Color::from_rgba8(1, 2, 3, 128)));

        assert_eq!(style.stroke_color, SerializableColor::new(10, 20, 30, 255));
        assert_eq!(style.fill_color, Some(SerializableColor::new(1, 2, 3, 128)));
        assert_eq!(SerializableColor::from(style.stroke()), style.stroke_color);
    }

    #[test]
    fn test_shape_json() {
        let shape = Shape::from(Rectangle::new(Point::new(1.0, 2.0), 3.0, 4.0));
        let json = serde_json::to_string(&shape).unwrap();
        let back: Shape = serde_json::from_str(&json).unwrap();
        assert_eq!(back, shape);
    }
}
