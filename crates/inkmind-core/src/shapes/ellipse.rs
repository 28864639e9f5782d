//! Ellipse shape.

use super::{ShapeId, ShapeStyle, ShapeTrait, new_id};
use kurbo::{BezPath, Ellipse as KurboEllipse, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// An axis-aligned ellipse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub(crate) id: ShapeId,
    pub center: Point,
    pub radius_x: f64,
    pub radius_y: f64,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Ellipse {
    pub fn new(center: Point, radius_x: f64, radius_y: f64) -> Self {
        Self {
            id: new_id(),
            center,
            radius_x,
            radius_y,
            style: ShapeStyle::default(),
        }
    }

    /// Ellipse inscribed in `rect` that reuses an existing id.
    pub(crate) fn with_id(id: ShapeId, rect: Rect, style: ShapeStyle) -> Self {
        Self {
            id,
            center: rect.center(),
            radius_x: rect.width() / 2.0,
            radius_y: rect.height() / 2.0,
            style,
        }
    }

    pub fn circle(center: Point, radius: f64) -> Self {
        Self::new(center, radius, radius)
    }
}

impl ShapeTrait for Ellipse {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius_x,
            self.center.y - self.radius_y,
            self.center.x + self.radius_x,
            self.center.y + self.radius_y,
        )
    }

    fn to_path(&self) -> BezPath {
        KurboEllipse::new(self.center, (self.radius_x, self.radius_y), 0.0).to_path(0.1)
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let ellipse = Ellipse::new(Point::new(50.0, 50.0), 30.0, 20.0);
        let bounds = ellipse.bounds();
        assert!((bounds.x0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 30.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 80.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_inscribed_in_rect() {
        let style = ShapeStyle::default();
        let ellipse = Ellipse::with_id(new_id(), Rect::new(0.0, 0.0, 40.0, 20.0), style);
        assert!((ellipse.center.x - 20.0).abs() < f64::EPSILON);
        assert!((ellipse.radius_y - 10.0).abs() < f64::EPSILON);
        assert_eq!(Ellipse::circle(Point::ZERO, 5.0).bounds().width(), 10.0);
    }
}
