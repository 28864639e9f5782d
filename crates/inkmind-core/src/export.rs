//! Vector snapshots of the whiteboard.

use crate::document::CanvasDocument;
use crate::shapes::{SerializableColor, Shape};
use std::fmt::Write;

/// Media type of SVG snapshots.
pub const SVG_MEDIA_TYPE: &str = "image/svg+xml";

/// An encoded image ready to be uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBytes {
    /// Encoded image data.
    pub data: Vec<u8>,
    /// MIME type of `data`.
    pub media_type: &'static str,
    /// File name to announce in multipart uploads.
    pub file_name: String,
}

impl ImageBytes {
    /// Wrap an SVG document.
    pub fn svg(markup: String) -> Self {
        Self {
            data: markup.into_bytes(),
            media_type: SVG_MEDIA_TYPE,
            file_name: "drawing.svg".to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Options for SVG export.
#[derive(Debug, Clone)]
pub struct SvgOptions {
    /// Space around the drawing, in world units.
    pub padding: f64,
    /// Background fill (None = transparent).
    pub background: Option<SerializableColor>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            padding: 16.0,
            background: Some(SerializableColor::new(255, 255, 255, 255)),
        }
    }
}

/// Render the document as a standalone SVG document, shapes in z-order.
pub fn document_to_svg(document: &CanvasDocument, options: &SvgOptions) -> String {
    let view = match document.bounds() {
        Some(bounds) => bounds.inflate(options.padding, options.padding),
        None => kurbo::Rect::new(0.0, 0.0, 1.0, 1.0),
    };

    let mut svg = String::new();
    // Writing into a String cannot fail.
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}">"#,
        view.x0,
        view.y0,
        view.width(),
        view.height(),
        view.width(),
        view.height(),
    );
    if let Some(background) = options.background {
        let _ = write!(
            svg,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            view.x0,
            view.y0,
            view.width(),
            view.height(),
            background.to_hex(),
        );
    }
    for shape in document.shapes_ordered() {
        write_shape(&mut svg, shape);
    }
    svg.push_str("</svg>");
    svg
}

fn write_shape(svg: &mut String, shape: &Shape) {
    let path = shape.to_path();
    if path.elements().is_empty() {
        return;
    }
    let style = shape.style();
    let fill = match style.fill_color {
        Some(color) => color.to_hex(),
        None => "none".to_string(),
    };
    let _ = write!(
        svg,
        r#"<path d="{}" stroke="{}" stroke-width="{}" fill="{}" stroke-linecap="round" stroke-linejoin="round""#,
        path.to_svg(),
        style.stroke_color.to_hex(),
        style.stroke_width,
        fill,
    );
    if style.stroke_color.a < 255 {
        let _ = write!(svg, r#" stroke-opacity="{}""#, style.stroke_color.alpha());
    }
    if let Some(color) = style.fill_color.filter(|c| c.a < 255) {
        let _ = write!(svg, r#" fill-opacity="{}""#, color.alpha());
    }
    if style.opacity < 1.0 {
        let _ = write!(svg, r#" opacity="{}""#, style.opacity);
    }
    svg.push_str("/>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Freehand, Rectangle};
    use kurbo::Point;

    #[test]
    fn test_empty_document() {
        let svg = document_to_svg(&CanvasDocument::new(), &SvgOptions::default());
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"viewBox="0 0 1 1""#));
        assert!(!svg.contains("<path"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_view_box_covers_padding() {
        let mut doc = CanvasDocument::new();
        doc.add_shape(Rectangle::new(Point::new(10.0, 10.0), 80.0, 40.0));
        let options = SvgOptions {
            padding: 10.0,
            background: None,
        };
        let svg = document_to_svg(&doc, &options);
        assert!(svg.contains(r#"viewBox="0 0 100 60""#));
        assert!(!svg.contains("<rect"));
        assert_eq!(svg.matches("<path").count(), 1);
    }

    #[test]
    fn test_styles_are_written() {
        let mut doc = CanvasDocument::new();
        let mut ink = Freehand::from_points(vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)]);
        ink.style.stroke_color = SerializableColor::new(255, 0, 0, 255);
        ink.style.opacity = 0.5;
        doc.add_shape(ink);

        let svg = document_to_svg(&doc, &SvgOptions::default());
        assert!(svg.contains(r##"stroke="#ff0000""##));
        assert!(svg.contains(r#"fill="none""#));
        assert!(svg.contains(r#"opacity="0.5""#));
        assert!(svg.contains(r##"fill="#ffffff""##));
    }

    #[test]
    fn test_image_bytes_svg() {
        let image = ImageBytes::svg("<svg/>".to_string());
        assert_eq!(image.media_type, SVG_MEDIA_TYPE);
        assert_eq!(image.file_name, "drawing.svg");
        assert_eq!(image.len(), 6);
    }
}
