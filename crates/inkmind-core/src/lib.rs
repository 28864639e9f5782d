//! InkMind Core Library
//!
//! Platform-agnostic whiteboard document, SVG snapshots, and the shape
//! heuristic behind the "Improve Shapes" tool.

pub mod adapter;
pub mod document;
pub mod error;
pub mod export;
pub mod heuristic;
pub mod shapes;

pub use adapter::{CanvasAdapter, Whiteboard};
pub use document::CanvasDocument;
pub use error::{CanvasError, CanvasResult};
pub use export::{ImageBytes, SVG_MEDIA_TYPE, SvgOptions, document_to_svg};
pub use heuristic::{IMPROVED_PRIMITIVE, ImproveReport, improve_shapes};
pub use shapes::{Primitive, Shape, ShapeId, ShapeKind};
