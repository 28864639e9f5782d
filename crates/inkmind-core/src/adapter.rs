//! The editor surface consumed by the AI tools.
//!
//! Panel code never touches a [`CanvasDocument`] directly: it exports
//! snapshots, walks shapes and requests geometry rewrites through
//! [`CanvasAdapter`], so any editor that can do those three things can host
//! the panel.

use crate::document::CanvasDocument;
use crate::error::{CanvasError, CanvasResult};
use crate::export::{ImageBytes, SvgOptions, document_to_svg};
use crate::shapes::{Primitive, Shape, ShapeId};

/// Operations the AI tools need from a whiteboard editor.
pub trait CanvasAdapter {
    /// Snapshot the current drawing as an SVG image.
    fn export_image(&self) -> CanvasResult<ImageBytes>;

    /// Visit every shape once. Visiting order is unspecified.
    fn for_each_shape(&self, visit: &mut dyn FnMut(&Shape));

    /// Rewrite a shape in place as a geometric primitive.
    fn replace_shape_geometry(&mut self, id: ShapeId, primitive: Primitive) -> CanvasResult<()>;

    /// Whether the editor has finished loading and accepts edits.
    fn is_ready(&self) -> bool {
        true
    }

    /// Mark the start of a batch of edits that should undo as one step.
    fn begin_batch(&mut self) {}

    /// Abandon the current batch. Only valid when the batch changed nothing.
    fn cancel_batch(&mut self) {}
}

/// The whiteboard editor: a document plus its initialization state.
#[derive(Debug, Clone)]
pub struct Whiteboard {
    /// The document being edited.
    pub document: CanvasDocument,
    /// SVG export settings.
    pub svg_options: SvgOptions,
    ready: bool,
}

impl Default for Whiteboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Whiteboard {
    /// Create a ready editor with an empty document.
    pub fn new() -> Self {
        Self::with_document(CanvasDocument::new())
    }

    /// Create a ready editor for an existing document.
    pub fn with_document(document: CanvasDocument) -> Self {
        Self {
            document,
            svg_options: SvgOptions::default(),
            ready: true,
        }
    }

    /// Create an editor that is still loading.
    pub fn uninitialized() -> Self {
        Self {
            ready: false,
            ..Self::new()
        }
    }

    /// Finish initialization.
    pub fn mark_ready(&mut self) {
        self.ready = true;
    }

    fn ensure_ready(&self) -> CanvasResult<()> {
        if self.ready {
            Ok(())
        } else {
            Err(CanvasError::NotReady)
        }
    }
}

impl CanvasAdapter for Whiteboard {
    fn export_image(&self) -> CanvasResult<ImageBytes> {
        self.ensure_ready()?;
        let svg = document_to_svg(&self.document, &self.svg_options);
        log::debug!(
            "Exported {} shapes as SVG ({} bytes)",
            self.document.len(),
            svg.len()
        );
        Ok(ImageBytes::svg(svg))
    }

    fn for_each_shape(&self, visit: &mut dyn FnMut(&Shape)) {
        for shape in self.document.shapes_ordered() {
            visit(shape);
        }
    }

    fn replace_shape_geometry(&mut self, id: ShapeId, primitive: Primitive) -> CanvasResult<()> {
        self.ensure_ready()?;
        let shape = self
            .document
            .get_shape(id)
            .cloned()
            .ok_or(CanvasError::ShapeNotFound(id))?;
        self.document.replace_shape(id, shape.into_primitive(primitive))?;
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn begin_batch(&mut self) {
        self.document.push_undo();
    }

    fn cancel_batch(&mut self) {
        self.document.discard_undo();
    }
}
