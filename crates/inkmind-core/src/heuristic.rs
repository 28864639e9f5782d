//! Shape "improvement": rewrite freehand ink as clean primitives.
//!
//! There is no recognition here. Every ink stroke becomes the same
//! primitive regardless of what it looks like.

use crate::adapter::CanvasAdapter;
use crate::error::{CanvasError, CanvasResult};
use crate::shapes::{Primitive, ShapeId};

/// The primitive every ink stroke is rewritten into.
pub const IMPROVED_PRIMITIVE: Primitive = Primitive::Rectangle;

/// Outcome of one improvement pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImproveReport {
    /// Shapes rewritten successfully.
    pub converted: Vec<ShapeId>,
    /// Shapes the editor refused to rewrite.
    pub failed: Vec<(ShapeId, CanvasError)>,
}

impl ImproveReport {
    /// True when every requested rewrite went through.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Rewrite every ink shape on the canvas as [`IMPROVED_PRIMITIVE`].
///
/// Running it again on an already improved canvas converts nothing. An editor
/// that is not ready is left untouched and yields [`CanvasError::NotReady`].
pub fn improve_shapes(canvas: &mut dyn CanvasAdapter) -> CanvasResult<ImproveReport> {
    if !canvas.is_ready() {
        return Err(CanvasError::NotReady);
    }

    let mut ink = Vec::new();
    canvas.for_each_shape(&mut |shape| {
        if shape.is_ink() {
            ink.push(shape.id());
        }
    });

    let mut report = ImproveReport::default();
    if ink.is_empty() {
        log::debug!("No ink shapes to improve");
        return Ok(report);
    }

    canvas.begin_batch();
    for id in ink {
        match canvas.replace_shape_geometry(id, IMPROVED_PRIMITIVE) {
            Ok(()) => report.converted.push(id),
            Err(e) => {
                log::warn!("Failed to improve shape {}: {}", id, e);
                report.failed.push((id, e));
            }
        }
    }
    if report.converted.is_empty() {
        canvas.cancel_batch();
    }
    log::info!(
        "Improved {} shapes ({} failed)",
        report.converted.len(),
        report.failed.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::Whiteboard;
    use crate::export::ImageBytes;
    use crate::shapes::{Ellipse, Freehand, Rectangle, Shape, ShapeKind};
    use crate::error::CanvasResult;
    use kurbo::Point;

    fn ink(offset: f64) -> Freehand {
        Freehand::from_points(vec![
            Point::new(offset, offset),
            Point::new(offset + 20.0, offset + 5.0),
            Point::new(offset + 10.0, offset + 30.0),
        ])
    }

    #[test]
    fn test_all_ink_becomes_rectangles() {
        let mut board = Whiteboard::new();
        let a = board.document.add_shape(ink(0.0));
        let b = board.document.add_shape(ink(100.0));
        let circle = board.document.add_shape(Ellipse::circle(Point::new(50.0, 50.0), 10.0));

        let report = improve_shapes(&mut board).unwrap();

        assert!(report.is_complete());
        assert_eq!(report.converted.len(), 2);
        assert!(report.converted.contains(&a) && report.converted.contains(&b));
        assert_eq!(board.document.count_kind(ShapeKind::Freehand), 0);
        assert_eq!(board.document.count_kind(ShapeKind::Rectangle), 2);
        assert_eq!(
            board.document.get_shape(circle).map(Shape::kind),
            Some(ShapeKind::Ellipse)
        );
    }

    #[test]
    fn test_second_pass_is_noop() {
        let mut board = Whiteboard::new();
        board.document.add_shape(ink(0.0));
        board.document.add_shape(Rectangle::new(Point::ZERO, 4.0, 4.0));

        improve_shapes(&mut board).unwrap();
        let before = board.document.clone();
        let second = improve_shapes(&mut board).unwrap();

        assert!(second.converted.is_empty());
        assert!(second.failed.is_empty());
        assert_eq!(board.document.shapes, before.shapes);
    }

    #[test]
    fn test_pass_undoes_as_one_step() {
        let mut board = Whiteboard::new();
        board.document.add_shape(ink(0.0));
        board.document.add_shape(ink(50.0));

        improve_shapes(&mut board).unwrap();
        assert!(board.document.undo());
        assert_eq!(board.document.count_kind(ShapeKind::Freehand), 2);
        assert!(!board.document.can_undo());
    }

    /// Editor that rejects the rewrites `fails` picks out by call number.
    struct Flaky {
        board: Whiteboard,
        calls: usize,
        fails: fn(usize) -> bool,
    }

    impl Flaky {
        fn new(fails: fn(usize) -> bool) -> Self {
            Self {
                board: Whiteboard::new(),
                calls: 0,
                fails,
            }
        }
    }

    impl CanvasAdapter for Flaky {
        fn export_image(&self) -> CanvasResult<ImageBytes> {
            self.board.export_image()
        }

        fn for_each_shape(&self, visit: &mut dyn FnMut(&Shape)) {
            self.board.for_each_shape(visit)
        }

        fn replace_shape_geometry(&mut self, id: ShapeId, primitive: Primitive) -> CanvasResult<()> {
            self.calls += 1;
            if (self.fails)(self.calls) {
                return Err(CanvasError::ShapeNotFound(id));
            }
            self.board.replace_shape_geometry(id, primitive)
        }

        fn begin_batch(&mut self) {
            self.board.begin_batch();
        }

        fn cancel_batch(&mut self) {
            self.board.cancel_batch();
        }
    }

    #[test]
    fn test_partial_failure_is_reported() {
        let mut flaky = Flaky::new(|call| call % 2 == 0);
        flaky.board.document.add_shape(ink(0.0));
        flaky.board.document.add_shape(ink(10.0));

        let report = improve_shapes(&mut flaky).unwrap();
        assert_eq!(report.converted.len(), 1);
        assert_eq!(report.failed.len(), 1);
        assert!(!report.is_complete());
        assert_eq!(flaky.board.document.count_kind(ShapeKind::Freehand), 1);
        assert!(flaky.board.document.can_undo());
    }

    #[test]
    fn test_total_failure_leaves_no_undo_step() {
        let mut flaky = Flaky::new(|_| true);
        flaky.board.document.add_shape(ink(0.0));
        flaky.board.document.add_shape(ink(10.0));

        let report = improve_shapes(&mut flaky).unwrap();
        assert!(report.converted.is_empty());
        assert_eq!(report.failed.len(), 2);
        assert!(!flaky.board.document.can_undo());
    }

    #[test]
    fn test_uninitialized_editor_is_untouched() {
        let mut board = Whiteboard::uninitialized();
        board.document.add_shape(ink(0.0));
        board.document.push_undo();
        board.document.add_shape(ink(40.0));
        assert!(board.document.undo());
        let before = board.document.shapes.clone();

        assert_eq!(improve_shapes(&mut board), Err(CanvasError::NotReady));
        assert_eq!(board.document.shapes, before);
        assert!(board.document.can_redo());
        assert!(!board.document.can_undo());
    }
}
