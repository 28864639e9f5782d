//! Panel controller: turns panel actions into editor and service calls.
//!
//! Everything here runs on the UI thread. Recognition suspends at the
//! network call and resumes on the same thread, so state lives in `Cell` /
//! `RefCell` rather than behind locks.

use crate::panel::PanelAction;
use crate::sequence::RequestTracker;
use crate::state::PanelState;
use inkmind_core::{CanvasAdapter, ImageBytes, ImproveReport, improve_shapes};
use inkmind_recognize::{
    BoxFuture, HandwritingClient, MathClient, RecognitionConfig, RecognitionKind, Recognizer,
};
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use std::sync::Arc;

/// A recognition request whose snapshot has been taken but not yet sent.
#[derive(Debug)]
pub struct PendingRecognition {
    pub kind: RecognitionKind,
    /// Request number from the [`RequestTracker`].
    pub seq: u64,
    pub image: ImageBytes,
}

/// Drives the three AI tools and owns what the panel shows.
pub struct PanelController {
    handwriting: Box<dyn Recognizer>,
    math: Box<dyn Recognizer>,
    state: RefCell<PanelState>,
    requests: RequestTracker,
}

impl PanelController {
    /// Create a controller from two recognition services.
    pub fn new(handwriting: impl Recognizer + 'static, math: impl Recognizer + 'static) -> Self {
        Self {
            handwriting: Box::new(handwriting),
            math: Box::new(math),
            state: RefCell::new(PanelState::default()),
            requests: RequestTracker::new(),
        }
    }

    /// Create a controller talking to the configured HTTP services.
    pub fn from_config(config: Arc<RecognitionConfig>) -> Self {
        let http = reqwest::Client::new();
        Self::new(
            HandwritingClient::with_client(http.clone(), config.clone()),
            MathClient::with_client(http, config),
        )
    }

    /// Current display state.
    pub fn state(&self) -> Ref<'_, PanelState> {
        self.state.borrow()
    }

    /// Request numbering, exposed for diagnostics.
    pub fn requests(&self) -> &RequestTracker {
        &self.requests
    }

    fn recognizer(&self, kind: RecognitionKind) -> &dyn Recognizer {
        match kind {
            RecognitionKind::Handwriting => self.handwriting.as_ref(),
            RecognitionKind::Math => self.math.as_ref(),
        }
    }

    /// Snapshot the canvas and number a new request.
    ///
    /// Returns `None` without touching the network or the panel when no
    /// editor is attached or the editor cannot export yet.
    pub fn begin(
        &self,
        kind: RecognitionKind,
        canvas: Option<&dyn CanvasAdapter>,
    ) -> Option<PendingRecognition> {
        let Some(canvas) = canvas else {
            log::debug!("No editor attached, skipping {} recognition", kind);
            return None;
        };
        let image = match canvas.export_image() {
            Ok(image) => image,
            Err(e) => {
                log::debug!("Skipping {} recognition: {}", kind, e);
                return None;
            }
        };
        let seq = self.requests.issue(kind);
        log::debug!("Starting {} recognition request #{}", kind, seq);
        Some(PendingRecognition { kind, seq, image })
    }

    /// Send a pending request and store its result if it is still the newest.
    ///
    /// Failures are logged and leave the displayed result unchanged.
    pub async fn complete(&self, pending: PendingRecognition) {
        let PendingRecognition { kind, seq, image } = pending;
        match self.recognizer(kind).recognize(image).await {
            Ok(text) => {
                if !self.requests.is_latest(kind, seq) {
                    log::debug!(
                        "Discarding {} result #{} (superseded by #{})",
                        kind,
                        seq,
                        self.requests.latest(kind)
                    );
                    return;
                }
                log::info!("{} recognition #{} succeeded", kind, seq);
                self.state.borrow_mut().set_result(kind, text);
            }
            Err(e) => log::error!("{} recognition #{} failed: {}", kind, seq, e),
        }
    }

    /// Snapshot, send and store in one step.
    pub async fn recognize(&self, kind: RecognitionKind, canvas: Option<&dyn CanvasAdapter>) {
        if let Some(pending) = self.begin(kind, canvas) {
            self.complete(pending).await;
        }
    }

    /// Run the shape heuristic.
    ///
    /// Returns `None`, leaving the editor and the panel untouched, when no
    /// editor is attached or the editor is not ready.
    pub fn improve_shapes(&self, canvas: Option<&mut dyn CanvasAdapter>) -> Option<ImproveReport> {
        let Some(canvas) = canvas else {
            log::debug!("No editor attached, skipping shape improvement");
            return None;
        };
        let report = match improve_shapes(canvas) {
            Ok(report) => report,
            Err(e) => {
                log::debug!("Skipping shape improvement: {}", e);
                return None;
            }
        };
        self.state.borrow_mut().record_improve(&report);
        Some(report)
    }

    /// Apply a panel action.
    ///
    /// Shape improvement finishes before this returns. Recognition actions
    /// take their snapshot immediately and return the network half as a
    /// future for the caller to drive; it no longer borrows the canvas.
    pub fn handle(
        self: &Rc<Self>,
        action: PanelAction,
        canvas: Option<&mut dyn CanvasAdapter>,
    ) -> Option<BoxFuture<'static, ()>> {
        let kind = match action {
            PanelAction::ImproveShapes => {
                self.improve_shapes(canvas);
                return None;
            }
            PanelAction::RecognizeHandwriting => RecognitionKind::Handwriting,
            PanelAction::RecognizeMath => RecognitionKind::Math,
        };
        let pending = self.begin(kind, canvas.as_deref())?;
        let this = Rc::clone(self);
        let future: BoxFuture<'static, ()> = Box::pin(async move { this.complete(pending).await });
        Some(future)
    }

    /// [`handle`](Self::handle) and spawn the resulting future on the local executor.
    ///
    /// # Panics
    ///
    /// On native targets, panics if a recognition action is dispatched outside
    /// a `tokio::task::LocalSet`. See [`spawn_local`](crate::spawn_local).
    pub fn dispatch(self: &Rc<Self>, action: PanelAction, canvas: Option<&mut dyn CanvasAdapter>) {
        if let Some(future) = self.handle(action, canvas) {
            crate::platform::spawn_local(future);
        }
    }
}
