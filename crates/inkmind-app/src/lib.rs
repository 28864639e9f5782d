//! InkMind AI tools panel
//!
//! Wires the whiteboard editor to the recognition services: the egui panel
//! reports clicks as [`PanelAction`]s, the [`PanelController`] runs them
//! against a [`CanvasAdapter`](inkmind_core::CanvasAdapter) and keeps the
//! [`PanelState`] the panel displays.

mod controller;
mod panel;
mod platform;
mod sequence;
mod state;

pub use controller::{PanelController, PendingRecognition};
pub use panel::{PanelAction, render_ai_panel};
pub use platform::{init_logging, spawn_local};
pub use sequence::RequestTracker;
pub use state::{ImproveSummary, PanelState};
