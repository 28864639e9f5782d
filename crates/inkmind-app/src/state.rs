//! What the AI tools panel displays.

use inkmind_core::ImproveReport;
use inkmind_recognize::RecognitionKind;

/// Counts from the last "Improve Shapes" pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImproveSummary {
    pub converted: usize,
    pub failed: usize,
}

impl From<&ImproveReport> for ImproveSummary {
    fn from(report: &ImproveReport) -> Self {
        Self {
            converted: report.converted.len(),
            failed: report.failed.len(),
        }
    }
}

/// Panel display state. Results stay until a newer one replaces them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelState {
    /// Last recognized handwriting.
    pub recognized_text: Option<String>,
    /// Last recognized math, as LaTeX.
    pub recognized_math: Option<String>,
    /// Set once an improvement pass has run.
    pub shapes_improved: bool,
    pub last_improve: Option<ImproveSummary>,
}

impl PanelState {
    /// The displayed result for a recognition kind.
    pub fn result(&self, kind: RecognitionKind) -> Option<&str> {
        match kind {
            RecognitionKind::Handwriting => self.recognized_text.as_deref(),
            RecognitionKind::Math => self.recognized_math.as_deref(),
        }
    }

    pub(crate) fn set_result(&mut self, kind: RecognitionKind, text: String) {
        match kind {
            RecognitionKind::Handwriting => self.recognized_text = Some(text),
            RecognitionKind::Math => self.recognized_math = Some(text),
        }
    }

    pub(crate) fn record_improve(&mut self, report: &ImproveReport) {
        self.shapes_improved = true;
        self.last_improve = Some(report.into());
    }
}
