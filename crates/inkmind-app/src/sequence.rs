//! Per-kind request numbering.
//!
//! Every recognition request gets the next number for its kind. A response
//! may only update the panel if its number is still the newest issued, so a
//! slow early request can never overwrite a later one.

use inkmind_recognize::RecognitionKind;
use std::cell::Cell;

/// Monotonic request counters, one per recognition kind.
#[derive(Debug, Default)]
pub struct RequestTracker {
    handwriting: Cell<u64>,
    math: Cell<u64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, kind: RecognitionKind) -> &Cell<u64> {
        match kind {
            RecognitionKind::Handwriting => &self.handwriting,
            RecognitionKind::Math => &self.math,
        }
    }

    /// Allocate the next request number for `kind`. Numbers start at 1.
    pub fn issue(&self, kind: RecognitionKind) -> u64 {
        let slot = self.slot(kind);
        let next = slot.get() + 1;
        slot.set(next);
        next
    }

    /// The newest number issued for `kind` (0 if none).
    pub fn latest(&self, kind: RecognitionKind) -> u64 {
        self.slot(kind).get()
    }

    pub fn is_latest(&self, kind: RecognitionKind, seq: u64) -> bool {
        self.latest(kind) == seq
    }
}
