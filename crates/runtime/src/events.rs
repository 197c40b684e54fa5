//! Engine-facing event signalling.

use warden_core::Verdict;

/// Outcome delivered back to the host's event system for an intercepted
/// action.
///
/// `Pass` lets the triggering event continue through the host's normal
/// handling; `Cancel` suppresses it before any game state changes. For
/// compound events that expect a result value (right-click with item), a
/// cancelled event produces no value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventResult {
    Pass,
    Cancel,
}

impl EventResult {
    #[inline]
    pub fn is_cancelled(self) -> bool {
        matches!(self, Self::Cancel)
    }
}

impl From<Verdict> for EventResult {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Allow => Self::Pass,
            Verdict::Veto => Self::Cancel,
        }
    }
}
