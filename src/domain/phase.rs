//! Lifecycle of a single approve call.

use std::fmt;

/// Where an approve call currently stands.
///
/// ```text
/// Unchecked ──read──▶ CheckedSufficient
///     │        └───▶ CheckedInsufficient ──submit──▶ Submitted
///     └──────────── error ────────────────▶ Failed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalPhase {
    Unchecked,
    CheckedSufficient,
    CheckedInsufficient,
    Submitted,
    Failed,
}

impl ApprovalPhase {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            ApprovalPhase::CheckedSufficient | ApprovalPhase::Submitted | ApprovalPhase::Failed
        )
    }

    #[must_use]
    pub fn can_transition_to(self, next: ApprovalPhase) -> bool {
        use ApprovalPhase::*;
        match (self, next) {
            (Unchecked, CheckedSufficient | CheckedInsufficient) => true,
            (CheckedInsufficient, Submitted) => true,
            (from, Failed) => !from.is_terminal(),
            _ => false,
        }
    }
}

impl fmt::Display for ApprovalPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ApprovalPhase::Unchecked => "unchecked",
            ApprovalPhase::CheckedSufficient => "checked_sufficient",
            ApprovalPhase::CheckedInsufficient => "checked_insufficient",
            ApprovalPhase::Submitted => "submitted",
            ApprovalPhase::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Per-call tracker that only moves along allowed transitions.
#[derive(Debug)]
pub struct PhaseTracker {
    operation: &'static str,
    phase: ApprovalPhase,
}

impl PhaseTracker {
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            phase: ApprovalPhase::Unchecked,
        }
    }

    #[must_use]
    pub fn phase(&self) -> ApprovalPhase {
        self.phase
    }

    /// Move to `next`. Disallowed transitions are ignored and logged, the
    /// tracker is observational and never fails the call.
    pub fn advance(&mut self, next: ApprovalPhase) {
        if self.phase.can_transition_to(next) {
            tracing::debug!(
                operation = self.operation,
                from = %self.phase,
                to = %next,
                "Approval phase changed"
            );
            self.phase = next;
        } else {
            tracing::warn!(
                operation = self.operation,
                from = %self.phase,
                to = %next,
                "Ignoring invalid approval phase transition"
            );
        }
    }

    /// Record the outcome of a fallible step, moving to `Failed` on error.
    pub fn observe<T, E>(&mut self, result: Result<T, E>) -> Result<T, E> {
        if result.is_err() {
            self.advance(ApprovalPhase::Failed);
        }
        result
    }
}
