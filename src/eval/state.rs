//! State for the evaluation request lifecycle.

use crate::eval::error::EvalError;

/// Evaluation lifecycle state machine.
///
/// Tracks one request at a time: idle → a request in flight → idle again
/// with the outcome on display. The keypad is disabled while `Pending`,
/// so a second submit cannot be dispatched until the first resolves.
/// `Completed` and `Failed` accept input like `Idle`; the next accepted
/// keypress acknowledges them back to `Idle`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EvalLifecycleState {
    /// No request outstanding, nothing to show.
    #[default]
    Idle,

    /// A request for `expr` is in flight; keypad input is rejected.
    Pending { expr: String },

    /// The last request produced `result` (already written to the buffer).
    Completed { result: String },

    /// The last request failed; the buffer kept its pre-request value.
    Failed { error: EvalError },
}

impl EvalLifecycleState {
    /// True while a request is outstanding.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// True when new keypad input is accepted.
    pub fn accepts_input(&self) -> bool {
        !self.is_pending()
    }

    /// The error to display, if the last request failed.
    pub fn error(&self) -> Option<&EvalError> {
        match self {
            Self::Failed { error } => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        assert_eq!(EvalLifecycleState::default(), EvalLifecycleState::Idle);
    }

    #[test]
    fn only_pending_blocks_input() {
        assert!(EvalLifecycleState::Idle.accepts_input());
        assert!(EvalLifecycleState::Completed { result: "4".into() }.accepts_input());
        assert!(EvalLifecycleState::Failed { error: EvalError::NoResult }.accepts_input());
        assert!(!EvalLifecycleState::Pending { expr: "2+2".into() }.accepts_input());
    }

    #[test]
    fn error_is_exposed_only_when_failed() {
        let failed = EvalLifecycleState::Failed {
            error: EvalError::NoResult,
        };
        assert_eq!(failed.error(), Some(&EvalError::NoResult));
        assert_eq!(EvalLifecycleState::Idle.error(), None);
    }
}
