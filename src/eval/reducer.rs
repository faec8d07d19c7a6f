//! Reducer for the evaluation lifecycle.

use super::intent::EvalIntent;
use super::state::EvalLifecycleState;

/// Pure state transitions for evaluation requests.
///
/// Side effects are handled by the caller around the dispatch call.
/// Completions that arrive in a non-pending state are stale and ignored.
pub struct EvalReducer;

impl EvalReducer {
    pub fn reduce(state: EvalLifecycleState, intent: EvalIntent) -> EvalLifecycleState {
        match intent {
            EvalIntent::Submit { expr } => match state {
                // Guarded at the UI boundary; keep the original request if
                // a submit slips through while one is outstanding.
                pending @ EvalLifecycleState::Pending { .. } => pending,
                _ => EvalLifecycleState::Pending { expr },
            },

            EvalIntent::Resolved { result } => match state {
                EvalLifecycleState::Pending { .. } => EvalLifecycleState::Completed { result },
                other => other,
            },

            EvalIntent::Rejected { error } => match state {
                EvalLifecycleState::Pending { .. } => EvalLifecycleState::Failed { error },
                other => other,
            },

            EvalIntent::Acknowledge => match state {
                EvalLifecycleState::Completed { .. } | EvalLifecycleState::Failed { .. } => {
                    EvalLifecycleState::Idle
                }
                other => other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::error::EvalError;

    fn pending() -> EvalLifecycleState {
        EvalLifecycleState::Pending { expr: "2+2".into() }
    }

    #[test]
    fn idle_submit_transitions_to_pending() {
        let new = EvalReducer::reduce(
            EvalLifecycleState::Idle,
            EvalIntent::Submit { expr: "2+2".into() },
        );
        assert_eq!(new, pending());
    }

    #[test]
    fn pending_submit_keeps_the_original_request() {
        let new = EvalReducer::reduce(pending(), EvalIntent::Submit { expr: "9*9".into() });
        assert_eq!(new, pending());
    }

    #[test]
    fn completed_submit_starts_a_new_request() {
        let state = EvalLifecycleState::Completed { result: "4".into() };
        let new = EvalReducer::reduce(state, EvalIntent::Submit { expr: "4+1".into() });
        assert_eq!(new, EvalLifecycleState::Pending { expr: "4+1".into() });
    }

    #[test]
    fn pending_resolved_transitions_to_completed() {
        let new = EvalReducer::reduce(pending(), EvalIntent::Resolved { result: "4".into() });
        assert_eq!(new, EvalLifecycleState::Completed { result: "4".into() });
    }

    #[test]
    fn pending_rejected_transitions_to_failed() {
        let new = EvalReducer::reduce(
            pending(),
            EvalIntent::Rejected { error: EvalError::NoResult },
        );
        assert_eq!(
            new,
            EvalLifecycleState::Failed { error: EvalError::NoResult }
        );
    }

    #[test]
    fn stale_resolved_is_a_noop() {
        let new = EvalReducer::reduce(
            EvalLifecycleState::Idle,
            EvalIntent::Resolved { result: "4".into() },
        );
        assert_eq!(new, EvalLifecycleState::Idle);
    }

    #[test]
    fn stale_rejected_is_a_noop() {
        let state = EvalLifecycleState::Completed { result: "4".into() };
        let new = EvalReducer::reduce(
            state.clone(),
            EvalIntent::Rejected { error: EvalError::NoResult },
        );
        assert_eq!(new, state);
    }

    #[test]
    fn acknowledge_clears_outcomes() {
        let completed = EvalLifecycleState::Completed { result: "4".into() };
        assert_eq!(
            EvalReducer::reduce(completed, EvalIntent::Acknowledge),
            EvalLifecycleState::Idle
        );

        let failed = EvalLifecycleState::Failed { error: EvalError::NoResult };
        assert_eq!(
            EvalReducer::reduce(failed, EvalIntent::Acknowledge),
            EvalLifecycleState::Idle
        );
    }

    #[test]
    fn acknowledge_leaves_pending_untouched() {
        assert_eq!(EvalReducer::reduce(pending(), EvalIntent::Acknowledge), pending());
    }

    #[test]
    fn acknowledge_on_idle_is_a_noop() {
        assert_eq!(
            EvalReducer::reduce(EvalLifecycleState::Idle, EvalIntent::Acknowledge),
            EvalLifecycleState::Idle
        );
    }
}
