//! Evaluation request coordination.
//!
//! The lifecycle of a request is a small state machine driven by a pure
//! reducer: intents go in, a new state comes out, and side effects (the
//! HTTP call, replacing the buffer, re-rendering) happen around the
//! dispatch. Exactly one request can be in flight because keypad input is
//! rejected while the state is pending.

mod client;
mod error;
mod intent;
mod reducer;
mod state;
mod worker;

pub use client::EvaluatorClient;
pub use error::EvalError;
pub use intent::EvalIntent;
pub use reducer::EvalReducer;
pub use state::EvalLifecycleState;
pub use worker::{EvalCommand, EvalCommandSender, EvalWorker};
