//! Worker thread that performs evaluation requests.

use std::sync::mpsc::Sender;
use std::thread;

use tokio::sync::mpsc;

use crate::eval::client::EvaluatorClient;
use crate::ui::events::AppEvent;

/// Commands accepted by the evaluation worker.
#[derive(Debug)]
pub enum EvalCommand {
    Evaluate { expr: String },
}

pub type EvalCommandSender = mpsc::Sender<EvalCommand>;

/// Dedicated thread owning the HTTP client and a single-threaded runtime.
///
/// The command channel is bounded at one: with the keypad disabled while
/// a request is pending, at most one evaluation is ever in flight. Every
/// received command produces exactly one `EvalFinished` event — success
/// or failure — which is what re-enables the keypad.
pub struct EvalWorker {
    sender: EvalCommandSender,
}

impl EvalWorker {
    pub fn spawn(client: EvaluatorClient, events: Sender<AppEvent>) -> Self {
        let (sender, mut receiver) = mpsc::channel::<EvalCommand>(1);

        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to build evaluation runtime");

            runtime.block_on(async move {
                while let Some(EvalCommand::Evaluate { expr }) = receiver.recv().await {
                    let outcome = client.evaluate(&expr).await;
                    match &outcome {
                        Ok(result) => tracing::debug!(%result, "evaluation finished"),
                        Err(error) => {
                            tracing::warn!(kind = error.kind(), %error, "evaluation failed");
                        }
                    }
                    if events.send(AppEvent::EvalFinished(outcome)).is_err() {
                        // UI is gone; nothing left to notify.
                        break;
                    }
                }
            });
        });

        Self { sender }
    }

    /// Sender handed to the app for submitting evaluations.
    pub fn sender(&self) -> EvalCommandSender {
        self.sender.clone()
    }
}
