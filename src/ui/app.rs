//! Application state and its transitions.

use crossterm::event::KeyCode;

use crate::config::{ConfigStore, Theme};
use crate::eval::{
    EvalCommand, EvalCommandSender, EvalError, EvalIntent, EvalLifecycleState, EvalReducer,
};
use crate::expr::{ExpressionBuffer, Token};
use crate::ui::keypad::KeypadSelection;

/// What the status line under the display shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    /// A request is outstanding.
    Pending,
    /// The last evaluate attempt failed.
    Error(String),
}

/// Reducer dispatch: takes the current state, runs the reducer, stores
/// the result.
macro_rules! dispatch {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// The expression being typed or the last evaluation result.
    buffer: ExpressionBuffer,
    /// Evaluation request lifecycle (reducer-driven).
    eval: EvalLifecycleState,
    /// Local validation failure (evaluate on an empty buffer). Never
    /// involves the worker and never touches the lifecycle.
    validation_error: Option<EvalError>,
    theme: Theme,
    config: ConfigStore,
    selection: KeypadSelection,
    eval_sender: Option<EvalCommandSender>,
}

impl App {
    pub fn new(config: ConfigStore) -> Self {
        let theme = config.theme();
        Self {
            should_quit: false,
            buffer: ExpressionBuffer::new(),
            eval: EvalLifecycleState::default(),
            validation_error: None,
            theme,
            config,
            selection: KeypadSelection::default(),
            eval_sender: None,
        }
    }

    pub fn set_eval_sender(&mut self, sender: EvalCommandSender) {
        self.eval_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn buffer(&self) -> &str {
        self.buffer.value()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn selection(&self) -> KeypadSelection {
        self.selection
    }

    pub fn endpoint(&self) -> String {
        self.config.get().evaluator.base_url
    }

    /// True when keypad input is accepted (no request outstanding).
    pub fn input_enabled(&self) -> bool {
        self.eval.accepts_input()
    }

    pub fn status_line(&self) -> Option<StatusLine> {
        if self.eval.is_pending() {
            return Some(StatusLine::Pending);
        }
        if let Some(error) = &self.validation_error {
            return Some(StatusLine::Error(error.to_string()));
        }
        self.eval
            .error()
            .map(|error| StatusLine::Error(error.to_string()))
    }

    pub fn on_tick(&mut self) {}

    /// Arrow keys move the keypad selection.
    pub fn on_arrow(&mut self, code: KeyCode) {
        if !self.input_enabled() {
            return;
        }
        match code {
            KeyCode::Up => self.selection.move_up(),
            KeyCode::Down => self.selection.move_down(),
            KeyCode::Left => self.selection.move_left(),
            KeyCode::Right => self.selection.move_right(),
            _ => {}
        }
    }

    /// Press the key currently selected on the keypad.
    pub fn press_selected(&mut self) {
        self.press(self.selection.token());
    }

    /// Deliver a keypad token.
    ///
    /// Ignored while an evaluation is pending; the first accepted press
    /// clears whatever the status line was showing.
    pub fn press(&mut self, token: Token) {
        if !self.input_enabled() {
            return;
        }

        self.validation_error = None;
        dispatch!(self, eval, EvalReducer, EvalIntent::Acknowledge);

        match token {
            Token::Input(text) => self.buffer.append(text),
            Token::Clear => self.buffer.clear(),
            Token::Backspace => self.buffer.backspace(),
            Token::Evaluate => self.on_evaluate(),
        }
    }

    /// Submit the current expression for evaluation.
    ///
    /// An empty buffer fails fast without touching the worker or the
    /// lifecycle — the disable/re-enable cycle only happens for requests
    /// that actually go out.
    fn on_evaluate(&mut self) {
        if self.buffer.is_empty() {
            self.validation_error = Some(EvalError::EmptyInput);
            return;
        }

        let expr = self.buffer.value().to_string();
        if self.send_eval(expr.clone()) {
            dispatch!(self, eval, EvalReducer, EvalIntent::Submit { expr });
        }
    }

    /// The worker finished the outstanding request.
    ///
    /// Runs for both branches, so leaving `Pending` — and with it
    /// re-enabling the keypad — does not depend on the request having
    /// succeeded.
    pub fn on_eval_finished(&mut self, outcome: Result<String, EvalError>) {
        if !self.eval.is_pending() {
            // Stale completion; nothing was outstanding.
            return;
        }

        match outcome {
            Ok(result) => {
                self.buffer.set_value(result.clone());
                dispatch!(self, eval, EvalReducer, EvalIntent::Resolved { result });
            }
            Err(error) => {
                dispatch!(self, eval, EvalReducer, EvalIntent::Rejected { error });
            }
        }
    }

    /// Flip the theme and persist the preference.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(error) = self.config.set_theme(self.theme) {
            tracing::warn!(%error, "failed to persist theme preference");
        }
    }

    fn send_eval(&mut self, expr: String) -> bool {
        let Some(sender) = &self.eval_sender else {
            return false;
        };

        match sender.try_send(EvalCommand::Evaluate { expr }) {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(%error, "failed to hand expression to the worker");
                self.validation_error = Some(EvalError::Transport(
                    "evaluation worker unavailable".to_string(),
                ));
                false
            }
        }
    }
}
