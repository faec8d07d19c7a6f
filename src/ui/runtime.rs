//! The UI event loop.

use std::io;
use std::time::Duration;

use crate::config::ConfigStore;
use crate::eval::{EvalWorker, EvaluatorClient};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(config: ConfigStore) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);

    let client = EvaluatorClient::new(config.get().evaluator.base_url);
    let worker = EvalWorker::spawn(client, events.sender());

    let mut app = App::new(config);
    app.set_eval_sender(worker.sender());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // ratatui resizes on the next draw; nothing to track.
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::EvalFinished(outcome)) => app.on_eval_finished(outcome),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
