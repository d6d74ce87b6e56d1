use crate::clock::SystemClock;
use crate::config::Config;
use crate::controller::ViewController;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;

pub fn run(config: &Config) -> io::Result<()> {
    let controller = ViewController::new(
        config,
        Box::new(SystemClock::new(config.ui.timestamp_format.clone())),
    );
    let mut app = App::new(controller);

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.tick_rate();
    let events = EventHandler::new(tick_rate);
    tracing::info!(tick_ms = config.ui.tick_ms, "terminal widget started");

    loop {
        if app.take_dirty() {
            terminal.draw(|frame| draw(frame, &app))?;
        }
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Err(RecvTimeoutError::Timeout) => app.on_tick(),
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("terminal widget stopped");
    Ok(())
}
