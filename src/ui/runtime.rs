use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use crate::config::Config;
use crate::scheduler::{drain_due, SchedulerHandle, SystemClock, TimerQueue};
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::error::AppError;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Upper bound on the wait between redraws, roughly 30 fps.
const FRAME_TIME: Duration = Duration::from_millis(33);

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Go straight to the portfolio without the loading intro.
    pub skip_intro: bool,
}

pub fn run(config: Config, options: RunOptions) -> Result<(), AppError> {
    let shutdown = ShutdownHandle::new();
    shutdown.install_signal_handlers()?;

    let (mut terminal, guard) = setup_terminal()?;

    let queue = Rc::new(RefCell::new(TimerQueue::new(SystemClock::new())));
    let scheduler: SchedulerHandle = queue.clone();
    let mut app = App::new(scheduler, config, options.skip_intro)?;
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    let events = EventHandler::new(shutdown.clone());
    tracing::info!(skip_intro = options.skip_intro, "ui started");

    loop {
        drain_due(&queue, |id| {
            if !app.on_timer(id) {
                tracing::trace!(timer = %id, "timer had no owner");
            }
        });
        app.on_frame()?;

        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() || shutdown.is_shutting_down() {
            break;
        }

        let wait = queue
            .borrow()
            .time_until_next()
            .map_or(FRAME_TIME, |until| until.min(FRAME_TIME));
        match events.next(wait) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    // Components cancel their timers before the terminal is handed back.
    drop(app);
    drop(guard);
    tracing::info!("ui stopped");
    Ok(())
}
