use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::Duration;
use tracing::{debug, info};

use crate::app::{handle_input, App};
use crate::terminal::Tui;
use crate::ui;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Run the dashboard until the user quits.
///
/// Each turn applies finished fetches, advances timers, draws, then waits up
/// to [`EVENT_POLL_TIMEOUT`] for a key.
pub async fn run(terminal: &mut Tui, app: &mut App) -> Result<()> {
    info!(screen = app.screen.label(), source = %app.source, "dashboard started");

    while app.running {
        let applied = app.drain_fetch_events();
        if applied > 0 {
            debug!(applied, "fetch results applied");
        }
        app.update();

        terminal
            .draw(|f| ui::ui(app, f))
            .map_err(|e| eyre!("Terminal draw error: {e}"))?;

        if matches!(event::poll(EVENT_POLL_TIMEOUT), Ok(true)) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key.code);
                }
                Ok(Event::Resize(width, height)) => {
                    debug!(width, height, "terminal resized");
                    *app.map_cache.get_mut() = None;
                }
                Ok(_) | Err(_) => {}
            }
        }

        // Give spawned fetches a turn on this worker.
        tokio::task::yield_now().await;
    }

    app.cancel_fetches();
    info!("dashboard stopped");
    Ok(())
}
