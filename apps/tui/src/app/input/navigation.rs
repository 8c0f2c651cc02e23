use super::helpers::{digit_index, wrap_decrement, wrap_increment};
use super::search::start_search;
use crate::app::state::{App, Screen, LEGEND_ALL, LEGEND_DIAGNOSTIC, LEGEND_THERAPY};
use crossterm::event::KeyCode;
use tracing::debug;

/// Keys that act on the open detail popup. Returns false to let the
/// dashboard handle the key as usual.
pub fn handle_detail_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Esc | KeyCode::Enter => {
            app.show_detail = false;
            true
        }
        _ => false,
    }
}

pub fn handle_dashboard_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Esc if !app.search.query.is_empty() => {
            app.search.query.clear();
            app.clamp_selections();
        }
        KeyCode::Up | KeyCode::PageUp => {
            let index = wrap_decrement(app.screen.index(), Screen::ALL.len());
            switch_screen(app, index);
        }
        KeyCode::Down | KeyCode::PageDown => {
            let index = wrap_increment(app.screen.index(), Screen::ALL.len());
            switch_screen(app, index);
        }
        KeyCode::Left => {
            app.phase_tabs.previous();
            phase_changed(app);
        }
        KeyCode::Right => {
            app.phase_tabs.next();
            phase_changed(app);
        }
        KeyCode::Char(c @ '1'..='9') => {
            let id = digit_index(c)
                .and_then(|index| app.phase_tabs.options().get(index))
                .map(|option| option.id.clone());
            if let Some(id) = id {
                if app.phase_tabs.interact(&id, |_| {}) {
                    phase_changed(app);
                }
            }
        }
        KeyCode::Tab => {
            let len = app.list_len(app.screen);
            let index = wrap_increment(app.selected(), len);
            app.set_selected(index);
        }
        KeyCode::BackTab => {
            let len = app.list_len(app.screen);
            let index = wrap_decrement(app.selected(), len);
            app.set_selected(index);
        }
        KeyCode::Home => app.set_selected(0),
        KeyCode::End => {
            let len = app.list_len(app.screen);
            app.set_selected(len.saturating_sub(1));
        }
        KeyCode::Enter => {
            if app.screen != Screen::Overview && app.list_len(app.screen) > 0 {
                app.show_detail = true;
            }
        }
        KeyCode::Char('/') => start_search(app),
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char('a') if app.screen == Screen::Companies => set_legend(app, LEGEND_ALL),
        KeyCode::Char('d') if app.screen == Screen::Companies => {
            set_legend(app, LEGEND_DIAGNOSTIC);
        }
        KeyCode::Char('t') if app.screen == Screen::Companies => set_legend(app, LEGEND_THERAPY),
        _ => {}
    }
}

fn switch_screen(app: &mut App, index: usize) {
    let Some(screen) = Screen::from_index(index) else {
        return;
    };
    app.screen = screen;
    app.show_detail = false;
    if !screen.is_searchable() {
        app.search.query.clear();
    }
    app.clamp_selections();
}

fn phase_changed(app: &mut App) {
    let phase = app.phase();
    debug!(phase = phase.as_str(), "phase selected");
    app.status_message = format!("Phase: {}", phase.label());
    app.clamp_selections();
}

fn set_legend(app: &mut App, id: &str) {
    let mut changed = None;
    app.legend.interact(id, |selected| changed = Some(selected.to_string()));
    if let Some(selected) = changed {
        debug!(legend = %selected, "legend emphasis changed");
    }
}
