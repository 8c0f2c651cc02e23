use crate::app::state::App;
use crossterm::event::KeyCode;

/// Starts filtering the current screen; ignored where there is nothing to filter.
pub fn start_search(app: &mut App) {
    if !app.screen.is_searchable() {
        app.status_message = format!("{} cannot be filtered", app.screen.label());
        return;
    }
    app.search.active = true;
    app.show_detail = false;
}

pub fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => {
            app.search.active = false;
            app.search.query.clear();
        }
        KeyCode::Enter => {
            app.search.active = false;
        }
        KeyCode::Backspace => {
            app.search.query.pop();
        }
        KeyCode::Char(c) => {
            app.search.query.push(c);
        }
        _ => return,
    }
    app.clamp_selections();
}
