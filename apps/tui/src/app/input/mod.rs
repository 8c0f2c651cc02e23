mod help;
mod helpers;
mod navigation;
mod search;

use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    if app.search.active {
        search::handle_search_input(app, key);
        return;
    }

    if app.show_detail && navigation::handle_detail_input(app, key) {
        return;
    }

    navigation::handle_dashboard_input(app, key);
}
