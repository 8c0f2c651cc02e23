use ratatui::layout::Rect;
use ratatui::Frame;

use super::render_empty;
use crate::app::App;
use crate::ui::widgets::grid::render_grid_table;

pub fn render_targets(app: &App, f: &mut Frame<'_>, area: Rect) {
    if app.data().is_none() {
        render_empty(f, area, "Molecular targets", "Loading trial data...");
        return;
    }

    render_grid_table(
        f,
        area,
        "Molecular targets",
        &app.target_grid(),
        app.phase(),
        app.selected(),
    );
}
