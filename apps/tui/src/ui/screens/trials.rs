use radiopharma_core::datasets::{TRIAL_SHARE_BY_ISOTOPE, TRIAL_STARTS_BY_YEAR};
use radiopharma_core::theme;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Text;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::ui::widgets::bars::render_bars;
use crate::ui::widgets::color;
use crate::ui::widgets::donut::{legend_lines, render_donut};

pub fn render_trials(app: &App, f: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),
            Constraint::Length(u16::try_from(TRIAL_SHARE_BY_ISOTOPE.len()).unwrap_or(u16::MAX) + 2),
        ])
        .split(columns[0]);

    let selected = app.selected();
    render_donut(f, left[0], "Trial share by isotope", TRIAL_SHARE_BY_ISOTOPE, selected);

    let legend = Paragraph::new(Text::from(legend_lines(TRIAL_SHARE_BY_ISOTOPE, selected))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(legend, left[1]);

    render_bars(
        f,
        columns[1],
        "Trial starts per year",
        TRIAL_STARTS_BY_YEAR,
        color(theme::ACCENT),
        None,
    );
}
