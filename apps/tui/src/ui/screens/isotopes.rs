use radiopharma_core::datasets::ISOTOPE_CARDS;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use super::render_empty;
use crate::app::App;
use crate::ui::widgets::grid::render_grid_table;
use crate::ui::widgets::tables::header_row;

pub fn render_isotopes(app: &App, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    if app.data().is_some() {
        render_grid_table(
            f,
            chunks[0],
            "Isotopes in trials",
            &app.isotope_grid(),
            app.phase(),
            app.selected(),
        );
    } else {
        render_empty(f, chunks[0], "Isotopes in trials", "Loading trial data...");
    }

    render_isotope_cards(f, chunks[1]);
}

fn render_isotope_cards(f: &mut Frame<'_>, area: Rect) {
    let header = header_row(&["Isotope", "Name", "Half-life", "Emission", "Production", "Used for"]);

    let rows = ISOTOPE_CARDS.iter().map(|card| {
        let emission_color = if card.emission.is_therapeutic() {
            Color::Magenta
        } else {
            Color::Cyan
        };
        Row::new(vec![
            Cell::from(card.symbol),
            Cell::from(card.name),
            Cell::from(card.half_life_label()),
            Cell::from(card.emission.label()).style(Style::default().fg(emission_color)),
            Cell::from(card.production),
            Cell::from(card.uses),
        ])
    });

    let widths = [
        Constraint::Length(8),
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(24),
        Constraint::Min(20),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title("Isotope reference")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .column_spacing(1);

    f.render_widget(table, area);
}
