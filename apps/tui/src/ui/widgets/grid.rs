use radiopharma_core::projection::GridDatum;
use radiopharma_core::Phase;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use super::tables::{header_row, row_style, scroll_offset, visible_rows};

/// Target or isotope grid as a table, ordered as given.
pub fn render_grid_table(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    data: &[GridDatum],
    phase: Phase,
    selected: usize,
) {
    if data.is_empty() {
        let block = Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let paragraph = Paragraph::new("No matching entries.")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let metric_title = format!("{} trials", phase.label());
    let header = header_row(&[
        "Name",
        "Full name",
        metric_title.as_str(),
        "P1",
        "P2",
        "P3",
        "Dx",
        "Tx",
        "Diseases",
        "Companies",
    ]);

    let max_visible_rows = visible_rows(area.height);
    let offset = scroll_offset(data.len(), max_visible_rows, selected);

    let rows = data
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(index, datum)| {
            Row::new(vec![
                Cell::from(datum.name.clone()),
                Cell::from(datum.full_name.clone()),
                Cell::from(datum.metric(phase).to_string()),
                Cell::from(datum.phase1.to_string()),
                Cell::from(datum.phase2.to_string()),
                Cell::from(datum.phase3.to_string()),
                Cell::from(datum.diagnostic_trials.to_string()),
                Cell::from(datum.therapy_trials.to_string()),
                Cell::from(datum.disease_count.to_string()),
                Cell::from(datum.companies_count.to_string()),
            ])
            .style(row_style(index == selected))
        });

    let widths = [
        Constraint::Length(14),
        Constraint::Min(20),
        Constraint::Length(16),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(9),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!("{title} ({} of {})", selected + 1, data.len()))
                .borders(Borders::ALL),
        )
        .column_spacing(1);

    f.render_widget(table, area);
}
