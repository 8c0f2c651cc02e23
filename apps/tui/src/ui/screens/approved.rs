use radiopharma_core::datasets::approved;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use crate::app::App;
use crate::ui::widgets::tables::{header_row, row_style, scroll_offset, visible_rows};

pub fn render_approved(app: &App, f: &mut Frame<'_>, area: Rect) {
    let drugs = approved::newest_first();
    let selected = app.selected();
    let header = header_row(&["Year", "Product", "Isotope", "Target", "Use", "Indication", "Company"]);

    let max_visible_rows = visible_rows(area.height);
    let offset = scroll_offset(drugs.len(), max_visible_rows, selected);

    let rows = drugs
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(index, drug)| {
            Row::new(vec![
                Cell::from(drug.year.to_string()),
                Cell::from(drug.brand),
                Cell::from(drug.isotope),
                Cell::from(drug.target),
                Cell::from(drug.modality.label()),
                Cell::from(drug.indication),
                Cell::from(drug.company),
            ])
            .style(row_style(index == selected))
        });

    let widths = [
        Constraint::Length(5),
        Constraint::Length(14),
        Constraint::Length(8),
        Constraint::Length(12),
        Constraint::Length(11),
        Constraint::Min(24),
        Constraint::Length(18),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!("Approved radiopharmaceuticals ({} of {})", selected + 1, drugs.len()))
                .borders(Borders::ALL),
        )
        .column_spacing(1);

    f.render_widget(table, area);
}
