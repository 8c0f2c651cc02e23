use radiopharma_core::projection::CompanyDatum;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use super::render_empty;
use crate::app::App;
use crate::ui::widgets::treemap::{cell_tiles, TreemapWidget};

/// Message drawn instead of the treemap, if any.
fn placeholder(data: &[CompanyDatum], inner: Rect) -> Option<&'static str> {
    if data.is_empty() {
        Some("No company data available for this phase")
    } else if cell_tiles(data, inner.width, inner.height).is_empty() {
        Some("Treemap container has no dimensions")
    } else {
        None
    }
}

pub fn render_companies(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title = format!("Companies by {} trials", app.phase().label());
    if app.data().is_none() {
        render_empty(f, area, &title, "Loading trial data...");
        return;
    }

    let data = app.company_data();
    let block = Block::default()
        .title(title.as_str())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    if let Some(message) = placeholder(&data, inner) {
        render_empty(f, area, &title, message);
        return;
    }

    f.render_widget(block, area);
    f.render_widget(
        TreemapWidget {
            data: &data,
            selected: app.selected(),
            legend: app.legend.selected_id(),
        },
        inner,
    );
}

#[cfg(test)]
mod tests {
    use super::{placeholder, render_companies};
    use crate::app::state::tests::ready_app;
    use radiopharma_core::datasets::sample_document;
    use radiopharma_core::projection::{company_treemap, COMPANY_TREEMAP_LIMIT};
    use radiopharma_core::{AggregateDocument, LoadState, Phase};
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;
    use ratatui::Terminal;
    use std::error::Error;
    use std::sync::Arc;

    type TestResult = Result<(), Box<dyn Error>>;

    #[test]
    fn placeholder_covers_empty_data_and_tiny_areas() {
        let data = company_treemap(&sample_document(), Phase::Total, COMPANY_TREEMAP_LIMIT);

        assert_eq!(placeholder(&data, Rect::new(0, 0, 80, 20)), None);
        assert_eq!(
            placeholder(&data, Rect::new(0, 0, 4, 1)),
            Some("Treemap container has no dimensions")
        );
        assert_eq!(
            placeholder(&data, Rect::new(0, 0, 0, 10)),
            Some("Treemap container has no dimensions")
        );
        assert_eq!(
            placeholder(&[], Rect::new(0, 0, 80, 20)),
            Some("No company data available for this phase")
        );
    }

    #[test]
    fn empty_document_shows_the_message() -> TestResult {
        let mut app = ready_app()?;
        app.document = LoadState::Ready(Arc::new(AggregateDocument::default()));

        let mut terminal = Terminal::new(TestBackend::new(60, 10))?;
        terminal.draw(|f| render_companies(&app, f, f.area()))?;
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("No company data available for this phase"));
        Ok(())
    }
}
