use radiopharma_core::datasets::{APPROVED_DRUGS, COMPANY_CARDS};
use radiopharma_core::summary::DocumentSummary;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::render_empty;
use crate::app::App;

pub fn render_overview(app: &App, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    match app.data() {
        Some(document) => {
            let summary = DocumentSummary::from_document(document);
            let paragraph = Paragraph::new(Text::from(summary_lines(app, &summary)))
                .block(
                    Block::default()
                        .title("Trial landscape")
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Cyan)),
                )
                .wrap(Wrap { trim: true });
            f.render_widget(paragraph, chunks[0]);
        }
        None => render_empty(f, chunks[0], "Trial landscape", "Loading trial data..."),
    }

    let paragraph = Paragraph::new(Text::from(company_card_lines()))
        .block(
            Block::default()
                .title("Industry leaders")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, chunks[1]);
}

fn summary_lines(app: &App, summary: &DocumentSummary) -> Vec<TextLine<'static>> {
    let label = Style::default().fg(Color::Gray);
    let value = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);

    let mut lines = vec![
        TextLine::from(vec![
            Span::styled("Trials processed: ", label),
            Span::styled(summary.total_trials_processed.to_string(), value),
        ]),
        TextLine::from(vec![
            Span::styled("Approved products: ", label),
            Span::styled(APPROVED_DRUGS.len().to_string(), value),
        ]),
        TextLine::from(vec![
            Span::styled("Source: ", label),
            Span::raw(app.source.to_string()),
        ]),
    ];
    if let Some(fetched_at) = app.fetched_at {
        lines.push(TextLine::from(vec![
            Span::styled("Updated: ", label),
            Span::raw(fetched_at.format("%Y-%m-%d %H:%M:%S").to_string()),
        ]));
    }

    for section in &summary.sections {
        lines.push(TextLine::from(""));
        lines.push(TextLine::from(Span::styled(
            format!("{} ({})", section.section.label(), section.entries),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        for (name, count) in &section.leaders {
            lines.push(TextLine::from(format!("  {name}: {count}")));
        }
    }
    lines
}

fn company_card_lines() -> Vec<TextLine<'static>> {
    let label = Style::default().fg(Color::Gray);
    let mut lines = Vec::new();
    for card in COMPANY_CARDS {
        lines.push(TextLine::from(vec![
            Span::styled(
                card.name,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", card.headquarters), label),
        ]));
        lines.push(TextLine::from(format!("  {}", card.focus)));
        lines.push(TextLine::from(vec![
            Span::styled("  Lead asset: ", label),
            Span::raw(card.lead_asset),
            Span::styled("  Isotopes: ", label),
            Span::raw(card.isotopes.join(", ")),
        ]));
        lines.push(TextLine::from(""));
    }
    lines
}
