use radiopharma_core::datasets::MANUFACTURING_CARDS;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::ui::widgets::tables::row_style;

pub fn render_manufacturing(app: &App, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let selected = app.selected();
    let methods: Vec<TextLine<'_>> = MANUFACTURING_CARDS
        .iter()
        .enumerate()
        .map(|(index, card)| TextLine::from(Span::styled(card.method, row_style(index == selected))))
        .collect();
    f.render_widget(
        Paragraph::new(Text::from(methods)).block(
            Block::default()
                .title("Production routes")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        ),
        chunks[0],
    );

    let Some(card) = MANUFACTURING_CARDS.get(selected) else {
        return;
    };
    let heading = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let lines = vec![
        TextLine::from(Span::styled(card.method, Style::default().add_modifier(Modifier::BOLD))),
        TextLine::from(""),
        TextLine::from(card.summary),
        TextLine::from(""),
        TextLine::from(vec![
            Span::styled("Isotopes: ", heading),
            Span::raw(card.isotopes.join(", ")),
        ]),
        TextLine::from(""),
        TextLine::from(Span::styled("Strengths", heading)),
        TextLine::from(card.strengths),
        TextLine::from(""),
        TextLine::from(Span::styled("Constraints", heading)),
        TextLine::from(card.constraints),
    ];
    f.render_widget(
        Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .title("Method")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: true }),
        chunks[1],
    );
}
