pub mod detail;
pub mod help;
pub mod screens;
pub mod widgets;

use radiopharma_core::theme;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;
use throbber_widgets_tui::{Throbber, WhichUse, BRAILLE_SIX};

use crate::app::{App, Screen};
use help::key_style;
use widgets::popup::{centered_rect, render_popup};
use widgets::tabs::{render_tab_set, render_toggle};

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let area = f.area().inner(Margin::new(1, 0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title and sections
            Constraint::Length(1), // Status or error banner
            Constraint::Min(5),    // Screen body
            Constraint::Length(2), // Shortcuts hint
        ])
        .split(area);

    render_header(app, f, chunks[0]);
    render_status(app, f, chunks[1]);
    render_body(app, f, chunks[2]);
    render_shortcuts(app, f, chunks[3]);

    if app.show_detail {
        if let Some(detail) = detail::selected_detail(app) {
            let popup = centered_rect(60, 60, f.area());
            render_popup(f, popup, &detail.title, Color::Cyan, detail.lines);
        }
    }

    if app.show_help {
        let popup = centered_rect(70, 80, f.area());
        render_popup(f, popup, "Help & Keyboard Shortcuts", Color::Yellow, help::help_lines());
    }
}

fn render_header(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("== Radiopharma Dashboard ==")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(26)])
        .split(inner);

    let titles = Screen::ALL
        .iter()
        .map(|screen| TextLine::from(screen.label()))
        .collect::<Vec<_>>();
    let tabs = Tabs::new(titles)
        .select(app.screen.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Rgb(0, 0, 238))
                .bg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));
    f.render_widget(tabs, columns[0]);

    let updated = app.fetched_at.map_or_else(
        || "not loaded".to_string(),
        |time| format!("updated {}", time.format("%H:%M:%S")),
    );
    f.render_widget(
        Paragraph::new(updated)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Right),
        columns[1],
    );
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    if app.is_loading() {
        let label = if app.refreshing {
            "Refreshing trial data..."
        } else {
            "Loading trial data..."
        };
        let throbber = Throbber::default()
            .label(label)
            .style(Style::default().fg(Color::Cyan))
            .throbber_style(key_style())
            .throbber_set(BRAILLE_SIX)
            .use_type(WhichUse::Spin);
        let mut state = app.throbber.clone();
        f.render_stateful_widget(throbber, area, &mut state);
        return;
    }

    let line = if let Some(error) = app.document.error() {
        let mut spans = vec![Span::styled(
            format!("⚠ {error}"),
            Style::default()
                .fg(widgets::color(theme::ERROR))
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(fallback) = app.document_fallback.filter(|_| app.document.is_fallback()) {
            spans.push(Span::styled(
                format!("  {}", fallback.notice()),
                Style::default().fg(widgets::color(theme::WARNING)),
            ));
        }
        TextLine::from(spans)
    } else {
        TextLine::from(Span::styled(
            app.status_message.clone(),
            Style::default().fg(Color::Gray),
        ))
    };
    f.render_widget(Paragraph::new(line), area);
}

/// Extra single-line rows above the screen body.
fn control_rows(app: &App) -> u16 {
    let mut rows = 0;
    if app.screen.is_phased() {
        rows += 1;
    }
    if app.screen == Screen::Companies {
        rows += 1;
    }
    if app.screen.is_searchable() && (app.search.active || !app.search.query.is_empty()) {
        rows += 1;
    }
    rows
}

fn render_body(app: &App, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(control_rows(app)), Constraint::Min(3)])
        .split(area);

    let mut row = chunks[0];
    row.height = 1;
    if app.screen.is_phased() {
        render_tab_set(f, row, &app.phase_tabs, widgets::color(theme::ACCENT));
        row.y += 1;
    }
    if app.screen == Screen::Companies {
        render_toggle(f, row, "Emphasis: ", &app.legend);
        row.y += 1;
    }
    if app.screen.is_searchable() && (app.search.active || !app.search.query.is_empty()) {
        render_search(app, f, row);
    }

    let body = chunks[1];
    match app.screen {
        Screen::Overview => screens::overview::render_overview(app, f, body),
        Screen::Isotopes => screens::isotopes::render_isotopes(app, f, body),
        Screen::Companies => screens::companies::render_companies(app, f, body),
        Screen::Targets => screens::targets::render_targets(app, f, body),
        Screen::Trials => screens::trials::render_trials(app, f, body),
        Screen::Manufacturing => screens::manufacturing::render_manufacturing(app, f, body),
        Screen::Approved => screens::approved::render_approved(app, f, body),
        Screen::Access => screens::access::render_access(app, f, body),
    }
}

fn render_search(app: &App, f: &mut Frame<'_>, area: Rect) {
    let cursor = if app.search.active { "█" } else { "" };
    let line = TextLine::from(vec![
        Span::styled("Filter: ", key_style()),
        Span::raw(format!("{}{cursor}", app.search.query)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn shortcut_spans(app: &App) -> Vec<Span<'static>> {
    let mut pairs: Vec<(&str, &str)> = if app.search.active {
        vec![("Type", ": Filter   "), ("Enter", ": Keep   "), ("Esc", ": Clear")]
    } else {
        vec![("↑/↓", ": Section   ")]
    };

    if !app.search.active {
        if app.screen.is_phased() {
            pairs.push(("←/→", ": Phase   "));
        }
        if app.screen != Screen::Overview {
            pairs.push(("Tab", ": Select   "));
            pairs.push(("Enter", ": Details   "));
        }
        if app.screen.is_searchable() {
            pairs.push(("/", ": Filter   "));
        }
        if app.screen == Screen::Companies {
            pairs.push(("a/d/t", ": Emphasis   "));
        }
        pairs.extend([("r", ": Refresh   "), ("F1", ": Help   "), ("q", ": Quit")]);
    }

    pairs
        .into_iter()
        .flat_map(|(key, description)| {
            [
                Span::styled(key.to_string(), key_style()),
                Span::raw(description.to_string()),
            ]
        })
        .collect()
}

fn render_shortcuts(app: &App, f: &mut Frame<'_>, area: Rect) {
    let paragraph = Paragraph::new(TextLine::from(shortcut_spans(app)))
        .block(Block::default().borders(Borders::TOP))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
