use radiopharma_core::tabs::{TabSet, ToggleGroup};
use radiopharma_core::theme;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Paragraph, Tabs};
use ratatui::Frame;

use super::color;

pub fn render_tab_set(f: &mut Frame<'_>, area: Rect, tabs: &TabSet, active_color: Color) {
    let titles = tabs
        .options()
        .iter()
        .map(|option| TextLine::from(option.label.clone()))
        .collect::<Vec<_>>();

    let widget = Tabs::new(titles)
        .select(tabs.selected_index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(active_color)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(Span::raw("|"));

    f.render_widget(widget, area);
}

/// Inline `[ label ]` buttons; the active one is filled.
pub fn toggle_line(group: &ToggleGroup) -> TextLine<'static> {
    let mut spans = Vec::new();
    for option in group.options() {
        let style = if group.is_active(&option.id) {
            Style::default()
                .fg(color(theme::SURFACE))
                .bg(color(theme::ACCENT))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color(theme::MUTED))
        };
        spans.push(Span::styled(format!(" {} ", option.label), style));
        spans.push(Span::raw(" "));
    }
    TextLine::from(spans)
}

pub fn render_toggle(f: &mut Frame<'_>, area: Rect, prefix: &str, group: &ToggleGroup) {
    let mut line = toggle_line(group);
    line.spans.insert(0, Span::styled(prefix.to_string(), Style::default().fg(Color::Gray)));
    f.render_widget(Paragraph::new(line), area);
}
