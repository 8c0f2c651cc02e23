use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};

pub fn key_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

fn shortcut(key: &'static str, description: &'static str) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(format!("  {key:<12}"), key_style()),
        Span::raw(description),
    ])
}

fn section(title: &'static str) -> TextLine<'static> {
    TextLine::from(Span::styled(title, Style::default().add_modifier(Modifier::BOLD)))
}

pub fn help_lines() -> Vec<TextLine<'static>> {
    vec![
        TextLine::from(Span::styled(
            "Radiopharmaceutical Industry Dashboard",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from("Clinical trials, isotopes, companies, targets and market access for radiopharmaceuticals."),
        TextLine::from(""),
        section("Navigation:"),
        shortcut("↑/↓ PgUp/PgDn", "Previous / next section"),
        shortcut("←/→ 1-4", "Switch trial phase (Isotopes, Companies, Targets)"),
        shortcut("Tab/Shift-Tab", "Move the selection"),
        shortcut("Home/End", "First / last row"),
        shortcut("Enter", "Toggle details for the selected row"),
        TextLine::from(""),
        section("Data:"),
        shortcut("/", "Filter isotopes or targets by name"),
        shortcut("a / d / t", "Company tiles: all, diagnostic-led, therapy-led"),
        shortcut("r", "Refresh trial data"),
        TextLine::from(""),
        section("General:"),
        shortcut("F1", "Toggle this help screen"),
        shortcut("q", "Quit"),
        TextLine::from(""),
        section("Colours:"),
        TextLine::from("  Light blue tiles lead with diagnostic trials, dark blue with therapy."),
        TextLine::from("  Map shading follows relative access to radioligand therapy."),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Press Esc to close this help screen",
            Style::default().fg(Color::Yellow),
        )),
    ]
}
