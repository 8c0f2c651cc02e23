use radiopharma_core::datasets::SeriesPoint;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line as TextLine;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders};
use ratatui::Frame;

/// One bar per point; `highlight` is drawn in the accent colour.
pub fn render_bars(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    points: &[SeriesPoint],
    bar_color: Color,
    highlight: Option<usize>,
) {
    let bars: Vec<Bar<'_>> = points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let fg = if highlight == Some(index) {
                Color::Yellow
            } else {
                bar_color
            };
            Bar::default()
                .value(point.value)
                .label(TextLine::from(point.label))
                .style(Style::default().fg(fg))
                .value_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        })
        .collect();

    let max_value = points.iter().map(|point| point.value).max().unwrap_or(0).max(1);
    let bar_width = bar_width(area.width.saturating_sub(2), points.len());

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .data(BarGroup::default().bars(&bars))
        .max(max_value)
        .bar_gap(1)
        .bar_width(bar_width);

    f.render_widget(chart, area);
}

/// Widest bar that fits `count` bars with one-cell gaps, between 3 and 8.
fn bar_width(inner_width: u16, count: usize) -> u16 {
    let count = u16::try_from(count.max(1)).unwrap_or(u16::MAX);
    (inner_width.saturating_sub(count) / count).clamp(3, 8)
}

#[cfg(test)]
mod tests {
    use super::bar_width;

    #[test]
    fn bars_shrink_to_fit() {
        assert_eq!(bar_width(100, 5), 8);
        assert_eq!(bar_width(40, 8), 4);
        assert_eq!(bar_width(10, 12), 3);
        assert_eq!(bar_width(30, 0), 8);
    }
}
