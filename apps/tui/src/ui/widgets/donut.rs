use radiopharma_core::charts::{donut_arcs, shares};
use radiopharma_core::datasets::SeriesPoint;
use radiopharma_core::theme;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use super::color;

const INNER_RADIUS: f64 = 0.55;
const OUTER_RADIUS: f64 = 0.9;
/// Outer radius of the selected slice.
const RAISED_RADIUS: f64 = 1.0;
const SAMPLE_STEP: f64 = 0.015;

/// Canvas x bounds that keep a circle round in a `width` x `height` cell area.
fn x_extent(width: u16, height: u16) -> f64 {
    let aspect = f64::from(width) / (2.0 * f64::from(height.max(1)));
    RAISED_RADIUS.max(RAISED_RADIUS * aspect) * 1.05
}

pub fn render_donut(f: &mut Frame<'_>, area: Rect, title: &str, points: &[SeriesPoint], selected: usize) {
    let values: Vec<u64> = points.iter().map(|point| point.value).collect();
    let arcs = donut_arcs(&values);
    let samples: Vec<(usize, Vec<(f64, f64)>)> = arcs
        .iter()
        .map(|arc| {
            let outer = if arc.index == selected {
                RAISED_RADIUS
            } else {
                OUTER_RADIUS
            };
            (arc.index, arc.sample(INNER_RADIUS, outer, SAMPLE_STEP))
        })
        .collect();

    let x = x_extent(area.width.saturating_sub(2), area.height.saturating_sub(2));
    let y = RAISED_RADIUS * 1.05;

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .marker(Marker::Braille)
        .x_bounds([-x, x])
        .y_bounds([-y, y])
        .paint(|ctx| {
            for (index, coords) in &samples {
                ctx.draw(&Points {
                    coords,
                    color: color(theme::series_color(*index)),
                });
            }
        });

    f.render_widget(canvas, area);
}

/// Legend rows: swatch, label and share of the total.
pub fn legend_lines(points: &[SeriesPoint], selected: usize) -> Vec<TextLine<'static>> {
    let values: Vec<u64> = points.iter().map(|point| point.value).collect();
    points
        .iter()
        .zip(shares(&values))
        .enumerate()
        .map(|(index, (point, share))| {
            let label_style = if index == selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            TextLine::from(vec![
                Span::styled("■ ", Style::default().fg(color(theme::series_color(index)))),
                Span::styled(format!("{:<10}", point.label), label_style),
                Span::raw(format!("{share:>5.1}%")),
            ])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{legend_lines, x_extent, RAISED_RADIUS};
    use radiopharma_core::datasets::TRIAL_SHARE_BY_ISOTOPE;

    #[test]
    fn wide_areas_widen_the_x_bounds() {
        assert!(x_extent(80, 20) > x_extent(40, 20));
        assert!(x_extent(10, 20) >= RAISED_RADIUS);
    }

    #[test]
    fn legend_has_a_row_per_point() {
        let lines = legend_lines(TRIAL_SHARE_BY_ISOTOPE, 0);
        assert_eq!(lines.len(), TRIAL_SHARE_BY_ISOTOPE.len());
        assert!(lines[0].spans[1].content.contains(TRIAL_SHARE_BY_ISOTOPE[0].label));
    }
}
