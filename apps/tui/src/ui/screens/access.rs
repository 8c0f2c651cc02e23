use radiopharma_core::choropleth::WorldGeometry;
use radiopharma_core::datasets::ACCESS_TABLE;
use radiopharma_core::theme;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Row, Table};
use ratatui::Frame;
use tracing::debug;

use super::render_empty;
use crate::app::state::MapCache;
use crate::app::App;
use crate::ui::widgets::color;
use crate::ui::widgets::map::{country_fills, raster_for, MapWidget};
use crate::ui::widgets::tables::{header_row, row_style, scroll_offset, visible_rows};

pub fn render_access(app: &App, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(area);

    match app.geometry.data() {
        Some(geometry) => render_map(app, geometry, f, chunks[0]),
        None if app.geometry.is_loading() => {
            render_empty(f, chunks[0], "Therapy access", "Loading world map...");
        }
        None => render_access_bars(app, f, chunks[0]),
    }

    render_access_table(app, f, chunks[1]);
}

fn render_map(app: &App, geometry: &WorldGeometry, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Therapy access")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let size = (inner.width, inner.height);
    let mut cache = app.map_cache.borrow_mut();
    if cache.as_ref().is_none_or(|cached| cached.size != size) {
        debug!(width = size.0, height = size.1, "rasterizing world map");
        *cache = Some(MapCache {
            size,
            raster: raster_for(geometry, inner.width, inner.height),
        });
    }
    let Some(cached) = cache.as_ref() else {
        return;
    };

    let fills = country_fills(geometry, ACCESS_TABLE.get(app.selected()));
    f.render_widget(
        MapWidget {
            raster: &cached.raster,
            fills: &fills,
        },
        inner,
    );
}

/// Access levels as bars when the world map is unavailable.
fn render_access_bars(app: &App, f: &mut Frame<'_>, area: Rect) {
    let selected = app.selected();
    let bars: Vec<Bar<'_>> = ACCESS_TABLE
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let fg = if index == selected {
                color(theme::MAP_HIGHLIGHT)
            } else {
                color(theme::MAP_FILL)
            };
            Bar::default()
                .value((entry.opacity * 100.0).round() as u64)
                .text_value(String::new())
                .label(entry.country)
                .style(Style::default().fg(fg))
        })
        .collect();

    let title = app
        .geometry
        .error()
        .map_or_else(|| "Therapy access (%)".to_string(), |error| format!("Therapy access (%) | {error}"));

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .max(100)
        .bar_gap(0)
        .bar_width(1);

    f.render_widget(chart, area);
}

fn render_access_table(app: &App, f: &mut Frame<'_>, area: Rect) {
    let selected = app.selected();
    let header = header_row(&["Country", "Access"]);
    let max_visible_rows = visible_rows(area.height);
    let offset = scroll_offset(ACCESS_TABLE.len(), max_visible_rows, selected);

    let rows = ACCESS_TABLE
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(index, entry)| {
            Row::new(vec![
                Cell::from(entry.country),
                Cell::from(format!("{:>3.0}%", entry.opacity * 100.0)),
            ])
            .style(row_style(index == selected))
        });

    let table = Table::new(rows, [Constraint::Min(16), Constraint::Length(6)])
        .header(header)
        .block(Block::default().title("Countries").borders(Borders::ALL))
        .column_spacing(1);

    f.render_widget(table, area);
}
