use radiopharma_core::choropleth::{rasterize, shade, Viewport};
use radiopharma_core::color::Rgb;
use radiopharma_core::datasets::{ACCESS_TABLE, COMPANY_CARDS, TRIAL_SHARE_BY_ISOTOPE, TRIAL_STARTS_BY_YEAR};
use radiopharma_core::projection::{CompanyDatum, GridDatum};
use radiopharma_core::summary::DocumentSummary;
use radiopharma_core::theme;
use radiopharma_core::treemap::{layout_companies, CompanyTile, LabelThresholds, Rect as LayoutRect, TreemapOptions};
use radiopharma_core::{Phase, Section};
use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table, Tabs},
    Frame,
};

use crate::animation::loading_dots;
use crate::state::{DashboardState, Page, LEGEND_DIAGNOSTIC, LEGEND_THERAPY};

const TILE_OPTIONS: TreemapOptions = TreemapOptions {
    padding_outer: 0.0,
    padding_inner: 1.0,
    labels: LabelThresholds {
        detail: (18.0, 8.0),
        minimal: (8.0, 2.0),
    },
};

const fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

fn panel(title: impl Into<String>) -> Block<'static> {
    Block::default()
        .title(title.into())
        .title_style(Style::default().fg(color(theme::ACCENT)).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray))
}

fn selected_style(selected: bool) -> Style {
    if selected {
        Style::default().bg(Color::Rgb(0, 0, 238)).fg(Color::White)
    } else {
        Style::default()
    }
}

pub fn dashboard(state: &mut DashboardState, f: &mut Frame<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .split(f.area());

    render_header(state, f, chunks[0]);
    render_status(state, f, chunks[1]);
    render_page(state, f, chunks[2]);
    render_footer(state, f, chunks[3]);
}

fn render_header(state: &DashboardState, f: &mut Frame<'_>, area: Rect) {
    let titles: Vec<String> = Page::ALL.iter().map(|page| page.label().to_string()).collect();
    let tabs = Tabs::new(titles)
        .block(panel("Radiopharmaceutical Trials"))
        .select(state.page)
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, area);
}

fn render_status(state: &DashboardState, f: &mut Frame<'_>, area: Rect) {
    let mut spans = Vec::new();
    if state.page().is_phased() {
        for (index, option) in state.phase_tabs.options().iter().enumerate() {
            let style = if index == state.phase_tabs.selected_index() {
                Style::default().fg(Color::Black).bg(color(theme::ACCENT))
            } else {
                Style::default().fg(color(theme::MUTED))
            };
            spans.push(Span::styled(format!(" {} {} ", index + 1, option.label), style));
        }
        spans.push(Span::raw("  "));
    }

    if state.is_loading() {
        spans.push(Span::styled(
            format!("Loading data{}", loading_dots(state.pulse)),
            Style::default().fg(Color::Yellow),
        ));
    } else if let Some(notice) = state.document_notice() {
        spans.push(Span::styled(notice, Style::default().fg(color(theme::ERROR))));
    }
    f.render_widget(Paragraph::new(TextLine::from(spans)), area);
}

fn render_page(state: &mut DashboardState, f: &mut Frame<'_>, area: Rect) {
    if state.data().is_none() {
        let paragraph = Paragraph::new("Loading radiopharmaceutical data...")
            .alignment(Alignment::Center)
            .block(panel(state.page().label()));
        f.render_widget(paragraph, area);
        return;
    }

    match state.page() {
        Page::Overview => render_overview(state, f, area),
        Page::Companies => render_companies(state, f, area),
        Page::Targets => render_grid(&state.grid(Section::Target), state.phase(), state.selected, "Targets", f, area),
        Page::Isotopes => render_grid(&state.grid(Section::Isotope), state.phase(), state.selected, "Isotopes", f, area),
        Page::Trials => render_trials(state.selected, f, area),
        Page::Access => render_access(state, f, area),
    }
}

fn render_overview(state: &DashboardState, f: &mut Frame<'_>, area: Rect) {
    let Some(document) = state.data() else {
        return;
    };
    let summary = DocumentSummary::from_document(document);
    let mut lines = vec![
        TextLine::from(Span::styled(
            format!("{} trials processed", summary.total_trials_processed),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
    ];
    for section in &summary.sections {
        lines.push(TextLine::from(Span::styled(
            format!("{} ({} entries)", section.section.label(), section.entries),
            Style::default().fg(Color::Yellow),
        )));
        for (name, count) in &section.leaders {
            lines.push(TextLine::from(format!("  {name}: {count}")));
        }
    }
    f.render_widget(Paragraph::new(lines).block(panel("Overview")), area);
}

fn emphasised(legend: Option<&str>, datum: &CompanyDatum) -> bool {
    match legend {
        Some(LEGEND_DIAGNOSTIC) => datum.is_diagnostic_led(),
        Some(LEGEND_THERAPY) => !datum.is_diagnostic_led(),
        _ => true,
    }
}

/// Cell span `[start, end)` of a tile along one axis.
fn span(start: f64, end: f64, scale: f64, limit: u16) -> (u16, u16) {
    let clamp = |value: f64| (value / scale).round().clamp(0.0, f64::from(limit)) as u16;
    (clamp(start), clamp(end))
}

/// Tiles covering at least one whole cell, with their column and row spans.
fn paintable_tiles(data: &[CompanyDatum], width: u16, height: u16) -> Vec<(CompanyTile, (u16, u16), (u16, u16))> {
    let bounds = LayoutRect::new(0.0, 0.0, f64::from(width), f64::from(height) * 2.0);
    layout_companies(data, bounds, &TILE_OPTIONS)
        .into_iter()
        .filter_map(|tile| {
            let columns = span(tile.rect.x, tile.rect.right(), 1.0, width);
            let rows = span(tile.rect.y, tile.rect.bottom(), 2.0, height);
            (columns.0 < columns.1 && rows.0 < rows.1).then_some((tile, columns, rows))
        })
        .collect()
}

/// Message drawn instead of the treemap, if any.
fn placeholder(data: &[CompanyDatum], tiles: &[(CompanyTile, (u16, u16), (u16, u16))]) -> Option<&'static str> {
    if data.is_empty() {
        Some("No company data available for this phase")
    } else if tiles.is_empty() {
        Some("Treemap container has no dimensions")
    } else {
        None
    }
}

fn render_companies(state: &DashboardState, f: &mut Frame<'_>, area: Rect) {
    let legend = state
        .legend
        .options()
        .iter()
        .map(|option| {
            if state.legend.is_active(&option.id) {
                format!("[{}]", option.label)
            } else {
                format!(" {} ", option.label)
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let block = panel(format!("Companies ({}) {legend}", state.phase().label()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let data = state.companies();
    let tiles = paintable_tiles(&data, inner.width, inner.height);
    if let Some(message) = placeholder(&data, &tiles) {
        f.render_widget(Paragraph::new(message).alignment(Alignment::Center), inner);
        return;
    }

    let legend = state.legend.selected_id();
    let buf = f.buffer_mut();
    for (tile, (x0, x1), (y0, y1)) in tiles {
        let datum = &data[tile.index];
        let mut fill = tile.fill;
        if tile.index == state.selected {
            fill = theme::MAP_HIGHLIGHT.over(fill, 0.45);
        } else if !emphasised(legend, datum) {
            fill = fill.over(theme::SURFACE, 0.25);
        }
        let style = Style::default().bg(color(fill)).fg(color(fill.contrast_text()));
        for y in y0..y1 {
            for x in x0..x1 {
                if let Some(cell) = buf.cell_mut((inner.x + x, inner.y + y)) {
                    cell.set_symbol(" ").set_style(style);
                }
            }
        }

        let width = usize::from(x1 - x0);
        for (line, text) in tile.detail.lines(datum).iter().take(usize::from(y1 - y0)).enumerate() {
            let text_style = if line == 0 { style.add_modifier(Modifier::BOLD) } else { style };
            buf.set_stringn(inner.x + x0, inner.y + y0 + line as u16, text, width, text_style);
        }
    }
}

fn render_grid(data: &[GridDatum], phase: Phase, selected: usize, title: &str, f: &mut Frame<'_>, area: Rect) {
    let header = Row::new(["Name", "Full name", phase.label(), "Dx", "Tx", "Companies"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    let rows = data.iter().enumerate().map(|(index, datum)| {
        Row::new(vec![
            Cell::from(datum.name.clone()),
            Cell::from(datum.full_name.clone()),
            Cell::from(datum.metric(phase).to_string()),
            Cell::from(datum.diagnostic_trials.to_string()),
            Cell::from(datum.therapy_trials.to_string()),
            Cell::from(datum.companies_count.to_string()),
        ])
        .style(selected_style(index == selected))
    });
    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Min(20),
            Constraint::Length(9),
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(panel(format!("{title} ({})", phase.label())));
    f.render_widget(table, area);
}

fn render_trials(selected: usize, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let shares: Vec<Bar> = TRIAL_SHARE_BY_ISOTOPE
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let fill = if index == selected {
                theme::MAP_HIGHLIGHT
            } else {
                theme::series_color(index)
            };
            Bar::default()
                .label(TextLine::from(point.label))
                .value(point.value)
                .style(Style::default().fg(color(fill)))
        })
        .collect();
    let by_isotope = BarChart::default()
        .block(panel("Trials by isotope"))
        .data(BarGroup::default().bars(&shares))
        .bar_width(6)
        .bar_gap(1);
    f.render_widget(by_isotope, chunks[0]);

    let starts: Vec<Bar> = TRIAL_STARTS_BY_YEAR
        .iter()
        .map(|point| Bar::default().label(TextLine::from(point.label)).value(point.value))
        .collect();
    let by_year = BarChart::default()
        .block(panel("Trial starts by year"))
        .data(BarGroup::default().bars(&starts))
        .bar_width(5)
        .bar_gap(1)
        .bar_style(Style::default().fg(color(theme::ACCENT)));
    f.render_widget(by_year, chunks[1]);
}

fn render_access(state: &mut DashboardState, f: &mut Frame<'_>, area: Rect) {
    let highlight = ACCESS_TABLE.get(state.selected);
    let Some(geometry) = state.geometry.data().cloned() else {
        let title = state
            .geometry
            .error()
            .map_or_else(|| "Loading world map...".to_string(), |error| format!("Access ({error})"));
        let rows = ACCESS_TABLE.iter().enumerate().map(|(index, entry)| {
            let filled = (entry.opacity * 20.0).round() as usize;
            Row::new(vec![
                Cell::from(entry.country),
                Cell::from("█".repeat(filled)).style(Style::default().fg(color(theme::MAP_FILL))),
            ])
            .style(selected_style(index == state.selected))
        });
        let table = Table::new(rows, [Constraint::Length(18), Constraint::Min(20)]).block(panel(title));
        f.render_widget(table, area);
        return;
    };

    let block = panel("Access to radiopharmaceutical therapy");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let size = (inner.width, inner.height);
    let cached = state.map_cache.as_ref().is_some_and(|(cached, _)| *cached == size);
    if !cached {
        let raster = rasterize(
            &geometry,
            &Viewport::default(),
            usize::from(inner.width),
            usize::from(inner.height) * 2,
        );
        state.map_cache = Some((size, raster));
    }
    let Some((_, raster)) = state.map_cache.as_ref() else {
        return;
    };

    let fills: Vec<Rgb> = geometry
        .countries
        .iter()
        .map(|country| {
            if highlight.is_some_and(|entry| entry.matches(&country.name)) {
                theme::MAP_HIGHLIGHT
            } else {
                shade(theme::MAP_FILL, theme::SURFACE, country.opacity())
            }
        })
        .collect();
    let fill_at = |x: usize, y: usize| {
        raster
            .get(x, y)
            .and_then(|index| fills.get(index).copied())
            .unwrap_or(theme::SURFACE)
    };

    let buf = f.buffer_mut();
    for row in 0..inner.height {
        for column in 0..inner.width {
            let (x, y) = (usize::from(column), usize::from(row) * 2);
            if let Some(cell) = buf.cell_mut((inner.x + column, inner.y + row)) {
                cell.set_symbol("▀")
                    .set_style(Style::default().fg(color(fill_at(x, y))).bg(color(fill_at(x, y + 1))));
            }
        }
    }
}

/// One line describing the selected item.
pub fn detail_line(state: &DashboardState) -> String {
    let index = state.selected;
    match state.page() {
        Page::Overview => "Up/Down to browse sections".to_string(),
        Page::Companies => state.companies().get(index).map_or_else(String::new, |datum| {
            let profile = COMPANY_CARDS
                .iter()
                .find(|card| card.name == datum.name)
                .map_or_else(String::new, |card| format!(" | {}: {}", card.headquarters, card.lead_asset));
            format!(
                "{}: {} trials, Dx {} / Tx {}, {} diseases{profile}",
                datum.name, datum.value, datum.diagnostic_trials, datum.therapy_trials, datum.disease_count
            )
        }),
        Page::Targets | Page::Isotopes => {
            let section = if state.page() == Page::Targets {
                Section::Target
            } else {
                Section::Isotope
            };
            state.grid(section).get(index).map_or_else(String::new, |datum| {
                let description = if datum.description.is_empty() {
                    String::new()
                } else {
                    format!(" - {}", datum.description)
                };
                let phase = state.phase();
                format!("{} ({}: {}){description}", datum.full_name, phase.label(), datum.metric(phase))
            })
        }
        Page::Trials => TRIAL_SHARE_BY_ISOTOPE
            .get(index)
            .map_or_else(String::new, |point| format!("{}: {} trials", point.label, point.value)),
        Page::Access => ACCESS_TABLE.get(index).map_or_else(String::new, |entry| {
            format!("{}: access {:.0}%", entry.country, entry.opacity * 100.0)
        }),
    }
}

fn render_footer(state: &DashboardState, f: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        TextLine::from(Span::styled(detail_line(state), Style::default().fg(color(theme::TEXT)))),
        TextLine::from(Span::styled(
            "Up/Down section  Left/Right or 1-4 phase  Tab select  a/d/t legend  r refresh",
            Style::default().fg(color(theme::MUTED)),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
