//! Company treemap drawn with cell backgrounds.
//!
//! Layout runs in half-cell units: a terminal cell is one unit wide and two
//! units tall, which keeps tiles roughly square on screen.

use radiopharma_core::projection::CompanyDatum;
use radiopharma_core::theme;
use radiopharma_core::treemap::{
    layout_companies, CompanyTile, LabelThresholds, Rect as LayoutRect, TreemapOptions,
};
use ratatui::layout::Rect;
use ratatui::prelude::Buffer;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use super::color;
use crate::app::state::{LEGEND_DIAGNOSTIC, LEGEND_THERAPY};

pub const CELL_OPTIONS: TreemapOptions = TreemapOptions {
    padding_outer: 0.0,
    padding_inner: 1.0,
    labels: LabelThresholds {
        detail: (18.0, 8.0),
        minimal: (8.0, 2.0),
    },
};

/// Tiles for a `width` x `height` cell area.
pub fn layout_cells(data: &[CompanyDatum], width: u16, height: u16) -> Vec<CompanyTile> {
    let bounds = LayoutRect::new(0.0, 0.0, f64::from(width), f64::from(height) * 2.0);
    layout_companies(data, bounds, &CELL_OPTIONS)
}

/// Cell span `[start, end)` of a tile along one axis.
fn span(start: f64, end: f64, scale: f64, limit: u16) -> (u16, u16) {
    let clamp = |value: f64| (value / scale).round().clamp(0.0, f64::from(limit)) as u16;
    (clamp(start), clamp(end))
}

/// A tile together with the cell span it paints.
#[derive(Debug, Clone, Copy)]
pub struct CellTile {
    pub tile: CompanyTile,
    pub columns: (u16, u16),
    pub rows: (u16, u16),
}

/// Tiles that cover at least one whole cell of a `width` x `height` area.
pub fn cell_tiles(data: &[CompanyDatum], width: u16, height: u16) -> Vec<CellTile> {
    layout_cells(data, width, height)
        .into_iter()
        .filter_map(|tile| {
            let columns = span(tile.rect.x, tile.rect.right(), 1.0, width);
            let rows = span(tile.rect.y, tile.rect.bottom(), 2.0, height);
            (columns.0 < columns.1 && rows.0 < rows.1).then_some(CellTile { tile, columns, rows })
        })
        .collect()
}

pub struct TreemapWidget<'a> {
    pub data: &'a [CompanyDatum],
    pub selected: usize,
    /// Active legend option; tiles outside it are dimmed.
    pub legend: Option<&'a str>,
}

impl TreemapWidget<'_> {
    fn emphasised(&self, datum: &CompanyDatum) -> bool {
        match self.legend {
            Some(LEGEND_DIAGNOSTIC) => datum.is_diagnostic_led(),
            Some(LEGEND_THERAPY) => !datum.is_diagnostic_led(),
            _ => true,
        }
    }
}

impl Widget for TreemapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for CellTile {
            tile,
            columns: (x0, x1),
            rows: (y0, y1),
        } in cell_tiles(self.data, area.width, area.height)
        {
            let datum = &self.data[tile.index];
            let mut fill = tile.fill;
            if tile.index == self.selected {
                fill = theme::MAP_HIGHLIGHT.over(fill, 0.45);
            } else if !self.emphasised(datum) {
                fill = fill.over(theme::SURFACE, 0.25);
            }
            let style = Style::default()
                .bg(color(fill))
                .fg(color(fill.contrast_text()));

            for y in y0..y1 {
                for x in x0..x1 {
                    if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                        cell.set_symbol(" ").set_style(style);
                    }
                }
            }

            let width = usize::from(x1 - x0);
            let rows = usize::from(y1 - y0);
            for (line, text) in tile.detail.lines(datum).iter().take(rows).enumerate() {
                let text_style = if line == 0 {
                    style.add_modifier(Modifier::BOLD)
                } else {
                    style
                };
                buf.set_stringn(area.x + x0, area.y + y0 + line as u16, text, width, text_style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{cell_tiles, layout_cells, span, TreemapWidget};
    use radiopharma_core::datasets::sample_document;
    use radiopharma_core::projection::{company_treemap, COMPANY_TREEMAP_LIMIT};
    use radiopharma_core::treemap::LabelDetail;
    use radiopharma_core::Phase;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::widgets::Widget;

    #[test]
    fn spans_round_to_cells() {
        assert_eq!(span(0.0, 10.4, 1.0, 80), (0, 10));
        assert_eq!(span(11.0, 20.0, 2.0, 80), (6, 10));
        assert_eq!(span(-3.0, 500.0, 1.0, 40), (0, 40));
    }

    #[test]
    fn tiles_fit_the_cell_area() {
        let data = company_treemap(&sample_document(), Phase::Total, COMPANY_TREEMAP_LIMIT);
        let tiles = layout_cells(&data, 80, 20);
        assert!(!tiles.is_empty());
        for tile in &tiles {
            assert!(tile.rect.right() <= 80.0 + 1e-6);
            assert!(tile.rect.bottom() <= 40.0 + 1e-6);
        }
        assert_eq!(tiles[0].index, 0);
        assert_eq!(tiles[0].detail, LabelDetail::Full);
    }

    #[test]
    fn tiny_areas_paint_no_tile() {
        let data = company_treemap(&sample_document(), Phase::Total, COMPANY_TREEMAP_LIMIT);
        assert!(cell_tiles(&data, 4, 1).is_empty());
        assert!(cell_tiles(&data, 0, 20).is_empty());
        assert!(!cell_tiles(&data, 80, 20).is_empty());
    }

    #[test]
    fn largest_company_is_labelled() {
        let data = company_treemap(&sample_document(), Phase::Total, COMPANY_TREEMAP_LIMIT);
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        TreemapWidget {
            data: &data,
            selected: 0,
            legend: None,
        }
        .render(area, &mut buf);

        let text: String = buf.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains(&data[0].name));
    }
}
