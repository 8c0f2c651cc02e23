//! Access choropleth drawn with upper half blocks, two raster rows per cell.

use radiopharma_core::choropleth::{rasterize, shade, Raster, Viewport, WorldGeometry};
use radiopharma_core::color::Rgb;
use radiopharma_core::datasets::AccessEntry;
use radiopharma_core::theme;
use ratatui::layout::Rect;
use ratatui::prelude::Buffer;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use super::color;

/// Raster sized for a `width` x `height` cell area.
pub fn raster_for(geometry: &WorldGeometry, width: u16, height: u16) -> Raster {
    rasterize(
        geometry,
        &Viewport::default(),
        usize::from(width),
        usize::from(height) * 2,
    )
}

/// Fill per country: access opacity over the background, or the highlight.
pub fn country_fills(geometry: &WorldGeometry, highlight: Option<&AccessEntry>) -> Vec<Rgb> {
    geometry
        .countries
        .iter()
        .map(|country| {
            if highlight.is_some_and(|entry| entry.matches(&country.name)) {
                theme::MAP_HIGHLIGHT
            } else {
                shade(theme::MAP_FILL, theme::SURFACE, country.opacity())
            }
        })
        .collect()
}

pub struct MapWidget<'a> {
    pub raster: &'a Raster,
    pub fills: &'a [Rgb],
}

impl MapWidget<'_> {
    fn fill_at(&self, x: usize, y: usize) -> Rgb {
        self.raster
            .get(x, y)
            .and_then(|index| self.fills.get(index).copied())
            .unwrap_or(theme::SURFACE)
    }
}

impl Widget for MapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height {
            for column in 0..area.width {
                let (x, y) = (usize::from(column), usize::from(row) * 2);
                let top = self.fill_at(x, y);
                let bottom = self.fill_at(x, y + 1);
                if let Some(cell) = buf.cell_mut((area.x + column, area.y + row)) {
                    cell.set_symbol("▀")
                        .set_style(Style::default().fg(color(top)).bg(color(bottom)));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{country_fills, raster_for, MapWidget};
    use radiopharma_core::choropleth::WorldGeometry;
    use radiopharma_core::datasets::access;
    use radiopharma_core::theme;
    use radiopharma_core::DataError;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::style::Color;
    use ratatui::widgets::Widget;

    const GEOJSON: &str = r#"{"type": "FeatureCollection", "features": [
        {"type": "Feature", "properties": {"name": "USA"},
         "geometry": {"type": "Polygon", "coordinates": [[[-180, -58], [180, -58], [180, 84], [-180, 84], [-180, -58]]]}}
    ]}"#;

    #[test]
    fn highlighted_entry_uses_the_highlight_fill() -> Result<(), DataError> {
        let geometry = WorldGeometry::from_slice(GEOJSON.as_bytes())?;
        let fills = country_fills(&geometry, access::find("United States"));
        assert_eq!(fills, [theme::MAP_HIGHLIGHT]);

        let plain = country_fills(&geometry, access::find("Nigeria"));
        assert_ne!(plain[0], theme::MAP_HIGHLIGHT);
        Ok(())
    }

    #[test]
    fn covered_cells_are_painted() -> Result<(), DataError> {
        let geometry = WorldGeometry::from_slice(GEOJSON.as_bytes())?;
        let raster = raster_for(&geometry, 12, 4);
        assert_eq!((raster.width, raster.height), (12, 8));

        let fills = country_fills(&geometry, None);
        let area = Rect::new(0, 0, 12, 4);
        let mut buf = Buffer::empty(area);
        MapWidget {
            raster: &raster,
            fills: &fills,
        }
        .render(area, &mut buf);

        let cell = &buf.content()[0];
        assert_eq!(cell.symbol(), "▀");
        let expected = Color::Rgb(fills[0].r, fills[0].g, fills[0].b);
        assert_eq!((cell.fg, cell.bg), (expected, expected));
        Ok(())
    }
}
