//! Style tokens shared by the terminal and web dashboards.

use crate::color::Rgb;

/// Tiles where diagnostic trials outnumber therapy trials.
pub const DIAGNOSTIC: Rgb = Rgb::new(0x7d, 0xd3, 0xfc);
/// Tiles led by therapy trials (ties included).
pub const THERAPY: Rgb = Rgb::new(0x1e, 0x3a, 0x8a);

pub const ACCENT: Rgb = Rgb::new(0x5c, 0xb0, 0xff);
pub const SURFACE: Rgb = Rgb::new(0x0b, 0x11, 0x1a);
pub const PANEL: Rgb = Rgb::new(0x11, 0x1a, 0x26);
pub const TEXT: Rgb = Rgb::new(0xe6, 0xed, 0xf7);
pub const MUTED: Rgb = Rgb::new(0x7f, 0x8b, 0xa0);
pub const WARNING: Rgb = Rgb::new(0xf7, 0xc8, 0x43);
pub const ERROR: Rgb = Rgb::new(0xf0, 0x63, 0x5c);

/// Base colour of the access choropleth before opacity is applied.
pub const MAP_FILL: Rgb = Rgb::new(0x3f, 0xb6, 0x8b);
pub const MAP_HIGHLIGHT: Rgb = WARNING;

/// Rotating palette for donut slices and bar series.
pub const SERIES: [Rgb; 10] = [
    Rgb::new(0x5c, 0xb0, 0xff),
    Rgb::new(0x3f, 0xb6, 0x8b),
    Rgb::new(0xf7, 0xc8, 0x43),
    Rgb::new(0xf0, 0x63, 0x5c),
    Rgb::new(0xa7, 0x8b, 0xfa),
    Rgb::new(0x2d, 0xd4, 0xbf),
    Rgb::new(0xfb, 0x92, 0x3c),
    Rgb::new(0xf4, 0x72, 0xb6),
    Rgb::new(0x94, 0xa3, 0xb8),
    Rgb::new(0x84, 0xcc, 0x16),
];

pub const fn series_color(index: usize) -> Rgb {
    SERIES[index % SERIES.len()]
}

/// Fill for a company tile.
pub const fn tile_fill(diagnostic_trials: u64, therapy_trials: u64) -> Rgb {
    if diagnostic_trials > therapy_trials {
        DIAGNOSTIC
    } else {
        THERAPY
    }
}

#[cfg(test)]
mod tests {
    use super::{tile_fill, DIAGNOSTIC, THERAPY};
    use crate::color::{BLACK, WHITE};

    #[test]
    fn fill_follows_the_dominant_modality() {
        assert_eq!(tile_fill(5, 2), DIAGNOSTIC);
        assert_eq!(tile_fill(2, 5), THERAPY);
        assert_eq!(tile_fill(3, 3), THERAPY);
    }

    #[test]
    fn palette_colours_take_opposite_labels() {
        assert_eq!(DIAGNOSTIC.contrast_text(), BLACK);
        assert_eq!(THERAPY.contrast_text(), WHITE);
    }
}
