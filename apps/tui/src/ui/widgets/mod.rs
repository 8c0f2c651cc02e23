pub mod bars;
pub mod donut;
pub mod grid;
pub mod map;
pub mod popup;
pub mod tables;
pub mod tabs;
pub mod treemap;

use radiopharma_core::color::Rgb;
use ratatui::style::Color;

pub const fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}
