use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Luma below which a background takes white text.
pub const LUMA_THRESHOLD: f64 = 140.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hex colour `{0}`")]
pub struct ParseColorError(String);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceived brightness (ITU-R BT.601 weights), 0..=255.
    pub fn luma(self) -> f64 {
        let weighted =
            299 * u32::from(self.r) + 587 * u32::from(self.g) + 114 * u32::from(self.b);
        f64::from(weighted) / 1000.0
    }

    /// Black or white, whichever reads on top of `self`.
    pub fn contrast_text(self) -> Self {
        if self.luma() < LUMA_THRESHOLD {
            WHITE
        } else {
            BLACK
        }
    }

    /// `self` drawn at `opacity` over `background`.
    pub fn over(self, background: Self, opacity: f64) -> Self {
        let alpha = opacity.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| {
            alpha
                .mul_add(f64::from(fg) - f64::from(bg), f64::from(bg))
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Self::new(
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
        )
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Accepts `#rrggbb`, `rrggbb` and the short `#rgb` form.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseColorError(value.to_string());
        let trimmed = value.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());

        match hex.len() {
            6 => Ok(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let expand = |index: usize| channel(&hex[index..=index]).map(|v| v * 17);
                Ok(Self::new(expand(0)?, expand(1)?, expand(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::{ParseColorError, Rgb, BLACK, LUMA_THRESHOLD, WHITE};

    #[test]
    fn black_fill_takes_white_label() -> Result<(), ParseColorError> {
        assert_eq!("#000000".parse::<Rgb>()?.contrast_text(), WHITE);
        Ok(())
    }

    #[test]
    fn white_fill_takes_black_label() -> Result<(), ParseColorError> {
        assert_eq!("#ffffff".parse::<Rgb>()?.contrast_text(), BLACK);
        Ok(())
    }

    #[test]
    fn threshold_is_exclusive_below_140() {
        // Pure grey has luma equal to its channel value.
        assert!((Rgb::new(140, 140, 140).luma() - LUMA_THRESHOLD).abs() < 1e-9);
        assert_eq!(Rgb::new(139, 139, 139).contrast_text(), WHITE);
        assert_eq!(Rgb::new(140, 140, 140).contrast_text(), BLACK);
    }

    #[test]
    fn parses_long_and_short_hex() -> Result<(), super::ParseColorError> {
        assert_eq!("#1e3a8a".parse::<Rgb>()?, Rgb::new(0x1e, 0x3a, 0x8a));
        assert_eq!("fff".parse::<Rgb>()?, WHITE);
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("#gggggg".parse::<Rgb>().is_err());
        assert!("##fff".parse::<Rgb>().is_err());
        Ok(())
    }

    #[test]
    fn display_round_trips_through_hex() -> Result<(), super::ParseColorError> {
        let color = Rgb::new(12, 200, 7);
        assert_eq!(color.to_string().parse::<Rgb>()?, color);
        Ok(())
    }

    #[test]
    fn opacity_blends_towards_background() {
        let red = Rgb::new(255, 0, 0);
        assert_eq!(red.over(BLACK, 1.0), red);
        assert_eq!(red.over(BLACK, 0.0), BLACK);
        assert_eq!(red.over(WHITE, 0.5), Rgb::new(255, 128, 128));
    }
}
