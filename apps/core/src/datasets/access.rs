use serde::Serialize;

/// Opacity used for countries missing from [`ACCESS_TABLE`].
pub const MIN_OPACITY: f64 = 0.08;

/// Relative access to radiopharmaceutical therapy, encoded as map opacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccessEntry {
    pub country: &'static str,
    /// Other spellings used by world geometry files.
    pub aliases: &'static [&'static str],
    pub opacity: f64,
}

const fn access(country: &'static str, aliases: &'static [&'static str], opacity: f64) -> AccessEntry {
    AccessEntry {
        country,
        aliases,
        opacity,
    }
}

pub const ACCESS_TABLE: &[AccessEntry] = &[
    access("United States", &["USA", "United States of America"], 1.0),
    access("Germany", &[], 0.95),
    access("Australia", &[], 0.9),
    access("Netherlands", &[], 0.85),
    access("Switzerland", &[], 0.85),
    access("France", &[], 0.85),
    access("Japan", &[], 0.8),
    access("United Kingdom", &["England", "UK"], 0.8),
    access("Canada", &[], 0.8),
    access("Belgium", &[], 0.75),
    access("Austria", &[], 0.75),
    access("Italy", &[], 0.75),
    access("Spain", &[], 0.7),
    access("Sweden", &[], 0.7),
    access("Denmark", &[], 0.7),
    access("South Korea", &["Korea", "Republic of Korea"], 0.7),
    access("Israel", &[], 0.65),
    access("Finland", &[], 0.65),
    access("Norway", &[], 0.65),
    access("China", &[], 0.6),
    access("Poland", &[], 0.5),
    access("Czech Republic", &["Czechia"], 0.5),
    access("Singapore", &[], 0.5),
    access("Turkey", &["Türkiye"], 0.45),
    access("Brazil", &[], 0.45),
    access("Argentina", &[], 0.4),
    access("Russia", &["Russian Federation"], 0.4),
    access("India", &[], 0.4),
    access("South Africa", &[], 0.4),
    access("Saudi Arabia", &[], 0.35),
    access("United Arab Emirates", &[], 0.35),
    access("Mexico", &[], 0.35),
    access("Chile", &[], 0.3),
    access("Iran", &[], 0.3),
    access("Thailand", &[], 0.25),
    access("Egypt", &[], 0.2),
    access("Indonesia", &[], 0.15),
    access("Nigeria", &[], 0.1),
];

impl AccessEntry {
    pub fn matches(&self, name: &str) -> bool {
        let name = name.trim();
        self.country.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    }
}

pub fn find(name: &str) -> Option<&'static AccessEntry> {
    ACCESS_TABLE.iter().find(|entry| entry.matches(name))
}

/// Map opacity for a country name, falling back to [`MIN_OPACITY`].
pub fn opacity_for(name: &str) -> f64 {
    find(name).map_or(MIN_OPACITY, |entry| entry.opacity)
}

#[cfg(test)]
mod tests {
    use super::{opacity_for, ACCESS_TABLE, MIN_OPACITY};

    #[test]
    fn aliases_resolve_to_the_same_entry() {
        assert!((opacity_for("USA") - 1.0).abs() < f64::EPSILON);
        assert!((opacity_for("united states of america") - 1.0).abs() < f64::EPSILON);
        assert!((opacity_for("England") - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn absent_countries_get_minimum_opacity() {
        assert!((opacity_for("Atlantis") - MIN_OPACITY).abs() < f64::EPSILON);
    }

    #[test]
    fn table_fits_a_small_chart() {
        assert!(ACCESS_TABLE.len() <= 40);
        assert!(ACCESS_TABLE
            .iter()
            .all(|entry| entry.opacity >= MIN_OPACITY && entry.opacity <= 1.0));
    }
}
