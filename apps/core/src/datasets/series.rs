use serde::Serialize;

/// One labelled value of a small chart dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    pub label: &'static str,
    pub value: u64,
}

const fn point(label: &'static str, value: u64) -> SeriesPoint {
    SeriesPoint { label, value }
}

/// Registered radiopharmaceutical trials by isotope (donut chart).
pub const TRIAL_SHARE_BY_ISOTOPE: &[SeriesPoint] = &[
    point("Lu-177", 418),
    point("Ga-68", 306),
    point("F-18", 262),
    point("Ac-225", 94),
    point("Cu-64", 71),
    point("Zr-89", 54),
    point("Tc-99m", 49),
    point("I-131", 45),
    point("Pb-212", 23),
    point("Other", 61),
];

/// New radiopharmaceutical trial starts per year (bar chart).
pub const TRIAL_STARTS_BY_YEAR: &[SeriesPoint] = &[
    point("2015", 48),
    point("2016", 53),
    point("2017", 61),
    point("2018", 72),
    point("2019", 84),
    point("2020", 91),
    point("2021", 117),
    point("2022", 138),
    point("2023", 164),
    point("2024", 189),
];

pub fn values(points: &[SeriesPoint]) -> Vec<u64> {
    points.iter().map(|point| point.value).collect()
}
