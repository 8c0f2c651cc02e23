//! Geometry for the small hardcoded charts: donut arcs and bar heights.

use std::f64::consts::{FRAC_PI_2, TAU};

use serde::Serialize;

/// One donut slice. Angles are radians, clockwise from twelve o'clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Arc {
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub fraction: f64,
}

impl Arc {
    /// Points along the arc between two radii, in a y-up plane centred on the origin.
    pub fn sample(&self, inner: f64, outer: f64, step: f64) -> Vec<(f64, f64)> {
        let step = step.max(1e-3);
        let mut points = Vec::new();
        let mut angle = self.start;
        while angle < self.end {
            let mut radius = inner;
            while radius <= outer {
                // Clockwise from twelve o'clock in a y-up plane.
                let theta = FRAC_PI_2 - angle;
                points.push((radius * theta.cos(), radius * theta.sin()));
                radius += step;
            }
            angle += step / outer.max(1.0);
        }
        points
    }
}

/// Splits the full circle proportionally to `values`; zero values get no arc.
pub fn donut_arcs(values: &[u64]) -> Vec<Arc> {
    let total: u64 = values.iter().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut start = 0.0;
    values
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value > 0)
        .map(|(index, &value)| {
            let fraction = value as f64 / total as f64;
            let end = fraction.mul_add(TAU, start);
            let arc = Arc {
                index,
                start,
                end,
                fraction,
            };
            start = end;
            arc
        })
        .collect()
}

/// Percentage of the total for each value.
pub fn shares(values: &[u64]) -> Vec<f64> {
    let total = values.iter().sum::<u64>().max(1) as f64;
    values
        .iter()
        .map(|&value| value as f64 / total * 100.0)
        .collect()
}
