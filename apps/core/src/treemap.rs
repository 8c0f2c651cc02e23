//! Squarified treemap layout (Bruls, Huijsen & van Wijk).
//!
//! Rows of tiles are laid along the shorter side of the free rectangle and
//! grown while the worst aspect ratio in the row keeps improving.

use serde::Serialize;

use crate::color::Rgb;
use crate::projection::CompanyDatum;
use crate::theme;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Shrinks every side by `amount`, never below zero size.
    pub fn inset(&self, amount: f64) -> Self {
        let width = 2.0f64.mul_add(-amount, self.width).max(0.0);
        let height = 2.0f64.mul_add(-amount, self.height).max(0.0);
        Self::new(self.x + amount, self.y + amount, width, height)
    }
}

/// How much text a tile has room for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LabelDetail {
    /// Name, value and the diagnostic/therapy/disease sub-labels.
    Full,
    /// Name and value.
    Compact,
    /// The value alone.
    ValueOnly,
}

impl LabelDetail {
    /// Text lines for a company tile, top to bottom.
    pub fn lines(self, datum: &CompanyDatum) -> Vec<String> {
        match self {
            Self::Full => vec![
                datum.name.clone(),
                format!("{} trials", datum.value),
                format!("Dx {} | Tx {}", datum.diagnostic_trials, datum.therapy_trials),
                format!("{} diseases", datum.disease_count),
            ],
            Self::Compact => vec![datum.name.clone(), datum.value.to_string()],
            Self::ValueOnly => vec![datum.value.to_string()],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelThresholds {
    /// Minimum (width, height) for [`LabelDetail::Full`].
    pub detail: (f64, f64),
    /// Minimum (width, height) for [`LabelDetail::Compact`].
    pub minimal: (f64, f64),
}

impl LabelThresholds {
    pub const PIXELS: Self = Self {
        detail: (120.0, 80.0),
        minimal: (60.0, 36.0),
    };

    pub fn classify(&self, rect: &Rect) -> LabelDetail {
        let fits = |(width, height): (f64, f64)| rect.width >= width && rect.height >= height;
        if fits(self.detail) {
            LabelDetail::Full
        } else if fits(self.minimal) {
            LabelDetail::Compact
        } else {
            LabelDetail::ValueOnly
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreemapOptions {
    /// Gap between the container edge and the tiles.
    pub padding_outer: f64,
    /// Gap between neighbouring tiles.
    pub padding_inner: f64,
    pub labels: LabelThresholds,
}

impl Default for TreemapOptions {
    fn default() -> Self {
        Self {
            padding_outer: 4.0,
            padding_inner: 2.0,
            labels: LabelThresholds::PIXELS,
        }
    }
}

/// A laid-out tile; `index` points back into the input values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tile {
    pub index: usize,
    pub rect: Rect,
}

/// Partitions `bounds` into tiles whose areas are proportional to `values`.
///
/// Non-positive and non-finite values get no tile. Tiles come back largest
/// first; equal values keep input order.
pub fn squarify(values: &[f64], bounds: Rect, options: &TreemapOptions) -> Vec<Tile> {
    let container = bounds.inset(options.padding_outer);
    let mut order: Vec<usize> = (0..values.len())
        .filter(|&index| values[index].is_finite() && values[index] > 0.0)
        .collect();
    order.sort_by(|&a, &b| values[b].total_cmp(&values[a]));

    let total: f64 = order.iter().map(|&index| values[index]).sum();
    if container.is_empty() || total <= 0.0 {
        return Vec::new();
    }

    let scale = container.area() / total;
    let mut free = container;
    let mut tiles = Vec::with_capacity(order.len());
    let mut row = Row::default();

    for &index in &order {
        let area = values[index] * scale;
        if !row.items.is_empty() {
            let side = free.width.min(free.height);
            if row.worst_with(area, side) > row.worst(side) {
                row.flush(&mut free, &mut tiles);
            }
        }
        row.push(index, area);
    }
    row.flush(&mut free, &mut tiles);

    let gap = options.padding_inner / 2.0;
    for tile in &mut tiles {
        tile.rect = tile.rect.inset(gap);
    }
    tiles
}

#[derive(Default)]
struct Row {
    items: Vec<(usize, f64)>,
    sum: f64,
    min: f64,
    max: f64,
}

impl Row {
    fn push(&mut self, index: usize, area: f64) {
        if self.items.is_empty() {
            self.min = area;
            self.max = area;
        } else {
            self.min = self.min.min(area);
            self.max = self.max.max(area);
        }
        self.sum += area;
        self.items.push((index, area));
    }

    fn worst(&self, side: f64) -> f64 {
        worst_ratio(self.sum, self.min, self.max, side)
    }

    fn worst_with(&self, area: f64, side: f64) -> f64 {
        worst_ratio(self.sum + area, self.min.min(area), self.max.max(area), side)
    }

    /// Places the row along the shorter side of `free` and shrinks `free`.
    fn flush(&mut self, free: &mut Rect, tiles: &mut Vec<Tile>) {
        if self.items.is_empty() {
            return;
        }
        let last = self.items.len() - 1;

        if free.width >= free.height {
            let strip = if free.height > 0.0 {
                (self.sum / free.height).min(free.width)
            } else {
                0.0
            };
            let mut y = free.y;
            for (position, &(index, area)) in self.items.iter().enumerate() {
                let height = if position == last {
                    free.bottom() - y
                } else if strip > 0.0 {
                    area / strip
                } else {
                    0.0
                };
                tiles.push(Tile {
                    index,
                    rect: Rect::new(free.x, y, strip, height),
                });
                y += height;
            }
            free.x += strip;
            free.width = (free.width - strip).max(0.0);
        } else {
            let strip = if free.width > 0.0 {
                (self.sum / free.width).min(free.height)
            } else {
                0.0
            };
            let mut x = free.x;
            for (position, &(index, area)) in self.items.iter().enumerate() {
                let width = if position == last {
                    free.right() - x
                } else if strip > 0.0 {
                    area / strip
                } else {
                    0.0
                };
                tiles.push(Tile {
                    index,
                    rect: Rect::new(x, free.y, width, strip),
                });
                x += width;
            }
            free.y += strip;
            free.height = (free.height - strip).max(0.0);
        }

        *self = Self::default();
    }
}

fn worst_ratio(sum: f64, min: f64, max: f64, side: f64) -> f64 {
    if sum <= 0.0 || min <= 0.0 || side <= 0.0 {
        return f64::INFINITY;
    }
    let side_sq = side * side;
    let sum_sq = sum * sum;
    f64::max(side_sq * max / sum_sq, sum_sq / (side_sq * min))
}

/// A company tile ready for drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompanyTile {
    /// Index into the company list passed to [`layout_companies`].
    pub index: usize,
    pub rect: Rect,
    pub fill: Rgb,
    pub label: Rgb,
    pub detail: LabelDetail,
}

/// Lays out company data and resolves colours and label detail per tile.
pub fn layout_companies(
    data: &[CompanyDatum],
    bounds: Rect,
    options: &TreemapOptions,
) -> Vec<CompanyTile> {
    let values: Vec<f64> = data.iter().map(|datum| datum.value as f64).collect();

    squarify(&values, bounds, options)
        .into_iter()
        .map(|tile| {
            let datum = &data[tile.index];
            let fill = theme::tile_fill(datum.diagnostic_trials, datum.therapy_trials);
            CompanyTile {
                index: tile.index,
                rect: tile.rect,
                fill,
                label: fill.contrast_text(),
                detail: options.labels.classify(&tile.rect),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{layout_companies, squarify, LabelDetail, LabelThresholds, Rect, Tile, TreemapOptions};
    use crate::color::{BLACK, WHITE};
    use crate::projection::CompanyDatum;
    use crate::theme;

    const EPSILON: f64 = 1e-6;

    fn unpadded() -> TreemapOptions {
        TreemapOptions {
            padding_outer: 0.0,
            padding_inner: 0.0,
            ..TreemapOptions::default()
        }
    }

    fn overlaps(a: &Rect, b: &Rect) -> bool {
        a.x + EPSILON < b.right()
            && b.x + EPSILON < a.right()
            && a.y + EPSILON < b.bottom()
            && b.y + EPSILON < a.bottom()
    }

    fn area_of(tiles: &[Tile], index: usize) -> f64 {
        tiles
            .iter()
            .find(|tile| tile.index == index)
            .map_or(0.0, |tile| tile.rect.area())
    }

    #[test]
    fn areas_are_proportional_to_values() {
        let values = [6.0, 6.0, 4.0, 3.0, 2.0, 2.0, 1.0];
        let bounds = Rect::new(0.0, 0.0, 600.0, 400.0);
        let tiles = squarify(&values, bounds, &unpadded());

        assert_eq!(tiles.len(), values.len());
        let total: f64 = values.iter().sum();
        for (index, value) in values.iter().enumerate() {
            let expected = bounds.area() * value / total;
            assert!((area_of(&tiles, index) - expected).abs() < 1e-6 * bounds.area());
        }
    }

    #[test]
    fn tiles_stay_inside_and_do_not_overlap() {
        let values = [50.0, 31.0, 22.0, 15.0, 9.0, 8.0, 5.0, 3.0, 1.0];
        let bounds = Rect::new(10.0, 20.0, 300.0, 180.0);
        let tiles = squarify(&values, bounds, &TreemapOptions::default());

        for tile in &tiles {
            assert!(tile.rect.x >= bounds.x - EPSILON);
            assert!(tile.rect.y >= bounds.y - EPSILON);
            assert!(tile.rect.right() <= bounds.right() + EPSILON);
            assert!(tile.rect.bottom() <= bounds.bottom() + EPSILON);
        }
        for (position, a) in tiles.iter().enumerate() {
            for b in &tiles[position + 1..] {
                assert!(!overlaps(&a.rect, &b.rect), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn largest_value_is_laid_out_first() {
        let tiles = squarify(&[1.0, 9.0, 3.0], Rect::new(0.0, 0.0, 90.0, 60.0), &unpadded());
        let order: Vec<_> = tiles.iter().map(|tile| tile.index).collect();
        assert_eq!(order, [1, 2, 0]);
    }

    #[test]
    fn single_value_fills_the_padded_container() {
        let options = TreemapOptions {
            padding_outer: 5.0,
            padding_inner: 2.0,
            ..TreemapOptions::default()
        };
        let tiles = squarify(&[42.0], Rect::new(0.0, 0.0, 100.0, 50.0), &options);

        assert_eq!(tiles.len(), 1);
        let rect = tiles[0].rect;
        assert!((rect.x - 6.0).abs() < EPSILON);
        assert!((rect.width - 88.0).abs() < EPSILON);
        assert!((rect.height - 38.0).abs() < EPSILON);
    }

    #[test]
    fn non_positive_values_get_no_tile() {
        let tiles = squarify(&[0.0, -3.0, f64::NAN, 5.0], Rect::new(0.0, 0.0, 10.0, 10.0), &unpadded());
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].index, 3);
    }

    #[test]
    fn empty_container_yields_nothing() {
        assert!(squarify(&[1.0, 2.0], Rect::new(0.0, 0.0, 0.0, 40.0), &unpadded()).is_empty());
        assert!(squarify(&[1.0], Rect::new(0.0, 0.0, 6.0, 6.0), &TreemapOptions::default()).is_empty());
        assert!(squarify(&[], Rect::new(0.0, 0.0, 60.0, 40.0), &unpadded()).is_empty());
    }

    #[test]
    fn squarified_tiles_are_not_slivers() {
        let values = [10.0; 16];
        let tiles = squarify(&values, Rect::new(0.0, 0.0, 400.0, 400.0), &unpadded());
        for tile in &tiles {
            let ratio = tile.rect.width.max(tile.rect.height) / tile.rect.width.min(tile.rect.height);
            assert!(ratio < 2.5, "aspect ratio {ratio} for {tile:?}");
        }
    }

    #[test]
    fn label_detail_steps_down_with_size() {
        let thresholds = LabelThresholds::PIXELS;
        assert_eq!(thresholds.classify(&Rect::new(0.0, 0.0, 200.0, 100.0)), LabelDetail::Full);
        assert_eq!(thresholds.classify(&Rect::new(0.0, 0.0, 100.0, 50.0)), LabelDetail::Compact);
        assert_eq!(thresholds.classify(&Rect::new(0.0, 0.0, 200.0, 20.0)), LabelDetail::ValueOnly);
    }

    fn company(name: &str, value: u64, diagnostic: u64, therapy: u64) -> CompanyDatum {
        CompanyDatum {
            name: name.to_string(),
            value,
            all_trials: value,
            diagnostic_trials: diagnostic,
            therapy_trials: therapy,
            disease_count: 0,
            diseases: Vec::new(),
        }
    }

    #[test]
    fn company_tiles_pick_fill_and_contrasting_label() {
        let data = [company("Imaging Co", 30, 25, 5), company("Therapy Co", 60, 10, 50)];
        let tiles = layout_companies(&data, Rect::new(0.0, 0.0, 800.0, 500.0), &TreemapOptions::default());

        let imaging = tiles.iter().find(|tile| tile.index == 0);
        let therapy = tiles.iter().find(|tile| tile.index == 1);
        assert_eq!(imaging.map(|t| (t.fill, t.label)), Some((theme::DIAGNOSTIC, BLACK)));
        assert_eq!(therapy.map(|t| (t.fill, t.label)), Some((theme::THERAPY, WHITE)));
        assert_eq!(therapy.map(|t| t.detail), Some(LabelDetail::Full));
    }

    #[test]
    fn label_lines_shrink_with_detail() {
        let datum = company("Imaging Co", 30, 25, 5);
        assert_eq!(
            LabelDetail::Full.lines(&datum),
            ["Imaging Co", "30 trials", "Dx 25 | Tx 5", "0 diseases"]
        );
        assert_eq!(LabelDetail::Compact.lines(&datum), ["Imaging Co", "30"]);
        assert_eq!(LabelDetail::ValueOnly.lines(&datum), ["30"]);
    }
}
