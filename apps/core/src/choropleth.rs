//! World geometry parsing and rasterisation for the access choropleth.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::color::Rgb;
use crate::datasets::access::{self, ACCESS_TABLE};
use crate::error::DataError;
use crate::schema::Lenient;

/// Axis-aligned bounds in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BBox {
    const EMPTY: Self = Self {
        min_lon: f64::INFINITY,
        min_lat: f64::INFINITY,
        max_lon: f64::NEG_INFINITY,
        max_lat: f64::NEG_INFINITY,
    };

    fn extend(&mut self, (lon, lat): (f64, f64)) {
        self.min_lon = self.min_lon.min(lon);
        self.min_lat = self.min_lat.min(lat);
        self.max_lon = self.max_lon.max(lon);
        self.max_lat = self.max_lat.max(lat);
    }

    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        lon >= self.min_lon && lon <= self.max_lon && lat >= self.min_lat && lat <= self.max_lat
    }
}

/// One polygon: the first ring is the outline, any further rings are holes.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub rings: Vec<Vec<(f64, f64)>>,
}

impl Polygon {
    /// Even-odd test over all rings, so holes are excluded.
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        self.rings
            .iter()
            .filter(|ring| ring_crosses(ring, lon, lat))
            .count()
            % 2
            == 1
    }
}

fn ring_crosses(ring: &[(f64, f64)], lon: f64, lat: f64) -> bool {
    let mut inside = false;
    let mut previous = match ring.last() {
        Some(&point) => point,
        None => return false,
    };
    for &(x, y) in ring {
        let (px, py) = previous;
        if (y > lat) != (py > lat) {
            let crossing = (px - x) * (lat - y) / (py - y) + x;
            if lon < crossing {
                inside = !inside;
            }
        }
        previous = (x, y);
    }
    inside
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountryShape {
    pub name: String,
    pub polygons: Vec<Polygon>,
    pub bbox: BBox,
}

impl CountryShape {
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        self.bbox.contains(lon, lat) && self.polygons.iter().any(|polygon| polygon.contains(lon, lat))
    }

    /// Map opacity from the access table.
    pub fn opacity(&self) -> f64 {
        access::opacity_for(&self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorldGeometry {
    pub countries: Vec<CountryShape>,
}

#[derive(Deserialize)]
struct RawCollection {
    #[serde(default)]
    features: Lenient<Vec<Lenient<RawFeature>>>,
}

#[derive(Deserialize)]
struct RawFeature {
    #[serde(default)]
    properties: Lenient<serde_json::Map<String, Value>>,
    #[serde(default)]
    geometry: Lenient<RawGeometry>,
}

#[derive(Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: Value,
}

const NAME_KEYS: [&str; 4] = ["name", "NAME", "ADMIN", "name_long"];

impl WorldGeometry {
    /// Parses a GeoJSON `FeatureCollection` of `Polygon`/`MultiPolygon` countries.
    ///
    /// Features without a name or usable polygons are skipped.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DataError> {
        let json: Value = serde_json::from_slice(bytes)?;
        if !json.is_object() {
            return Err(DataError::NotAnObject);
        }
        let raw: RawCollection = serde_json::from_value(json)?;

        let countries: Vec<CountryShape> = raw
            .features
            .into_option()
            .unwrap_or_default()
            .into_iter()
            .filter_map(Lenient::into_option)
            .filter_map(country_from_feature)
            .collect();

        if countries.is_empty() {
            return Err(DataError::EmptyGeometry);
        }
        debug!(countries = countries.len(), "parsed world geometry");
        Ok(Self { countries })
    }

    pub fn country_index(&self, name: &str) -> Option<usize> {
        self.countries
            .iter()
            .position(|country| {
                country.name.eq_ignore_ascii_case(name)
                    || access::find(name).is_some_and(|entry| entry.matches(&country.name))
            })
    }

    /// Access table rows that no geometry feature resolved to.
    pub fn unmatched_access_entries(&self) -> Vec<&'static str> {
        ACCESS_TABLE
            .iter()
            .filter(|entry| !self.countries.iter().any(|country| entry.matches(&country.name)))
            .map(|entry| entry.country)
            .collect()
    }
}

fn country_from_feature(feature: RawFeature) -> Option<CountryShape> {
    let properties = feature.properties.into_option()?;
    let name = NAME_KEYS
        .iter()
        .find_map(|key| properties.get(*key).and_then(Value::as_str))?
        .to_string();
    let geometry = feature.geometry.into_option()?;

    let polygons: Vec<Polygon> = match geometry.kind.as_str() {
        "Polygon" => polygon_from_value(&geometry.coordinates).into_iter().collect(),
        "MultiPolygon" => geometry
            .coordinates
            .as_array()?
            .iter()
            .filter_map(polygon_from_value)
            .collect(),
        _ => return None,
    };
    if polygons.is_empty() {
        return None;
    }

    let mut bbox = BBox::EMPTY;
    for point in polygons.iter().flat_map(|polygon| polygon.rings.iter().flatten()) {
        bbox.extend(*point);
    }

    Some(CountryShape {
        name,
        polygons,
        bbox,
    })
}

fn polygon_from_value(value: &Value) -> Option<Polygon> {
    let rings: Vec<Vec<(f64, f64)>> = value
        .as_array()?
        .iter()
        .filter_map(|ring| {
            let points: Vec<(f64, f64)> = ring
                .as_array()?
                .iter()
                .filter_map(|position| {
                    let position = position.as_array()?;
                    Some((position.first()?.as_f64()?, position.get(1)?.as_f64()?))
                })
                .collect();
            (points.len() >= 3).then_some(points)
        })
        .collect();
    (!rings.is_empty()).then_some(Polygon { rings })
}

/// Equirectangular window onto the globe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl Default for Viewport {
    /// The inhabited world, without Antarctica.
    fn default() -> Self {
        Self {
            min_lon: -180.0,
            max_lon: 180.0,
            min_lat: -58.0,
            max_lat: 84.0,
        }
    }
}

/// Country index per cell, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pub width: usize,
    pub height: usize,
    cells: Vec<Option<usize>>,
}

impl Raster {
    pub fn get(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[y * self.width + x]
    }
}

/// Samples the centre of each cell of a `width` x `height` grid.
pub fn rasterize(geometry: &WorldGeometry, viewport: &Viewport, width: usize, height: usize) -> Raster {
    let mut cells = vec![None; width * height];
    let lon_span = viewport.max_lon - viewport.min_lon;
    let lat_span = viewport.max_lat - viewport.min_lat;

    for y in 0..height {
        let lat = ((y as f64 + 0.5) / height as f64).mul_add(-lat_span, viewport.max_lat);
        let candidates: Vec<usize> = geometry
            .countries
            .iter()
            .enumerate()
            .filter(|(_, country)| lat >= country.bbox.min_lat && lat <= country.bbox.max_lat)
            .map(|(index, _)| index)
            .collect();
        if candidates.is_empty() {
            continue;
        }

        for x in 0..width {
            let lon = ((x as f64 + 0.5) / width as f64).mul_add(lon_span, viewport.min_lon);
            cells[y * width + x] = candidates
                .iter()
                .copied()
                .find(|&index| geometry.countries[index].contains(lon, lat));
        }
    }

    Raster {
        width,
        height,
        cells,
    }
}

/// Fill of a country drawn at its access opacity over `background`.
pub fn shade(base: Rgb, background: Rgb, opacity: f64) -> Rgb {
    base.over(background, opacity)
}
