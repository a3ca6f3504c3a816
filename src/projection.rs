//! Longitude/latitude to overlay pixels: uniform scale plus offset, with the
//! y axis flipped so north is up.

use crate::canvas::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl GeoBounds {
    /// Smallest box containing every `(lon, lat)` pair.
    pub fn of(coords: &[(f64, f64)]) -> Option<Self> {
        let (&(lon, lat), rest) = coords.split_first()?;
        let start = Self {
            min_lon: lon,
            min_lat: lat,
            max_lon: lon,
            max_lat: lat,
        };
        Some(rest.iter().fold(start, |b, &(lon, lat)| Self {
            min_lon: b.min_lon.min(lon),
            min_lat: b.min_lat.min(lat),
            max_lon: b.max_lon.max(lon),
            max_lat: b.max_lat.max(lat),
        }))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Projection {
    pub fn new(scale: f64, offset_x: f64, offset_y: f64) -> Self {
        Self {
            scale,
            offset_x,
            offset_y,
        }
    }

    /// Largest projection that fits `bounds` inside a `width` x `height`
    /// surface with `margin` on every side, centred on both axes.
    pub fn fit(bounds: GeoBounds, width: f32, height: f32, margin: f32) -> Self {
        let avail_w = (width - 2.0 * margin).max(0.0) as f64;
        let avail_h = (height - 2.0 * margin).max(0.0) as f64;
        let span_lon = (bounds.max_lon - bounds.min_lon).max(f64::EPSILON);
        let span_lat = (bounds.max_lat - bounds.min_lat).max(f64::EPSILON);

        let scale = (avail_w / span_lon).min(avail_h / span_lat);
        let pad_x = (avail_w - span_lon * scale) / 2.0;
        let pad_y = (avail_h - span_lat * scale) / 2.0;

        Self {
            scale,
            offset_x: margin as f64 + pad_x - bounds.min_lon * scale,
            offset_y: margin as f64 + pad_y + bounds.max_lat * scale,
        }
    }

    pub fn project(&self, lon: f64, lat: f64) -> Point {
        Point::new(
            (lon * self.scale + self.offset_x) as f32,
            (self.offset_y - lat * self.scale) as f32,
        )
    }

    pub fn project_all(&self, coords: &[(f64, f64)]) -> Vec<Point> {
        coords
            .iter()
            .map(|&(lon, lat)| self.project(lon, lat))
            .collect()
    }
}
