use crate::domain::weather::Coordinate;

pub const MAP_EMBED_URL: &str = "https://www.openstreetmap.org/export/embed.html";
pub const MAP_LAYER: &str = "mapnik";

const PAD_DEGREES: f64 = 1.0;

/// Bounding box requested from the map provider, padded a fixed degree around
/// the city in both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewport {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl MapViewport {
    pub fn around(coord: Coordinate) -> Self {
        Self {
            min_lon: coord.longitude - PAD_DEGREES,
            min_lat: coord.latitude - PAD_DEGREES,
            max_lon: coord.longitude + PAD_DEGREES,
            max_lat: coord.latitude + PAD_DEGREES,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn bbox_param(&self) -> String {
        format!(
            "{}%2C{}%2C{}%2C{}",
            self.min_lon, self.min_lat, self.max_lon, self.max_lat
        )
    }

    pub fn embed_url(&self) -> String {
        format!(
            "{MAP_EMBED_URL}?bbox={}&layer={MAP_LAYER}",
            self.bbox_param()
        )
    }
}
