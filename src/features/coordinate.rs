use crate::features::error::CoordinateError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

static RE_WKT_POINT: OnceLock<Regex> = OnceLock::new();
static RE_LAT_LNG_PAIR: OnceLock<Regex> = OnceLock::new();

/// Spatial reference id of WGS 84, the only datum stored location fields use.
pub const WGS84_SRID: u32 = 4326;

/// A position on earth in signed decimal degrees (negative is south / west).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate, rejecting latitudes outside [-90, 90] and longitudes
    /// outside [-180, 180]. NaN is rejected as well.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        let coordinate = Self {
            latitude,
            longitude,
        };
        if coordinate.is_valid() {
            Ok(coordinate)
        } else {
            Err(CoordinateError::OutOfBounds {
                latitude,
                longitude,
            })
        }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

fn parse_component(raw: &str, input: &str) -> Result<f64, CoordinateError> {
    raw.parse::<f64>()
        .map_err(|_| CoordinateError::InvalidPoint(input.to_string()))
}

/// Parses the textual forms a stored location arrives in:
///
/// * WKT `POINT(lng lat)` / `POINT (lng lat)` (note the x-then-y order),
/// * EWKT `SRID=4326;POINT (lng lat)`,
/// * a plain `lat,lng` pair.
impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wkt = RE_WKT_POINT.get_or_init(|| {
            Regex::new(r"(?i)^\s*(?:SRID=(\d+)\s*;)?\s*POINT\s*\(\s*(\S+)\s+(\S+)\s*\)\s*$")
                .unwrap()
        });
        if let Some(caps) = wkt.captures(s) {
            if let Some(srid) = caps.get(1) {
                let srid = srid
                    .as_str()
                    .parse::<u32>()
                    .map_err(|_| CoordinateError::InvalidPoint(s.to_string()))?;
                if srid != WGS84_SRID {
                    return Err(CoordinateError::InvalidPoint(s.to_string()));
                }
            }
            let longitude = parse_component(&caps[2], s)?;
            let latitude = parse_component(&caps[3], s)?;
            return Coordinate::new(latitude, longitude);
        }

        let pair = RE_LAT_LNG_PAIR
            .get_or_init(|| Regex::new(r"^\s*([^,\s]+)\s*,\s*([^,\s]+)\s*$").unwrap());
        if let Some(caps) = pair.captures(s) {
            let latitude = parse_component(&caps[1], s)?;
            let longitude = parse_component(&caps[2], s)?;
            return Coordinate::new(latitude, longitude);
        }

        Err(CoordinateError::InvalidPoint(s.to_string()))
    }
}
