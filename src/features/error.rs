use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    #[error("Coordinate out of bounds: latitude {latitude}, longitude {longitude}")]
    OutOfBounds { latitude: f64, longitude: f64 },

    #[error("Could not parse a point from: {0}")]
    InvalidPoint(String),
}
