use crate::features::coordinate::Coordinate;
use crate::features::distance::round_distance;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decimals shown for distances in rejection reasons.
pub const DISPLAY_DECIMALS: u32 = 2;

/// Reason string of a batch that passed.
pub const VALID_REASON: &str = "valid";

/// The verdict for one batch of evidence images.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    pub valid: bool,
    /// Human readable explanation, suitable to show to the uploader as-is.
    pub reason: String,
    /// The first image that failed, and why. `None` when the batch is valid.
    pub rejection: Option<Rejection>,
}

impl ValidationOutcome {
    pub fn accepted() -> Self {
        Self {
            valid: true,
            reason: VALID_REASON.to_string(),
            rejection: None,
        }
    }

    pub fn rejected(rejection: Rejection) -> Self {
        Self {
            valid: false,
            reason: rejection.to_string(),
            rejection: Some(rejection),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Rejection {
    /// The image has no decodable GPS latitude/longitude.
    MissingLocationData { index: usize, label: String },
    /// The image was captured further away from the reference than allowed.
    OutOfRange {
        index: usize,
        label: String,
        /// Full-precision distance between the image and the reference.
        distance_km: f64,
        range_km: f64,
    },
}

impl Rejection {
    pub fn index(&self) -> usize {
        match self {
            Rejection::MissingLocationData { index, .. } | Rejection::OutOfRange { index, .. } => {
                *index
            }
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Rejection::MissingLocationData { label, .. } | Rejection::OutOfRange { label, .. } => {
                label
            }
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::MissingLocationData { .. } => {
                write!(f, "uploaded images have no location data")
            }
            Rejection::OutOfRange {
                distance_km,
                range_km,
                ..
            } => write!(
                f,
                "uploaded images are not within range of {range_km} KM, distance {} KM exceeds {range_km} KM",
                round_distance(*distance_km, DISPLAY_DECIMALS)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageStatus {
    WithinRange,
    OutOfRange,
    MissingLocationData,
}

/// Diagnostic view of a single image, produced by [`crate::GeoFence::inspect`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageReport {
    pub index: usize,
    pub label: String,
    pub has_exif: bool,
    pub coordinate: Option<Coordinate>,
    pub distance_km: Option<f64>,
    pub status: ImageStatus,
}
