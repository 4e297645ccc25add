use crate::GeoEvidenceError;
use crate::features::coordinate::Coordinate;
use crate::features::distance::is_within_range;
use crate::features::error::CoordinateError;
use crate::features::evidence::GpsSource;
use crate::structs::{ImageReport, ImageStatus, Rejection, ValidationOutcome};
use bon::bon;
use tracing::{debug, info};

/// Radius applied when none is configured, in kilometers.
pub const DEFAULT_RANGE_KM: f64 = 4.0;

/// A circular fence around a reference location.
///
/// The fence is immutable once built, so one instance can validate any number of
/// batches, from any number of threads.
///
/// ```rust
/// # use geo_evidence::{Coordinate, GeoFence, GeoEvidenceError};
/// # fn main() -> Result<(), GeoEvidenceError> {
/// let ward: Coordinate = "SRID=4326;POINT (28.2833 -15.4166)".parse()?;
/// let fence = GeoFence::builder()
///     .reference(ward)
///     .range_km(2.5) // Optional, defaults to 4 km
///     .build()?;
/// assert_eq!(fence.range_km(), 2.5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoFence {
    reference: Coordinate,
    range_km: f64,
}

#[bon]
impl GeoFence {
    /// Constructs a `GeoFence` via a builder pattern.
    ///
    /// # Builder Arguments
    ///
    /// * `reference: Coordinate` - The declared location of the sub-project or ward.
    /// * `range_km: f64` - (Default: `4.0`) Maximum distance between an image and the
    ///   reference, inclusive.
    ///
    /// # Errors
    ///
    /// * [`GeoEvidenceError::InvalidRange`] if `range_km` is negative, NaN or infinite.
    /// * [`GeoEvidenceError::Coordinate`] if `reference` is out of bounds. Coordinates
    ///   built with [`Coordinate::new`] or parsed from text are always in bounds; this
    ///   guards struct-literal construction.
    #[builder]
    pub fn new(
        reference: Coordinate,
        #[builder(default = DEFAULT_RANGE_KM)] range_km: f64,
    ) -> Result<Self, GeoEvidenceError> {
        if !range_km.is_finite() || range_km < 0.0 {
            return Err(GeoEvidenceError::InvalidRange(range_km));
        }
        if !reference.is_valid() {
            return Err(CoordinateError::OutOfBounds {
                latitude: reference.latitude,
                longitude: reference.longitude,
            }
            .into());
        }
        Ok(Self {
            reference,
            range_km,
        })
    }

    pub fn reference(&self) -> Coordinate {
        self.reference
    }

    pub fn range_km(&self) -> f64 {
        self.range_km
    }

    /// Validates a batch of images against the fence.
    ///
    /// Images are checked in order and the first failure decides the outcome: an image
    /// without location data, or one captured outside the fence, rejects the whole
    /// batch and the remaining images are not looked at. When every image passes the
    /// outcome is valid with reason `"valid"`.
    pub fn validate<S: GpsSource>(&self, images: &[S]) -> ValidationOutcome {
        for (index, image) in images.iter().enumerate() {
            let Some(position) = image.coordinate() else {
                info!(
                    index,
                    label = image.label(),
                    has_exif = image.has_exif(),
                    "rejecting batch, image has no location data"
                );
                return ValidationOutcome::rejected(Rejection::MissingLocationData {
                    index,
                    label: image.label().to_string(),
                });
            };

            let (within, distance_km) = is_within_range(&self.reference, &position, self.range_km);
            debug!(index, label = image.label(), distance_km, within, "checked image location");

            if !within {
                info!(
                    index,
                    label = image.label(),
                    distance_km,
                    range_km = self.range_km,
                    "rejecting batch, image is outside the fence"
                );
                return ValidationOutcome::rejected(Rejection::OutOfRange {
                    index,
                    label: image.label().to_string(),
                    distance_km,
                    range_km: self.range_km,
                });
            }
        }

        debug!(images = images.len(), "all images within the fence");
        ValidationOutcome::accepted()
    }

    /// Evaluates every image independently and reports on each of them.
    ///
    /// Unlike [`GeoFence::validate`] this never stops early; it is meant for showing
    /// an operator which photos of an upload are usable. Reports come back in input order.
    pub fn inspect<S: GpsSource>(&self, images: &[S]) -> Vec<ImageReport> {
        images
            .iter()
            .enumerate()
            .map(|(index, image)| self.report(index, image))
            .collect()
    }

    fn report<S: GpsSource>(&self, index: usize, image: &S) -> ImageReport {
        let coordinate = image.coordinate();
        let (status, distance_km) = match coordinate {
            Some(position) => {
                let (within, distance_km) =
                    is_within_range(&self.reference, &position, self.range_km);
                let status = if within {
                    ImageStatus::WithinRange
                } else {
                    ImageStatus::OutOfRange
                };
                (status, Some(distance_km))
            }
            None => (ImageStatus::MissingLocationData, None),
        };
        ImageReport {
            index,
            label: image.label().to_string(),
            has_exif: image.has_exif(),
            coordinate,
            distance_km,
            status,
        }
    }
}

/// One-shot validation of `images` against `reference` with a radius of `range_km`.
///
/// # Errors
///
/// Only for an invalid configuration, see [`GeoFence::builder`]. A rejected batch is
/// an `Ok` outcome with `valid == false`.
pub fn validate<S: GpsSource>(
    images: &[S],
    reference: Coordinate,
    range_km: f64,
) -> Result<ValidationOutcome, GeoEvidenceError> {
    let fence = GeoFence::builder()
        .reference(reference)
        .range_km(range_km)
        .build()?;
    Ok(fence.validate(images))
}
