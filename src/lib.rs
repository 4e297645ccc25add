//! # Geo Evidence
//!
//! Verify that evidence photos were taken where they claim to be.
//!
//! Field officers upload photos as proof that a training took place or that a
//! beneficiary was visited. This crate reads the GPS position out of each photo's Exif
//! block and checks it against the declared location of the sub-project or ward. A
//! batch is accepted only when every photo carries location data and was captured
//! within the configured radius (4 km unless configured otherwise).
//!
//! ## Key Features
//!
//! - **Exif GPS decoding**: Degrees/minutes/seconds plus hemisphere reference, converted to signed decimal degrees. Works on JPEG, TIFF, PNG, WebP and HEIF, from a path or from bytes.
//! - **Great-circle distance**: Haversine distance with a fixed earth radius of 6,371 km, numerically stable up to antipodal points.
//! - **Fail-fast batch validation**: The first photo without location data, or outside the fence, rejects the batch with a reason that can be shown to the uploader as-is.
//! - **Per-photo reports**: A diagnostic view of every photo in a batch.
//! - **Stored locations**: Reference points parse from WKT / EWKT (`SRID=4326;POINT (lng lat)`) or a `lat,lng` pair.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use geo_evidence::{Coordinate, GeoFence, ImageEvidence};
//!
//! fn main() -> Result<(), geo_evidence::GeoEvidenceError> {
//!     let ward: Coordinate = "SRID=4326;POINT (28.2833 -15.4166)".parse()?;
//!     let fence = GeoFence::builder().reference(ward).build()?;
//!
//!     let images = vec![
//!         ImageEvidence::from_path("uploads/training_1.jpg")?,
//!         ImageEvidence::from_path("uploads/training_2.jpg")?,
//!     ];
//!
//!     let outcome = fence.validate(&images);
//!     println!("{}: {}", outcome.valid, outcome.reason);
//!     Ok(())
//! }
//! ```

mod error;
pub mod features;
pub mod geo_fence;
pub mod structs;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use error::GeoEvidenceError;
pub use features::coordinate::Coordinate;
pub use features::error::CoordinateError;
pub use features::evidence::{GpsSource, ImageEvidence};
pub use geo_fence::{DEFAULT_RANGE_KM, GeoFence, validate};
pub use structs::{ImageReport, ImageStatus, Rejection, ValidationOutcome};
