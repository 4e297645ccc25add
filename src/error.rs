use thiserror::Error;

/// The primary error type for the geo-evidence crate.
///
/// Missing location data and out-of-range images are not errors; they are reported
/// through [`crate::ValidationOutcome`]. Errors here are contract violations: images
/// that cannot be decoded at all, or a geo-fence configured with invalid numbers.
#[derive(Error, Debug)]
pub enum GeoEvidenceError {
    #[error("Image '{label}' could not be decoded")]
    MalformedImage {
        label: String,
        #[source]
        source: exif::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Range must be a finite, non-negative number of kilometers, got {0}")]
    InvalidRange(f64),

    #[error("Invalid reference coordinate: {0}")]
    Coordinate(#[from] crate::features::error::CoordinateError),

    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),
}
