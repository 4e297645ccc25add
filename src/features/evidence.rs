use crate::GeoEvidenceError;
use crate::features::coordinate::Coordinate;
use crate::features::exif_gps::{get_latitude, get_longitude};
use exif::Exif;
use rayon::prelude::*;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Seek};
use std::path::{Path, PathBuf};

/// Anything that can report where it was captured.
///
/// [`ImageEvidence`] is the production implementation; the trait is the seam the
/// geo-fence validates through.
pub trait GpsSource {
    /// Name used in rejection reasons and reports, usually the file name.
    fn label(&self) -> &str;

    fn has_exif(&self) -> bool;

    fn get_latitude(&self) -> Option<f64>;

    fn get_longitude(&self) -> Option<f64>;

    /// The capture position, if both components decode to an in-bounds coordinate.
    fn coordinate(&self) -> Option<Coordinate> {
        let latitude = self.get_latitude()?;
        let longitude = self.get_longitude()?;
        Coordinate::new(latitude, longitude).ok()
    }

    fn has_location_data(&self) -> bool {
        self.coordinate().is_some()
    }
}

impl<T: GpsSource + ?Sized> GpsSource for &T {
    fn label(&self) -> &str {
        (**self).label()
    }

    fn has_exif(&self) -> bool {
        (**self).has_exif()
    }

    fn get_latitude(&self) -> Option<f64> {
        (**self).get_latitude()
    }

    fn get_longitude(&self) -> Option<f64> {
        (**self).get_longitude()
    }

    fn coordinate(&self) -> Option<Coordinate> {
        (**self).coordinate()
    }

    fn has_location_data(&self) -> bool {
        (**self).has_location_data()
    }
}

/// An uploaded image together with its decoded EXIF block.
pub struct ImageEvidence {
    label: String,
    exif: Option<Exif>,
}

impl fmt::Debug for ImageEvidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageEvidence")
            .field("label", &self.label)
            .field("has_exif", &self.exif.is_some())
            .finish()
    }
}

impl ImageEvidence {
    /// Opens and decodes an image file. The file name becomes the label.
    ///
    /// # Errors
    ///
    /// * [`GeoEvidenceError::Io`] if the file cannot be opened.
    /// * [`GeoEvidenceError::MalformedImage`] if it is not a decodable image container.
    ///
    /// An image that decodes fine but carries no EXIF is not an error.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GeoEvidenceError> {
        let path = path.as_ref();
        let label = path
            .file_name()
            .unwrap_or(path.as_os_str())
            .to_string_lossy()
            .into_owned();
        let file = File::open(path)?;
        Self::from_reader(label, &mut BufReader::new(file))
    }

    /// Opens and decodes a set of image files in parallel, keeping their order.
    ///
    /// Fails on the first file that cannot be read or decoded.
    pub fn load_all(paths: &[PathBuf]) -> Result<Vec<Self>, GeoEvidenceError> {
        paths.par_iter().map(Self::from_path).collect()
    }

    /// Decodes an image that is already in memory, e.g. an upload body.
    pub fn from_bytes(label: impl Into<String>, bytes: &[u8]) -> Result<Self, GeoEvidenceError> {
        Self::from_reader(label.into(), &mut Cursor::new(bytes))
    }

    fn from_reader<R: BufRead + Seek>(
        label: String,
        reader: &mut R,
    ) -> Result<Self, GeoEvidenceError> {
        match exif::Reader::new().read_from_container(reader) {
            Ok(exif) => Ok(Self {
                label,
                exif: Some(exif),
            }),
            Err(exif::Error::NotFound(_)) => Ok(Self { label, exif: None }),
            Err(exif::Error::Io(e)) => Err(GeoEvidenceError::Io(e)),
            Err(source) => Err(GeoEvidenceError::MalformedImage { label, source }),
        }
    }

    pub fn exif(&self) -> Option<&Exif> {
        self.exif.as_ref()
    }
}

impl GpsSource for ImageEvidence {
    fn label(&self) -> &str {
        &self.label
    }

    fn has_exif(&self) -> bool {
        self.exif.is_some()
    }

    fn get_latitude(&self) -> Option<f64> {
        self.exif.as_ref().and_then(get_latitude)
    }

    fn get_longitude(&self) -> Option<f64> {
        self.exif.as_ref().and_then(get_longitude)
    }
}
