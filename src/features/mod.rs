pub mod coordinate;
pub mod distance;
pub mod error;
pub mod evidence;
pub mod exif_gps;
