//! Decoding of the EXIF GPS latitude/longitude tags into signed decimal degrees.
//!
//! GPS positions are stored as three rationals (degrees, minutes, seconds) next to a
//! one-letter hemisphere reference. A missing or unusable tag is reported as `None`,
//! never as an error.

use exif::{Exif, In, Tag, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    pub fn from_ref(reference: char) -> Option<Self> {
        match reference.to_ascii_uppercase() {
            'N' => Some(Hemisphere::North),
            'S' => Some(Hemisphere::South),
            'E' => Some(Hemisphere::East),
            'W' => Some(Hemisphere::West),
            _ => None,
        }
    }

    fn is_negative(self) -> bool {
        matches!(self, Hemisphere::South | Hemisphere::West)
    }

    fn is_latitude(self) -> bool {
        matches!(self, Hemisphere::North | Hemisphere::South)
    }
}

/// One GPS component before conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DmsAngle {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
    pub hemisphere: Hemisphere,
}

/// `d + m/60 + s/3600`, negated for the southern and western hemispheres.
pub fn dms_to_decimal(angle: &DmsAngle) -> f64 {
    let dd = angle.degrees + angle.minutes / 60.0 + angle.seconds / 3600.0;
    if angle.hemisphere.is_negative() {
        -dd
    } else {
        dd
    }
}

fn read_reference(exif: &Exif, tag: Tag) -> Option<Hemisphere> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    match &field.value {
        Value::Ascii(strings) => strings
            .first()
            .and_then(|s| s.iter().find(|b| !b.is_ascii_whitespace()))
            .and_then(|b| Hemisphere::from_ref(*b as char)),
        _ => None,
    }
}

fn read_triple(exif: &Exif, tag: Tag) -> Option<[f64; 3]> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    match &field.value {
        Value::Rational(rationals) if rationals.len() >= 3 => {
            let triple = [
                rationals[0].to_f64(),
                rationals[1].to_f64(),
                rationals[2].to_f64(),
            ];
            // A zero denominator decodes to inf/NaN.
            triple.iter().all(|v| v.is_finite()).then_some(triple)
        }
        _ => None,
    }
}

fn read_dms(exif: &Exif, value_tag: Tag, ref_tag: Tag) -> Option<DmsAngle> {
    let [degrees, minutes, seconds] = read_triple(exif, value_tag)?;
    let hemisphere = read_reference(exif, ref_tag)?;
    Some(DmsAngle {
        degrees,
        minutes,
        seconds,
        hemisphere,
    })
}

/// The raw latitude angle. `None` if either tag is missing or the reference is not N/S.
pub fn read_latitude_dms(exif: &Exif) -> Option<DmsAngle> {
    read_dms(exif, Tag::GPSLatitude, Tag::GPSLatitudeRef).filter(|a| a.hemisphere.is_latitude())
}

/// The raw longitude angle. `None` if either tag is missing or the reference is not E/W.
pub fn read_longitude_dms(exif: &Exif) -> Option<DmsAngle> {
    read_dms(exif, Tag::GPSLongitude, Tag::GPSLongitudeRef)
        .filter(|a| !a.hemisphere.is_latitude())
}

pub fn get_latitude(exif: &Exif) -> Option<f64> {
    read_latitude_dms(exif).map(|angle| dms_to_decimal(&angle))
}

pub fn get_longitude(exif: &Exif) -> Option<f64> {
    read_longitude_dms(exif).map(|angle| dms_to_decimal(&angle))
}
