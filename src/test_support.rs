//! In-memory EXIF fixtures: little-endian TIFF blobs carrying a GPS IFD, optionally
//! wrapped in a minimal JPEG APP1 segment.

const TYPE_ASCII: u16 = 2;
const TYPE_SHORT: u16 = 3;
const TYPE_LONG: u16 = 4;
const TYPE_RATIONAL: u16 = 5;

const TAG_ORIENTATION: u16 = 0x0112;
const TAG_GPS_IFD_POINTER: u16 = 0x8825;
pub const TAG_GPS_LATITUDE_REF: u16 = 0x0001;
pub const TAG_GPS_LATITUDE: u16 = 0x0002;
pub const TAG_GPS_LONGITUDE_REF: u16 = 0x0003;
pub const TAG_GPS_LONGITUDE: u16 = 0x0004;

#[derive(Debug, Clone)]
pub enum GpsEntry {
    Ascii(u16, &'static str),
    Rationals(u16, [(u32, u32); 3]),
}

impl GpsEntry {
    fn tag(&self) -> u16 {
        match self {
            GpsEntry::Ascii(tag, _) | GpsEntry::Rationals(tag, _) => *tag,
        }
    }
}

/// Degrees, minutes and seconds with a denominator of 1, 1 and 100 respectively.
pub fn dms(degrees: u32, minutes: u32, seconds_hundredths: u32) -> [(u32, u32); 3] {
    [(degrees, 1), (minutes, 1), (seconds_hundredths, 100)]
}

/// GPS entries for a full latitude/longitude pair.
pub fn gps_entries(
    latitude: [(u32, u32); 3],
    latitude_ref: &'static str,
    longitude: [(u32, u32); 3],
    longitude_ref: &'static str,
) -> Vec<GpsEntry> {
    vec![
        GpsEntry::Ascii(TAG_GPS_LATITUDE_REF, latitude_ref),
        GpsEntry::Rationals(TAG_GPS_LATITUDE, latitude),
        GpsEntry::Ascii(TAG_GPS_LONGITUDE_REF, longitude_ref),
        GpsEntry::Rationals(TAG_GPS_LONGITUDE, longitude),
    ]
}

struct RawEntry {
    tag: u16,
    kind: u16,
    count: u32,
    data: Vec<u8>,
}

fn raw(entry: &GpsEntry) -> RawEntry {
    match entry {
        GpsEntry::Ascii(tag, text) => {
            let mut data = text.as_bytes().to_vec();
            data.push(0);
            RawEntry {
                tag: *tag,
                kind: TYPE_ASCII,
                count: data.len() as u32,
                data,
            }
        }
        GpsEntry::Rationals(tag, values) => {
            let mut data = Vec::with_capacity(24);
            for (num, denom) in values {
                data.extend_from_slice(&num.to_le_bytes());
                data.extend_from_slice(&denom.to_le_bytes());
            }
            RawEntry {
                tag: *tag,
                kind: TYPE_RATIONAL,
                count: 3,
                data,
            }
        }
    }
}

fn write_ifd(out: &mut Vec<u8>, overflow: &mut Vec<u8>, overflow_base: u32, entries: &[RawEntry]) {
    out.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    for entry in entries {
        out.extend_from_slice(&entry.tag.to_le_bytes());
        out.extend_from_slice(&entry.kind.to_le_bytes());
        out.extend_from_slice(&entry.count.to_le_bytes());
        if entry.data.len() <= 4 {
            let mut inline = [0u8; 4];
            inline[..entry.data.len()].copy_from_slice(&entry.data);
            out.extend_from_slice(&inline);
        } else {
            let offset = overflow_base + overflow.len() as u32;
            out.extend_from_slice(&offset.to_le_bytes());
            overflow.extend_from_slice(&entry.data);
        }
    }
    // No next IFD.
    out.extend_from_slice(&0u32.to_le_bytes());
}

fn ifd_size(entries: usize) -> u32 {
    2 + 12 * entries as u32 + 4
}

/// Builds a TIFF blob. IFD0 always holds an orientation tag; a GPS IFD is linked in
/// when `gps` is non-empty.
pub fn tiff(gps: &[GpsEntry]) -> Vec<u8> {
    let mut gps_sorted = gps.to_vec();
    gps_sorted.sort_by_key(GpsEntry::tag);
    let gps_raw: Vec<RawEntry> = gps_sorted.iter().map(raw).collect();

    let ifd0_offset = 8u32;
    let ifd0_entries = if gps_raw.is_empty() { 1 } else { 2 };
    let gps_offset = ifd0_offset + ifd_size(ifd0_entries);
    let overflow_base = gps_offset + ifd_size(gps_raw.len());

    let mut ifd0 = vec![RawEntry {
        tag: TAG_ORIENTATION,
        kind: TYPE_SHORT,
        count: 1,
        data: 1u16.to_le_bytes().to_vec(),
    }];
    if !gps_raw.is_empty() {
        ifd0.push(RawEntry {
            tag: TAG_GPS_IFD_POINTER,
            kind: TYPE_LONG,
            count: 1,
            data: gps_offset.to_le_bytes().to_vec(),
        });
    }

    let mut out = Vec::new();
    out.extend_from_slice(b"II");
    out.extend_from_slice(&42u16.to_le_bytes());
    out.extend_from_slice(&ifd0_offset.to_le_bytes());

    let mut overflow = Vec::new();
    write_ifd(&mut out, &mut overflow, overflow_base, &ifd0);
    if !gps_raw.is_empty() {
        write_ifd(&mut out, &mut overflow, overflow_base, &gps_raw);
    }
    out.extend_from_slice(&overflow);
    out
}

/// Wraps a TIFF blob into `SOI, APP1("Exif\0\0" + tiff), EOI`.
pub fn jpeg(tiff: &[u8]) -> Vec<u8> {
    let mut out = vec![0xFF, 0xD8, 0xFF, 0xE1];
    let length = (2 + 6 + tiff.len()) as u16;
    out.extend_from_slice(&length.to_be_bytes());
    out.extend_from_slice(b"Exif\0\0");
    out.extend_from_slice(tiff);
    out.extend_from_slice(&[0xFF, 0xD9]);
    out
}

/// A JPEG without any APP1 segment.
pub fn jpeg_without_exif() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xD9]
}
