//! EXIF-driven reorientation.
//!
//! Cameras record portrait shots as landscape pixels plus an Orientation
//! tag; squaring a sideways image would slice the wrong edges. Images are
//! rotated/flipped upright before any other processing. Files without
//! readable EXIF (PNGs, stripped JPEGs, corrupt segments) are left as-is —
//! a missing tag is normal, not an error.

use exif::{In, Reader as ExifReader, Tag};
use image::DynamicImage;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// The eight EXIF orientation values.
///
/// Names describe the transform that makes the image upright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExifOrientation {
    Normal,
    FlipHorizontal,
    Rotate180,
    FlipVertical,
    Rotate90FlipHorizontal,
    Rotate90,
    Rotate270FlipHorizontal,
    Rotate270,
}

impl ExifOrientation {
    /// Map an EXIF Orientation tag value (1–8) to its transform.
    pub fn from_exif_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Normal),
            2 => Some(Self::FlipHorizontal),
            3 => Some(Self::Rotate180),
            4 => Some(Self::FlipVertical),
            5 => Some(Self::Rotate90FlipHorizontal),
            6 => Some(Self::Rotate90),
            7 => Some(Self::Rotate270FlipHorizontal),
            8 => Some(Self::Rotate270),
            _ => None,
        }
    }

    /// Apply the upright transform. `Normal` is a no-op.
    pub fn apply(self, img: DynamicImage) -> DynamicImage {
        match self {
            Self::Normal => img,
            Self::FlipHorizontal => img.fliph(),
            Self::Rotate180 => img.rotate180(),
            Self::FlipVertical => img.flipv(),
            Self::Rotate90FlipHorizontal => img.rotate90().fliph(),
            Self::Rotate90 => img.rotate90(),
            Self::Rotate270FlipHorizontal => img.rotate270().fliph(),
            Self::Rotate270 => img.rotate270(),
        }
    }
}

/// Read the EXIF orientation of an image file.
///
/// Any failure along the way (unreadable file, no EXIF container, no
/// Orientation tag, out-of-range value) yields `Normal`.
pub fn read_orientation(path: &Path) -> ExifOrientation {
    orientation_value(path)
        .and_then(ExifOrientation::from_exif_value)
        .unwrap_or(ExifOrientation::Normal)
}

fn orientation_value(path: &Path) -> Option<u8> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    let exif = ExifReader::new().read_from_container(&mut reader).ok()?;

    exif.get_field(Tag::Orientation, In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .and_then(|value| u8::try_from(value).ok())
        .filter(|value| (1..=8).contains(value))
}

/// Rotate a decoded image upright according to its file's EXIF data.
pub fn reorient(img: DynamicImage, path: &Path) -> DynamicImage {
    read_orientation(path).apply(img)
}
