//! Shared test utilities for the thumbwise test suite.
//!
//! Provides synthetic image builders with known entropy characteristics
//! and stub detectors for exercising the squaring engine without a
//! SeetaFace model.

use crate::detect::{DetectError, FaceBox, FaceDetector};
use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use std::sync::Mutex;

// =========================================================================
// Synthetic images
// =========================================================================

/// A flat mid-gray RGB image. Every region has zero entropy.
pub fn solid_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([90, 90, 90])))
}

/// Grayscale image where every row's value equals its y coordinate, so
/// equally tall slices always tie on entropy.
pub fn gradient_rows(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |_, y| Luma([y as u8])))
}

/// Grayscale image where every column's value equals its x coordinate.
pub fn gradient_columns(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x, _| Luma([x as u8])))
}

/// Portrait image with a featureless top half and a textured bottom half.
pub fn two_band_portrait(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x, y| {
        if y < height / 2 {
            Luma([200])
        } else {
            Luma([((x * 7 + y * 13) % 251) as u8])
        }
    }))
}

// =========================================================================
// Stub detectors
// =========================================================================

/// Detector that returns a fixed set of boxes and records the dimensions
/// of the buffer it was shown. Mutex-guarded so it is Sync and works with
/// rayon's par_iter.
pub struct StubDetector {
    faces: Vec<FaceBox>,
    seen: Mutex<Option<(u32, u32)>>,
}

impl StubDetector {
    pub fn new(faces: Vec<FaceBox>) -> Self {
        Self {
            faces,
            seen: Mutex::new(None),
        }
    }

    /// Dimensions of the last buffer passed to `detect`.
    pub fn seen_dimensions(&self) -> Option<(u32, u32)> {
        *self.seen.lock().unwrap()
    }
}

impl FaceDetector for StubDetector {
    fn detect(&self, _gray: &[u8], width: u32, height: u32) -> Result<Vec<FaceBox>, DetectError> {
        *self.seen.lock().unwrap() = Some((width, height));
        Ok(self.faces.clone())
    }
}

/// Detector that always fails, for exercising the entropy fallback.
pub struct FailingDetector;

impl FaceDetector for FailingDetector {
    fn detect(&self, _gray: &[u8], _width: u32, _height: u32) -> Result<Vec<FaceBox>, DetectError> {
        Err(DetectError::Detection("stub detector failure".to_string()))
    }
}
