//! Squaring orchestration.
//!
//! `square` is the single externally visible operation of the engine:
//! already-square images pass through untouched, otherwise the face
//! cropper gets the first attempt and the entropy cropper handles
//! everything else — including detector failures, which degrade to the
//! entropy strategy instead of failing the image.

use super::entropy::entropy_crop;
use super::faces::{face_crop, locate_faces, FaceCrop};
use super::SquareError;
use crate::detect::FaceDetector;
use image::{DynamicImage, GenericImageView};

/// Tunables for the squaring engine.
///
/// Both values come straight from the behavior this tool models:
/// detection runs on a proxy bounded to 600 px, and five or more
/// detections are treated as noise rather than a group portrait.
#[derive(Debug, Clone, Copy)]
pub struct SquareConfig {
    /// Longest side of the proxy image handed to the face detector.
    pub detect_bound: u32,
    /// Detection count at which the face cropper abstains.
    pub max_faces: usize,
}

impl Default for SquareConfig {
    fn default() -> Self {
        Self {
            detect_bound: 600,
            max_faces: 5,
        }
    }
}

/// Which strategy produced a squared image.
#[derive(Debug)]
pub enum SquareMethod {
    /// Input was already square; returned unchanged.
    AlreadySquare,
    /// Face-guided crop, with the number of faces it centered on.
    Faces(usize),
    /// Entropy-guided crop (no detector, or the face cropper abstained).
    Entropy,
    /// Entropy-guided crop forced by a detector failure.
    DetectorFallback(SquareError),
}

/// A squared image plus the strategy that produced it.
#[derive(Debug)]
pub struct Squared {
    pub image: DynamicImage,
    pub method: SquareMethod,
}

/// Square an image.
///
/// Total for any decoded image: the result is always square, never larger
/// than `min(width, height)` per side. Pass `None` for the detector to
/// skip face guidance entirely.
pub fn square(
    img: &DynamicImage,
    detector: Option<&dyn FaceDetector>,
    config: &SquareConfig,
) -> Squared {
    let (width, height) = img.dimensions();
    if width == height {
        return Squared {
            image: img.clone(),
            method: SquareMethod::AlreadySquare,
        };
    }

    if let Some(detector) = detector {
        match locate_faces(detector, img, config.detect_bound) {
            Ok(faces) => match face_crop(img, &faces, config.max_faces) {
                FaceCrop::Cropped(image) => {
                    return Squared {
                        image,
                        method: SquareMethod::Faces(faces.len()),
                    };
                }
                FaceCrop::Abstained => {}
            },
            Err(err) => {
                return Squared {
                    image: entropy_crop(img),
                    method: SquareMethod::DetectorFallback(err),
                };
            }
        }
    }

    Squared {
        image: entropy_crop(img),
        method: SquareMethod::Entropy,
    }
}
