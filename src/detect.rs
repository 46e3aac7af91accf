//! Face detection boundary.
//!
//! The squaring core never talks to a detection engine directly; it goes
//! through the [`FaceDetector`] trait. The production implementation is
//! [`RustfaceDetector`] — the SeetaFace engine via the `rustface` crate,
//! pure Rust, no OpenCV or other system dependencies.
//!
//! Detection failure and "no faces found" are different outcomes: an empty
//! box list is a legitimate result, while a [`DetectError`] propagates so
//! callers can apply their fallback policy.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetectError {
    #[error("failed to load face detection model {path}: {message}")]
    ModelLoad { path: PathBuf, message: String },
    #[error("face detection failed: {0}")]
    Detection(String),
}

/// Axis-aligned bounding box of a detected face, in the coordinate space
/// of whatever image was handed to the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Pluggable face detection backend.
///
/// Boxes are returned in the coordinate space of the image passed in.
/// Overlapping or duplicate boxes are acceptable — downstream consumers
/// only take min/max extents.
pub trait FaceDetector: Send + Sync {
    /// Detect faces in a row-major grayscale buffer of `width` × `height` bytes.
    fn detect(&self, gray: &[u8], width: u32, height: u32) -> Result<Vec<FaceBox>, DetectError>;
}

/// Face detector backed by the `rustface` crate (SeetaFace engine).
///
/// The model file is supplied by the caller — there is no bundled or
/// hard-coded model path. The parsed model is cloned into a fresh engine
/// per detection call, which keeps this type `Sync` and shareable across
/// a rayon worker pool.
pub struct RustfaceDetector {
    model: rustface::Model,
}

impl RustfaceDetector {
    /// Load a SeetaFace model (e.g. `seeta_fd_frontal_v1.0.bin`) from disk.
    pub fn from_file(path: &Path) -> Result<Self, DetectError> {
        let data = std::fs::read(path).map_err(|e| DetectError::ModelLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_bytes(&data).map_err(|e| match e {
            DetectError::ModelLoad { message, .. } => DetectError::ModelLoad {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })
    }

    /// Parse a SeetaFace model from an in-memory buffer.
    pub fn from_bytes(data: &[u8]) -> Result<Self, DetectError> {
        let model =
            rustface::read_model(std::io::Cursor::new(data)).map_err(|e| DetectError::ModelLoad {
                path: PathBuf::from("<bytes>"),
                message: e.to_string(),
            })?;
        Ok(Self { model })
    }
}

impl FaceDetector for RustfaceDetector {
    fn detect(&self, gray: &[u8], width: u32, height: u32) -> Result<Vec<FaceBox>, DetectError> {
        let mut detector = rustface::create_detector_with_model(self.model.clone());
        detector.set_min_face_size(20);
        detector.set_score_thresh(2.0);
        detector.set_pyramid_scale_factor(0.8);
        detector.set_slide_window_step(4, 4);

        let faces = detector.detect(&rustface::ImageData::new(gray, width, height));

        Ok(faces
            .iter()
            .map(|face| {
                let bbox = face.bbox();
                FaceBox {
                    x: bbox.x().max(0) as u32,
                    y: bbox.y().max(0) as u32,
                    width: bbox.width(),
                    height: bbox.height(),
                }
            })
            .collect())
    }
}
