//! The squaring decision engine.
//!
//! Given a non-square photograph, pick the square sub-region that keeps the
//! most visually important content instead of stretching or naively
//! center-cropping.
//!
//! | Step | Module |
//! |---|---|
//! | **Already square?** | [`squarer`] — returned unchanged |
//! | **Face-guided crop** | [`faces`] — detect on a downscaled proxy, crop around the faces |
//! | **Entropy-guided crop** | [`entropy`] — shave the least-informative edge until square |
//! | **Scale bookkeeping** | [`scale`] — longest-side bounds + proxy↔original factor |
//!
//! The module is split into:
//! - **Calculations**: [`entropy`] and [`scale`] are pure functions over
//!   pixel data and dimensions (unit testable without a detector)
//! - **Adapters**: [`faces`] bridges to the [`FaceDetector`](crate::detect::FaceDetector)
//!   boundary and back into original-image coordinates
//! - **Orchestration**: [`squarer`] wires the strategies together with the
//!   entropy fallback

pub mod entropy;
pub mod faces;
pub mod scale;
pub mod squarer;

pub use entropy::{entropy, entropy_crop};
pub use faces::{FaceCrop, face_crop, locate_faces};
pub use scale::{ScalePlan, plan_scale};
pub use squarer::{SquareConfig, SquareMethod, Squared, square};

use crate::detect::DetectError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SquareError {
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },
    #[error(transparent)]
    Detector(#[from] DetectError),
}
