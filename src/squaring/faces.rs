//! Face-guided square cropping.
//!
//! Detection runs on a downscaled grayscale proxy of the image (small
//! inputs detect dramatically faster) and the returned boxes are mapped
//! back to original coordinates through the proxy's [`ScalePlan`] factor.
//! The cropper then centers the maximal square on the enclosing box of
//! all faces, clamped so the crop never leaves the image.

use super::scale::plan_scale;
use super::SquareError;
use crate::detect::{FaceBox, FaceDetector};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

/// Locate faces in `img`, in **original-image** coordinates.
///
/// The detector sees a proxy whose longest side is at most `bound`
/// pixels; both axes of every returned box are scaled back by the same
/// factor, so non-uniform proxies are not supported. An empty result is a
/// valid, common outcome — only detector failure is an error.
pub fn locate_faces(
    detector: &dyn FaceDetector,
    img: &DynamicImage,
    bound: u32,
) -> Result<Vec<FaceBox>, SquareError> {
    let (width, height) = img.dimensions();
    let plan = plan_scale(width, height, bound)?;

    let proxy = if plan.scales() {
        img.resize_exact(plan.target_width, plan.target_height, FilterType::Lanczos3)
            .to_luma8()
    } else {
        img.to_luma8()
    };

    let found = detector.detect(proxy.as_raw(), proxy.width(), proxy.height())?;

    Ok(found
        .into_iter()
        .map(|face| FaceBox {
            x: (face.x as f64 * plan.factor) as u32,
            y: (face.y as f64 * plan.factor) as u32,
            width: (face.width as f64 * plan.factor) as u32,
            height: (face.height as f64 * plan.factor) as u32,
        })
        .collect())
}

/// Outcome of a face-guided crop attempt.
///
/// `Abstained` is a deliberate signal, not an error: it tells the
/// orchestrator to fall back to the entropy cropper.
#[derive(Debug)]
pub enum FaceCrop {
    Cropped(DynamicImage),
    Abstained,
}

/// Crop the maximal square centered on the detected faces.
///
/// Abstains when there are no faces, or when `max_faces` or more were
/// detected — a pile of detections in a cluttered scene is more likely
/// noise than a genuine group portrait. Otherwise the crop side is
/// `min(width, height)`, centered as close to the face cluster's center
/// as the image bounds allow.
pub fn face_crop(img: &DynamicImage, faces: &[FaceBox], max_faces: usize) -> FaceCrop {
    if faces.is_empty() || faces.len() >= max_faces {
        return FaceCrop::Abstained;
    }

    // Enclosing box of every detection
    let ulx = faces.iter().map(|f| f.x).min().unwrap_or(0);
    let uly = faces.iter().map(|f| f.y).min().unwrap_or(0);
    let lrx = faces.iter().map(|f| f.x + f.width).max().unwrap_or(0);
    let lry = faces.iter().map(|f| f.y + f.height).max().unwrap_or(0);

    let cx = (ulx + (lrx - ulx) / 2) as i64;
    let cy = (uly + (lry - uly) / 2) as i64;

    let (width, height) = img.dimensions();
    let (crop_x, crop_y, side) = if width > height {
        let side = height;
        let x = (cx - (side / 2) as i64).clamp(0, (width - side) as i64) as u32;
        (x, 0, side)
    } else {
        let side = width;
        let y = (cy - (side / 2) as i64).clamp(0, (height - side) as i64) as u32;
        (0, y, side)
    };

    FaceCrop::Cropped(img.crop_imm(crop_x, crop_y, side, side))
}
