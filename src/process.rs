//! Batch thumbnail processing.
//!
//! Runs the full per-image pipeline over a list of discovered files:
//!
//! ```text
//! decode → EXIF reorient → square → shrink to --size → save
//! ```
//!
//! Images are processed in parallel with [rayon](https://docs.rs/rayon);
//! every image is independent, so the batch is an embarrassingly parallel
//! map. One bad file never aborts the run — each file yields either a
//! [`ThumbReport`] or a [`ThumbFailure`] and the caller decides how to
//! present them.

use crate::detect::FaceDetector;
use crate::orient::reorient;
use crate::squaring::{plan_scale, square, SquareConfig, SquareMethod};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThumbError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("source has no usable file name: {0}")]
    BadSourceName(PathBuf),
    #[error("output would overwrite the source image: {0}")]
    WouldOverwriteSource(PathBuf),
}

/// Settings for a thumbnail batch.
#[derive(Debug, Clone)]
pub struct ThumbOptions {
    /// Directory thumbnails are written to. When it equals the source
    /// root, each thumbnail lands next to its original instead.
    pub destination: PathBuf,
    /// Maximum side of the final thumbnail. Smaller squares stay as-is.
    pub size: u32,
    /// Prepended to the output file stem.
    pub prefix: String,
    /// Appended to the output file stem, before the extension.
    pub suffix: String,
    pub square: SquareConfig,
}

impl Default for ThumbOptions {
    fn default() -> Self {
        Self {
            destination: PathBuf::from("."),
            size: 150,
            prefix: String::new(),
            suffix: String::new(),
            square: SquareConfig::default(),
        }
    }
}

/// One successfully written thumbnail.
#[derive(Debug)]
pub struct ThumbReport {
    pub source: PathBuf,
    pub output: PathBuf,
    pub method: SquareMethod,
}

/// One file that could not be processed.
#[derive(Debug)]
pub struct ThumbFailure {
    pub source: PathBuf,
    pub error: ThumbError,
}

/// Thumbnail every file in the batch, in parallel.
///
/// Results come back in input order, one entry per file.
pub fn thumb_images(
    files: &[PathBuf],
    source_root: &Path,
    detector: Option<&dyn FaceDetector>,
    options: &ThumbOptions,
) -> Vec<Result<ThumbReport, ThumbFailure>> {
    files
        .par_iter()
        .map(|file| {
            thumb_one(file, source_root, detector, options).map_err(|error| ThumbFailure {
                source: file.clone(),
                error,
            })
        })
        .collect()
}

fn thumb_one(
    file: &Path,
    source_root: &Path,
    detector: Option<&dyn FaceDetector>,
    options: &ThumbOptions,
) -> Result<ThumbReport, ThumbError> {
    let output = output_path(file, source_root, options)?;
    if output.as_path() == file {
        return Err(ThumbError::WouldOverwriteSource(file.to_path_buf()));
    }

    let img = image::open(file)?;
    let img = reorient(img, file);
    let squared = square(&img, detector, &options.square);
    let thumb = fit_within(squared.image, options.size);

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    thumb.save(&output)?;

    Ok(ThumbReport {
        source: file.to_path_buf(),
        output,
        method: squared.method,
    })
}

/// Shrink an image so neither side exceeds `bound`, preserving aspect.
/// Images already within the bound are returned untouched — never
/// upscaled.
pub fn fit_within(img: DynamicImage, bound: u32) -> DynamicImage {
    let (width, height) = img.dimensions();
    match plan_scale(width, height, bound) {
        Ok(plan) if plan.scales() => {
            img.resize_exact(plan.target_width, plan.target_height, FilterType::Lanczos3)
        }
        _ => img,
    }
}

fn output_path(
    file: &Path,
    source_root: &Path,
    options: &ThumbOptions,
) -> Result<PathBuf, ThumbError> {
    let stem = file
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| ThumbError::BadSourceName(file.to_path_buf()))?;
    let ext = file.extension().and_then(|s| s.to_str()).unwrap_or("jpg");
    let name = format!("{}{}{}.{}", options.prefix, stem, options.suffix, ext);

    // Destination == source root means thumbnails sit beside their
    // originals, preserving any subfolder structure of a recursive run.
    let dir = if options.destination == source_root {
        file.parent().unwrap_or(source_root)
    } else {
        options.destination.as_path()
    };
    Ok(dir.join(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::solid_image;
    use std::fs;
    use tempfile::TempDir;

    fn write_png(path: &Path, width: u32, height: u32) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        solid_image(width, height).save(path).unwrap();
    }

    fn options(destination: &Path) -> ThumbOptions {
        ThumbOptions {
            destination: destination.to_path_buf(),
            ..ThumbOptions::default()
        }
    }

    #[test]
    fn fit_within_shrinks_oversized() {
        let img = solid_image(400, 300);
        let out = fit_within(img, 150);
        assert_eq!(out.dimensions(), (150, 112));
    }

    #[test]
    fn fit_within_never_upscales() {
        let img = solid_image(80, 60);
        let out = fit_within(img, 150);
        assert_eq!(out.dimensions(), (80, 60));
    }

    #[test]
    fn batch_produces_square_thumbnails() {
        let tmp = TempDir::new().unwrap();
        let source_dir = tmp.path().join("photos");
        let out_dir = tmp.path().join("thumbs");
        let photo = source_dir.join("beach.png");
        write_png(&photo, 300, 200);

        let results = thumb_images(&[photo], &source_dir, None, &options(&out_dir));
        assert_eq!(results.len(), 1);
        let report = results[0].as_ref().unwrap();
        assert!(matches!(report.method, SquareMethod::Entropy));

        let thumb = image::open(&report.output).unwrap();
        assert_eq!(thumb.dimensions(), (150, 150));
    }

    #[test]
    fn small_squares_are_not_upscaled() {
        let tmp = TempDir::new().unwrap();
        let source_dir = tmp.path().join("photos");
        let out_dir = tmp.path().join("thumbs");
        let photo = source_dir.join("tiny.png");
        write_png(&photo, 80, 60);

        let results = thumb_images(&[photo], &source_dir, None, &options(&out_dir));
        let report = results[0].as_ref().unwrap();
        let thumb = image::open(&report.output).unwrap();
        assert_eq!(thumb.dimensions(), (60, 60));
    }

    #[test]
    fn prefix_and_suffix_shape_output_name() {
        let tmp = TempDir::new().unwrap();
        let source_dir = tmp.path().join("photos");
        let out_dir = tmp.path().join("thumbs");
        let photo = source_dir.join("dawn.png");
        write_png(&photo, 100, 100);

        let opts = ThumbOptions {
            destination: out_dir.clone(),
            prefix: "tn_".to_string(),
            suffix: "-sq".to_string(),
            ..ThumbOptions::default()
        };
        let results = thumb_images(&[photo], &source_dir, None, &opts);
        let report = results[0].as_ref().unwrap();
        assert_eq!(report.output, out_dir.join("tn_dawn-sq.png"));
        assert!(report.output.exists());
    }

    #[test]
    fn same_destination_writes_beside_source() {
        let tmp = TempDir::new().unwrap();
        let source_dir = tmp.path().join("photos");
        let photo = source_dir.join("nested/rome.png");
        write_png(&photo, 120, 90);

        let opts = ThumbOptions {
            destination: source_dir.clone(),
            prefix: "thumb-".to_string(),
            ..ThumbOptions::default()
        };
        let results = thumb_images(&[photo.clone()], &source_dir, None, &opts);
        let report = results[0].as_ref().unwrap();
        assert_eq!(report.output, source_dir.join("nested/thumb-rome.png"));
    }

    #[test]
    fn refuses_to_overwrite_source() {
        let tmp = TempDir::new().unwrap();
        let source_dir = tmp.path().join("photos");
        let photo = source_dir.join("keep.png");
        write_png(&photo, 64, 64);

        // Destination == source with no prefix/suffix would clobber the file
        let results = thumb_images(&[photo], &source_dir, None, &options(&source_dir));
        let failure = results[0].as_ref().unwrap_err();
        assert!(matches!(
            failure.error,
            ThumbError::WouldOverwriteSource(_)
        ));
    }

    #[test]
    fn one_bad_file_does_not_abort_the_batch() {
        let tmp = TempDir::new().unwrap();
        let source_dir = tmp.path().join("photos");
        let out_dir = tmp.path().join("thumbs");
        let good = source_dir.join("good.png");
        let broken = source_dir.join("broken.png");
        write_png(&good, 100, 80);
        fs::write(&broken, b"this is not an image").unwrap();

        let results = thumb_images(
            &[broken.clone(), good.clone()],
            &source_dir,
            None,
            &options(&out_dir),
        );
        assert_eq!(results.len(), 2);
        assert!(results[0].is_err());
        let report = results[1].as_ref().unwrap();
        assert!(report.output.exists());
    }

    #[test]
    fn already_square_input_is_reported_as_such() {
        let tmp = TempDir::new().unwrap();
        let source_dir = tmp.path().join("photos");
        let out_dir = tmp.path().join("thumbs");
        let photo = source_dir.join("square.png");
        write_png(&photo, 200, 200);

        let results = thumb_images(&[photo], &source_dir, None, &options(&out_dir));
        let report = results[0].as_ref().unwrap();
        assert!(matches!(report.method, SquareMethod::AlreadySquare));
    }
}
