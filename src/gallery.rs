//! Static HTML gallery generation.
//!
//! Turns a directory of photographs into a browsable single-page gallery:
//!
//! ```text
//! dist/
//! ├── index.html        # thumbnail grid, each linking to large/
//! ├── full/             # originals (reoriented)
//! ├── large/            # longest side ≤ 1280
//! ├── medium/           # longest side ≤ 640
//! ├── small/            # longest side ≤ 240
//! └── thumbs/           # squared, longest side ≤ 150
//! ```
//!
//! The page is compile-time-checked Maud markup with inline CSS and no
//! JavaScript — nothing to ship or keep in sync besides the images.
//! Renditions are generated in parallel per image; a file that fails to
//! decode is reported and skipped, never fatal to the run.

use crate::detect::FaceDetector;
use crate::orient::reorient;
use crate::process::fit_within;
use crate::squaring::{square, SquareConfig, SquareMethod};
use maud::{html, Markup, DOCTYPE};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("source and destination directories must differ")]
    SourceIsDestination,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("source has no usable file name: {0}")]
    BadSourceName(PathBuf),
}

/// Rendition bounds and page settings for a gallery build.
#[derive(Debug, Clone)]
pub struct GalleryOptions {
    pub large: u32,
    pub medium: u32,
    pub small: u32,
    pub thumb: u32,
    /// Page heading and `<title>`.
    pub title: String,
    pub square: SquareConfig,
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self {
            large: 1280,
            medium: 640,
            small: 240,
            thumb: 150,
            title: "photostream".to_string(),
            square: SquareConfig::default(),
        }
    }
}

/// One image that made it into the gallery.
#[derive(Debug)]
pub struct GalleryEntry {
    pub filename: String,
    pub method: SquareMethod,
}

/// One image that did not.
#[derive(Debug)]
pub struct GalleryFailure {
    pub source: PathBuf,
    pub error: GalleryError,
}

/// Outcome of a gallery build.
#[derive(Debug)]
pub struct GalleryRun {
    pub entries: Vec<GalleryEntry>,
    pub failures: Vec<GalleryFailure>,
    pub index_path: PathBuf,
}

const RENDITION_DIRS: [&str; 5] = ["full", "large", "medium", "small", "thumbs"];

/// Build the gallery for a set of source files.
///
/// `index.html` lists only the images that processed successfully, in
/// input order.
pub fn build_gallery(
    files: &[PathBuf],
    source_root: &Path,
    destination: &Path,
    detector: Option<&dyn FaceDetector>,
    options: &GalleryOptions,
) -> Result<GalleryRun, GalleryError> {
    if source_root == destination {
        return Err(GalleryError::SourceIsDestination);
    }

    for dir in RENDITION_DIRS {
        std::fs::create_dir_all(destination.join(dir))?;
    }

    let results: Vec<Result<GalleryEntry, GalleryFailure>> = files
        .par_iter()
        .map(|file| {
            gallery_one(file, destination, detector, options).map_err(|error| GalleryFailure {
                source: file.clone(),
                error,
            })
        })
        .collect();

    let mut entries = Vec::new();
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(entry) => entries.push(entry),
            Err(failure) => failures.push(failure),
        }
    }

    let names: Vec<&str> = entries.iter().map(|e| e.filename.as_str()).collect();
    let page = render_index(&options.title, &names);
    let index_path = destination.join("index.html");
    std::fs::write(&index_path, page.into_string())?;

    Ok(GalleryRun {
        entries,
        failures,
        index_path,
    })
}

fn gallery_one(
    file: &Path,
    destination: &Path,
    detector: Option<&dyn FaceDetector>,
    options: &GalleryOptions,
) -> Result<GalleryEntry, GalleryError> {
    let filename = file
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| GalleryError::BadSourceName(file.to_path_buf()))?
        .to_string();

    let img = reorient(image::open(file)?, file);

    img.save(destination.join("full").join(&filename))?;
    for (dir, bound) in [
        ("large", options.large),
        ("medium", options.medium),
        ("small", options.small),
    ] {
        fit_within(img.clone(), bound).save(destination.join(dir).join(&filename))?;
    }

    let squared = square(&img, detector, &options.square);
    fit_within(squared.image, options.thumb).save(destination.join("thumbs").join(&filename))?;

    Ok(GalleryEntry {
        filename,
        method: squared.method,
    })
}

const STYLE: &str = "\
html, body { height: 100%; background-color: #333; }
body { color: #fff; font-family: sans-serif; text-align: center; text-shadow: 0 1px 3px rgba(0,0,0,.5); }
h1 { margin-bottom: 20px; }
.img { display: inline; }
img { margin-right: 10px; margin-bottom: 10px; }
";

/// Render the gallery index: a heading plus one linked thumbnail per image.
fn render_index(title: &str, images: &[&str]) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (STYLE) }
            }
            body {
                h1 { (title) }
                @for image in images {
                    div.img {
                        a href={ "large/" (image) } {
                            img src={ "thumbs/" (image) } alt=(image);
                        }
                    }
                }
            }
        }
    }
}
