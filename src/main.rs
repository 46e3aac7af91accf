use clap::{Parser, Subcommand};
use std::path::PathBuf;
use thumbwise::detect::{FaceDetector, RustfaceDetector};
use thumbwise::gallery::{self, GalleryOptions};
use thumbwise::output;
use thumbwise::process::{self, ThumbOptions};
use thumbwise::scan;
use thumbwise::squaring::{locate_faces, SquareConfig};

/// Shared flags for commands that select source images.
#[derive(clap::Args, Clone)]
struct SelectArgs {
    /// Source directory (or a single image file)
    #[arg(long, default_value = ".")]
    source: PathBuf,

    /// File name wildcard, e.g. "*.jpg" or "*.png"
    #[arg(long, default_value = "*.jpg")]
    filter: String,
}

/// Shared flag for commands that can use face detection.
#[derive(clap::Args, Clone)]
struct ModelArgs {
    /// SeetaFace model file (e.g. seeta_fd_frontal_v1.0.bin); without it
    /// squaring is entropy-only
    #[arg(long)]
    model: Option<PathBuf>,
}

#[derive(Parser)]
#[command(name = "thumbwise")]
#[command(about = "Intelligent square thumbnails and simple HTML photo galleries")]
#[command(long_about = "\
Intelligent square thumbnails and simple HTML photo galleries

Non-square photographs are squared by choosing which region to keep: a
crop centered on detected faces when an image has 1-4 of them, otherwise
a progressive crop that shaves the least-informative edge (lowest
pixel-entropy) until the image is square. Images are rotated upright from
their EXIF orientation before processing.

Face detection needs a SeetaFace model file passed via --model; download
seeta_fd_frontal_v1.0.bin once and point every run at it. Without
--model, squaring is entropy-only.

Examples:

  # 150px square thumbnails for every JPEG in ./photos
  thumbwise thumbs --source photos --destination thumbs --model seeta.bin

  # same, recursively, writing prefixed thumbnails beside the originals
  thumbwise thumbs --source photos --destination photos --prefix tn_ --recursive

  # a browsable one-page gallery with full/large/medium/small renditions
  thumbwise gallery --source photos --destination site --model seeta.bin

  # where are the faces in this shot?
  thumbwise faces group.jpg --model seeta.bin")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create intelligently squared thumbnails
    Thumbs {
        #[command(flatten)]
        select: SelectArgs,

        /// Scan subdirectories of the source too
        #[arg(long)]
        recursive: bool,

        /// Output directory; when it equals the source, thumbnails are
        /// written next to their originals
        #[arg(long, default_value = ".")]
        destination: PathBuf,

        /// Maximum side of the squared thumbnail (never upscales)
        #[arg(long, default_value_t = 150)]
        size: u32,

        /// Prefix for the output file name
        #[arg(long, default_value = "")]
        prefix: String,

        /// Suffix for the output file name, before the extension
        #[arg(long, default_value = "")]
        suffix: String,

        #[command(flatten)]
        model: ModelArgs,
    },
    /// Build a one-page HTML gallery with multiple rendition sizes
    Gallery {
        #[command(flatten)]
        select: SelectArgs,

        /// Output directory for the gallery (must differ from source)
        #[arg(long)]
        destination: PathBuf,

        /// Gallery page title
        #[arg(long, default_value = "photostream")]
        title: String,

        #[command(flatten)]
        model: ModelArgs,
    },
    /// Print detected face boxes for one image
    Faces {
        /// Image file to inspect
        file: PathBuf,

        /// SeetaFace model file
        #[arg(long)]
        model: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Thumbs {
            select,
            recursive,
            destination,
            size,
            prefix,
            suffix,
            model,
        } => {
            let detector = load_detector(model.model.as_deref());
            let files = scan::find_images(&select.source, &select.filter, recursive)?;
            println!(
                "Creating thumbnails for {} file(s) from {} into {}",
                files.len(),
                select.source.display(),
                destination.display()
            );

            let options = ThumbOptions {
                destination,
                size,
                prefix,
                suffix,
                square: SquareConfig::default(),
            };
            let results =
                process::thumb_images(&files, &select.source, as_dyn(&detector), &options);
            output::print_thumb_results(&results);
        }
        Command::Gallery {
            select,
            destination,
            title,
            model,
        } => {
            let detector = load_detector(model.model.as_deref());
            let files = scan::find_images(&select.source, &select.filter, true)?;
            println!(
                "Building gallery of {} file(s) from {} into {}",
                files.len(),
                select.source.display(),
                destination.display()
            );

            let options = GalleryOptions {
                title,
                ..GalleryOptions::default()
            };
            let run = gallery::build_gallery(
                &files,
                &select.source,
                &destination,
                as_dyn(&detector),
                &options,
            )?;
            output::print_gallery_run(&run);
        }
        Command::Faces { file, model } => {
            let detector = RustfaceDetector::from_file(&model)?;
            let img = thumbwise::orient::reorient(image::open(&file)?, &file);
            let faces = locate_faces(&detector, &img, SquareConfig::default().detect_bound)?;
            if faces.is_empty() {
                println!("no faces detected");
            } else {
                for face in faces {
                    println!("{},{} {}x{}", face.x, face.y, face.width, face.height);
                }
            }
        }
    }

    Ok(())
}

/// Load the face detection model for a batch command.
///
/// An unreadable model degrades the run to entropy-only squaring instead
/// of aborting it; only the `faces` subcommand treats that as fatal.
fn load_detector(model: Option<&std::path::Path>) -> Option<RustfaceDetector> {
    let path = model?;
    match RustfaceDetector::from_file(path) {
        Ok(detector) => Some(detector),
        Err(err) => {
            eprintln!("warning: {err}; continuing with entropy-only squaring");
            None
        }
    }
}

fn as_dyn(detector: &Option<RustfaceDetector>) -> Option<&dyn FaceDetector> {
    detector.as_ref().map(|d| d as &dyn FaceDetector)
}
