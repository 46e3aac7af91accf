//! # Thumbwise
//!
//! Intelligent square thumbnails and simple HTML photo galleries. Given a
//! non-square photograph, thumbwise picks the square sub-region that keeps
//! the most visually important content — centered on detected faces when
//! there are any, otherwise shaving off the least-informative edges —
//! instead of stretching or naively center-cropping.
//!
//! # How an Image Gets Squared
//!
//! ```text
//! decode → EXIF reorient → already square? ──────────────→ done
//!                              │
//!                              ├─ face crop (1–4 faces) ──→ done
//!                              │
//!                              └─ entropy crop ───────────→ done
//! ```
//!
//! Face detection runs on a proxy downscaled to 600 px on its longest
//! side (small inputs detect dramatically faster) and the resulting boxes
//! are mapped back to the original through the proxy's scale factor. Zero
//! detections and five-or-more detections both fall through to the
//! entropy cropper: none means there is nothing to center on, a pile of
//! them usually means false positives in a cluttered scene. The entropy
//! cropper repeatedly shaves up to 10 px off whichever end of the longer
//! dimension carries less Shannon entropy until the image is square.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`squaring`] | The decision engine: entropy estimator + cropper, scale planner, face locator/cropper, orchestrator |
//! | [`detect`] | `FaceDetector` trait boundary + the rustface (SeetaFace) backend |
//! | [`orient`] | EXIF orientation read + upright rotation |
//! | [`scan`] | Source file discovery: wildcard filter, optional recursion |
//! | [`process`] | Batch thumbnailing pipeline (`thumbs` subcommand) |
//! | [`gallery`] | Multi-size renditions + Maud index page (`gallery` subcommand) |
//! | [`output`] | CLI output formatting — pure, testable line builders |
//!
//! # Design Decisions
//!
//! ## Pure-Rust Detection (No OpenCV)
//!
//! Face detection uses [rustface](https://docs.rs/rustface), a pure-Rust
//! port of the SeetaFace engine. No system OpenCV, no cascade-file hunt
//! across distro paths: the caller hands the detector an explicit model
//! file and everything else is statically linked. Detection failure is a
//! first-class outcome, distinct from "no faces found", and the squarer
//! answers it by degrading to the entropy crop — one unreadable model
//! never aborts a batch.
//!
//! ## Value-Semantics Cropping
//!
//! Every crop produces a new `DynamicImage` via `crop_imm`; nothing
//! mutates a shared buffer. The entropy cropper tracks its shrinking
//! window as plain coordinates and cuts the original exactly once at the
//! end.
//!
//! ## Maud Over Template Engines
//!
//! The gallery page is compile-time-checked Maud markup with inline CSS
//! and zero JavaScript. Malformed HTML is a build error, interpolation is
//! escaped by default, and there is no template directory to ship.
//!
//! ## Embarrassingly Parallel Batches
//!
//! Every image's pipeline is independent and synchronous, so batches are
//! a rayon `par_iter` with no shared mutable state. Per-file failures are
//! collected and reported; the run always finishes.

pub mod detect;
pub mod gallery;
pub mod orient;
pub mod output;
pub mod process;
pub mod scan;
pub mod squaring;

#[cfg(test)]
pub(crate) mod test_helpers;
