//! CLI output formatting.
//!
//! Each run type has a `format_*` function returning plain lines and a
//! thin `print_*` wrapper that writes them to stdout. Format functions are
//! pure — no I/O, no side effects — so the output contract is unit
//! testable.
//!
//! Per-image lines name the squaring decision that was made, which is the
//! part of a run worth scanning: whether a thumbnail was face-guided,
//! entropy-guided, or degraded because the detector failed.

use crate::gallery::GalleryRun;
use crate::process::{ThumbFailure, ThumbReport};
use crate::squaring::SquareMethod;

/// Human-readable label for a squaring decision.
pub fn format_method(method: &SquareMethod) -> String {
    match method {
        SquareMethod::AlreadySquare => "already square".to_string(),
        SquareMethod::Faces(1) => "face crop on 1 face".to_string(),
        SquareMethod::Faces(count) => format!("face crop on {count} faces"),
        SquareMethod::Entropy => "entropy crop".to_string(),
        SquareMethod::DetectorFallback(err) => format!("entropy crop, detector failed: {err}"),
    }
}

fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Format a thumbnail batch: one line per file plus a summary line.
pub fn format_thumb_results(results: &[Result<ThumbReport, ThumbFailure>]) -> Vec<String> {
    let mut lines = Vec::with_capacity(results.len() + 1);
    let mut created = 0usize;
    let mut failed = 0usize;

    for result in results {
        match result {
            Ok(report) => {
                created += 1;
                lines.push(format!(
                    "{} → {} ({})",
                    display_name(&report.source),
                    report.output.display(),
                    format_method(&report.method),
                ));
            }
            Err(failure) => {
                failed += 1;
                lines.push(format!(
                    "{}: {}",
                    display_name(&failure.source),
                    failure.error
                ));
            }
        }
    }

    lines.push(summary_line("thumbnail", created, failed));
    lines
}

pub fn print_thumb_results(results: &[Result<ThumbReport, ThumbFailure>]) {
    for line in format_thumb_results(results) {
        println!("{line}");
    }
}

/// Format a gallery build: one line per image plus a summary line.
pub fn format_gallery_run(run: &GalleryRun) -> Vec<String> {
    let mut lines = Vec::with_capacity(run.entries.len() + run.failures.len() + 1);

    for entry in &run.entries {
        lines.push(format!(
            "{} ({})",
            entry.filename,
            format_method(&entry.method)
        ));
    }
    for failure in &run.failures {
        lines.push(format!(
            "{}: {}",
            display_name(&failure.source),
            failure.error
        ));
    }

    lines.push(format!(
        "{} → {}",
        summary_line("image", run.entries.len(), run.failures.len()),
        run.index_path.display()
    ));
    lines
}

pub fn print_gallery_run(run: &GalleryRun) {
    for line in format_gallery_run(run) {
        println!("{line}");
    }
}

fn summary_line(noun: &str, created: usize, failed: usize) -> String {
    let plural = if created == 1 { "" } else { "s" };
    if failed == 0 {
        format!("{created} {noun}{plural} created")
    } else {
        format!("{created} {noun}{plural} created, {failed} failed")
    }
}
