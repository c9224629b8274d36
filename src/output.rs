//! CLI output formatting for the thumbnail run.
//!
//! The report is the program's whole user interface, shaped like this:
//!
//! ```text
//! Found 3 images.
//! Creating thumbnail: photos/tn_a.jpg
//! Already a thumbnail: photos/tn_b.jpg
//! Thumbnail exists: photos/tn_c.jpg
//! Total:          3
//! Created:        1
//! Ignored:        2
//! ```
//!
//! The summary merges both skip reasons into one `Ignored` count; a `Failed`
//! line appears only when a keep-going run recorded hard errors.
//!
//! # Architecture
//!
//! Each piece has a `format_*` function (pure, returns strings) for
//! testability and a `print_*` wrapper that writes to stdout. Failure lines
//! are the exception: they go to stderr.

use crate::generate::Outcome;
use crate::imaging::BackendError;
use std::path::Path;

/// Line printed after the scan, before any processing.
pub fn format_found(count: usize) -> String {
    format!("Found {count} images.")
}

/// One line per processed image.
pub fn format_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Created(target) => format!("Creating thumbnail: {}", target.display()),
        Outcome::AlreadyThumbnail(source) => {
            format!("Already a thumbnail: {}", source.display())
        }
        Outcome::ThumbnailExists(target) => format!("Thumbnail exists: {}", target.display()),
    }
}

/// Counters for the end-of-run summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Candidates found by the scan, processed or not.
    pub total: usize,
    pub created: usize,
    /// Both skip reasons, merged for reporting.
    pub ignored: usize,
    /// Hard errors recorded under the continue policy.
    pub failed: usize,
}

impl Summary {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// Tally one outcome.
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Created(_) => self.created += 1,
            Outcome::AlreadyThumbnail(_) | Outcome::ThumbnailExists(_) => self.ignored += 1,
        }
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }
}

/// Format the summary block. The `Failed` line only appears when nonzero,
/// keeping default-policy output identical to runs that cannot fail partially.
pub fn format_summary(summary: &Summary) -> Vec<String> {
    let mut lines = vec![
        format!("Total:\t\t{}", summary.total),
        format!("Created:\t{}", summary.created),
        format!("Ignored:\t{}", summary.ignored),
    ];
    if summary.failed > 0 {
        lines.push(format!("Failed:\t\t{}", summary.failed));
    }
    lines
}

/// Print the found-count line to stdout.
pub fn print_found(count: usize) {
    println!("{}", format_found(count));
}

/// Print a per-image outcome line to stdout.
pub fn print_outcome(outcome: &Outcome) {
    println!("{}", format_outcome(outcome));
}

/// Print the summary block to stdout.
pub fn print_summary(summary: &Summary) {
    for line in format_summary(summary) {
        println!("{}", line);
    }
}

/// Failure line: the image path, then the error. IO errors carry no path of
/// their own, so the line always leads with the file it concerns.
pub fn format_failure(source: &Path, error: &BackendError) -> String {
    format!("{}: {}", source.display(), error)
}

/// Print a failure line to stderr.
pub fn print_failure(source: &Path, error: &BackendError) {
    eprintln!("{}", format_failure(source, error));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // =========================================================================
    // Line wording
    // =========================================================================

    #[test]
    fn found_line_wording() {
        assert_eq!(format_found(3), "Found 3 images.");
        assert_eq!(format_found(0), "Found 0 images.");
    }

    #[test]
    fn created_line_shows_target() {
        let outcome = Outcome::Created(PathBuf::from("photos/tn_a.jpg"));
        assert_eq!(format_outcome(&outcome), "Creating thumbnail: photos/tn_a.jpg");
    }

    #[test]
    fn already_thumbnail_line_shows_source() {
        let outcome = Outcome::AlreadyThumbnail(PathBuf::from("photos/tn_b.jpg"));
        assert_eq!(format_outcome(&outcome), "Already a thumbnail: photos/tn_b.jpg");
    }

    #[test]
    fn exists_line_shows_target() {
        let outcome = Outcome::ThumbnailExists(PathBuf::from("photos/tn_c.jpg"));
        assert_eq!(format_outcome(&outcome), "Thumbnail exists: photos/tn_c.jpg");
    }

    #[test]
    fn failure_line_names_the_image_even_for_pathless_errors() {
        let err = BackendError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(
            format_failure(Path::new("photos/a.jpg"), &err),
            "photos/a.jpg: IO error: gone"
        );
    }

    // =========================================================================
    // Summary tallying
    // =========================================================================

    #[test]
    fn record_counts_created() {
        let mut summary = Summary::new(1);
        summary.record(&Outcome::Created(PathBuf::from("tn_a.jpg")));
        assert_eq!(summary.created, 1);
        assert_eq!(summary.ignored, 0);
    }

    #[test]
    fn record_merges_both_skip_reasons_into_ignored() {
        let mut summary = Summary::new(2);
        summary.record(&Outcome::AlreadyThumbnail(PathBuf::from("tn_a.jpg")));
        summary.record(&Outcome::ThumbnailExists(PathBuf::from("tn_b.jpg")));
        assert_eq!(summary.ignored, 2);
        assert_eq!(summary.created, 0);
    }

    #[test]
    fn new_presets_total_only() {
        let summary = Summary::new(7);
        assert_eq!(summary.total, 7);
        assert_eq!(summary.created, 0);
        assert_eq!(summary.ignored, 0);
        assert_eq!(summary.failed, 0);
    }

    // =========================================================================
    // Summary block
    // =========================================================================

    #[test]
    fn summary_block_layout() {
        let summary = Summary {
            total: 5,
            created: 2,
            ignored: 3,
            failed: 0,
        };
        assert_eq!(
            format_summary(&summary),
            vec!["Total:\t\t5", "Created:\t2", "Ignored:\t3"]
        );
    }

    #[test]
    fn summary_block_empty_run() {
        let summary = Summary::new(0);
        assert_eq!(
            format_summary(&summary),
            vec!["Total:\t\t0", "Created:\t0", "Ignored:\t0"]
        );
    }

    #[test]
    fn failed_line_only_when_nonzero() {
        let mut summary = Summary::new(2);
        summary.record(&Outcome::Created(PathBuf::from("tn_a.jpg")));
        assert!(!format_summary(&summary).iter().any(|l| l.starts_with("Failed:")));

        summary.record_failure();
        assert_eq!(format_summary(&summary).last().unwrap(), "Failed:\t\t1");
    }
}
