//! Centralized path parsing for the thumbnail naming convention.
//!
//! Thumbnails are sibling files of their source, named by wrapping the base
//! name in a prefix/postfix pair (`tn_` and empty string by default):
//!
//! - `photos/trip.jpg` → `photos/tn_trip.jpg`
//! - `cover.png` → `tn_cover.png`
//!
//! Whether a file *is* a thumbnail is decided by running the same convention
//! backwards: a base name that starts with the prefix and ends with the
//! postfix counts, with no further bookkeeping. A source that merely happens
//! to be named `tn_photo.jpg` is therefore treated as a thumbnail too — that
//! false positive is part of the contract, not a bug to guard against here.

use std::path::{Path, PathBuf};

/// Decomposition of a path into the parts the naming convention works on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePath {
    /// The path as given.
    pub path: PathBuf,
    /// Final segment with the extension removed (`trip` from `photos/trip.jpg`).
    pub base_name: String,
    /// Extension including the leading dot (`.jpg`), empty if none.
    pub extension: String,
    /// Everything before the final segment; empty for bare file names.
    pub directory: PathBuf,
}

/// Split a file name into (base name, dotted extension).
///
/// The extension is the suffix from the last dot onward. Names whose
/// characters before that dot are all dots carry no extension:
/// - `"trip.jpg"` → `("trip", ".jpg")`
/// - `"archive.tar.gz"` → `("archive.tar", ".gz")`
/// - `".bashrc"` → `(".bashrc", "")`
/// - `"notes."` → `("notes", ".")`
/// - `"README"` → `("README", "")`
pub fn split_extension(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(dot) if file_name[..dot].bytes().any(|b| b != b'.') => {
            (&file_name[..dot], &file_name[dot..])
        }
        _ => (file_name, ""),
    }
}

/// Decompose `path` into directory, base name, and extension.
///
/// Pure — no filesystem access, any input accepted. Joining `directory` with
/// `base_name + extension` reconstructs an equivalent path.
pub fn classify(path: &Path) -> ImagePath {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let (base_name, extension) = split_extension(&file_name);
    ImagePath {
        path: path.to_path_buf(),
        base_name: base_name.to_string(),
        extension: extension.to_string(),
        directory: path.parent().map(Path::to_path_buf).unwrap_or_default(),
    }
}

/// Build a thumbnail file name from its parts: `{prefix}{base}{postfix}{ext}`.
pub fn thumbnail_file_name(
    prefix: &str,
    base_name: &str,
    postfix: &str,
    extension: &str,
) -> String {
    format!("{prefix}{base_name}{postfix}{extension}")
}

/// Whether `base_name` already follows the thumbnail convention.
///
/// Plain prefix/suffix string tests. An empty postfix matches every suffix,
/// so with the defaults this reduces to "starts with `tn_`".
pub fn is_thumbnail_name(base_name: &str, prefix: &str, postfix: &str) -> bool {
    base_name.starts_with(prefix) && base_name.ends_with(postfix)
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // split_extension
    // =========================================================================

    #[test]
    fn plain_name_splits_at_last_dot() {
        assert_eq!(split_extension("trip.jpg"), ("trip", ".jpg"));
    }

    #[test]
    fn multi_dot_keeps_only_last_suffix() {
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", ".gz"));
    }

    #[test]
    fn hidden_file_has_no_extension() {
        assert_eq!(split_extension(".bashrc"), (".bashrc", ""));
    }

    #[test]
    fn hidden_file_with_real_extension() {
        assert_eq!(split_extension("..cover.png"), ("..cover", ".png"));
    }

    #[test]
    fn all_dots_has_no_extension() {
        assert_eq!(split_extension("..."), ("...", ""));
    }

    #[test]
    fn trailing_dot_is_a_bare_extension() {
        assert_eq!(split_extension("notes."), ("notes", "."));
    }

    #[test]
    fn no_dot_means_no_extension() {
        assert_eq!(split_extension("README"), ("README", ""));
    }

    #[test]
    fn empty_name() {
        assert_eq!(split_extension(""), ("", ""));
    }

    // =========================================================================
    // classify
    // =========================================================================

    #[test]
    fn classify_nested_path() {
        let p = classify(Path::new("photos/summer/trip.jpg"));
        assert_eq!(p.path, PathBuf::from("photos/summer/trip.jpg"));
        assert_eq!(p.base_name, "trip");
        assert_eq!(p.extension, ".jpg");
        assert_eq!(p.directory, PathBuf::from("photos/summer"));
    }

    #[test]
    fn classify_bare_file_name_has_empty_directory() {
        let p = classify(Path::new("cover.png"));
        assert_eq!(p.base_name, "cover");
        assert_eq!(p.extension, ".png");
        assert_eq!(p.directory, PathBuf::new());
    }

    #[test]
    fn classify_absolute_path() {
        let p = classify(Path::new("/srv/img/cover.jpeg"));
        assert_eq!(p.base_name, "cover");
        assert_eq!(p.extension, ".jpeg");
        assert_eq!(p.directory, PathBuf::from("/srv/img"));
    }

    #[test]
    fn classify_without_extension() {
        let p = classify(Path::new("photos/README"));
        assert_eq!(p.base_name, "README");
        assert_eq!(p.extension, "");
    }

    #[test]
    fn classify_round_trips() {
        for raw in [
            "trip.jpg",
            "photos/trip.jpg",
            "photos/summer/trip.tar.gz",
            "/abs/path/.hidden",
            "no_extension",
        ] {
            let p = classify(Path::new(raw));
            let rebuilt = p
                .directory
                .join(format!("{}{}", p.base_name, p.extension));
            assert_eq!(rebuilt, PathBuf::from(raw), "round trip failed for {raw}");
        }
    }

    // =========================================================================
    // thumbnail naming
    // =========================================================================

    #[test]
    fn thumbnail_name_wraps_base() {
        assert_eq!(thumbnail_file_name("tn_", "trip", "", ".jpg"), "tn_trip.jpg");
    }

    #[test]
    fn thumbnail_name_with_postfix() {
        assert_eq!(
            thumbnail_file_name("", "trip", "_small", ".png"),
            "trip_small.png"
        );
    }

    #[test]
    fn thumbnail_name_without_extension() {
        assert_eq!(thumbnail_file_name("tn_", "trip", "", ""), "tn_trip");
    }

    #[test]
    fn detects_prefixed_base() {
        assert!(is_thumbnail_name("tn_trip", "tn_", ""));
        assert!(!is_thumbnail_name("trip", "tn_", ""));
    }

    #[test]
    fn unrelated_tn_file_still_counts() {
        // Pure string test: no way to tell a generated thumbnail from a
        // source that was always named this way.
        assert!(is_thumbnail_name("tn_photo", "tn_", ""));
    }

    #[test]
    fn postfix_must_match_suffix() {
        assert!(is_thumbnail_name("tn_trip_small", "tn_", "_small"));
        assert!(!is_thumbnail_name("tn_trip", "tn_", "_small"));
    }

    #[test]
    fn empty_convention_matches_everything() {
        assert!(is_thumbnail_name("anything", "", ""));
    }
}
