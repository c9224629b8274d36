//! Filesystem scan for candidate images.
//!
//! The locator answers one question: which files under a root should get
//! thumbnails? File names are matched against dotted extensions, one walk per
//! extension, concatenated in the fixed order of [`DEFAULT_EXTENSIONS`]:
//!
//! ```text
//! photos/
//! ├── a.jpg      ← walk 1 (.jpg)
//! ├── b.png      ← walk 3 (.png)
//! ├── notes.txt
//! └── nested/
//!     └── c.jpg  ← walk 1, only when recursive
//! ```
//!
//! Matching is a literal, case-sensitive name-suffix test (`*.jpg` glob
//! semantics): `IMG.JPG` is not a `.jpg` candidate, `a.b.jpg` is. Hidden
//! files are never matched and hidden directories are never entered, though
//! the root itself may be hidden. Only files are yielded, through symlinks
//! if need be; directories never are. Unreadable subtrees and a nonexistent
//! root yield nothing rather than failing.
//!
//! The scan is lazy: nothing is read from disk until the iterator is driven,
//! so very large trees are never held in memory by the producer.

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Extensions searched when no filter is given, in search order.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png"];

/// Normalize a user-supplied extension: add the leading dot if missing.
pub fn normalize_extension(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}

/// Lazily yield candidate image files under `root`.
///
/// With an `extension` filter only that extension is searched; otherwise each
/// of [`DEFAULT_EXTENSIONS`] is searched in turn and the per-extension
/// results are concatenated in that order. Within one extension, order
/// follows filesystem enumeration order, unsorted.
pub fn scan(
    root: &Path,
    recursive: bool,
    extension: Option<&str>,
) -> impl Iterator<Item = PathBuf> {
    let extensions: Vec<String> = match extension {
        Some(ext) => vec![ext.to_string()],
        None => DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
    };
    let root = root.to_path_buf();
    extensions
        .into_iter()
        .flat_map(move |ext| walk_matching(root.clone(), recursive, ext))
}

/// One walk of the tree, yielding files whose name ends in `extension`. The
/// file test follows symlinks, so a link to an image counts; directories and
/// dangling links do not.
fn walk_matching(
    root: PathBuf,
    recursive: bool,
    extension: String,
) -> impl Iterator<Item = PathBuf> {
    let max_depth = if recursive { usize::MAX } else { 1 };
    WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry))
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .map(DirEntry::into_path)
        .filter(move |path| name_has_suffix(path, &extension))
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

fn name_has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(suffix))
}
