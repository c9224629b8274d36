//! Thumbnail generation — the one mutating stage.
//!
//! Decides, per image, whether a thumbnail should exist and creates it when
//! missing. The ladder runs in order:
//!
//! 1. Source already named like a thumbnail → [`Outcome::AlreadyThumbnail`].
//! 2. Derive the sibling target path: `dir/{prefix}{base}{postfix}{ext}`.
//! 3. Target file present → [`Outcome::ThumbnailExists`].
//! 4. Otherwise decode, fit within the bounding box, encode →
//!    [`Outcome::Created`].
//!
//! Skips are outcomes, not errors. Only decode/encode/IO failures surface as
//! [`BackendError`]; the driver's [`FailurePolicy`] decides whether one
//! failure ends the whole batch.
//!
//! Step 1 is a pure name test with a known false positive: a source that was
//! always named `tn_photo.jpg` is skipped as a thumbnail. See
//! [`crate::naming::is_thumbnail_name`].

use crate::imaging::{BackendError, ImageBackend, ThumbnailParams};
use crate::naming::{classify, is_thumbnail_name, thumbnail_file_name};
use std::path::{Path, PathBuf};

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Name prefix marking a generated thumbnail.
pub const DEFAULT_PREFIX: &str = "tn_";
/// Name postfix marking a generated thumbnail.
pub const DEFAULT_POSTFIX: &str = "";
/// Default bounding-box edge, applied to both axes.
pub const DEFAULT_BOUND: u32 = 300;

/// Run-wide generation settings: naming convention and bounding box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailConfig {
    pub prefix: String,
    pub postfix: String,
    pub max_width: u32,
    pub max_height: u32,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            postfix: DEFAULT_POSTFIX.to_string(),
            max_width: DEFAULT_BOUND,
            max_height: DEFAULT_BOUND,
        }
    }
}

impl ThumbnailConfig {
    /// Default naming with a caller-chosen bounding box.
    pub fn with_bounds(max_width: u32, max_height: u32) -> Self {
        Self {
            max_width,
            max_height,
            ..Self::default()
        }
    }
}

/// Per-image result of a generation attempt.
///
/// The two skip variants are reported as "ignored" by the driver but stay
/// distinct here: one carries the source path, the other the target path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A new thumbnail was written at the given target path.
    Created(PathBuf),
    /// The source's own name matches the thumbnail convention; nothing written.
    AlreadyThumbnail(PathBuf),
    /// A file already occupies the derived target path; nothing written.
    ThumbnailExists(PathBuf),
}

/// What the driver does with an image that fails outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first hard error, abandoning unprocessed images.
    #[default]
    Abort,
    /// Report the error and continue with the remaining images.
    Continue,
}

/// Derive the target path for `source` without touching the filesystem.
///
/// Deterministic: the same source and config always yield the same target.
pub fn plan_target(source: &Path, config: &ThumbnailConfig) -> PathBuf {
    let parts = classify(source);
    let name = thumbnail_file_name(
        &config.prefix,
        &parts.base_name,
        &config.postfix,
        &parts.extension,
    );
    parts.directory.join(name)
}

/// Attempt to create a thumbnail for `source`.
///
/// Runs the decision ladder from the module docs. The backend is only
/// invoked on the create path, so skip decisions cost no decoding.
pub fn generate_thumbnail(
    backend: &impl ImageBackend,
    source: &Path,
    config: &ThumbnailConfig,
) -> Result<Outcome> {
    let parts = classify(source);
    if is_thumbnail_name(&parts.base_name, &config.prefix, &config.postfix) {
        return Ok(Outcome::AlreadyThumbnail(parts.path));
    }

    let target = plan_target(source, config);
    if target.is_file() {
        return Ok(Outcome::ThumbnailExists(target));
    }

    backend.thumbnail(&ThumbnailParams {
        source: parts.path,
        target: target.clone(),
        max_width: config.max_width,
        max_height: config.max_height,
    })?;
    Ok(Outcome::Created(target))
}
