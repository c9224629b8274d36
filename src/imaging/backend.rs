//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations the generator needs:
//! identify and thumbnail. The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust, statically
//! linked into the binary. Tests drive the generator through a recording mock
//! instead, so decision logic is covered without decoding a single pixel.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Decode failed: {0}")]
    Decode(String),
    #[error("Encode failed: {0}")]
    Encode(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Parameters for a thumbnail operation: decode `source`, fit it within the
/// bounding box, encode to `target` in the format its extension names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailParams {
    pub source: PathBuf,
    pub target: PathBuf,
    pub max_width: u32,
    pub max_height: u32,
}

/// Trait for image processing backends.
///
/// Both operations take paths, not pixel buffers — the backend owns the
/// decode/encode lifecycle so image handles never outlive a single call.
pub trait ImageBackend {
    /// Get image dimensions without decoding the full image.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Produce a bounded, aspect-preserving copy of `source` at `target`.
    fn thumbnail(&self, params: &ThumbnailParams) -> Result<(), BackendError>;
}
