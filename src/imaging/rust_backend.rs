//! Pure Rust image processing backend — zero external dependencies.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image` crate (pure Rust decoders) |
//! | Identify dimensions | `image::image_dimensions` (header read, no full decode) |
//! | Resample | `image::DynamicImage::resize_exact` with `Lanczos3` filter |
//! | Encode | `image::DynamicImage::save`, format chosen by target extension |

use super::backend::{BackendError, Dimensions, ImageBackend, ThumbnailParams};
use super::calculations::calculate_fit_dimensions;
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use std::path::Path;

/// Pure Rust backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| BackendError::Decode(format!("Failed to decode {}: {}", path.display(), e)))
}

/// Save to the given path; the format comes from the path's extension.
fn save_image(img: &DynamicImage, path: &Path) -> Result<(), BackendError> {
    img.save(path)
        .map_err(|e| BackendError::Encode(format!("Failed to encode {}: {}", path.display(), e)))
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| {
            BackendError::Decode(format!(
                "Failed to read dimensions of {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Dimensions { width, height })
    }

    fn thumbnail(&self, params: &ThumbnailParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;

        let source_dims = (img.width(), img.height());
        let (w, h) = calculate_fit_dimensions(source_dims, (params.max_width, params.max_height));

        // Already inside the box: write an unscaled copy, no resample pass.
        if (w, h) == source_dims {
            return save_image(&img, &params.target);
        }

        let resized = img.resize_exact(w, h, FilterType::Lanczos3);
        save_image(&resized, &params.target)
    }
}
