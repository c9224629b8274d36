//! Image processing — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Thumbnail** | Lanczos3 resample into a bounding box, no upscaling |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Backend**: [`ImageBackend`] trait + params + [`RustBackend`]

pub mod backend;
mod calculations;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend, ThumbnailParams};
pub use calculations::calculate_fit_dimensions;
pub use rust_backend::RustBackend;
