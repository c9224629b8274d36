//! Pure calculation functions for image dimensions.
//!
//! Everything here is pure and testable without any I/O or pixel data.

/// Calculate output dimensions that fit within a bounding box.
///
/// Preserves the source aspect ratio and never upscales: the scale ratio is
/// the smaller of the two axis ratios, clamped at 1.0. Each axis rounds to
/// the nearest pixel with a floor of 1.
///
/// # Arguments
/// * `source` - Source image dimensions (width, height)
/// * `bounds` - Bounding box (max width, max height)
///
/// # Returns
/// * `(width, height)` - Output dimensions, both within `bounds`
///
/// # Examples
/// ```
/// # use thumbgen::imaging::calculate_fit_dimensions;
/// // 1000x500 into a 300x300 box → 300x150
/// assert_eq!(calculate_fit_dimensions((1000, 500), (300, 300)), (300, 150));
///
/// // Already inside the box → unchanged
/// assert_eq!(calculate_fit_dimensions((200, 100), (300, 300)), (200, 100));
/// ```
pub fn calculate_fit_dimensions(source: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (max_w, max_h) = bounds;

    let w_ratio = max_w as f64 / src_w as f64;
    let h_ratio = max_h as f64 / src_h as f64;
    let ratio = w_ratio.min(h_ratio).min(1.0);

    let w = ((src_w as f64 * ratio).round() as u32).max(1);
    let h = ((src_h as f64 * ratio).round() as u32).max(1);
    (w, h)
}
