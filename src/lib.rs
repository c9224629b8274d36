//! # Thumbgen
//!
//! A batch thumbnail generator for directories of images. Point it at a
//! folder and it creates a `tn_`-prefixed sibling for every image that
//! doesn't have one yet, fitted inside a bounding box.
//!
//! # Architecture: Scan, Decide, Generate
//!
//! A run is a pipeline of three small stages:
//!
//! ```text
//! 1. Scan      directory  →  candidate paths     (lazy per-extension walks)
//! 2. Decide    path       →  outcome             (skip by name, skip by target, or create)
//! 3. Generate  image      →  tn_<name> sibling   (fit within bounds, same format)
//! ```
//!
//! The stages are separate so each is testable on its own: scanning never
//! opens an image, the per-image decision works against a backend trait and
//! can run on a mock, and the resize math is a pure function.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the source directory and yields candidate image paths |
//! | [`naming`] | Path classification and the thumbnail naming convention |
//! | [`generate`] | Per-image decision ladder: skip, or create via a backend |
//! | [`imaging`] | Backend trait, fit-dimension math, pure-Rust `image` backend |
//! | [`output`] | CLI report formatting — found line, per-image lines, summary |
//!
//! # Design Decisions
//!
//! ## Skips Are Outcomes, Not Errors
//!
//! Two conditions make an image skippable: its own name already matches the
//! thumbnail convention, or its target already exists on disk. Both are
//! ordinary [`generate::Outcome`] variants, while decode and IO failures are
//! real errors. The caller picks a [`generate::FailurePolicy`]; the default
//! aborts the run on the first hard error.
//!
//! ## Fit Within, Never Upscale
//!
//! Thumbnail dimensions preserve the source aspect ratio inside the bounding
//! box ([`imaging::calculate_fit_dimensions`]). A source already inside the
//! box is written as an unscaled copy rather than enlarged — the thumbnail
//! exists either way, it just isn't blurry.
//!
//! ## Pure-Rust Imaging
//!
//! The [`imaging`] module uses the `image` crate (Lanczos3 resampling) behind
//! a backend trait. No ImageMagick, no system dependencies: the binary is
//! self-contained. Thumbnails are encoded in the source's own format, chosen
//! by file extension, so a `.png` gets a `.png` thumbnail.

pub mod generate;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod scan;
