use clap::Parser;
use std::path::PathBuf;
use thumbgen::generate::{self, FailurePolicy, ThumbnailConfig};
use thumbgen::imaging::RustBackend;
use thumbgen::output::{self, Summary};
use thumbgen::scan;

#[derive(Parser)]
#[command(name = "thumbgen")]
#[command(version)]
#[command(about = "Create tn_-prefixed thumbnails for a directory of images")]
#[command(long_about = "\
Create tn_-prefixed thumbnails for a directory of images

Each image gets a thumbnail written next to it, named by prefixing the
file name and keeping the extension:

  photos/
  ├── a.jpg      →  photos/tn_a.jpg
  ├── b.png      →  photos/tn_b.png
  └── tn_a.jpg      (skipped: already a thumbnail)

Thumbnails fit inside WIDTH x HEIGHT preserving aspect ratio and are
never upscaled. Images whose name already carries the thumbnail prefix,
or whose thumbnail is already on disk, count as ignored. Without -e the
scan looks for .jpg, .jpeg and .png files.")]
struct Cli {
    /// Directory to scan for images
    #[arg(default_value = "./")]
    source: PathBuf,

    /// Recurse into subdirectories
    #[arg(short = 'r', long)]
    recursive: bool,

    /// Maximum thumbnail width in pixels
    #[arg(short = 'W', long, default_value_t = generate::DEFAULT_BOUND)]
    width: u32,

    /// Maximum thumbnail height in pixels
    #[arg(short = 'H', long, default_value_t = generate::DEFAULT_BOUND)]
    height: u32,

    /// Only process files with this extension (leading dot optional)
    #[arg(short = 'e', long)]
    ext: Option<String>,

    /// Keep processing after a hard error instead of aborting
    #[arg(long)]
    keep_going: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = ThumbnailConfig::with_bounds(cli.width, cli.height);
    let ext = cli.ext.as_deref().map(scan::normalize_extension);
    let policy = if cli.keep_going {
        FailurePolicy::Continue
    } else {
        FailurePolicy::Abort
    };

    let images: Vec<PathBuf> = scan::scan(&cli.source, cli.recursive, ext.as_deref()).collect();
    output::print_found(images.len());

    let backend = RustBackend::new();
    let mut summary = Summary::new(images.len());
    for image in &images {
        match generate::generate_thumbnail(&backend, image, &config) {
            Ok(outcome) => {
                output::print_outcome(&outcome);
                summary.record(&outcome);
            }
            Err(err) => match policy {
                FailurePolicy::Abort => {
                    return Err(output::format_failure(image, &err).into());
                }
                FailurePolicy::Continue => {
                    output::print_failure(image, &err);
                    summary.record_failure();
                }
            },
        }
    }

    output::print_summary(&summary);
    Ok(())
}
