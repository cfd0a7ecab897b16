use crate::constants::{DEFAULT_INPUT_DIR, DEFAULT_MAX_WIDTH, DEFAULT_QUALITY, DEFAULT_THUMBNAIL_WIDTH};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "img-optimizer",
    about = "Recursively convert JPEG/PNG images to WebP and report the size savings",
    long_about = "img-optimizer walks a directory tree, converts every .jpg/.jpeg/.png file \
                  (lowercase or uppercase suffix) to a .webp file next to the original, \
                  shrinks images wider than the maximum width, and prints how much space \
                  was saved.",
    version,
    after_help = "EXAMPLES:\n  \
    img-optimizer ./public/images\n  \
    img-optimizer ./photos -q 70 -w 1280\n  \
    img-optimizer ./photos --quiet"
)]
pub struct Args {
    #[arg(
        default_value = DEFAULT_INPUT_DIR,
        help = "Root directory to scan for images"
    )]
    pub input: PathBuf,

    #[arg(
        short = 'q',
        long,
        default_value_t = DEFAULT_QUALITY,
        value_parser = clap::value_parser!(u8).range(0..=100),
        help = "WebP quality (0-100)",
        long_help = "Lossy WebP quality from 0 (smallest) to 100 (best looking)."
    )]
    pub quality: u8,

    #[arg(
        short = 'w',
        long,
        default_value_t = DEFAULT_MAX_WIDTH,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Maximum width in pixels",
        long_help = "Images wider than this are shrunk to this width, preserving aspect ratio. \
                     Narrower images are never enlarged."
    )]
    pub max_width: u32,

    #[arg(
        long,
        default_value_t = DEFAULT_THUMBNAIL_WIDTH,
        help = "Thumbnail width in pixels (accepted, currently unused)"
    )]
    pub thumbnail_width: u32,

    #[arg(long, help = "Only print errors")]
    pub quiet: bool,

    #[arg(short = 'v', long, help = "Print resize decisions and timing")]
    pub verbose: bool,
}
