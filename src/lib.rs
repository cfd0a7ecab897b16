pub mod cli;
pub mod codec;
pub mod constants;
pub mod error;
pub mod logger;
pub mod optimizer;
pub mod options;
pub mod report;
pub mod stats;
pub mod transcoder;
pub mod walker;

pub use codec::{encode_webp, ImageCodec, WebpCodec};
pub use error::{OptimizeError, Result};
pub use optimizer::optimize_directory;
pub use options::OptimizeOptions;
pub use report::format_bytes;
pub use stats::RunStats;
pub use transcoder::{convert_image, fit_within_width, output_path_for, ConversionResult};
pub use walker::{collect_image_files, is_image_file};
