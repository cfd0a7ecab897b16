use crate::codec::ImageCodec;
use crate::constants::{INPUT_PREFIX, SCAN_PREFIX, START_PREFIX};
use crate::error::Result;
use crate::options::OptimizeOptions;
use crate::report::{print_file_error, print_file_result, print_summary, NO_IMAGES_MESSAGE};
use crate::stats::RunStats;
use crate::transcoder::convert_image;
use crate::walker::collect_image_files;
use std::time::Instant;

/// Converts every image under `options.input_dir` to WebP, one file at a
/// time, and prints a summary.
///
/// Per-file failures are logged and counted; only a missing or invalid input
/// directory aborts the run.
///
/// # Returns
/// * `Ok(RunStats)` - counters for the run; `processed + errors` equals the
///   number of discovered files
/// * `Err(OptimizeError)` - if the input directory is missing or not a
///   directory
pub fn optimize_directory<C: ImageCodec + ?Sized>(
    codec: &C,
    options: &OptimizeOptions,
) -> Result<RunStats> {
    let root = options.input_dir.as_path();

    crate::info!("{} Starting image optimization...", START_PREFIX);
    crate::info!("{} Input: {}", INPUT_PREFIX, root.display());
    crate::verbose!(
        "Quality: {}, max width: {}px",
        options.quality,
        options.max_width
    );

    let start_time = Instant::now();
    let image_files = collect_image_files(root, &options.extensions)?;
    let mut stats = RunStats::new();

    if image_files.is_empty() {
        crate::info!("{}", NO_IMAGES_MESSAGE);
        return Ok(stats);
    }

    crate::info!("{} Found {} images to optimize\n", SCAN_PREFIX, image_files.len());

    for input_path in &image_files {
        match convert_image(codec, input_path, options) {
            Ok(result) => {
                print_file_result(&result, root);
                stats.record_success(&result);
            }
            Err(e) => {
                print_file_error(input_path, root, &e);
                stats.record_error();
            }
        }
    }

    print_summary(&stats);
    crate::verbose!("Finished in {:.2?}", start_time.elapsed());

    Ok(stats)
}
