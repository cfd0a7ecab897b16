//! Console reporting for per-file results and the run summary.
//!
//! All output goes through the logger macros so `--quiet` silences
//! everything except errors.

use crate::constants::{
    BYTE_UNITS, ERROR_PREFIX, SAVINGS_PREFIX, SIZE_PREFIX, SUCCESS_PREFIX, SUMMARY_PREFIX,
};
use crate::error::OptimizeError;
use crate::stats::RunStats;
use crate::transcoder::ConversionResult;
use std::path::Path;

pub const NO_IMAGES_MESSAGE: &str = "No images found to optimize.";

/// Format a byte count with the largest unit that keeps the mantissa below
/// 1024, e.g. `1536` -> `"1.50 KB"`.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let unit_index = (bytes.ilog(1024) as usize).min(BYTE_UNITS.len() - 1);
    let mantissa = bytes as f64 / 1024f64.powi(unit_index as i32);
    format!("{:.2} {}", mantissa, BYTE_UNITS[unit_index])
}

pub fn format_savings(savings: Option<f64>) -> String {
    match savings {
        Some(pct) if pct < 0.0 => format!("{:.1}% larger", pct.abs()),
        Some(pct) => format!("{:.1}% smaller", pct),
        None => "n/a".to_string(),
    }
}

/// Path shown in logs: relative to `root` when possible.
pub fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

pub fn file_result_lines(result: &ConversionResult, root: &Path) -> [String; 2] {
    [
        format!(
            "{} Optimized: {}",
            SUCCESS_PREFIX,
            display_path(&result.input, root)
        ),
        format!(
            "   {} → {} ({})",
            format_bytes(result.original_size),
            format_bytes(result.optimized_size),
            format_savings(result.savings_percent())
        ),
    ]
}

pub fn print_file_result(result: &ConversionResult, root: &Path) {
    for line in file_result_lines(result, root) {
        crate::info!("{}", line);
    }
    if result.was_resized() {
        crate::verbose!(
            "Resized from {}x{} to {}x{}",
            result.original_dimensions.0,
            result.original_dimensions.1,
            result.output_dimensions.0,
            result.output_dimensions.1
        );
    }
    if result.optimized_size > result.original_size {
        crate::warn!(
            "WebP output is larger than the original: {}",
            display_path(&result.output, root)
        );
    }
}

pub fn print_file_error(path: &Path, root: &Path, err: &OptimizeError) {
    crate::error!("Failed to process {}: {}", display_path(path, root), err);
}

pub fn summary_lines(stats: &RunStats) -> Vec<String> {
    let mut lines = vec![
        format!("\n{} Optimization Summary:", SUMMARY_PREFIX),
        format!("  {} Processed: {}", SUCCESS_PREFIX, stats.processed),
        format!("  {} Errors: {}", ERROR_PREFIX, stats.errors),
        format!(
            "  {} Original size: {}",
            SIZE_PREFIX,
            format_bytes(stats.original_bytes)
        ),
        format!(
            "  {} Optimized size: {}",
            SIZE_PREFIX,
            format_bytes(stats.optimized_bytes)
        ),
    ];

    if let Some(savings) = stats.overall_savings() {
        lines.push(format!("  {} Total savings: {:.1}%", SAVINGS_PREFIX, savings));
    }

    lines
}

pub fn print_summary(stats: &RunStats) {
    for line in summary_lines(stats) {
        crate::info!("{}", line);
    }
}
