use crate::transcoder::{savings_percent, ConversionResult};

/// Counters for one run, folded by the driver after each file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    /// Files converted successfully.
    pub processed: usize,
    /// Reserved; no current operation skips a file.
    pub skipped: usize,
    /// Files that failed at any step.
    pub errors: usize,
    /// Sum of input sizes for processed files.
    pub original_bytes: u64,
    /// Sum of output sizes for processed files.
    pub optimized_bytes: u64,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self, result: &ConversionResult) {
        self.processed += 1;
        self.original_bytes += result.original_size;
        self.optimized_bytes += result.optimized_size;
    }

    pub fn record_error(&mut self) {
        self.errors += 1;
    }

    pub fn attempted(&self) -> usize {
        self.processed + self.errors
    }

    /// `None` until at least one non-empty original has been recorded.
    pub fn overall_savings(&self) -> Option<f64> {
        savings_percent(self.original_bytes, self.optimized_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn result(original_size: u64, optimized_size: u64) -> ConversionResult {
        ConversionResult {
            input: PathBuf::from("in.jpg"),
            output: PathBuf::from("in.webp"),
            original_size,
            optimized_size,
            original_dimensions: (10, 10),
            output_dimensions: (10, 10),
        }
    }

    #[test]
    fn test_new_stats_are_zero() {
        let stats = RunStats::new();
        assert_eq!(stats, RunStats::default());
        assert_eq!(stats.attempted(), 0);
        assert_eq!(stats.overall_savings(), None);
    }

    #[test]
    fn test_record_success_and_error() {
        let mut stats = RunStats::new();
        stats.record_success(&result(1000, 400));
        stats.record_success(&result(3000, 1600));
        stats.record_error();

        assert_eq!(stats.processed, 2);
        assert_eq!(stats.errors, 1);
        assert_eq!(stats.skipped, 0);
        assert_eq!(stats.attempted(), 3);
        assert_eq!(stats.original_bytes, 4000);
        assert_eq!(stats.optimized_bytes, 2000);
        assert_eq!(stats.overall_savings(), Some(50.0));
    }

    #[test]
    fn test_errors_do_not_touch_byte_totals() {
        let mut stats = RunStats::new();
        stats.record_error();
        stats.record_error();

        assert_eq!(stats.original_bytes, 0);
        assert_eq!(stats.optimized_bytes, 0);
        assert_eq!(stats.overall_savings(), None);
    }
}
