use crate::constants::{PROGRESS_SPINNER_TEMPLATE, SCAN_PREFIX};
use crate::error::{OptimizeError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Recursively collects every regular file under `root` whose name ends with
/// one of `extensions`.
///
/// Entries are visited depth-first and sorted by file name within each
/// directory, so the same tree always yields the same order. Entries that
/// cannot be read are reported and skipped.
///
/// # Errors
/// * `OptimizeError::InputDirNotFound` if `root` does not exist
/// * `OptimizeError::NotADirectory` if `root` is a file
pub fn collect_image_files(root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(OptimizeError::InputDirNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(OptimizeError::NotADirectory(root.to_path_buf()));
    }

    let spinner = create_scan_spinner(root);
    let image_files = filter_image_entries(
        WalkDir::new(root).sort_by_file_name(),
        extensions,
        |count| spinner.set_message(format!("Scanning... {} images found", count)),
    );

    spinner.finish_and_clear();
    Ok(image_files)
}

fn filter_image_entries<I, E>(
    entries: I,
    extensions: &[String],
    mut on_match: impl FnMut(usize),
) -> Vec<PathBuf>
where
    I: IntoIterator<Item = std::result::Result<DirEntry, E>>,
    E: fmt::Display,
{
    let mut image_files = Vec::new();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                crate::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if entry.file_type().is_file() && is_image_file(entry.path(), extensions) {
            image_files.push(entry.into_path());
            on_match(image_files.len());
        }
    }

    image_files
}

/// Case-sensitive suffix match of the file name against `extensions`.
pub fn is_image_file(path: &Path, extensions: &[String]) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| extensions.iter().any(|ext| name.ends_with(ext.as_str())))
        .unwrap_or(false)
}

fn create_scan_spinner(root: &Path) -> ProgressBar {
    if crate::logger::is_quiet() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template(PROGRESS_SPINNER_TEMPLATE) {
        pb.set_style(style);
    }
    pb.set_message(format!("{} Scanning {}", SCAN_PREFIX, root.display()));
    pb
}
