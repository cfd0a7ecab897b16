pub const DEFAULT_QUALITY: u8 = 80;
pub const MIN_QUALITY: u8 = 0;
pub const MAX_QUALITY: u8 = 100;

pub const DEFAULT_MAX_WIDTH: u32 = 1920;
pub const DEFAULT_THUMBNAIL_WIDTH: u32 = 300;
pub const DEFAULT_INPUT_DIR: &str = "./images";

/// Suffixes matched verbatim against the file name; `.Jpg` and other
/// mixed-case spellings do not match.
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] =
    &[".jpg", ".jpeg", ".png", ".JPG", ".JPEG", ".PNG"];

pub const OUTPUT_EXTENSION: &str = "webp";

pub const BYTE_UNITS: &[&str] = &["Bytes", "KB", "MB", "GB"];

pub const PROGRESS_SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";

// Common output message prefixes
pub const SUCCESS_PREFIX: &str = "✅";
pub const SCAN_PREFIX: &str = "🔍";
pub const SUMMARY_PREFIX: &str = "📊";
pub const SIZE_PREFIX: &str = "📦";
pub const SAVINGS_PREFIX: &str = "🎯";
pub const ERROR_PREFIX: &str = "❌";
pub const START_PREFIX: &str = "🚀";
pub const INPUT_PREFIX: &str = "📁";
