use img_optimizer::constants::SUPPORTED_IMAGE_EXTENSIONS;
use img_optimizer::report::format_bytes;
use img_optimizer::transcoder::{fit_within_width, output_path_for, savings_percent};
use img_optimizer::{is_image_file, OptimizeOptions};
use proptest::prelude::*;
use std::path::Path;

fn default_extensions() -> Vec<String> {
    SUPPORTED_IMAGE_EXTENSIONS
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

proptest! {
    #[test]
    fn options_quality_in_range(quality in 0u8..=100u8) {
        prop_assert!(OptimizeOptions::new(".", Some(quality), None, None).is_ok());
    }

    #[test]
    fn options_quality_above_range(quality in 101u8..=255u8) {
        prop_assert!(OptimizeOptions::new(".", Some(quality), None, None).is_err());
    }

    #[test]
    fn fit_within_width_never_enlarges(
        width in 1u32..=10_000u32,
        height in 1u32..=10_000u32,
        max_width in 1u32..=10_000u32
    ) {
        match fit_within_width(width, height, max_width) {
            None => prop_assert!(width <= max_width),
            Some((new_w, new_h)) => {
                prop_assert!(width > max_width);
                prop_assert_eq!(new_w, max_width);
                prop_assert!(new_h >= 1);
                prop_assert!(new_h <= height);
            }
        }
    }

    #[test]
    fn fit_within_width_preserves_aspect_ratio(
        width in 200u32..=8_000u32,
        height in 200u32..=8_000u32,
        max_width in 100u32..=199u32
    ) {
        let (new_w, new_h) = fit_within_width(width, height, max_width).unwrap();
        let expected = height as f64 * new_w as f64 / width as f64;
        prop_assert!((new_h as f64 - expected).abs() <= 0.5);
    }

    #[test]
    fn format_bytes_mantissa_below_1024(bytes in 1u64..(1u64 << 40)) {
        let formatted = format_bytes(bytes);
        let (mantissa, unit) = formatted.split_once(' ').unwrap();
        let mantissa: f64 = mantissa.parse().unwrap();
        prop_assert!(["Bytes", "KB", "MB", "GB"].contains(&unit));
        // Two-decimal rounding can lift e.g. 1023.999 KB to "1024.00 KB".
        if unit != "GB" {
            prop_assert!(mantissa <= 1024.0);
        }
        prop_assert!(mantissa >= 1.0);
    }

    #[test]
    fn savings_percent_bounded_when_shrinking(
        original in 1u64..=u32::MAX as u64,
        ratio in 0.0f64..=1.0f64
    ) {
        let optimized = (original as f64 * ratio) as u64;
        let pct = savings_percent(original, optimized).unwrap();
        prop_assert!((0.0..=100.0).contains(&pct));
    }

    #[test]
    fn is_image_file_matches_configured_suffixes(
        stem in "[a-zA-Z0-9_-]{1,12}",
        extension in prop::sample::select(vec![
            "jpg", "jpeg", "png", "JPG", "JPEG", "PNG", "Jpg", "pNg", "webp", "gif", "txt",
        ])
    ) {
        let filename = format!("{}.{}", stem, extension);
        let expected = matches!(extension, "jpg" | "jpeg" | "png" | "JPG" | "JPEG" | "PNG");
        prop_assert_eq!(is_image_file(Path::new(&filename), &default_extensions()), expected);
    }

    #[test]
    fn output_path_is_deterministic_webp_sibling(
        dir in "[a-z]{1,8}",
        stem in "[a-zA-Z0-9_-]{1,12}",
        extension in prop::sample::select(vec!["jpg", "JPEG", "png"])
    ) {
        let input = Path::new(&dir).join(format!("{}.{}", stem, extension));
        let first = output_path_for(&input).unwrap();
        let second = output_path_for(&input).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.parent(), input.parent());
        prop_assert_eq!(first.file_name().unwrap().to_string_lossy(), format!("{}.webp", stem));
    }
}
