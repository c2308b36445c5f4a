//! Human-readable sizes for attached case documents.

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Render a byte count in binary units: `0 Bytes`, `512 Bytes`, `1.5 KB`,
/// `2.25 MB`, `3 GB`.
///
/// The value is rounded to at most two decimals, trailing zeros dropped,
/// with `.` as the decimal separator. Sizes past 1024 GB stay in GB.
pub fn format_file_size(bytes: u64) -> String {
    let mut unit = 0;
    while unit + 1 < UNITS.len() && bytes >= 1u64 << (10 * (unit + 1)) {
        unit += 1;
    }
    let scaled = bytes as f64 / (1u64 << (10 * unit)) as f64;
    let rounded = (scaled * 100.0).round() / 100.0;
    format!("{rounded} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_small_sizes() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(1023), "1023 Bytes");
    }

    #[test]
    fn unit_boundaries() {
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1024 * 1024), "1 MB");
        assert_eq!(format_file_size(1024 * 1024 * 1024), "1 GB");
    }

    #[test]
    fn fractional_sizes() {
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(2_359_296), "2.25 MB");
        assert_eq!(format_file_size(1_000_000), "976.56 KB");
    }

    #[test]
    fn sizes_past_gigabytes_stay_in_gb() {
        assert_eq!(format_file_size(2048 * 1024 * 1024 * 1024), "2048 GB");
    }
}
