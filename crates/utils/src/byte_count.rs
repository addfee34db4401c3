//! Human-readable byte counts for log output

const ONE_KB: u64 = 1024;
const ONE_MB: u64 = ONE_KB * ONE_KB;
const ONE_GB: u64 = ONE_KB * ONE_MB;
const ONE_TB: u64 = ONE_KB * ONE_GB;
const ONE_PB: u64 = ONE_KB * ONE_TB;
const ONE_EB: u64 = ONE_KB * ONE_PB;

/// Render a byte count using the largest whole binary unit.
///
/// The value is truncated, not rounded: 1.9 GB renders as `"1 GB"`.
pub fn format_byte_count(bytes: u64) -> String {
    let units = [
        (ONE_EB, "EB"),
        (ONE_PB, "PB"),
        (ONE_TB, "TB"),
        (ONE_GB, "GB"),
        (ONE_MB, "MB"),
        (ONE_KB, "KB"),
    ];

    for (unit, suffix) in units {
        if bytes / unit > 0 {
            return format!("{} {suffix}", bytes / unit);
        }
    }

    format!("{bytes} bytes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values_are_bytes() {
        assert_eq!(format_byte_count(0), "0 bytes");
        assert_eq!(format_byte_count(1023), "1023 bytes");
    }

    #[test]
    fn test_units_truncate() {
        assert_eq!(format_byte_count(1024), "1 KB");
        assert_eq!(format_byte_count(15 * ONE_MB), "15 MB");
        assert_eq!(format_byte_count(2 * ONE_GB - 1), "1 GB");
        assert_eq!(format_byte_count(u64::MAX), "15 EB");
    }
}
