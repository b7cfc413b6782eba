//! Byte counts for the upload page.

const KIB: u64 = 1024;
const UNITS: [&str; 5] = ["KB", "MB", "GB", "TB", "PB"];

/// Size in whole kilobytes, always rounded down.
pub fn kilobytes(size: u64) -> String {
    format!("{} KB", size / KIB)
}

/// Largest unit that keeps the value at or above one, two decimals.
///
/// Sizes under a kilobyte are shown as plain bytes.
pub fn human_readable(size: u64) -> String {
    if size < KIB {
        return format!("{} B", size);
    }
    let mut value = size as f64 / KIB as f64;
    let mut unit = UNITS[0];
    for next in &UNITS[1..] {
        if value < KIB as f64 {
            break;
        }
        value /= KIB as f64;
        unit = next;
    }
    format!("{:.2} {}", value, unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kilobytes_round_down() {
        assert_eq!(kilobytes(0), "0 KB");
        assert_eq!(kilobytes(1023), "0 KB");
        assert_eq!(kilobytes(1024), "1 KB");
        assert_eq!(kilobytes(2047), "1 KB");
        assert_eq!(kilobytes(10 * 1024 * 1024), "10240 KB");
    }

    #[test]
    fn human_readable_sizes() {
        assert_eq!(human_readable(512), "512 B");
        assert_eq!(human_readable(1536), "1.50 KB");
        assert_eq!(human_readable(5 * 1024 * 1024), "5.00 MB");
        assert_eq!(human_readable(u64::MAX), "16384.00 PB");
    }
}
