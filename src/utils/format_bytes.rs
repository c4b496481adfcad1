const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

/// Renders a byte count for humans, in powers of 1024 with two decimals.
///
/// # Examples
/// ```
/// use simd_iceberg::format_bytes;
///
/// assert_eq!(format_bytes(512), "512 bytes");
/// assert_eq!(format_bytes(2048), "2.00 KB");
/// assert_eq!(format_bytes(16 * 1024 * 1024), "16.00 MB");
/// assert_eq!(format_bytes(3 << 40), "3.00 TB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} bytes", bytes);
    }

    let mut scaled = bytes as f64 / 1024.0;
    let mut unit = 0;
    while scaled >= 1024.0 && unit + 1 < UNITS.len() {
        scaled /= 1024.0;
        unit += 1;
    }

    format!("{:.2} {}", scaled, UNITS[unit])
}
