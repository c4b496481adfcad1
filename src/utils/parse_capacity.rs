/// Parses a slot count such as `4096`, `64k` or `1M` (binary multiples).
///
/// ```
/// use simd_iceberg::utils::parse_capacity;
///
/// assert_eq!(parse_capacity("4096"), Ok(4096));
/// assert_eq!(parse_capacity("64K"), Ok(65_536));
/// assert_eq!(parse_capacity(" 1m "), Ok(1 << 20));
/// assert!(parse_capacity("12 parsecs").is_err());
/// ```
pub fn parse_capacity(capacity_str: &str) -> Result<u64, String> {
    let capacity_str = capacity_str.trim().to_lowercase();

    let num_end = capacity_str
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(capacity_str.len());

    let (num_part, unit_part) = capacity_str.split_at(num_end);

    let shift = match unit_part {
        "" => 0,
        "k" => 10,
        "m" => 20,
        "g" => 30,
        _ => return Err(format!("Invalid capacity unit: {}", unit_part)),
    };

    let count = num_part
        .parse::<u64>()
        .map_err(|_| format!("Failed to parse capacity: {}", capacity_str))?;

    count
        .checked_mul(1u64 << shift)
        .ok_or_else(|| format!("Capacity overflows u64: {}", capacity_str))
}
