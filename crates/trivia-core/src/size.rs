//! Human-scaled byte sizes for the manifest summary.

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const STEP: f64 = 1024.0;

/// Format a byte count with binary prefixes.
///
/// Two-decimal rounding with trailing zeros dropped: `2468` → `"2.41 KB"`,
/// `1536` → `"1.5 KB"`, `0` → `"0 Bytes"`. Sizes past the gigabyte range
/// stay in GB.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut scaled = bytes as f64;
    let mut unit = 0;
    while scaled >= STEP && unit < UNITS.len() - 1 {
        scaled /= STEP;
        unit += 1;
    }

    let fixed = format!("{scaled:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}
