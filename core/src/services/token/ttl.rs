//! Token lifetime parsing

use once_cell::sync::Lazy;
use regex::Regex;

/// Lifetime used whenever a duration string cannot be parsed (15 minutes)
pub const FALLBACK_TTL_SECONDS: i64 = 900;

static TTL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)([smhdSMHD])$").expect("Invalid TTL regex"));

/// Parse a duration string such as `"15m"` or `"7d"` into seconds
///
/// Accepts a decimal count followed by one unit letter (`s`, `m`, `h`, `d`,
/// case-insensitive). Absent, empty or malformed input, and counts that
/// overflow, yield [`FALLBACK_TTL_SECONDS`]. Never fails.
pub fn parse_ttl(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return FALLBACK_TTL_SECONDS;
    };
    let Some(captures) = TTL_PATTERN.captures(raw) else {
        return FALLBACK_TTL_SECONDS;
    };

    let multiplier = match captures[2].to_ascii_lowercase().as_str() {
        "s" => 1,
        "m" => 60,
        "h" => 3_600,
        "d" => 86_400,
        _ => return FALLBACK_TTL_SECONDS,
    };

    captures[1]
        .parse::<i64>()
        .ok()
        .and_then(|count| count.checked_mul(multiplier))
        .unwrap_or(FALLBACK_TTL_SECONDS)
}
