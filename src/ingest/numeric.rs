//! Lenient numeric coercion for source fields.
//!
//! Source files are hand-maintained and arrive with thousands separators,
//! currency symbols or stray text. A field that still fails to parse after
//! cleanup becomes zero; a load never aborts on a bad number.


fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

/// Strip non-numeric punctuation and parse, defaulting to `0.0`.
pub fn coerce_f64(raw: &str) -> f64 {
    let cleaned: String = raw.chars().filter(|c| is_numeric_char(*c)).collect();

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Coerce to an unsigned integer, truncating toward zero.
///
/// Float-to-int `as` casts saturate, so negatives become 0 and oversized
/// values clamp to `u32::MAX`.
pub fn coerce_u32(raw: &str) -> u32 {
    coerce_f64(raw) as u32
}

/// Coerce to a signed integer, truncating toward zero.
pub fn coerce_i32(raw: &str) -> i32 {
    coerce_f64(raw) as i32
}
