//! C-compatible scientific float formatting.
//!
//! The output files use `printf`-style `%.12E` notation: twelve fractional
//! digits, an upper-case `E`, and a signed exponent of at least two
//! digits. Rust's `UpperExp` omits the `+` and does not zero-pad, so the
//! exponent is re-rendered here.

/// Format `value` like C's `%.12E`.
///
/// Non-finite values are returned in Rust's default rendering; the
/// simulator never emits them.
pub fn format_e12(value: f64) -> String {
    let formatted = format!("{value:.12E}");
    let Some(pos) = formatted.find('E') else {
        return formatted;
    };
    let mantissa = &formatted[..pos];
    let exponent = &formatted[pos + 1..];
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(rest) => ('-', rest),
        None => ('+', exponent),
    };
    format!("{mantissa}E{sign}{digits:0>2}")
}
