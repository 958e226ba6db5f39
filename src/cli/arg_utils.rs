// cli/arg_utils.rs: small parsing and naming helpers shared by the CLI.

use crate::config::CCHF_EXTENSION;

/// Parses an unsigned 32-bit integer from the start of `s`.
///
/// Returns `None` when `s` does not start with a digit or the value overflows,
/// otherwise `Some((value, remainder))` with the unconsumed tail of `s`.
pub fn read_u32_from_str(s: &str) -> Option<(u32, &str)> {
    let end = s
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    let value = s[..end]
        .bytes()
        .try_fold(0u32, |acc, b| acc.checked_mul(10)?.checked_add(u32::from(b - b'0')))?;
    Some((value, &s[end..]))
}

/// clap value parser for `-T`: a whole unsigned integer, nothing after it.
pub fn parse_worker_count(s: &str) -> Result<usize, String> {
    match read_u32_from_str(s) {
        Some((n, "")) => Ok(n as usize),
        _ => Err(format!("invalid worker count '{s}': expected an unsigned integer")),
    }
}

/// Default output name when compressing `src`.
pub fn compressed_name(src: &str) -> String {
    format!("{src}{CCHF_EXTENSION}")
}
