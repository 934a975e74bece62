//! Hex-string formatting.

use std::fmt::Write;

/// Formats bytes as concatenated two-digit lowercase hex
///
/// With `with_prefix` the string is led by `0x`. The lowercase convention
/// is fixed; callers comparing rendered output can rely on it.
///
/// ```rust
/// use nalio::utils::format_hex;
///
/// assert_eq!(format_hex(&[0x00, 0x67, 0x4B, 0xD9], true), "0x00674bd9");
/// assert_eq!(format_hex(&[0x65], false), "65");
/// ```
pub fn format_hex(bytes: &[u8], with_prefix: bool) -> String {
    let mut out = String::with_capacity(2 + bytes.len() * 2);
    if with_prefix {
        out.push_str("0x");
    }
    for byte in bytes {
        // Writing into a String cannot fail.
        let _ = write!(out, "{:02x}", byte);
    }
    out
}
