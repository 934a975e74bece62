//! Forward scan for Annex-B start codes.

/// Finds the next start code at or after `from`
///
/// Returns the offset of the leading zero of the next 3-byte (`00 00 01`)
/// or 4-byte (`00 00 00 01`) start code, or `None` if no start code occurs
/// before the end of the buffer.
///
/// The 3-byte pattern is probed first at every position. A true 4-byte
/// start code still matches at its leading zero: `00 00 00` fails the
/// 3-byte probe and falls through to the 4-byte one. A 3-byte probe needs
/// 3 remaining bytes and a 4-byte probe needs 4; the scan never reads past
/// the end of the buffer.
pub fn find_start_code(data: &[u8], from: usize) -> Option<usize> {
    let mut i = from;
    while i + 2 < data.len() {
        if data[i] == 0x00 && data[i + 1] == 0x00 && data[i + 2] == 0x01 {
            return Some(i);
        }
        if i + 3 < data.len()
            && data[i] == 0x00
            && data[i + 1] == 0x00
            && data[i + 2] == 0x00
            && data[i + 3] == 0x01
        {
            return Some(i);
        }
        i += 1;
    }
    None
}
