//! The NAL unit record and header classification.

use bytes::Bytes;

use crate::codec::Codec;
use crate::error::{NalioError, Result};

/// One demarcated NAL unit, immutable once produced
///
/// The start and head bytes are copied into independent [`Bytes`] buffers,
/// so the record never borrows the analysed buffer and may outlive it.
#[derive(Debug, Clone)]
pub struct NalUnit {
    /// Ordinal position among the units found in one pass, starting at 0
    pub index: usize,
    /// Offset of the unit's start code within the analysed buffer
    pub offset: usize,
    /// Total size in bytes: start code + header + payload, up to the next
    /// start code or to the end of the buffer
    pub length: usize,
    /// Codec family whose header layout classified this unit
    pub codec: Codec,
    /// The 3 or 4 literal start-code bytes
    pub start_bytes: Bytes,
    /// The 1 (H.264) or 2 (H.265) literal header bytes following the start code
    pub head_bytes: Bytes,
    /// Numeric unit type extracted from the header
    pub nal_type: u8,
}

impl NalUnit {
    /// Classifies the unit whose start code begins at `offset`
    ///
    /// The caller guarantees that `offset` points at a start code found by
    /// the scanner and that `offset + length <= data.len()`. The start-code
    /// length is 3 when the byte at `offset + 2` is `0x01`, else 4. If the
    /// buffer ends before the full header, the classification fails with
    /// [`NalioError::TruncatedUnit`] instead of reading out of bounds.
    pub fn parse(
        data: &[u8],
        index: usize,
        offset: usize,
        length: usize,
        codec: Codec,
    ) -> Result<Self> {
        let nal = &data[offset..];
        let start_len = if nal[2] == 0x01 { 3 } else { 4 };
        let layout = codec.layout();

        let needed = start_len + layout.header_len;
        if nal.len() < needed {
            return Err(NalioError::TruncatedUnit {
                offset,
                needed,
                available: nal.len(),
            });
        }

        let head = &nal[start_len..needed];
        let nal_type = (head[0] >> layout.type_shift) & layout.type_mask;

        Ok(NalUnit {
            index,
            offset,
            length,
            codec,
            start_bytes: Bytes::copy_from_slice(&nal[..start_len]),
            head_bytes: Bytes::copy_from_slice(head),
            nal_type,
        })
    }

    /// Human-readable name of the unit type, a pure per-codec lookup
    pub fn type_name(&self) -> &'static str {
        self.codec.type_name(self.nal_type)
    }

    /// Returns `true` if this unit signals a decoder refresh point
    pub fn is_keyframe(&self) -> bool {
        self.codec.is_keyframe_type(self.nal_type)
    }
}
