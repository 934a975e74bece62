//! # Codec Selection
//!
//! The analyser supports two codec families with different NAL header
//! layouts. [`Codec`] is a closed tagged variant: each variant resolves once
//! to a [`HeaderLayout`] carrying the header width and the bit-field
//! position of the unit type as data, so the per-byte classification code
//! never branches on the codec. Adding a codec means adding a layout and a
//! type table, not touching the scanner or the session.

/// H.264/AVC NAL unit type table
pub mod h264;
/// H.265/HEVC NAL unit type table
pub mod h265;

use std::fmt;
use std::str::FromStr;

use crate::error::NalioError;

/// Fixed bit layout of a codec family's NAL unit header
///
/// The unit type of a header is `(first_header_byte >> type_shift) & type_mask`.
#[derive(Debug, Clone, Copy)]
pub struct HeaderLayout {
    /// Header size in bytes, immediately following the start code
    pub header_len: usize,
    /// Right shift applied to the first header byte
    pub type_shift: u8,
    /// Mask applied after shifting
    pub type_mask: u8,
}

// H.264: forbidden(1) | nal_ref_idc(2) | nal_unit_type(5)
const H264_LAYOUT: HeaderLayout = HeaderLayout {
    header_len: 1,
    type_shift: 0,
    type_mask: 0x1F,
};

// H.265: forbidden(1) | nal_unit_type(6) | layer_id(6) | temporal_id(3)
const H265_LAYOUT: HeaderLayout = HeaderLayout {
    header_len: 2,
    type_shift: 1,
    type_mask: 0x3F,
};

/// Codec family of the analysed elementary stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    /// H.264/AVC, 1-byte NAL headers
    H264,
    /// H.265/HEVC, 2-byte NAL headers
    H265,
}

impl Codec {
    /// Returns the NAL header layout of this codec family
    pub fn layout(&self) -> &'static HeaderLayout {
        match self {
            Codec::H264 => &H264_LAYOUT,
            Codec::H265 => &H265_LAYOUT,
        }
    }

    /// Extracts the numeric unit type from the first header byte
    pub fn unit_type(&self, header: u8) -> u8 {
        let layout = self.layout();
        (header >> layout.type_shift) & layout.type_mask
    }

    /// Returns the human-readable name of a unit type
    ///
    /// Unit types outside the per-codec table map to `"Other"`.
    pub fn type_name(&self, nal_type: u8) -> &'static str {
        match self {
            Codec::H264 => h264::NalUnitType::from_u8(nal_type).name(),
            Codec::H265 => h265::NalUnitType::from_u8(nal_type).name(),
        }
    }

    /// Returns `true` if the unit type signals a decoder refresh point
    pub fn is_keyframe_type(&self, nal_type: u8) -> bool {
        match self {
            Codec::H264 => h264::NalUnitType::from_u8(nal_type).is_keyframe(),
            Codec::H265 => h265::NalUnitType::from_u8(nal_type).is_keyframe(),
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Codec::H264 => write!(f, "h264"),
            Codec::H265 => write!(f, "h265"),
        }
    }
}

impl FromStr for Codec {
    type Err = NalioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "h264" | "avc" => Ok(Codec::H264),
            "h265" | "hevc" => Ok(Codec::H265),
            other => Err(NalioError::InvalidData(format!(
                "unknown codec '{}', expected h264 or h265",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_h264_unit_type_extraction() {
        // nal_ref_idc=3, nal_unit_type=5 (IDR)
        assert_eq!(Codec::H264.unit_type(0x65), 0x05);
        // nal_ref_idc=3, nal_unit_type=7 (SPS)
        assert_eq!(Codec::H264.unit_type(0x67), 0x07);
    }

    #[test]
    fn test_h265_unit_type_extraction() {
        // 0x40 >> 1 & 0x3F = 32 (VPS)
        assert_eq!(Codec::H265.unit_type(0x40), 32);
        assert_eq!(Codec::H265.unit_type(0x42), 33);
    }

    #[test]
    fn test_header_layout() {
        assert_eq!(Codec::H264.layout().header_len, 1);
        assert_eq!(Codec::H265.layout().header_len, 2);
    }

    #[test]
    fn test_codec_from_str() {
        assert_eq!("h264".parse::<Codec>().unwrap(), Codec::H264);
        assert_eq!("HEVC".parse::<Codec>().unwrap(), Codec::H265);
        assert!("mpeg2".parse::<Codec>().is_err());
    }
}
