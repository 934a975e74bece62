//! H.265/HEVC NAL unit types recognised by the analyser.

/// H.265 NAL unit type, derived from bits 1..=6 of the first header byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NalUnitType {
    /// IDR picture with leading pictures allowed (type 19)
    IdrWRadl,
    /// IDR picture without leading pictures (type 20)
    IdrNLp,
    /// Video parameter set (type 32)
    Vps,
    /// Sequence parameter set (type 33)
    Sps,
    /// Picture parameter set (type 34)
    Pps,
    /// Prefix supplemental enhancement information (type 39)
    Sei,
    /// Any type outside the table above
    Other(u8),
}

impl NalUnitType {
    /// Maps a numeric unit type to its variant
    pub fn from_u8(value: u8) -> Self {
        match value {
            19 => NalUnitType::IdrWRadl,
            20 => NalUnitType::IdrNLp,
            32 => NalUnitType::Vps,
            33 => NalUnitType::Sps,
            34 => NalUnitType::Pps,
            39 => NalUnitType::Sei,
            _ => NalUnitType::Other(value),
        }
    }

    /// Human-readable name used in the report
    pub fn name(&self) -> &'static str {
        match self {
            NalUnitType::IdrWRadl => "IDR_W_RADL",
            NalUnitType::IdrNLp => "IDR_N_LP",
            NalUnitType::Vps => "VPS",
            NalUnitType::Sps => "SPS",
            NalUnitType::Pps => "PPS",
            NalUnitType::Sei => "SEI",
            NalUnitType::Other(_) => "Other",
        }
    }

    /// Returns `true` for IDR pictures
    pub fn is_keyframe(&self) -> bool {
        matches!(self, NalUnitType::IdrWRadl | NalUnitType::IdrNLp)
    }
}
