//! H.264/AVC NAL unit types recognised by the analyser.
//!
//! Only the types the inspection report distinguishes are enumerated; every
//! other value falls through to [`NalUnitType::Other`].

/// H.264 NAL unit type, derived from the low 5 bits of the header byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NalUnitType {
    /// Coded slice of a non-IDR picture (type 1)
    NonIdrSlice,
    /// Coded slice of an IDR picture (type 5)
    IdrSlice,
    /// Supplemental enhancement information (type 6)
    Sei,
    /// Sequence parameter set (type 7)
    Sps,
    /// Picture parameter set (type 8)
    Pps,
    /// Any type outside the table above
    Other(u8),
}

impl NalUnitType {
    /// Maps a numeric unit type to its variant
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => NalUnitType::NonIdrSlice,
            5 => NalUnitType::IdrSlice,
            6 => NalUnitType::Sei,
            7 => NalUnitType::Sps,
            8 => NalUnitType::Pps,
            _ => NalUnitType::Other(value),
        }
    }

    /// Human-readable name used in the report
    pub fn name(&self) -> &'static str {
        match self {
            NalUnitType::NonIdrSlice => "Non-IDR Slice",
            NalUnitType::IdrSlice => "IDR Slice",
            NalUnitType::Sei => "SEI",
            NalUnitType::Sps => "SPS",
            NalUnitType::Pps => "PPS",
            NalUnitType::Other(_) => "Other",
        }
    }

    /// Returns `true` for IDR slices
    pub fn is_keyframe(&self) -> bool {
        matches!(self, NalUnitType::IdrSlice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u8() {
        assert_eq!(NalUnitType::from_u8(1), NalUnitType::NonIdrSlice);
        assert_eq!(NalUnitType::from_u8(5), NalUnitType::IdrSlice);
        assert_eq!(NalUnitType::from_u8(6), NalUnitType::Sei);
        assert_eq!(NalUnitType::from_u8(7), NalUnitType::Sps);
        assert_eq!(NalUnitType::from_u8(8), NalUnitType::Pps);
        assert_eq!(NalUnitType::from_u8(9), NalUnitType::Other(9));
    }

    #[test]
    fn test_names() {
        assert_eq!(NalUnitType::from_u8(5).name(), "IDR Slice");
        assert_eq!(NalUnitType::from_u8(7).name(), "SPS");
        assert_eq!(NalUnitType::from_u8(12).name(), "Other");
    }

    #[test]
    fn test_is_keyframe() {
        assert!(NalUnitType::IdrSlice.is_keyframe());
        assert!(!NalUnitType::NonIdrSlice.is_keyframe());
        assert!(!NalUnitType::Sps.is_keyframe());
    }
}
