//! One-buffer analysis passes.

use log;

use super::scanner::find_start_code;
use super::types::NalUnit;
use crate::codec::Codec;
use crate::error::{NalioError, Result};

/// Analyses one borrowed buffer per [`analyse`](StreamAnalyser::analyse) call
///
/// The analyser owns a scan cursor and a running unit counter, both reset at
/// the start of every pass: calling `analyse` again on the same instance is
/// defined to restart from scratch, including after a failed pass. It never
/// copies or mutates the buffer, and the returned records borrow nothing
/// from it. A single instance must not be shared between concurrent
/// callers; independent instances are freely usable from independent
/// threads.
#[derive(Debug)]
pub struct StreamAnalyser {
    codec: Codec,
    cursor: usize,
    index: usize,
}

impl StreamAnalyser {
    /// Creates an analyser for the given codec family
    pub fn new(codec: Codec) -> Self {
        Self {
            codec,
            cursor: 0,
            index: 0,
        }
    }

    /// Demarcates and classifies every NAL unit in `data`
    ///
    /// Units are returned in start-code order with indices `0..n`. They are
    /// contiguous from the first start code to the end of the buffer: each
    /// unit extends to the next start code, and the last one to the buffer
    /// end.
    ///
    /// # Errors
    ///
    /// * [`NalioError::NoUnitsFound`] - the buffer contains no start code;
    ///   there is no partial output.
    /// * [`NalioError::TruncatedUnit`] - a start code was found but the
    ///   buffer ends before its NAL header; the whole pass fails.
    pub fn analyse(&mut self, data: &[u8]) -> Result<Vec<NalUnit>> {
        self.cursor = 0;
        self.index = 0;

        let mut units = Vec::new();
        while self.cursor < data.len() {
            let start = match find_start_code(data, self.cursor) {
                Some(start) => start,
                None => {
                    if units.is_empty() {
                        return Err(NalioError::NoUnitsFound);
                    }
                    // The trailing unit already extends to the buffer end.
                    break;
                }
            };

            // The end boundary is the next start code, searched past the
            // minimum start-code width of the current unit.
            let end = find_start_code(data, start + 4);
            let length = end.unwrap_or(data.len()) - start;

            let unit = NalUnit::parse(data, self.index, start, length, self.codec)?;
            log::debug!(
                "unit #{} at offset {} length {} type {} ({})",
                unit.index,
                unit.offset,
                unit.length,
                unit.nal_type,
                unit.type_name()
            );
            units.push(unit);
            self.index += 1;

            self.cursor = end.unwrap_or(data.len());
        }

        if units.is_empty() {
            return Err(NalioError::NoUnitsFound);
        }

        self.cursor = 0;
        self.index = 0;
        Ok(units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn h264_stream() -> Vec<u8> {
        vec![
            0x00, 0x00, 0x00, 0x01, 0x67, 0x42, 0x00, 0x1E, // SPS
            0x00, 0x00, 0x00, 0x01, 0x68, 0xCE, // PPS
            0x00, 0x00, 0x01, 0x65, 0x88, 0x84, 0x00, // IDR
            0x00, 0x00, 0x01, 0x41, 0x9A, // non-IDR
        ]
    }

    #[test]
    fn test_analyse_h264_stream() {
        let data = h264_stream();
        let units = StreamAnalyser::new(Codec::H264).analyse(&data).unwrap();

        assert_eq!(units.len(), 4);
        let names: Vec<_> = units.iter().map(|u| u.type_name()).collect();
        assert_eq!(names, vec!["SPS", "PPS", "IDR Slice", "Non-IDR Slice"]);

        let types: Vec<_> = units.iter().map(|u| u.nal_type).collect();
        assert_eq!(types, vec![7, 8, 5, 1]);
    }

    #[test]
    fn test_units_are_contiguous() {
        let data = h264_stream();
        let units = StreamAnalyser::new(Codec::H264).analyse(&data).unwrap();

        for (i, unit) in units.iter().enumerate() {
            assert_eq!(unit.index, i);
        }
        for pair in units.windows(2) {
            assert_eq!(pair[0].offset + pair[0].length, pair[1].offset);
        }
        let last = units.last().unwrap();
        assert_eq!(last.offset + last.length, data.len());
    }

    #[test]
    fn test_leading_garbage_is_skipped() {
        let mut data = vec![0xDE, 0xAD, 0xBE, 0xEF];
        data.extend_from_slice(&[0x00, 0x00, 0x01, 0x67, 0x42]);
        let units = StreamAnalyser::new(Codec::H264).analyse(&data).unwrap();

        assert_eq!(units.len(), 1);
        assert_eq!(units[0].offset, 4);
        assert_eq!(units[0].length, 5);
    }

    #[test]
    fn test_no_units_found() {
        let mut analyser = StreamAnalyser::new(Codec::H264);
        assert!(matches!(
            analyser.analyse(&[0x01, 0x02, 0x03, 0x04]),
            Err(NalioError::NoUnitsFound)
        ));
        assert!(matches!(
            analyser.analyse(&[]),
            Err(NalioError::NoUnitsFound)
        ));
    }

    #[test]
    fn test_analyse_h265_stream() {
        let data = [
            0x00, 0x00, 0x00, 0x01, 0x40, 0x01, 0x0C, // VPS
            0x00, 0x00, 0x00, 0x01, 0x42, 0x01, 0x01, // SPS
            0x00, 0x00, 0x01, 0x26, 0x01, 0xAF, // IDR_W_RADL (type 19)
        ];
        let units = StreamAnalyser::new(Codec::H265).analyse(&data).unwrap();

        assert_eq!(units.len(), 3);
        let names: Vec<_> = units.iter().map(|u| u.type_name()).collect();
        assert_eq!(names, vec!["VPS", "SPS", "IDR_W_RADL"]);
        assert!(units[2].is_keyframe());
    }

    #[test]
    fn test_truncated_trailing_unit_fails_pass() {
        // H.265 needs two header bytes, only one remains.
        let data = [0x00, 0x00, 0x01, 0x40];
        let mut analyser = StreamAnalyser::new(Codec::H265);
        assert!(matches!(
            analyser.analyse(&data),
            Err(NalioError::TruncatedUnit { .. })
        ));
    }

    #[test]
    fn test_instance_reuse_restarts_from_scratch() {
        let data = h264_stream();
        let mut analyser = StreamAnalyser::new(Codec::H264);

        let first = analyser.analyse(&data).unwrap();
        let second = analyser.analyse(&data).unwrap();

        assert_eq!(first.len(), second.len());
        assert_eq!(second[0].index, 0);

        // Reuse is defined after a failed pass as well.
        let _ = analyser.analyse(&[0xFF; 8]);
        let third = analyser.analyse(&data).unwrap();
        assert_eq!(third[0].index, 0);
    }

    #[test]
    fn test_adjacent_start_codes() {
        // The second unit begins exactly 4 bytes after the first 3-byte
        // start code; the end search from start + 4 must still find it.
        let data = [
            0x00, 0x00, 0x01, 0x67, // SPS, length 4
            0x00, 0x00, 0x01, 0x68, 0xCE, // PPS
        ];
        let units = StreamAnalyser::new(Codec::H264).analyse(&data).unwrap();
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].length, 4);
        assert_eq!(units[1].offset, 4);
    }
}
