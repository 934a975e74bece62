//! Tabular report rendering.
//!
//! Renders a [`StreamScan`](crate::format::annexb::StreamScan) as the
//! diagnostic table printed by the CLI: two summary lines followed by one
//! right-aligned row per unit.

use crate::format::annexb::StreamScan;
use crate::utils::format_hex;

/// Renders the scan result as a printable report
///
/// Columns: stream-wide index, chunk-relative index, stream-wide byte
/// offset, unit length, start-code and header bytes as hex, numeric unit
/// type, unit type name.
pub fn render(scan: &StreamScan) -> String {
    let mut out = String::new();
    out.push_str(&format!("total read passes:{}\n", scan.read_passes));
    out.push_str(&format!("total read bytes:{}\n", scan.bytes_read));

    out.push_str(&format!(
        "{:>8}{:>8}{:>16}{:>8}{:>24}{:>16}{:>24}\n",
        "index", "i-index", "offset", "length", "start-flag", "nal-type", "nal-type-name"
    ));

    for stream_unit in &scan.units {
        let unit = &stream_unit.unit;
        let start_flag = format!(
            "{}{}",
            format_hex(&unit.start_bytes, true),
            format_hex(&unit.head_bytes, false)
        );
        out.push_str(&format!(
            "{:>8}{:>8}{:>16}{:>8}{:>24}{:>16}{:>24}\n",
            stream_unit.global_index,
            unit.index,
            stream_unit.stream_offset,
            unit.length,
            start_flag,
            unit.nal_type,
            unit.type_name()
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyser::NalUnit;
    use crate::codec::Codec;
    use crate::format::annexb::StreamUnit;

    fn sample_scan() -> StreamScan {
        let data = [0x00, 0x00, 0x00, 0x01, 0x67, 0x42, 0x00, 0x1E];
        let unit = NalUnit::parse(&data, 0, 0, data.len(), Codec::H264).unwrap();
        StreamScan {
            read_passes: 1,
            bytes_read: data.len() as u64,
            units: vec![StreamUnit {
                global_index: 0,
                stream_offset: 0,
                unit,
            }],
        }
    }

    #[test]
    fn test_render_summary_and_row() {
        let report = render(&sample_scan());
        let lines: Vec<_> = report.lines().collect();

        assert_eq!(lines[0], "total read passes:1");
        assert_eq!(lines[1], "total read bytes:8");
        assert!(lines[2].contains("start-flag"));
        assert!(lines[3].contains("0x0000000167"));
        assert!(lines[3].contains("SPS"));
    }

    #[test]
    fn test_render_empty_scan() {
        let report = render(&StreamScan::default());
        assert_eq!(report.lines().count(), 3);
    }
}
