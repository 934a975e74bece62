//! # Annex-B Stream Analysis
//!
//! The core engine of the crate. Given an opaque byte buffer in Annex-B
//! framing, it locates start-code delimiters, derives unit extents from
//! consecutive delimiter offsets, and classifies the 1-2 header bytes that
//! follow each delimiter into a codec-specific unit type.
//!
//! ```text
//! h264 with 4 start bytes:
//! | 0x00 | 0x00 | 0x00 | 0x01 |     0x65     |    ....   |
//! --------------------------------------------------------
//! |        start bytes        |  head bytes  | body data |
//!
//! h265 with 4 start bytes:
//! | 0x00 | 0x00 | 0x00 | 0x01 | 0x65 | 0x48 |    ....    |
//! --------------------------------------------------------
//! |        start bytes        |  head bytes  | body data |
//! ```
//!
//! ## Example
//!
//! ```rust
//! use nalio::analyser::StreamAnalyser;
//! use nalio::codec::Codec;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = [0x00, 0x00, 0x01, 0x67, 0x42, 0x00, 0x1e];
//! let units = StreamAnalyser::new(Codec::H264).analyse(&data)?;
//! assert_eq!(units[0].type_name(), "SPS");
//! # Ok(())
//! # }
//! ```

/// Start-code boundary detection
pub mod scanner;
/// One-buffer analysis passes
pub mod session;
/// The NAL unit record and header classification
pub mod types;

#[doc(inline)]
pub use scanner::find_start_code;
#[doc(inline)]
pub use session::StreamAnalyser;
#[doc(inline)]
pub use types::NalUnit;
