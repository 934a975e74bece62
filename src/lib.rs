#![doc(html_root_url = "https://docs.rs/nalio/0.1.0")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

//! # nalio - NAL Unit Inspection Toolkit
//!
//! `nalio` demarcates and classifies Network Abstraction Layer (NAL) units
//! inside raw Annex-B formatted H.264/H.265 elementary streams. For every
//! unit found it reports the byte offset, byte length, start-code form
//! (3-byte `00 00 01` or 4-byte `00 00 00 01`) and the codec-specific unit
//! type together with a human-readable name.
//!
//! It is a pre-decode/post-encode inspection tool: the output lets a caller
//! decide whether to discard or forward units, for example suppressing
//! non-IDR slices until the next keyframe, or dropping an IDR slice that is
//! not preceded by SPS/PPS.
//!
//! ## Features
//!
//! - Start-code boundary detection for 3-byte and 4-byte start codes
//! - H.264/AVC and H.265/HEVC NAL header classification
//! - Chunked analysis of whole files with stream-wide offsets and indices
//! - Tabular report rendering for diagnostics
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! nalio = "0.1.0"
//! ```
//!
//! ### Analysing a single buffer
//!
//! ```rust
//! use nalio::analyser::StreamAnalyser;
//! use nalio::codec::Codec;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = [
//!     0x00, 0x00, 0x00, 0x01, 0x67, 0x42, 0x00, 0x1e, // SPS
//!     0x00, 0x00, 0x01, 0x65, 0x88, 0x84,             // IDR slice
//! ];
//!
//! let mut analyser = StreamAnalyser::new(Codec::H264);
//! let units = analyser.analyse(&data)?;
//!
//! for unit in &units {
//!     println!(
//!         "#{} offset={} length={} type={} ({})",
//!         unit.index, unit.offset, unit.length, unit.nal_type, unit.type_name()
//!     );
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Scanning a file
//!
//! ```rust,no_run
//! use nalio::codec::Codec;
//! use nalio::config::Config;
//! use nalio::format::annexb::AnnexBReader;
//! use nalio::report;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let reader = AnnexBReader::new(Codec::H265, &Config::new());
//!     let scan = reader.scan_file("video.h265").await?;
//!     print!("{}", report::render(&scan));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Overview
//!
//! - `analyser`: the core engine - start-code scanning, header
//!   classification and single-buffer analysis passes
//!
//! - `codec`: codec selection and the per-codec NAL unit type tables
//!
//! - `format`: chunked Annex-B file reading with stream-wide bookkeeping
//!
//! - `report`: tabular rendering of scan results
//!
//! - `error`: error types and the crate-wide `Result` alias
//!
//! - `utils`: hex-string formatting helpers
//!
/// Core analysis engine: start-code scanning and NAL unit classification
pub mod analyser;

/// Codec selection and per-codec NAL unit type tables
pub mod codec;

/// Configuration module
pub mod config;

/// Error types and utilities
pub mod error;

/// Chunked Annex-B stream reading
pub mod format;

/// Tabular report rendering
pub mod report;

/// Common utilities and helper functions
pub mod utils;

pub use analyser::{NalUnit, StreamAnalyser};
pub use codec::Codec;
pub use error::{NalioError, Result};
