//! # Stream Format Handling
//!
//! Drivers that feed whole inputs through the analyser. Only raw Annex-B
//! elementary streams are supported; length-prefixed container formats
//! (AVCC/HVCC, MP4) are out of scope.

/// Chunked Annex-B file reading
pub mod annexb;

#[doc(inline)]
pub use annexb::{AnnexBReader, StreamScan, StreamUnit};
