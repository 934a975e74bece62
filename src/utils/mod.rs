//! # Utility Functions
//!
//! Small helpers shared by the report renderer and the CLI.
//!
//! ## Hex Formatting
//!
//! ```rust
//! use nalio::utils::format_hex;
//!
//! assert_eq!(format_hex(&[0x00, 0x67, 0x4B, 0xD9], true), "0x00674bd9");
//! ```

/// Hex-string formatting for byte sequences
pub mod hex;

pub use hex::format_hex;
