use thiserror::Error;

/// Errors produced while scanning Annex-B streams
#[derive(Error, Debug)]
pub enum NalioError {
    /// I/O failure while reading the input stream
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The analysed buffer contains no start code at all
    #[error("no NAL units found in buffer")]
    NoUnitsFound,

    /// A start code was found but the buffer ends before the NAL header
    #[error("truncated NAL unit at offset {offset}: need {needed} bytes, {available} available")]
    TruncatedUnit {
        /// Offset of the start code within the analysed buffer
        offset: usize,
        /// Bytes required for start code plus header
        needed: usize,
        /// Bytes remaining in the buffer from `offset`
        available: usize,
    },

    /// Malformed caller input, such as an unknown codec name
    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, NalioError>;
