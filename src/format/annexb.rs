//! Chunked Annex-B file reading.
//!
//! The reader pulls fixed-size chunks from the input file and runs one
//! analysis pass per chunk, re-basing unit offsets by the cumulative byte
//! count of prior chunks and renumbering indices to be globally increasing.
//!
//! Chunks are analysed independently: a NAL unit whose bytes straddle a
//! chunk boundary is reported as two fragments, the first ending at the
//! chunk end and the second starting at the next start code of the
//! following chunk. Callers that need exact extents should pick a chunk
//! size larger than the largest expected unit.

use std::path::Path;

use tokio::fs::File;
use tokio::io::AsyncReadExt;

use crate::analyser::{NalUnit, StreamAnalyser};
use crate::codec::Codec;
use crate::config::Config;
use crate::error::Result;

/// One NAL unit with stream-wide bookkeeping
#[derive(Debug, Clone)]
pub struct StreamUnit {
    /// Index of the unit across the whole stream, starting at 0
    pub global_index: usize,
    /// Offset of the unit's start code within the whole stream
    pub stream_offset: u64,
    /// The unit record; its `index` and `offset` stay chunk-relative
    pub unit: NalUnit,
}

/// Accumulated result of scanning one input stream
#[derive(Debug, Default)]
pub struct StreamScan {
    /// Number of chunks read and analysed
    pub read_passes: usize,
    /// Total bytes consumed from the input
    pub bytes_read: u64,
    /// Every unit found, in stream order
    pub units: Vec<StreamUnit>,
}

/// Reads an Annex-B elementary stream file in fixed-size chunks
#[derive(Debug)]
pub struct AnnexBReader {
    codec: Codec,
    chunk_size: usize,
}

impl AnnexBReader {
    /// Creates a reader for the given codec and chunk size
    pub fn new(codec: Codec, config: &Config) -> Self {
        Self {
            codec,
            chunk_size: config.chunk_size,
        }
    }

    /// Scans a whole file and accumulates every unit found
    ///
    /// A chunk that yields no units or ends in a truncated header is logged
    /// and contributes nothing; scanning continues with the next chunk. An
    /// input with no units at all still produces an empty, successful scan.
    ///
    /// # Errors
    ///
    /// Only I/O failures abort the scan.
    pub async fn scan_file<P: AsRef<Path>>(&self, path: P) -> Result<StreamScan> {
        let mut file = File::open(path).await?;
        let mut chunk = vec![0u8; self.chunk_size];
        let mut scan = StreamScan::default();
        let mut analyser = StreamAnalyser::new(self.codec);

        loop {
            let filled = fill_chunk(&mut file, &mut chunk).await?;
            if filled == 0 {
                break;
            }

            scan.read_passes += 1;
            let base = scan.bytes_read;
            scan.bytes_read += filled as u64;

            match analyser.analyse(&chunk[..filled]) {
                Ok(units) => {
                    for unit in units {
                        scan.units.push(StreamUnit {
                            global_index: scan.units.len(),
                            stream_offset: base + unit.offset as u64,
                            unit,
                        });
                    }
                }
                Err(err) => {
                    log::warn!("chunk {} contributed no units: {}", scan.read_passes, err);
                }
            }
        }

        log::info!(
            "scanned {} bytes in {} passes, {} units",
            scan.bytes_read,
            scan.read_passes,
            scan.units.len()
        );
        Ok(scan)
    }
}

/// Fills `chunk` from the file, returning the number of bytes read
///
/// Short reads are retried so that every chunk except the last is full.
async fn fill_chunk(file: &mut File, chunk: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < chunk.len() {
        let n = file.read(&mut chunk[filled..]).await?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}
