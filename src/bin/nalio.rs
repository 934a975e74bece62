//! Annex-B elementary stream analyser CLI.
//!
//! ```text
//! nalio video1.h264 h264
//! nalio video2.h265 h265 --chunk-size 65536 --output analyse.txt
//! ```
//!
//! Prints one row per NAL unit found; a stream with no units still renders
//! an empty report and exits successfully.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use nalio::codec::Codec;
use nalio::config::Config;
use nalio::format::annexb::AnnexBReader;
use nalio::report;

#[derive(Parser, Debug)]
#[command(name = "nalio", version, about = "Inspect NAL units in a raw Annex-B H.264/H.265 stream")]
struct Args {
    /// Path to the raw elementary stream
    input: PathBuf,

    /// Codec of the stream: h264 or h265
    codec: Codec,

    /// Bytes analysed per read pass (default 1 MiB, env NALIO_CHUNK_SIZE)
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Also write the report to this file
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut config = Config::new();
    if let Some(size) = args.chunk_size {
        config.chunk_size = size;
    }

    let reader = AnnexBReader::new(args.codec, &config);
    let scan = match reader.scan_file(&args.input).await {
        Ok(scan) => scan,
        Err(err) => {
            eprintln!("nalio: {}: {}", args.input.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let rendered = report::render(&scan);
    print!("{rendered}");

    if let Some(path) = &args.output {
        if let Err(err) = tokio::fs::write(path, &rendered).await {
            eprintln!("nalio: {}: {}", path.display(), err);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
