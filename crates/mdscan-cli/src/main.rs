use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use mdscan::prelude::*;
use mdscan::{DEFAULT_BLOCK_SIZE, DEFAULT_CHUNK_SIZE};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Granularity {
    /// Test every byte offset
    Byte,
    /// Test only the start of each block
    Block,
}

#[derive(Parser, Debug)]
#[command(name = "find-md-raid")]
#[command(about = "Find Linux md raid superblock magic (0xa92b4efc) in a device or image")]
struct Args {
    /// Path to the block device or disk image to scan
    path: PathBuf,

    /// Scan granularity
    #[arg(short, long, value_enum, default_value_t = Granularity::Byte)]
    mode: Granularity,

    /// Block size in bytes for block-aligned scans
    #[arg(short, long, default_value_t = DEFAULT_BLOCK_SIZE)]
    block_size: usize,

    /// Read buffer size in bytes
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn scan_config(&self) -> ScanConfig {
        let mode = match self.mode {
            Granularity::Byte => ScanMode::Byte,
            Granularity::Block => ScanMode::Block {
                block_size: self.block_size,
            },
        };
        ScanConfig::default()
            .with_mode(mode)
            .with_chunk_size(self.chunk_size)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout only carries hits
    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("mdscan={}", level).parse()?)
                .add_directive(format!("find_md_raid={}", level).parse()?),
        )
        .init();

    let summary = run(&args, io::stdout().lock())?;
    info!(
        "Scanned {} bytes of {}, {} hit(s)",
        summary.bytes_scanned,
        args.path.display(),
        summary.hits
    );

    Ok(())
}

fn run<W: Write>(args: &Args, out: W) -> Result<ScanSummary> {
    let config = args.scan_config();
    info!("Scanning {} ({} mode)", args.path.display(), config.mode);

    let mut sink = LineWriter::new(out);
    let summary = scan_path(&args.path, config, &mut sink).map_err(|e| {
        // Open and config errors already name the path or the bad option
        if matches!(e, Error::Open { .. } | Error::InvalidConfig(_)) {
            anyhow::Error::new(e)
        } else {
            anyhow::Error::new(e)
                .context(format!("Failure while scanning {}", args.path.display()))
        }
    })?;
    sink.finish()?;

    Ok(summary)
}
