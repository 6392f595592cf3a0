//! Sequential signature scanner over a byte stream
//!
//! The scanner makes one forward pass over a reader using bounded reads and
//! reports the absolute offset of every place the signature begins.
//!
//! Two granularities are supported:
//!
//! - [`ScanMode::Byte`]: every byte position is tested via a [`RollingWindow`],
//!   so a match split across two reads is still found.
//! - [`ScanMode::Block`]: only the first bytes of each complete fixed-size
//!   block are tested (sector-aligned superblocks). A trailing partial block
//!   ends the scan.

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, ErrorKind, Read};
use std::path::Path;

use strum::Display;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::signature::{SIGNATURE_LEN, Signature};
use crate::sink::HitSink;
use crate::window::RollingWindow;

/// Sector size used for block-aligned scans
pub const DEFAULT_BLOCK_SIZE: usize = 512;

/// Read buffer size (1 MiB)
pub const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024;

/// Positions at which the signature is tested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum ScanMode {
    /// Every byte offset
    #[default]
    #[strum(serialize = "byte")]
    Byte,
    /// Only offsets that are multiples of `block_size`
    #[strum(serialize = "block")]
    Block { block_size: usize },
}

impl ScanMode {
    /// Block-aligned mode with 512-byte blocks
    pub const fn block() -> Self {
        Self::Block {
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub mode: ScanMode,
    /// Size of each read from the source. Never affects which offsets match.
    pub chunk_size: usize,
    pub signature: Signature,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            mode: ScanMode::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            signature: Signature::md_raid(),
        }
    }
}

impl ScanConfig {
    pub fn with_mode(mut self, mode: ScanMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.signature = signature;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(Error::InvalidConfig(
                "chunk size must be greater than zero".to_string(),
            ));
        }
        match self.mode {
            ScanMode::Block { block_size } if block_size < SIGNATURE_LEN => {
                Err(Error::InvalidConfig(format!(
                    "block size {} is smaller than the {}-byte signature",
                    block_size, SIGNATURE_LEN
                )))
            }
            _ => Ok(()),
        }
    }
}

/// A signature occurrence, identified by the offset of its first byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hit {
    pub offset: u64,
}

impl fmt::Display for Hit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hit at byte {}", self.offset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanSummary {
    pub bytes_scanned: u64,
    pub hits: u64,
}

pub struct Scanner<R: Read> {
    reader: R,
    config: ScanConfig,
    offset: u64,
}

impl<R: Read> Scanner<R> {
    pub fn new(reader: R, config: ScanConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            reader,
            config,
            offset: 0,
        })
    }

    /// Scan to end of stream, passing each hit to `sink` in offset order
    pub fn scan<S: HitSink + ?Sized>(&mut self, sink: &mut S) -> Result<ScanSummary> {
        debug!(
            "Starting {} scan for {} (chunk size {} bytes)",
            self.config.mode, self.config.signature, self.config.chunk_size
        );

        let hits = match self.config.mode {
            ScanMode::Byte => self.scan_bytes(sink)?,
            ScanMode::Block { block_size } => self.scan_blocks(block_size, sink)?,
        };

        let summary = ScanSummary {
            bytes_scanned: self.offset,
            hits,
        };
        debug!(
            "Scan finished: {} bytes, {} hit(s)",
            summary.bytes_scanned, summary.hits
        );
        Ok(summary)
    }

    /// Scan and return all hits
    pub fn collect(mut self) -> Result<Vec<Hit>> {
        let mut hits = Vec::new();
        self.scan(&mut hits)?;
        Ok(hits)
    }

    fn scan_bytes<S: HitSink + ?Sized>(&mut self, sink: &mut S) -> Result<u64> {
        let signature = self.config.signature;
        let mut buffer = vec![0u8; self.config.chunk_size];
        let mut window = RollingWindow::new();
        let mut hits = 0;

        loop {
            let read = match self.reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(Error::Read {
                        offset: self.offset,
                        source,
                    });
                }
            };

            for &byte in &buffer[..read] {
                window.push(byte);
                self.offset += 1;
                if window.matches(&signature) {
                    let hit = Hit {
                        offset: self.offset - SIGNATURE_LEN as u64,
                    };
                    trace!("Signature at byte {}", hit.offset);
                    sink.record(hit)?;
                    hits += 1;
                }
            }
        }

        Ok(hits)
    }

    fn scan_blocks<S: HitSink + ?Sized>(
        &mut self,
        block_size: usize,
        sink: &mut S,
    ) -> Result<u64> {
        let signature = self.config.signature;
        let mut reader = BufReader::with_capacity(self.config.chunk_size, &mut self.reader);
        let mut block = vec![0u8; block_size];
        let mut hits = 0;

        loop {
            let read = fill_block(&mut reader, &mut block).map_err(|source| Error::Read {
                offset: self.offset,
                source,
            })?;
            if read < block_size {
                // Trailing partial block is consumed but never tested
                self.offset += read as u64;
                break;
            }

            if signature.matches_prefix(&block) {
                let hit = Hit {
                    offset: self.offset,
                };
                trace!("Signature at block start {}", hit.offset);
                sink.record(hit)?;
                hits += 1;
            }

            self.offset += read as u64;
        }

        Ok(hits)
    }
}

/// Read until `block` is full or the stream ends. Returns bytes read.
fn fill_block<R: Read>(reader: &mut R, block: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < block.len() {
        match reader.read(&mut block[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Open `path` and scan it. The file is closed when this returns.
pub fn scan_path<P, S>(path: P, config: ScanConfig, sink: &mut S) -> Result<ScanSummary>
where
    P: AsRef<Path>,
    S: HitSink + ?Sized,
{
    config.validate()?;

    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Opened {}", path.display());

    Scanner::new(file, config)?.scan(sink)
}
