//! # mdscan
//!
//! Locates Linux software RAID (md) superblocks in raw block devices and disk
//! images by scanning for the superblock magic `0xa92b4efc`.
//!
//! This crate provides:
//! - The md magic and a generic 4-byte [`Signature`] type
//! - A streaming [`Scanner`] with byte-aligned and block-aligned modes
//! - The [`HitSink`] trait for reporting matches
//!
//! The superblock contents are not parsed; only offsets are reported.
//!
//! ## Example
//!
//! ```
//! use mdscan::{ScanConfig, ScanMode, Scanner};
//! use std::io::Cursor;
//!
//! let mut image = vec![0u8; 1024];
//! image[100..104].copy_from_slice(&mdscan::MD_MAGIC_BYTES);
//!
//! let hits = Scanner::new(Cursor::new(&image), ScanConfig::default())?.collect()?;
//! assert_eq!(hits[0].offset, 100);
//!
//! let config = ScanConfig::default().with_mode(ScanMode::block());
//! assert!(Scanner::new(Cursor::new(&image), config)?.collect()?.is_empty());
//! # Ok::<(), mdscan::Error>(())
//! ```

pub mod error;
pub mod prelude;
pub mod scanner;
pub mod signature;
pub mod sink;
pub mod window;

pub use error::{Error, Result};
pub use scanner::{
    DEFAULT_BLOCK_SIZE, DEFAULT_CHUNK_SIZE, Hit, ScanConfig, ScanMode, ScanSummary, Scanner,
    scan_path,
};
pub use signature::{MD_MAGIC, MD_MAGIC_BYTES, SIGNATURE_LEN, Signature};
pub use sink::{HitSink, LineWriter};
pub use window::RollingWindow;
