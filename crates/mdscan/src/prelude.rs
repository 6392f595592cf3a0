//! Prelude module for convenient imports
//!
//! ```ignore
//! use mdscan::prelude::*;
//! ```

pub use crate::error::{Error, Result};
pub use crate::scanner::{Hit, ScanConfig, ScanMode, ScanSummary, Scanner, scan_path};
pub use crate::signature::Signature;
pub use crate::sink::{HitSink, LineWriter};
