//! Destinations for scan hits

use std::io::Write;

use crate::error::{Error, Result};
use crate::scanner::Hit;

/// Receives hits in the order they are discovered.
pub trait HitSink {
    fn record(&mut self, hit: Hit) -> Result<()>;
}

impl HitSink for Vec<Hit> {
    fn record(&mut self, hit: Hit) -> Result<()> {
        self.push(hit);
        Ok(())
    }
}

/// Writes one `hit at byte <offset>` line per hit.
pub struct LineWriter<W: Write> {
    out: W,
}

impl<W: Write> LineWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Flush pending output and hand back the writer
    pub fn finish(mut self) -> Result<W> {
        self.out.flush().map_err(Error::Output)?;
        Ok(self.out)
    }
}

impl<W: Write> HitSink for LineWriter<W> {
    fn record(&mut self, hit: Hit) -> Result<()> {
        writeln!(self.out, "{}", hit).map_err(Error::Output)?;
        // Keep partial results visible if a later read fails
        self.out.flush().map_err(Error::Output)
    }
}
