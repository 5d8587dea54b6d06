use crate::config::EmitterConfig;
use crate::sequence::Sequence;
use crate::Result;
use std::convert::Infallible;
use std::fmt;
use std::io::Write;
use tracing::{debug, instrument, trace};

/// Writes the restarting sequence to an output, one decimal per line
pub struct Emitter<W: Write> {
    out: W,
    sequence: Sequence,
    cycles: u64,
}

impl<W: Write> fmt::Debug for Emitter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("sequence", &self.sequence)
            .field("cycles", &self.cycles)
            .finish()
    }
}

impl<W: Write> Emitter<W> {
    /// Create an emitter writing to `out`
    ///
    /// Fails with [`Error::Overflow`][crate::Error::Overflow] when the configured threshold
    /// can't be reached without overflowing `i32`
    #[instrument(skip(out))]
    pub fn new(out: W, config: EmitterConfig) -> Result<Self> {
        let sequence = Sequence::from_config(&config)?;
        debug!("Emitter ready, threshold {}", sequence.threshold());
        Ok(Self {
            out,
            sequence,
            cycles: 0,
        })
    }

    /// Number of cycles written so far
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Borrow the underlying writer
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write one full cycle and flush it, returns the number of lines
    #[instrument(skip(self), fields(cycle = self.cycles))]
    pub fn emit_cycle(&mut self) -> Result<usize> {
        let mut lines = 0;
        for value in self.sequence.cycle() {
            trace!("{}", value);
            writeln!(self.out, "{}", value)?;
            lines += 1;
        }
        self.out.flush()?;
        self.cycles += 1;
        debug!("Cycle {} done, {} lines", self.cycles, lines);
        Ok(lines)
    }

    /// Emit cycles forever, only returns if the output fails
    ///
    /// # Example
    ///
    /// ```no_run
    /// use fibcycle::{Emitter, EmitterConfig};
    /// # fn main() -> Result<(), fibcycle::Error> {
    /// let emitter = Emitter::new(std::io::stdout().lock(), EmitterConfig::default())?;
    /// match emitter.run() {
    ///     Ok(never) => match never {},
    ///     Err(e) => Err(e),
    /// }
    /// # }
    /// ```
    pub fn run(mut self) -> Result<Infallible> {
        loop {
            self.emit_cycle()?;
        }
    }
}
