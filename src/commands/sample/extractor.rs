use std::io::{BufRead, Write};

use log::trace;

use super::{
    error::Result,
    pairs::{PairReader, PairWriter, ReadPair},
};

/// Walks the input pair by pair, writing requested pairs and any substitutes
/// owed for earlier requests that failed the length filter.
///
/// The extractor only ever moves forward: every call resumes at the pair
/// following the last one read by the previous call.
pub struct Extractor<R: BufRead, W: Write> {
    reader: PairReader<R>,
    writer: PairWriter<W>,
    min_length: usize,

    /// Reusable buffer for the current pair
    pair: ReadPair,

    /// Position of the next pair to be read
    position: usize,

    exhausted: bool,

    /// Pairs written in place of rejected ones
    substitutes: usize,
}
impl<R: BufRead, W: Write> Extractor<R, W> {
    pub fn new(reader: PairReader<R>, writer: PairWriter<W>, min_length: usize) -> Self {
        debug_assert_eq!(reader.is_split(), writer.is_split());
        Self {
            reader,
            writer,
            min_length,
            pair: ReadPair::default(),
            position: 0,
            exhausted: false,
            substitutes: 0,
        }
    }

    /// Returns true once the input has no further pairs
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn substitutes(&self) -> usize {
        self.substitutes
    }

    /// Advances through the input until `target` is reached or the input ends,
    /// returning the number of pairs written.
    ///
    /// The pair at `target` is written if it passes the length filter, and the
    /// call stops there either way. Pairs passed over on the way are written
    /// as substitutes while `owed` allows it. With no target the call stops as
    /// soon as nothing more is owed.
    pub fn extract(&mut self, target: Option<usize>, owed: usize) -> Result<usize> {
        let mut owed = owed;
        let mut emitted = 0;
        loop {
            if target.is_none() && owed == 0 {
                break;
            }
            let position = self.position;
            if !self.reader.read_pair(&mut self.pair, position)? {
                self.exhausted = true;
                break;
            }
            self.position += 1;

            if Some(position) == target {
                if self.pair.passes(self.min_length) {
                    self.writer.write_pair(&self.pair)?;
                    emitted += 1;
                } else {
                    trace!("Rejected requested pair at position {position}");
                }
                break;
            } else if owed > 0 && self.pair.passes(self.min_length) {
                trace!(
                    "Substituting pair at position {position} ({})",
                    String::from_utf8_lossy(self.pair.first.id())
                );
                self.writer.write_pair(&self.pair)?;
                emitted += 1;
                owed -= 1;
                self.substitutes += 1;
            }
        }
        Ok(emitted)
    }

    /// Flushes the output and hands back the writer
    pub fn finish(mut self) -> Result<PairWriter<W>> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
