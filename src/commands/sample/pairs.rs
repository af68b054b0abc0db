use std::io::{BufRead, ErrorKind, Write};

use super::{
    error::{Result, SampleError},
    record::FastqRecord,
};

/// Both mates of a single pair
#[derive(Debug, Default, Clone)]
pub struct ReadPair {
    pub first: FastqRecord,
    pub second: FastqRecord,
}
impl ReadPair {
    /// Checks that both mates meet the minimum sequence length.
    ///
    /// A minimum of zero accepts every pair.
    pub fn passes(&self, min_length: usize) -> bool {
        min_length == 0
            || (self.first.seq_len() >= min_length && self.second.seq_len() >= min_length)
    }
}

/// Source of read pairs from either an interleaved stream or two split streams
pub enum PairReader<R: BufRead> {
    /// Mates are consecutive records of one stream
    Interleaved(R),
    /// Mates are co-positioned records of two streams
    Split { forward: R, reverse: R },
}
impl<R: BufRead> PairReader<R> {
    pub fn new_interleaved(reader: R) -> Self {
        Self::Interleaved(reader)
    }

    pub fn new_split(forward: R, reverse: R) -> Self {
        Self::Split { forward, reverse }
    }

    pub fn is_split(&self) -> bool {
        matches!(self, Self::Split { .. })
    }

    /// Reads the pair at `position` into `pair`.
    ///
    /// Returns `Ok(false)` once the (forward) stream is exhausted.
    pub fn read_pair(&mut self, pair: &mut ReadPair, position: usize) -> Result<bool> {
        match self {
            Self::Interleaved(reader) => {
                if !fill_record(&mut pair.first, reader, position)? {
                    return Ok(false);
                }
                if !fill_record(&mut pair.second, reader, position)? {
                    // interleaved input with an odd number of records
                    return Err(SampleError::TruncatedRecord { position });
                }
                Ok(true)
            }
            Self::Split { forward, reverse } => {
                if !fill_record(&mut pair.first, forward, position)? {
                    return Ok(false);
                }
                if !fill_record(&mut pair.second, reverse, position)? {
                    return Err(SampleError::MateDesync { position });
                }
                Ok(true)
            }
        }
    }
}

fn fill_record<R: BufRead>(
    record: &mut FastqRecord,
    reader: &mut R,
    position: usize,
) -> Result<bool> {
    record.fill(reader).map_err(|err| match err.kind() {
        ErrorKind::UnexpectedEof => SampleError::TruncatedRecord { position },
        _ => SampleError::IoError(err),
    })
}

/// Sink for selected pairs, mirroring the shape of the [`PairReader`]
pub enum PairWriter<W: Write> {
    Interleaved(W),
    Split { forward: W, reverse: W },
}
impl<W: Write> PairWriter<W> {
    pub fn new_interleaved(writer: W) -> Self {
        Self::Interleaved(writer)
    }

    pub fn new_split(forward: W, reverse: W) -> Self {
        Self::Split { forward, reverse }
    }

    pub fn is_split(&self) -> bool {
        matches!(self, Self::Split { .. })
    }

    pub fn write_pair(&mut self, pair: &ReadPair) -> Result<()> {
        match self {
            Self::Interleaved(writer) => {
                pair.first.write_to(writer)?;
                pair.second.write_to(writer)?;
            }
            Self::Split { forward, reverse } => {
                pair.first.write_to(forward)?;
                pair.second.write_to(reverse)?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        match self {
            Self::Interleaved(writer) => writer.flush()?,
            Self::Split { forward, reverse } => {
                forward.flush()?;
                reverse.flush()?;
            }
        }
        Ok(())
    }
}
