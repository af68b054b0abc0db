use std::io::{BufRead, Write};

/// Number of lines in a single FASTQ record
pub(crate) const LINES_PER_RECORD: usize = 4;

/// A single FASTQ record held as its raw lines.
///
/// Lines keep their original terminators so that records are reproduced
/// byte-for-byte. No validation of the line contents is performed.
#[derive(Debug, Default, Clone)]
pub struct FastqRecord {
    lines: [Vec<u8>; LINES_PER_RECORD],
}
impl FastqRecord {
    /// Reads the next record from `reader` into this buffer.
    ///
    /// Returns `Ok(false)` on a clean end of stream and `Ok(true)` once all four
    /// lines were read. A stream ending part-way through a record is reported as
    /// an `UnexpectedEof` error.
    pub fn fill<R: BufRead>(&mut self, reader: &mut R) -> std::io::Result<bool> {
        for (idx, line) in self.lines.iter_mut().enumerate() {
            line.clear();
            if reader.read_until(b'\n', line)? == 0 {
                if idx == 0 {
                    return Ok(false);
                }
                return Err(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    format!("record ended after {idx} of {LINES_PER_RECORD} lines"),
                ));
            }
        }
        Ok(true)
    }

    pub fn id(&self) -> &[u8] {
        trim_newline(&self.lines[0])
    }

    pub fn seq(&self) -> &[u8] {
        trim_newline(&self.lines[1])
    }

    /// Length of the sequence line without its terminator
    pub fn seq_len(&self) -> usize {
        self.seq().len()
    }

    /// Writes the record, terminating every line with `\n`
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for line in &self.lines {
            writer.write_all(line)?;
            if !line.ends_with(b"\n") {
                writer.write_all(b"\n")?;
            }
        }
        Ok(())
    }
}

fn trim_newline(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
