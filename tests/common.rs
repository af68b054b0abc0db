#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use anyhow::Result;
use bon::builder;
use niffler::Level;
use tempfile::NamedTempFile;

pub const COMMAND_NAME: &str = env!("CARGO_BIN_EXE_fqsubset");
pub const DEFAULT_NUM_PAIRS: usize = 100;
pub const DEFAULT_SEQ_LEN: usize = 100;

#[derive(Default, Clone, Copy, Debug)]
pub enum CompressionStatus {
    #[default]
    Uncompressed,
    Gzip,
}
impl CompressionStatus {
    pub fn enum_iter() -> impl Iterator<Item = Self> + Clone {
        let vals = [Self::Uncompressed, Self::Gzip];
        vals.into_iter()
    }

    pub fn suffix(&self) -> &str {
        match self {
            Self::Uncompressed => "",
            Self::Gzip => ".gz",
        }
    }
}

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    #[default]
    Interleaved,
    Split,
}
impl Layout {
    pub fn enum_iter() -> impl Iterator<Item = Self> + Clone {
        let vals = [Self::Interleaved, Self::Split];
        vals.into_iter()
    }
}

fn write_fastq_to<W: Write>(wtr: &mut W, name: &str, seq: &[u8], qual: &[u8]) -> Result<()> {
    writeln!(wtr, "@{name}")?;
    wtr.write_all(seq)?;
    writeln!(wtr, "\n+")?;
    wtr.write_all(qual)?;
    writeln!(wtr)?;
    Ok(())
}

fn compression_passthrough(path: &Path, comp: CompressionStatus) -> Result<Box<dyn Write>> {
    match comp {
        CompressionStatus::Uncompressed => {
            Ok(niffler::to_path(path, niffler::Format::No, Level::Three)?)
        }
        CompressionStatus::Gzip => Ok(niffler::to_path(path, niffler::Format::Gzip, Level::Three)?),
    }
}

/// Whether the pair at `idx` is written with short sequences
pub fn is_short(idx: usize, npairs: usize, short_every: Option<usize>) -> bool {
    matches!(short_every, Some(every) if idx % every == 0 && idx < npairs / 2)
}

/// Writes paired FASTQ input, returning one file (interleaved) or two (split).
///
/// Reads are named `seq.<pair>/<mate>`. When `short_every` is set, pairs in the
/// first half of the input whose index is a multiple of it get sequences of
/// `short_len` bases; the second half always has full length sequences.
#[builder]
pub fn write_fastq(
    #[builder(default)] layout: Layout,
    #[builder(default)] comp: CompressionStatus,
    #[builder(default = DEFAULT_SEQ_LEN)] slen: usize,
    #[builder(default = DEFAULT_NUM_PAIRS)] npairs: usize,
    short_every: Option<usize>,
    #[builder(default = 10)] short_len: usize,
) -> Result<Vec<NamedTempFile>> {
    let num_files = match layout {
        Layout::Interleaved => 1,
        Layout::Split => 2,
    };
    let tempfiles = (0..num_files)
        .map(|_| NamedTempFile::with_suffix(format!(".fastq{}", comp.suffix())))
        .collect::<std::io::Result<Vec<_>>>()?;
    let mut handles = tempfiles
        .iter()
        .map(|tmp| compression_passthrough(tmp.path(), comp))
        .collect::<Result<Vec<_>>>()?;

    let mut seqgen = nucgen::Sequence::with_capacity(slen);
    let mut rng = rand::rng();
    for idx in 0..npairs {
        let len = if is_short(idx, npairs, short_every) {
            short_len
        } else {
            slen
        };
        let qual = vec![b'?'; len];
        for mate in 1..=2 {
            seqgen.clear_buffer();
            seqgen.fill_buffer(&mut rng, len);
            let seq = seqgen.bytes();
            let handle = match layout {
                Layout::Interleaved => &mut handles[0],
                Layout::Split => &mut handles[mate - 1],
            };
            write_fastq_to(handle, &format!("seq.{idx}/{mate}"), &seq, &qual)?;
        }
    }
    for handle in &mut handles {
        handle.flush()?;
    }
    drop(handles);

    Ok(tempfiles)
}

/// Reads a (possibly compressed) FASTQ into (name, sequence) tuples
pub fn read_fastq(path: &Path) -> Result<Vec<(String, String)>> {
    let (reader, _comp) = niffler::from_path(path)?;
    let lines = BufReader::new(reader)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()?;
    Ok(lines
        .chunks(4)
        .map(|chunk| (chunk[0][1..].to_string(), chunk[1].clone()))
        .collect())
}

/// Extracts the pair index from a `seq.<pair>/<mate>` name
pub fn pair_index(name: &str) -> usize {
    name.trim_start_matches("seq.")
        .split('/')
        .next()
        .and_then(|idx| idx.parse().ok())
        .expect("unexpected read name")
}
