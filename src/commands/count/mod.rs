use std::io::{ErrorKind, Read};

use anyhow::{bail, Result};
use log::{debug, warn};

use crate::cli::CountCommand;
use crate::commands::{match_input, sample::LINES_PER_RECORD};

/// Chunk size used while scanning for line breaks
const SCAN_BUFFER_SIZE: usize = 1 << 16;

/// Lines spanned by one pair of an interleaved input
const LINES_PER_INTERLEAVED_PAIR: usize = 2 * LINES_PER_RECORD;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairCount {
    pub reads: usize,
    pub pairs: usize,
}

/// Counts lines in a stream; a final line without a terminator still counts.
pub fn count_lines<R: Read>(mut reader: R) -> std::io::Result<usize> {
    let mut buffer = vec![0u8; SCAN_BUFFER_SIZE];
    let mut num_lines = 0;
    let mut last = None;
    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        num_lines += memchr::memchr_iter(b'\n', &buffer[..n]).count();
        last = Some(buffer[n - 1]);
    }
    if matches!(last, Some(byte) if byte != b'\n') {
        num_lines += 1;
    }
    Ok(num_lines)
}

fn count_path(path: &str, lines_per_unit: usize) -> Result<usize> {
    let num_lines = count_lines(match_input(path)?)?;
    if num_lines % lines_per_unit != 0 {
        warn!(
            "{path} has {num_lines} lines, which is not a multiple of {lines_per_unit}; trailing lines are not sampled and may fail extraction"
        );
    }
    debug!("{path}: {num_lines} lines");
    Ok(num_lines / lines_per_unit)
}

/// Counts the pairs available for sampling.
///
/// A single path is treated as an interleaved input. With two paths the
/// forward and reverse inputs must hold the same number of records.
pub fn count_pairs(paths: &[String]) -> Result<PairCount> {
    let pairs = match paths {
        [interleaved] => count_path(interleaved, LINES_PER_INTERLEAVED_PAIR)?,
        [forward, reverse] => {
            let num_forward = count_path(forward, LINES_PER_RECORD)?;
            let num_reverse = count_path(reverse, LINES_PER_RECORD)?;
            if num_forward != num_reverse {
                bail!(
                    "Inconsistent record counts: {forward} has {num_forward} records but {reverse} has {num_reverse}"
                );
            }
            num_forward
        }
        _ => bail!("Expected one interleaved input or two paired inputs."),
    };
    Ok(PairCount {
        reads: pairs * 2,
        pairs,
    })
}

pub fn run(args: &CountCommand) -> Result<()> {
    let count = count_pairs(&args.input.input)?;
    if args.num {
        println!("{}", count.pairs);
    } else {
        println!("Number of reads   : {}", count.reads);
        println!("Number of pairs   : {}", count.pairs);
    }
    Ok(())
}
