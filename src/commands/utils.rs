use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};
use gzp::{
    deflate::Gzip,
    par::compress::{ParCompress, ParCompressBuilder},
};

use crate::types::{BoxedReader, BoxedWriter};

/// Opens a FASTQ path for reading with transparent decompression
pub fn match_input(path: &str) -> Result<BoxedReader> {
    let handle =
        File::open(path).with_context(|| format!("Could not open input file: {path}"))?;
    let buffer = BufReader::new(handle);
    let (reader, comp) = niffler::get_reader(Box::new(buffer))?;
    log::trace!("Input {path} opened with compression: {comp:?}");
    Ok(reader)
}

pub fn match_output(path: &str) -> Result<Box<dyn Write + Send>> {
    let handle =
        File::create(path).with_context(|| format!("Could not create output file: {path}"))?;
    let buffer = BufWriter::new(handle);
    Ok(Box::new(buffer))
}

pub fn compress_gzip_passthrough(
    writer: Box<dyn Write + Send>,
    compress: bool,
    num_threads: usize,
) -> Result<BoxedWriter> {
    if compress {
        let encoder: ParCompress<'static, Gzip, Box<dyn Write + Send>> = ParCompressBuilder::new()
            .num_threads(num_threads)?
            .from_writer(writer);
        Ok(Box::new(encoder))
    } else {
        Ok(writer)
    }
}

/// Removes outputs left behind by a failed run
pub fn remove_outputs<P: AsRef<Path>>(paths: &[P]) {
    for path in paths {
        let path = path.as_ref();
        if let Err(err) = std::fs::remove_file(path) {
            log::warn!("Could not remove output {}: {err}", path.display());
        } else {
            log::warn!("Removed incomplete output: {}", path.display());
        }
    }
}
