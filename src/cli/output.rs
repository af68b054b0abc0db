use std::{fs, path::Path};

use anyhow::{bail, Result};
use clap::Parser;

use crate::{
    commands::{compress_gzip_passthrough, match_output, remove_outputs, sample::PairWriter},
    types::BoxedWriter,
};

#[derive(Parser, Debug)]
#[clap(next_help_heading = "OUTPUT OPTIONS")]
pub struct OutputFile {
    #[clap(
        short = 'o',
        long,
        help = "Output file(s), one per input [default: <input>.sub<number|portion>]",
        num_args = 1..=2
    )]
    pub output: Vec<String>,

    #[clap(long, help = "Overwrite output files if they exist")]
    pub overwrite: bool,

    #[clap(
        short,
        long,
        help = "Gzip compress output files",
        default_value = "false"
    )]
    pub compress: bool,

    #[clap(
        short = 'T',
        long,
        help = "Number of threads to use for parallel compression (0 for auto)",
        default_value = "1"
    )]
    pub threads: usize,
}
impl OutputFile {
    /// Returns the number of threads to use for parallel compression
    ///
    /// The number of threads is by default 1, 0 sets to maximum, and all other values are clamped to maximum.
    pub fn threads(&self) -> usize {
        match self.threads {
            0 => num_cpus::get(),
            n => n.min(num_cpus::get()),
        }
    }

    /// Resolves one output path per input.
    ///
    /// Without explicit outputs each input is named `<input>.sub<tag>`, where the
    /// tag is the number of reads or the requested portion.
    pub fn paths(&self, inputs: &[String], tag: usize) -> Result<Vec<String>> {
        let paths = if self.output.is_empty() {
            let suffix = if self.compress { ".gz" } else { "" };
            inputs
                .iter()
                .map(|input| format!("{input}.sub{tag}{suffix}"))
                .collect()
        } else if self.output.len() == inputs.len() {
            self.output.clone()
        } else {
            bail!(
                "Expected {} output file(s) to match the inputs, found {}",
                inputs.len(),
                self.output.len()
            );
        };

        for path in &paths {
            if is_input(path, inputs) {
                bail!("Output file {path} would overwrite an input file");
            }
            if Path::new(path).exists() && !self.overwrite {
                bail!("Output file {path} already exists! Use --overwrite to force overwrite");
            }
        }
        if paths.len() == 2 && paths[0] == paths[1] {
            bail!("Forward and reverse outputs must differ");
        }
        Ok(paths)
    }

    /// Opens an output, removing it again if the compression layer cannot be built
    fn as_writer(&self, path: &str) -> Result<BoxedWriter> {
        let writer = match_output(path)?;
        compress_gzip_passthrough(writer, self.compress, self.threads()).inspect_err(|_| {
            remove_outputs(&[path]);
        })
    }

    /// Opens every output; nothing is left on disk if any of them fails to open.
    pub fn as_pair_writer(&self, paths: &[String]) -> Result<PairWriter<BoxedWriter>> {
        match paths {
            [interleaved] => Ok(PairWriter::new_interleaved(self.as_writer(interleaved)?)),
            [forward, reverse] => {
                let r1 = self.as_writer(forward)?;
                match self.as_writer(reverse) {
                    Ok(r2) => Ok(PairWriter::new_split(r1, r2)),
                    Err(err) => {
                        drop(r1);
                        remove_outputs(&[forward]);
                        Err(err)
                    }
                }
            }
            _ => bail!("Expected one or two output files."),
        }
    }
}

/// Checks whether `path` refers to one of the inputs, resolving relative and linked paths
fn is_input(path: &str, inputs: &[String]) -> bool {
    if inputs.iter().any(|input| input == path) {
        return true;
    }
    // an output that does not exist yet cannot be an input
    let Ok(resolved) = fs::canonicalize(path) else {
        return false;
    };
    inputs
        .iter()
        .filter_map(|input| fs::canonicalize(input).ok())
        .any(|input| input == resolved)
}
