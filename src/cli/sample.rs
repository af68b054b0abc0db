use anyhow::Result;
use clap::Parser;

use super::{InputFile, OutputFile};

/// Randomly select read pairs from interleaved or split FASTQ input(s)
#[derive(Parser, Debug)]
pub struct SampleCommand {
    #[clap(flatten)]
    pub input: InputFile,

    #[clap(flatten)]
    pub output: OutputFile,

    #[clap(flatten)]
    pub sample: SampleArgs,
}

#[derive(Parser, Debug)]
#[clap(next_help_heading = "SAMPLE OPTIONS")]
pub struct SampleArgs {
    /// Number of reads to select (odd numbers are rounded up to keep pairs)
    #[clap(
        short,
        long,
        required_unless_present = "portion",
        conflicts_with = "portion"
    )]
    pub number: Option<usize>,

    /// Portion of the reads to select (e.g. 1/10th is --portion 10)
    #[clap(short, long)]
    pub portion: Option<usize>,

    /// Minimum sequence length of both mates (0 samples from all reads)
    #[clap(short, long, default_value = "0")]
    pub min_length: usize,

    /// Seed to use for random sampling [default: random]
    #[clap(short = 'S', long)]
    pub seed: Option<u64>,
}
impl SampleArgs {
    pub fn validate(&self) -> Result<()> {
        if self.portion == Some(0) {
            anyhow::bail!("Portion must be greater than zero");
        }
        Ok(())
    }
}
