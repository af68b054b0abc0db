use clap::Parser;

use super::InputFile;

#[derive(Parser, Debug)]
/// Count the reads and pairs available for sampling in FASTQ input(s).
pub struct CountCommand {
    #[clap(flatten)]
    pub input: InputFile,

    /// Only print the number of pairs
    #[clap(short, long)]
    pub num: bool,
}
