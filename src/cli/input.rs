use clap::Parser;

#[derive(Parser, Debug)]
pub struct InputFile {
    #[clap(
        help = "Input FASTQ file (interleaved) or forward and reverse FASTQ files",
        required = true,
        num_args = 1..=2
    )]
    pub input: Vec<String>,
}
impl InputFile {
    /// Returns true when mates are split across two files
    pub fn paired(&self) -> bool {
        self.input.len() == 2
    }
}
