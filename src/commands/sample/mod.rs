mod error;
mod extractor;
mod pairs;
mod record;
mod request;
mod sampler;
mod selection;

#[cfg(test)]
mod testing;

use std::io::{BufRead, BufReader, Write};

use anyhow::Result;
use log::{debug, info, warn};

use crate::{
    cli::SampleCommand,
    commands::{count::count_pairs, match_input, remove_outputs},
    types::BoxedReader,
};

use extractor::Extractor;
use request::SampleRequest;
use sampler::{build_rng, SampleIndex};
use selection::{subsample, Selection};

pub use pairs::{PairReader, PairWriter};
pub(crate) use record::LINES_PER_RECORD;

fn build_reader(paths: &[String]) -> Result<PairReader<BufReader<BoxedReader>>> {
    let reader = if let [forward, reverse] = paths {
        PairReader::new_split(
            BufReader::new(match_input(forward)?),
            BufReader::new(match_input(reverse)?),
        )
    } else {
        PairReader::new_interleaved(BufReader::new(match_input(&paths[0])?))
    };
    Ok(reader)
}

/// Streams the selected pairs and flushes the outputs
fn extract_selection<R: BufRead, W: Write>(
    reader: PairReader<R>,
    writer: PairWriter<W>,
    min_length: usize,
    index: &SampleIndex,
    requested_reads: usize,
) -> Result<Selection> {
    let mut extractor = Extractor::new(reader, writer, min_length);
    let selection = subsample(&mut extractor, index, requested_reads)?;
    extractor.finish()?;
    Ok(selection)
}

pub fn run(args: &SampleCommand) -> Result<()> {
    args.sample.validate()?;
    let inputs = &args.input.input;
    if args.input.paired() {
        info!("Processing split inputs {} - {}", inputs[0], inputs[1]);
    } else {
        info!("Processing interleaved input {}", inputs[0]);
    }

    let count = count_pairs(inputs)?;
    info!("Total reads in input: {} ({} pairs)", count.reads, count.pairs);

    let request = SampleRequest::new(args.sample.number, args.sample.portion)?;
    let requested_reads = request.resolve(count.pairs)?;

    let seed = args.sample.seed.unwrap_or_else(rand::random);
    info!("Using seed {seed}");
    let mut rng = build_rng(seed);
    let index = SampleIndex::draw(&mut rng, count.pairs, requested_reads / 2)?;
    if index.is_empty() {
        warn!("Requested number of reads is zero: outputs will be empty");
    }
    debug!(
        "Created sample of {} read pairs ({} reads)",
        index.len(),
        index.len() * 2
    );

    let outputs = args.output.paths(inputs, request.tag(requested_reads))?;
    let reader = build_reader(inputs)?;
    let writer = args.output.as_pair_writer(&outputs)?;

    match extract_selection(reader, writer, args.sample.min_length, &index, requested_reads) {
        Ok(selection) => {
            info!("Wrote {} reads to {}", selection.selected, outputs.join(", "));
            Ok(())
        }
        Err(err) => {
            remove_outputs(&outputs);
            Err(err)
        }
    }
}
