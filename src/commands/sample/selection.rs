use std::io::{BufRead, Write};

use log::{debug, info};

use super::{
    error::{Result, SampleError},
    extractor::Extractor,
    sampler::SampleIndex,
};

/// Running totals of a subsampling pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Substitute pairs still needed for requested pairs that failed the filter
    pub owed: usize,
    /// Reads written so far (two per pair)
    pub selected: usize,
}
impl Selection {
    /// Records the outcome of a call aimed at a requested position.
    ///
    /// The requested pair accounts for one unit; every pair written beyond what
    /// the request itself explains settles one owed pair.
    fn reconcile_targeted(&mut self, emitted: usize) {
        self.selected += 2 * emitted;
        match emitted {
            0 => self.owed += 1,
            1 => {}
            n => self.owed -= n - 1,
        }
    }

    /// Records the outcome of a continuation call, where every pair is a substitute
    fn reconcile_continuation(&mut self, emitted: usize) {
        self.selected += 2 * emitted;
        self.owed -= emitted;
    }
}

/// Writes exactly `requested_reads` reads drawn from `index`.
///
/// Requested positions are visited in ascending order. Positions rejected by the
/// length filter are made up with the next qualifying pairs, first while walking
/// towards later requested positions and then from the remainder of the input.
pub fn subsample<R: BufRead, W: Write>(
    extractor: &mut Extractor<R, W>,
    index: &SampleIndex,
    requested_reads: usize,
) -> Result<Selection> {
    let mut selection = Selection::default();

    for position in index.iter() {
        let emitted = extractor.extract(Some(position), selection.owed)?;
        selection.reconcile_targeted(emitted);
    }

    if selection.owed > 0 {
        debug!(
            "Continuing past the last requested position for {} owed pair(s)",
            selection.owed
        );
    }
    while selection.owed > 0 && !extractor.is_exhausted() {
        let emitted = extractor.extract(None, selection.owed)?;
        selection.reconcile_continuation(emitted);
    }

    if selection.owed > 0 {
        return Err(SampleError::FilterExhausted {
            owed: selection.owed,
            selected: selection.selected,
            requested: requested_reads,
        });
    }
    if selection.selected != requested_reads {
        return Err(SampleError::CountMismatch {
            requested: requested_reads,
            selected: selection.selected,
        });
    }

    if extractor.substitutes() > 0 {
        info!(
            "Substituted {} pair(s) for requested pairs below the minimum length",
            extractor.substitutes()
        );
    }
    Ok(selection)
}
