use log::{info, warn};

use super::error::{Result, SampleError};

/// How many reads the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleRequest {
    /// An absolute number of reads
    Number(usize),
    /// One in every `n` reads of the input
    Portion(usize),
}
impl SampleRequest {
    pub fn new(number: Option<usize>, portion: Option<usize>) -> Result<Self> {
        match (number, portion) {
            (Some(number), _) => Ok(Self::Number(number)),
            (None, Some(portion)) => Ok(Self::Portion(portion)),
            (None, None) => Err(SampleError::MissingRequest),
        }
    }

    /// Suffix used to name outputs after the request
    pub fn tag(&self, reads: usize) -> usize {
        match self {
            Self::Number(_) => reads,
            Self::Portion(portion) => *portion,
        }
    }

    /// Resolves the request into an even number of reads available in the input.
    pub fn resolve(&self, total_pairs: usize) -> Result<usize> {
        let total_reads = total_pairs * 2;
        let mut reads = match *self {
            Self::Number(number) => number,
            Self::Portion(0) => return Err(SampleError::ZeroPortion),
            Self::Portion(portion) => {
                let reads = total_reads / portion;
                info!("Setting number of reads to {reads} based on portion of 1/{portion}");
                reads
            }
        };

        if reads % 2 != 0 {
            warn!("Requested number of reads is odd: adding 1 to {reads}");
            reads += 1;
        }
        if reads > total_reads {
            return Err(SampleError::RequestTooLarge {
                requested: reads,
                available: total_reads,
            });
        }
        Ok(reads)
    }
}
