/// Custom Result type for subsampling operations
pub type Result<T> = std::result::Result<T, SampleError>;

/// Errors raised while resolving a request, drawing positions, or streaming pairs.
#[derive(thiserror::Error, Debug)]
pub enum SampleError {
    /// Neither an absolute number nor a portion was provided
    #[error("Need either a number of reads or a portion to sample")]
    MissingRequest,

    /// A portion of zero cannot be resolved into a read count
    #[error("Portion must be greater than zero")]
    ZeroPortion,

    /// The resolved request is larger than the number of reads available
    #[error("Requested number of reads ({requested}) is larger than the number of reads in the input ({available})")]
    RequestTooLarge { requested: usize, available: usize },

    /// More pair positions were requested than exist in the input
    #[error("Cannot draw {requested} pairs from an input of {available} pairs")]
    OversizedSample { requested: usize, available: usize },

    /// The input ran out before every rejected pair could be substituted
    #[error("Input exhausted with {owed} pair(s) still owed ({selected} of {requested} reads written); the minimum length may be too stringent for these reads")]
    FilterExhausted {
        owed: usize,
        selected: usize,
        requested: usize,
    },

    /// The final number of reads written does not match the request
    #[error("Requested number of reads ({requested}) does not equal output count ({selected})")]
    CountMismatch { requested: usize, selected: usize },

    /// A record ended before all four of its lines were read
    #[error("Truncated FASTQ record at pair position {position}")]
    TruncatedRecord { position: usize },

    /// The reverse input ended before the forward input
    #[error("Reverse input ended before the forward input at pair position {position}")]
    MateDesync { position: usize },

    /// Standard I/O errors
    #[error("Error with IO: {0}")]
    IoError(#[from] std::io::Error),
}
