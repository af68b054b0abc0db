pub mod count;
pub mod sample;
mod utils;

pub use utils::{compress_gzip_passthrough, match_input, match_output, remove_outputs};
