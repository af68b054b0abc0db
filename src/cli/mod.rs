mod cli;
mod count;
mod input;
mod output;
mod sample;

pub use cli::{Cli, Commands};
pub use count::CountCommand;
pub use input::InputFile;
pub use output::OutputFile;
pub use sample::SampleCommand;
