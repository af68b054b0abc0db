#![allow(clippy::module_inception)]

mod cli;
mod commands;
mod types;

use cli::{Cli, Commands};

use anyhow::Result;
use clap::Parser;
use log::trace;

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {
    // no-op
}

fn main() -> Result<()> {
    reset_sigpipe();

    let args = Cli::parse();

    env_logger::builder()
        .format_timestamp_millis()
        .filter_level(args.log_level())
        .parse_env("FQSUBSET_LOG")
        .init();

    trace!("init");
    match args.command {
        Commands::Sample(ref sample) => commands::sample::run(sample),
        Commands::Count(ref count) => commands::count::run(count),
    }?;
    trace!("done");
    Ok(())
}
