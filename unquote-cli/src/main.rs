use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

mod error;
mod process;

/// Strip surrounding quotes and collapse doubled quotes in every line
///
/// Each line loses one leading and one trailing `"`, then every `""` left in
/// it becomes `"`. Results are written to `processed_<name>` next to each
/// input unless told otherwise.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[command(flatten)]
    process: process::Args,
}

fn main() -> miette::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    process::run(&args.process)?;
    Ok(())
}
