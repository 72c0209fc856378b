mod args;

use anyhow::Result;
use args::Args;
use clap::Parser;
use dirls::core::telemetry::logging::init_logging;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        // Reader went away (e.g. `dirls | head`); nothing left to report.
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("dirls: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let options = args.listing_options();
    tracing::debug!(?options, dir = %args.dir.display(), "listing");

    let entries = dirls::collect(&args.dir, &options)?;
    let output = dirls::render(&entries, &options);

    if output.is_empty() {
        return Ok(());
    }
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}")?;
    stdout.flush()?;
    Ok(())
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
}
