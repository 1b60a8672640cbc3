use anyhow::Context;
use clap::Parser;
use img_fit::cli::Args;
use img_fit::{logger, run_batch, ResizeError};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::set_quiet_mode(args.quiet);
    logger::set_verbose_mode(args.verbose);

    let config = args.into_config().context("Invalid configuration")?;

    match run_batch(&config) {
        Ok(_) => Ok(()),
        // Already reported. The run just ends; callers read the printed output.
        Err(ResizeError::SourceDirectoryNotFound(_)) => Ok(()),
        Err(e) => Err(e.into()),
    }
}
