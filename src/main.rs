use anyhow::Context;
use clap::Parser;
use img_optimizer::cli::Args;
use img_optimizer::logger::{set_verbosity, Verbosity};
use img_optimizer::{optimize_directory, OptimizeOptions, WebpCodec};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    set_verbosity(Verbosity::from_flags(args.quiet, args.verbose));

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            img_optimizer::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Per-file failures are reported inside the run and never reach here.
fn run(args: Args) -> anyhow::Result<()> {
    let options = OptimizeOptions::new(
        &args.input,
        Some(args.quality),
        Some(args.max_width),
        Some(args.thumbnail_width),
    )
    .context("invalid options")?;

    optimize_directory(&WebpCodec::new(), &options)
        .with_context(|| format!("cannot optimize {}", args.input.display()))?;

    Ok(())
}
