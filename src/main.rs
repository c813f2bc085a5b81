//! linemark CLI - line-oriented Markdown to HTML converter
//!
//! Usage: linemark [OPTIONS] <INPUT> <OUTPUT>

use std::process::ExitCode;

use linemark::{cli, Error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let args = match cli::parse_args(std::env::args_os()) {
        Ok(args) => args,
        // --help and --version
        Err(Error::Usage(err)) if !err.use_stderr() => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => return fail(&err),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(&err),
    }
}

fn fail(err: &Error) -> ExitCode {
    tracing::debug!(error = ?err, "conversion failed");
    eprintln!("{err}");
    ExitCode::from(err.exit_code())
}
