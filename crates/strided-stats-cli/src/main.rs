//! strided-stats command-line interface
//!
//! Runs strided kernels and incremental accumulators over numeric CSV
//! columns. Logging goes to stderr through `env_logger`; `RUST_LOG` takes
//! precedence over `-v`.

use std::process::ExitCode;

use log::error;
use strided_stats_cli::args::Args;
use strided_stats_cli::commands::run;

fn main() -> ExitCode {
    let args = Args::parse_args();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:?}");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
