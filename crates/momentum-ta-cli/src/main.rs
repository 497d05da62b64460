//! momentum-ta command-line interface
//!
//! Computes the Price Momentum Oscillator or rate of change for a CSV file
//! of dated price bars.

use std::process::ExitCode;

use momentum_ta_cli::args::Args;
use tracing_subscriber::EnvFilter;

fn init_tracing(args: &Args) {
    // An explicit -v wins over RUST_LOG
    let filter = if args.verbose > 0 {
        EnvFilter::new(args.log_filter())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse_args();
    init_tracing(&args);

    match momentum_ta_cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            if let Some(hint) = err.hint() {
                eprintln!("hint: {hint}");
            }
            ExitCode::FAILURE
        }
    }
}
