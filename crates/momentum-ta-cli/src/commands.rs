//! Command dispatch: read bars, run the indicator, write the result.

use momentum_ta::indicators::{pmo, roc};
use tracing::{debug, info};

use crate::args::{parse_pmo_params, Args, Command, OutputFormat};
use crate::csv_parser::parse_bars;
use crate::csv_writer::{write_json, write_pmo_csv, write_roc_csv, OutputDest};
use crate::error::Result;

/// Run the command described by `args`.
///
/// # Errors
///
/// Returns the first I/O, parse, argument or indicator error encountered.
/// Nothing is written when the indicator rejects its input.
pub fn run(args: &Args) -> Result<()> {
    let dest = OutputDest::from_path(args.output_path());

    match &args.command {
        Command::Pmo {
            input,
            params,
            format,
            all_rows,
            ..
        } => {
            let (time_period, smoothing_period, signal_period) = parse_pmo_params(params)?;
            let bars = parse_bars(input)?;
            debug!(
                input = %input,
                bars = bars.len(),
                time_period,
                smoothing_period,
                signal_period,
                "running pmo"
            );

            let results = pmo(&bars, time_period, smoothing_period, signal_period)?;
            match format {
                OutputFormat::Csv => write_pmo_csv(&results, *all_rows, &dest)?,
                OutputFormat::Json => write_json(&results, &dest)?,
            }
            info!(rows = results.len(), "pmo complete");
        }
        Command::Roc {
            input,
            lookback,
            format,
            ..
        } => {
            let bars = parse_bars(input)?;
            debug!(input = %input, bars = bars.len(), lookback, "running roc");

            let points = roc(&bars, *lookback)?;
            match format {
                OutputFormat::Csv => write_roc_csv(&points, &dest)?,
                OutputFormat::Json => write_json(&points, &dest)?,
            }
            info!(rows = points.len(), "roc complete");
        }
    }

    Ok(())
}
