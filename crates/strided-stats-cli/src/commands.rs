//! Command execution: maps parsed arguments onto kernels and accumulators.

use log::{debug, info};

use crate::args::{Args, Command, Stat};
use crate::csv_parser::{parse_csv, ParsedCsv};
use crate::csv_writer::{write_multi_output, write_scalar, OutputDest};
use crate::error::{CliError, Result};
use strided_stats::incr::{Accumulator, MovingStats, WeightedMean};
use strided_stats::kernels::{dot, stdev, variance};
use strided_stats::StridedLayout;

/// Runs the command described by `args`.
///
/// # Errors
///
/// Returns the first I/O, parse, argument or computation error.
pub fn run(args: &Args) -> Result<()> {
    let parsed = parse_csv(args.input_path())?;
    let dest = OutputDest::from_arg(args.output_path());

    match &args.command {
        Command::Dot {
            x,
            y,
            stride_x,
            stride_y,
            ..
        } => {
            let xs = parsed.require_column(x, "x")?;
            let ys = parsed.require_column(y, "y")?;
            let result = compute_dot(xs, *stride_x, ys, *stride_y)?;
            write_scalar(result, "dot", &dest)
        }
        Command::Variance {
            column,
            correction,
            stdev,
            ..
        } => {
            let (_, values) = parsed.column_or_first(column.as_deref(), "column")?;
            let result = compute_variance(values, *correction, *stdev);
            write_scalar(result, if *stdev { "stdev" } else { "variance" }, &dest)
        }
        Command::Moving {
            window,
            stat,
            mean,
            correction,
            column,
            ..
        } => {
            let (name, values) = parsed.column_or_first(column.as_deref(), "column")?;
            let mut config = MovingStats::new().window(*window);
            if let Some(mu) = mean {
                config = config.mean(*mu);
            }
            if let Some(k) = correction {
                config = config.correction(*k);
            }
            let outputs = compute_moving(values, &config, *stat)?;
            write_named(&parsed, &name, *stat, &outputs, &dest)
        }
        Command::Wmean { value, weight, .. } => {
            let values = parsed.require_column(value, "value")?;
            let weights = parsed.require_column(weight, "weight")?;
            let output = compute_wmean(values, weights)?;
            write_multi_output(&[("wmean", output.as_slice())], parsed.labels.as_deref(), &dest)
        }
    }
}

/// Number of strided elements that fit in a column of `len` values.
fn strided_count(len: usize, stride: isize) -> Option<usize> {
    match (len, stride) {
        (0, _) => Some(0),
        (_, 0) => None,
        _ => Some((len - 1) / stride.unsigned_abs() + 1),
    }
}

/// Dot product of two columns, visiting as many elements as both strides allow.
///
/// A zero stride repeats the first (or last) element and does not limit the
/// count on its own.
///
/// # Errors
///
/// Returns `CliError::InvalidArgument` if both strides are zero, or a
/// computation error if a layout would escape its column.
pub fn compute_dot(xs: &[f64], stride_x: isize, ys: &[f64], stride_y: isize) -> Result<f64> {
    let n = match (strided_count(xs.len(), stride_x), strided_count(ys.len(), stride_y)) {
        (Some(a), Some(b)) => a.min(b),
        (Some(a), None) => a,
        (None, Some(b)) => b,
        (None, None) => {
            return Err(CliError::InvalidArgument {
                argument: "stride-x".to_string(),
                reason: "both strides are zero, so the length is undefined".to_string(),
                suggestion: Some("Give at least one non-zero stride".to_string()),
            })
        }
    };
    StridedLayout::from_stride(n, stride_x).validate(xs.len())?;
    StridedLayout::from_stride(n, stride_y).validate(ys.len())?;
    debug!("dot over {n} elements (stride_x={stride_x}, stride_y={stride_y})");
    Ok(dot(n, xs, stride_x, ys, stride_y))
}

/// Variance (or standard deviation) of a whole column.
pub fn compute_variance(values: &[f64], correction: usize, as_stdev: bool) -> f64 {
    let n = values.len();
    if as_stdev {
        stdev(n, correction, values, 1)
    } else {
        variance(n, correction, values, 1)
    }
}

/// Runs a windowed accumulator over `values`, one output column per header.
///
/// # Errors
///
/// Returns a computation error if the configuration is invalid.
pub fn compute_moving(values: &[f64], config: &MovingStats, stat: Stat) -> Result<Vec<Vec<f64>>> {
    info!(
        "moving {stat:?} over {} values (window={}, correction={})",
        values.len(),
        config.get_window(),
        config.get_correction()
    );
    let input = values.iter().copied();
    let outputs = match stat {
        Stat::Mean => vec![config.build_moving_mean()?.observe_all(input)],
        Stat::Variance => vec![config.build_moving_variance()?.observe_all(input)],
        Stat::Stdev => vec![config.build_moving_stdev()?.observe_all(input)],
        Stat::MeanStdev => {
            let rows = config.build_moving_mean_stdev()?.observe_all(input);
            vec![
                rows.iter().map(|r| r.mean).collect(),
                rows.iter().map(|r| r.stdev).collect(),
            ]
        }
        Stat::MeanVariance => {
            let rows = config.build_moving_mean_variance()?.observe_all(input);
            vec![
                rows.iter().map(|r| r.mean).collect(),
                rows.iter().map(|r| r.variance).collect(),
            ]
        }
    };
    Ok(outputs)
}

/// Running weighted mean of paired value and weight columns.
///
/// # Errors
///
/// Returns a computation error if the columns differ in length.
pub fn compute_wmean(values: &[f64], weights: &[f64]) -> Result<Vec<f64>> {
    if values.len() != weights.len() {
        return Err(strided_stats::Error::LengthMismatch {
            expected: values.len(),
            actual: weights.len(),
        }
        .into());
    }
    let mut acc = WeightedMean::new();
    Ok(acc.observe_all(values.iter().copied().zip(weights.iter().copied())))
}

/// Writes moving-statistic columns named `<column>_<stat>`.
fn write_named(
    parsed: &ParsedCsv,
    column: &str,
    stat: Stat,
    outputs: &[Vec<f64>],
    dest: &OutputDest,
) -> Result<()> {
    let names: Vec<String> = stat
        .headers()
        .iter()
        .map(|h| format!("{column}_{h}"))
        .collect();
    let columns: Vec<(&str, &[f64])> = names
        .iter()
        .zip(outputs)
        .map(|(n, v)| (n.as_str(), v.as_slice()))
        .collect();
    write_multi_output(&columns, parsed.labels.as_deref(), dest)
}
