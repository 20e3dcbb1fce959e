//! CLI argument parsing module.
//!
//! This module defines the command-line interface using clap. The CLI
//! follows the pattern: `strided-stats <command> <input.csv> [options] [-o output.csv]`
//!
//! # Examples
//!
//! ```bash
//! # Dot product of two columns
//! strided-stats dot data.csv --x a --y b
//!
//! # Every other element of `a` against `b` read backwards
//! strided-stats dot data.csv --x a --y b --stride-x 2 --stride-y -1
//!
//! # Population standard deviation of the first numeric column
//! strided-stats variance data.csv --correction 0 --stdev
//!
//! # Moving mean and standard deviation over 20 observations
//! strided-stats moving data.csv --window 20 --stat mean-stdev -o out.csv
//!
//! # Running weighted mean
//! strided-stats wmean data.csv --value price --weight volume
//! ```

use clap::{Parser, Subcommand, ValueEnum};

/// strided-stats: strided kernels and streaming statistics over CSV columns
#[derive(Parser, Debug)]
#[command(name = "strided-stats")]
#[command(author, version, about = "Strided numeric kernels and streaming statistics")]
#[command(long_about = "strided-stats runs BLAS-style strided kernels and incremental \
    accumulators over numeric CSV columns. Input is read from CSV files with a header \
    row; output is written to a file or stdout, with NaN written as an empty cell.")]
pub struct Args {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The computation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Statistic produced by the `moving` command.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    /// Moving mean
    Mean,
    /// Moving variance
    Variance,
    /// Moving standard deviation
    Stdev,
    /// Moving mean and standard deviation as two columns
    MeanStdev,
    /// Moving mean and variance as two columns
    MeanVariance,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Dot product of two strided columns
    #[command(about = "Dot product of two columns (ddot)")]
    Dot {
        /// Input CSV file
        input: String,

        /// Column holding x
        #[arg(long)]
        x: String,

        /// Column holding y
        #[arg(long)]
        y: String,

        /// Stride through x (negative reads backwards)
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        stride_x: isize,

        /// Stride through y (negative reads backwards)
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        stride_y: isize,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Variance or standard deviation of a whole column
    #[command(about = "Variance of a column (one Welford pass)")]
    Variance {
        /// Input CSV file
        input: String,

        /// Column to reduce (first numeric column if not specified)
        #[arg(short, long)]
        column: Option<String>,

        /// Divisor correction: 1 for the sample statistic, 0 for the population
        #[arg(short = 'k', long, default_value = "1")]
        correction: usize,

        /// Report the standard deviation instead of the variance
        #[arg(long)]
        stdev: bool,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Sliding-window statistics, one output row per observation
    #[command(about = "Moving mean / variance / standard deviation")]
    Moving {
        /// Input CSV file
        input: String,

        /// Window size
        #[arg(short, long, default_value = "20")]
        window: usize,

        /// Statistic to compute
        #[arg(short, long, value_enum, default_value_t = Stat::Stdev)]
        stat: Stat,

        /// Known mean (the statistic is then taken about this value)
        #[arg(long, allow_negative_numbers = true)]
        mean: Option<f64>,

        /// Divisor correction (defaults to 1, or 0 with a known mean)
        #[arg(short = 'k', long)]
        correction: Option<usize>,

        /// Column to use (first numeric column if not specified)
        #[arg(short, long)]
        column: Option<String>,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Running weighted arithmetic mean
    #[command(about = "Running weighted mean of value/weight columns")]
    Wmean {
        /// Input CSV file
        input: String,

        /// Column holding the values
        #[arg(long)]
        value: String,

        /// Column holding the weights
        #[arg(long)]
        weight: String,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the input file path from the command.
    pub fn input_path(&self) -> &str {
        match &self.command {
            Command::Dot { input, .. }
            | Command::Variance { input, .. }
            | Command::Moving { input, .. }
            | Command::Wmean { input, .. } => input,
        }
    }

    /// Get the output file path from the command, if specified.
    pub fn output_path(&self) -> Option<&str> {
        match &self.command {
            Command::Dot { output, .. }
            | Command::Variance { output, .. }
            | Command::Moving { output, .. }
            | Command::Wmean { output, .. } => output.as_deref(),
        }
    }
}

impl Stat {
    /// Output column headers for this statistic.
    pub fn headers(self) -> &'static [&'static str] {
        match self {
            Self::Mean => &["mean"],
            Self::Variance => &["variance"],
            Self::Stdev => &["stdev"],
            Self::MeanStdev => &["mean", "stdev"],
            Self::MeanVariance => &["mean", "variance"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_dot_defaults() {
        let args = parse(&["strided-stats", "dot", "in.csv", "--x", "a", "--y", "b"]);
        match args.command {
            Command::Dot {
                stride_x, stride_y, ..
            } => assert_eq!((stride_x, stride_y), (1, 1)),
            other => panic!("Expected Dot, got {other:?}"),
        }
        assert_eq!(args.input_path(), "in.csv");
        assert_eq!(args.output_path(), None);
    }

    #[test]
    fn test_dot_negative_stride() {
        let args = parse(&[
            "strided-stats", "dot", "in.csv", "--x", "a", "--y", "b", "--stride-y", "-2",
        ]);
        assert!(matches!(args.command, Command::Dot { stride_y: -2, .. }));
    }

    #[test]
    fn test_variance_options() {
        let args = parse(&[
            "strided-stats", "variance", "in.csv", "-c", "close", "-k", "0", "--stdev", "-o",
            "out.csv",
        ]);
        match &args.command {
            Command::Variance {
                column,
                correction,
                stdev,
                ..
            } => {
                assert_eq!(column.as_deref(), Some("close"));
                assert_eq!(*correction, 0);
                assert!(*stdev);
            }
            other => panic!("Expected Variance, got {other:?}"),
        }
        assert_eq!(args.output_path(), Some("out.csv"));
    }

    #[test]
    fn test_moving_defaults_and_stat() {
        let args = parse(&["strided-stats", "moving", "in.csv"]);
        assert!(matches!(
            args.command,
            Command::Moving {
                window: 20,
                stat: Stat::Stdev,
                mean: None,
                correction: None,
                ..
            }
        ));

        let args = parse(&[
            "strided-stats", "moving", "in.csv", "-w", "5", "--stat", "mean-stdev", "--mean",
            "-1.5",
        ]);
        match args.command {
            Command::Moving {
                window, stat, mean, ..
            } => {
                assert_eq!(window, 5);
                assert_eq!(stat, Stat::MeanStdev);
                assert_eq!(mean, Some(-1.5));
            }
            other => panic!("Expected Moving, got {other:?}"),
        }
    }

    #[test]
    fn test_global_verbose_flag() {
        let args = parse(&["strided-stats", "wmean", "in.csv", "--value", "p", "--weight", "v", "-v"]);
        assert!(args.verbose);
    }

    #[test]
    fn test_missing_required_column_rejected() {
        assert!(Args::try_parse_from(["strided-stats", "dot", "in.csv", "--x", "a"]).is_err());
        assert!(Args::try_parse_from(["strided-stats", "unknown", "in.csv"]).is_err());
    }

    #[test]
    fn test_stat_headers() {
        assert_eq!(Stat::Mean.headers(), &["mean"]);
        assert_eq!(Stat::MeanVariance.headers(), &["mean", "variance"]);
    }
}
