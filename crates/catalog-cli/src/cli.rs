//! CLI argument definitions for the product export cleaner.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Args, ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use crate::logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(
    name = "catalog-fill",
    version,
    about = "Forward-fill product exports by handle and normalize them for re-import",
    long_about = "Forward-fill variant rows of a product export within each product group,\n\
                  then normalize descriptions, placeholders and missing values and write\n\
                  a fully quoted CSV ready for re-import."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Logging configuration with consistent precedence: `--log-level` over
    /// `-v/-q` over `RUST_LOG`.
    pub fn log_config(&self) -> LogConfig {
        let level = match self.log_level {
            Some(LogLevelArg::Error) => LevelFilter::ERROR,
            Some(LogLevelArg::Warn) => LevelFilter::WARN,
            Some(LogLevelArg::Info) => LevelFilter::INFO,
            Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
            Some(LogLevelArg::Trace) => LevelFilter::TRACE,
            None => self.verbosity.tracing_level_filter(),
        };
        let format = match self.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
        let ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        LogConfig::default()
            .with_level(level)
            .with_env_filter(!(self.verbosity.is_present() || self.log_level.is_some()))
            .with_format(format)
            .with_log_file(self.log_file.clone())
            .with_ansi(ansi)
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Load, forward-fill and save a product export.
    Clean(CleanArgs),

    /// List fillable columns and mark the default selection.
    Columns(InputArgs),

    /// Check that a file has the required product export columns.
    Check(InputArgs),
}

#[derive(Args)]
pub struct InputArgs {
    /// Product export CSV.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Keep literal "NA", "null" and similar values instead of treating them
    /// as missing.
    #[arg(long = "keep-na-tokens")]
    pub keep_na_tokens: bool,
}

#[derive(Args)]
pub struct CleanArgs {
    #[command(flatten)]
    pub source: InputArgs,

    /// Output path (default: <INPUT stem>_cleaned.csv next to the input).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Column to forward-fill. Repeat to select several; replaces the default
    /// selection.
    #[arg(long = "column", value_name = "NAME", conflicts_with = "exclude")]
    pub columns: Vec<String>,

    /// Column to drop from the default selection. Repeatable.
    #[arg(long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Print the load, fill and save reports as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn clean_collects_repeated_columns() {
        let cli = Cli::parse_from([
            "catalog-fill",
            "clean",
            "products.csv",
            "--column",
            "Vendor",
            "--column",
            "Tags",
            "-o",
            "out",
        ]);
        let Command::Clean(args) = cli.command else {
            panic!("expected clean");
        };
        assert_eq!(args.columns, vec!["Vendor", "Tags"]);
        assert_eq!(args.output, Some(PathBuf::from("out")));
        assert!(!args.source.keep_na_tokens);
    }

    #[test]
    fn log_flags_build_the_config() {
        let cli = Cli::parse_from([
            "catalog-fill",
            "-v",
            "--log-format",
            "json",
            "--log-file",
            "fill.log",
            "check",
            "products.csv",
        ]);
        let config = cli.log_config();
        assert_eq!(config.level_filter, LevelFilter::INFO);
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.log_file, Some(PathBuf::from("fill.log")));
        assert!(!config.use_env_filter);
        assert!(!config.with_ansi);
    }

    #[test]
    fn explicit_level_wins_and_env_is_honored_without_flags() {
        let cli = Cli::parse_from(["catalog-fill", "--log-level", "trace", "check", "a.csv"]);
        assert_eq!(cli.log_config().level_filter, LevelFilter::TRACE);

        let cli = Cli::parse_from(["catalog-fill", "--color", "never", "check", "a.csv"]);
        let config = cli.log_config();
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
        assert!(!config.with_ansi);
    }

    #[test]
    fn column_and_exclude_conflict() {
        let result = Cli::try_parse_from([
            "catalog-fill",
            "clean",
            "products.csv",
            "--column",
            "Vendor",
            "--exclude",
            "Tags",
        ]);
        assert!(result.is_err());
    }
}
