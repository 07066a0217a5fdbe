//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// gaslens - heuristic gas analyzer for Solidity contracts
///
/// Scans contract source for costly patterns (storage writes, loops,
/// external calls, wide data types) and estimates their gas cost
/// without compiling or executing the contract.
///
/// Examples:
///   gaslens ./contracts/MyContract.sol
///   gaslens ./contracts/MyContract.sol --format json --no-save
///   gaslens ./contracts/MyContract.sol --min-score 75
///   gaslens --list-costs
///   gaslens --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the Solidity contract to analyze
    #[arg(
        value_name = "CONTRACT",
        required_unless_present_any = ["init_config", "list_costs"]
    )]
    pub contract: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .gaslens.toml in the current directory
    #[arg(short, long, value_name = "FILE", env = "GASLENS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Console output format (text, markdown, json)
    #[arg(long, default_value = "text", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Write the JSON report to this file instead of a timestamped name
    #[arg(short, long, value_name = "FILE", conflicts_with = "no_save")]
    pub output: Option<PathBuf>,

    /// Directory that receives the timestamped JSON report
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Do not persist the JSON report
    #[arg(long)]
    pub no_save: bool,

    /// Omit the best-practice tips from the console report
    #[arg(long)]
    pub no_tips: bool,

    /// Fail if the efficiency score is below this value
    ///
    /// Useful for CI pipelines. Exit code 2 when the score is lower.
    #[arg(long, value_name = "SCORE")]
    pub min_score: Option<u32>,

    /// Print the reference operation cost table and exit
    #[arg(long)]
    pub list_costs: bool,

    /// Generate a default .gaslens.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Console output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text (default)
    #[default]
    Text,
    /// Markdown format
    Markdown,
    /// JSON format
    Json,
}

impl Args {
    /// Parse command-line arguments.
    ///
    /// Usage errors exit with code 1; `--help` and `--version` exit with 0.
    pub fn parse_args() -> Self {
        match Self::try_parse() {
            Ok(args) => args,
            Err(e) => match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    e.exit()
                }
                _ => {
                    let _ = e.print();
                    std::process::exit(1);
                }
            },
        }
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for commands that don't analyze
        if self.init_config || self.list_costs {
            return Ok(());
        }

        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if let Some(score) = self.min_score {
            if score > 100 {
                return Err("Minimum score must be between 0 and 100".to_string());
            }
        }

        if let Some(ref dir) = self.output_dir {
            if !dir.is_dir() {
                return Err(format!("Output directory does not exist: {}", dir.display()));
            }
        }

        if self.contract.is_none() {
            return Err("Missing contract path".to_string());
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_args() -> Args {
        Args {
            contract: Some(PathBuf::from("Token.sol")),
            config: None,
            verbose: false,
            quiet: false,
            format: OutputFormat::Text,
            output: None,
            output_dir: None,
            no_save: false,
            no_tips: false,
            min_score: None,
            list_costs: false,
            init_config: false,
        }
    }

    #[test]
    fn test_parse_positional_contract() {
        let args = Args::try_parse_from(["gaslens", "contracts/Token.sol"]).unwrap();
        assert_eq!(args.contract, Some(PathBuf::from("contracts/Token.sol")));
        assert_eq!(args.format, OutputFormat::Text);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_missing_contract_is_rejected() {
        assert!(Args::try_parse_from(["gaslens"]).is_err());
    }

    #[test]
    fn test_extra_positional_is_rejected() {
        assert!(Args::try_parse_from(["gaslens", "A.sol", "B.sol"]).is_err());
    }

    #[test]
    fn test_list_costs_needs_no_contract() {
        let args = Args::try_parse_from(["gaslens", "--list-costs"]).unwrap();
        assert!(args.contract.is_none());
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_output_conflicts_with_no_save() {
        let result = Args::try_parse_from(["gaslens", "A.sol", "-o", "out.json", "--no-save"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_conflicting_options() {
        let mut args = make_args();
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_min_score_range() {
        let mut args = make_args();
        args.min_score = Some(101);
        assert!(args.validate().is_err());

        args.min_score = Some(100);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_log_level() {
        let mut args = make_args();
        assert_eq!(args.log_level(), tracing::Level::INFO);

        args.verbose = true;
        assert_eq!(args.log_level(), tracing::Level::DEBUG);

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(), tracing::Level::ERROR);
    }
}
