//! gaslens - heuristic gas analyzer for Solidity contracts
//!
//! A CLI tool that scans contract source text for costly patterns and
//! produces an estimated gas report with optimization suggestions.
//!
//! Exit codes:
//!   0 - Success (score at or above --min-score, or no --min-score set)
//!   1 - Usage, input, config or output error
//!   2 - Efficiency score below --min-score threshold

mod analysis;
mod cli;
mod config;
mod cost_table;
mod detectors;
mod models;
mod report;
mod source;

use analysis::GasAnalyzer;
use anyhow::{Context, Result};
use cli::{Args, OutputFormat};
use config::{Config, ReportConfig, DEFAULT_CONFIG_FILE};
use cost_table::CostTable;
use models::ReportSummary;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        eprintln!("Usage: gaslens <CONTRACT>");
        eprintln!("Example: gaslens ./contracts/MyContract.sol");
        std::process::exit(1);
    }

    // Handle commands that don't analyze (no logging needed)
    if args.init_config {
        std::process::exit(exit_code_for(handle_init_config()));
    }
    if args.list_costs {
        print!("{}", CostTable::get().render());
        return;
    }

    // Initialize logging
    init_logging(&args);

    info!("gaslens v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    match run_analysis(&args) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            error!("Analysis failed: {:#}", e);
            eprintln!("\n❌ Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn exit_code_for(result: Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            1
        }
    }
}

/// Handle --init-config: generate a default .gaslens.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(DEFAULT_CONFIG_FILE);

    if path.exists() {
        anyhow::bail!(
            "{} already exists. Remove it first or edit it manually.",
            DEFAULT_CONFIG_FILE
        );
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", DEFAULT_CONFIG_FILE))?;

    println!("✅ Created {} with default settings.", DEFAULT_CONFIG_FILE);
    println!("   Edit it to retune weights, scoring and report output.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
///
/// Logs go to stderr so `--format json` output stays machine-readable.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Run the complete analysis workflow. Returns exit code (0 or 2).
fn run_analysis(args: &Args) -> Result<i32> {
    // Load configuration
    let mut config = load_config(args)?;
    config.merge_with_args(args);
    config.validate()?;

    // Step 1: Read the contract
    let path = args
        .contract
        .as_deref()
        .context("Missing contract path")?;
    let contract = source::load(path)?;
    info!(
        "Loaded {} ({} lines)",
        contract.label(),
        contract.line_count()
    );

    // Step 2: Run the detectors and aggregate
    let analyzer = GasAnalyzer::from_config(&config);
    let report = analyzer.analyze(&contract.label(), &contract.text);

    // Step 3: Render to the console
    let rendered = match args.format {
        OutputFormat::Text => report::generate_text_report(&report, config.report.show_tips),
        OutputFormat::Markdown => {
            report::generate_markdown_report(&report, config.report.show_tips)
        }
        OutputFormat::Json => report::generate_json_report(&report)?,
    };
    println!("{}", rendered);

    // Step 4: Persist the JSON report
    match save_target(args.output.as_deref(), &config.report) {
        Some(SaveTarget::File(path)) => {
            report::write_json_report(&report, &path)?;
            announce_saved(args.format, &path.display().to_string());
        }
        Some(SaveTarget::Directory(dir)) => {
            let saved = report::save_json_report(&report, &dir)?;
            announce_saved(args.format, &saved.display().to_string());
        }
        None => debug!("Report persistence disabled"),
    }

    // Check --min-score threshold
    let exit_code = score_exit_code(&report.summary, config.general.min_score);
    if exit_code != 0 {
        eprintln!(
            "\n⛔ Efficiency score {} is below the minimum of {}. Failing (exit code {}).",
            report.summary.efficiency_score,
            config.general.min_score.unwrap_or_default(),
            exit_code
        );
    }

    Ok(exit_code)
}

/// Where the JSON report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SaveTarget {
    /// Exact file given with `--output`.
    File(PathBuf),
    /// Directory that receives a timestamped file.
    Directory(PathBuf),
}

/// `--output` wins; otherwise the timestamped report unless saving is off.
fn save_target(output: Option<&Path>, report: &ReportConfig) -> Option<SaveTarget> {
    match output {
        Some(path) => Some(SaveTarget::File(path.to_path_buf())),
        None if report.save_json => Some(SaveTarget::Directory(report.output_dir.clone())),
        None => None,
    }
}

/// Exit code 2 when the score is strictly below the configured minimum.
fn score_exit_code(summary: &ReportSummary, min_score: Option<u32>) -> i32 {
    match min_score {
        Some(min) if summary.efficiency_score < min => 2,
        _ => 0,
    }
}

fn announce_saved(format: OutputFormat, path: &str) {
    // Keep stdout pure JSON in json mode
    if format == OutputFormat::Json {
        eprintln!("Gas analysis report saved to: {}", path);
    } else {
        println!("\n💾 Gas analysis report saved to: {}", path);
    }
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from {}", DEFAULT_CONFIG_FILE);
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {:#}", e);
            Ok(Config::default())
        }
    }
}
