//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.gaslens.toml` files. Every heuristic weight can be retuned here;
//! the defaults reproduce the reference cost model exactly.

use crate::cost_table::CostTable;
use crate::models::SCORE_SCALE;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".gaslens.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Heuristic detector weights.
    #[serde(default)]
    pub weights: Weights,

    /// Efficiency score settings.
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Fail with exit code 2 when the efficiency score is below this value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_score: Option<u32>,
}

/// Heuristic gas weights used by the detectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    /// Cost per state variable declaration.
    pub storage_declaration: u64,
    /// Cost per assignment expression.
    pub storage_assignment: u64,
    /// Cost per loop.
    pub loop_base: u64,
    /// Extra cost per loop whose body contains an expensive operation.
    pub loop_expensive: u64,
    /// Cost per function declaration.
    pub function_declaration: u64,
    /// Cost per dotted call expression.
    pub external_call: u64,
    /// Cost per `delegatecall`.
    pub delegate_call: u64,
    /// Number of storage declarations above which the storage hotspot is MEDIUM.
    pub storage_medium_threshold: usize,
    /// Cost per array `push`.
    pub array_push: u64,
    /// Cost per array `pop`.
    pub array_pop: u64,
    /// Cost per literal-indexed access.
    pub array_access: u64,
    /// Array cost above which the array hotspot is MEDIUM.
    pub array_medium_threshold: u64,
    /// Cost per mapping read.
    pub mapping_read: u64,
    /// Cost per mapping write.
    pub mapping_write: u64,
    /// Savings per `string` usage when bytes are rarer.
    pub string_to_bytes_savings: u64,
    /// Savings per `uint256` usage when it dominates `uint`.
    pub wide_int_savings: u64,
    /// Savings per constant candidate.
    pub constant_savings: u64,
    /// Savings per public function.
    pub visibility_savings: u64,
    /// Savings per `require` without custom errors.
    pub custom_error_savings: u64,
    /// Savings per declared but unemitted event.
    pub unused_event_savings: u64,
    /// Savings per struct with mixed integer widths.
    pub struct_packing_savings: u64,
}

impl Default for Weights {
    fn default() -> Self {
        let table = CostTable::get();
        Self {
            storage_declaration: table.base_cost("storage_operations", "sstore").unwrap_or(20000),
            storage_assignment: 5000,
            loop_base: 1000,
            loop_expensive: 10000,
            function_declaration: 500,
            external_call: table.base_cost("function_calls", "external_call").unwrap_or(700),
            delegate_call: 700,
            storage_medium_threshold: 10,
            array_push: 20000,
            array_pop: 5000,
            array_access: table.base_cost("storage_operations", "sload").unwrap_or(800),
            array_medium_threshold: 50000,
            mapping_read: table.base_cost("storage_operations", "sload").unwrap_or(800),
            mapping_write: table.base_cost("storage_operations", "sstore").unwrap_or(20000),
            string_to_bytes_savings: 20,
            wide_int_savings: 5,
            constant_savings: 2300,
            visibility_savings: 50,
            custom_error_savings: 100,
            unused_event_savings: 375,
            struct_packing_savings: 2000,
        }
    }
}

/// Efficiency score settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Score for a contract with no estimated cost.
    ///
    /// Values above 100 are clamped; the report scale is always 0-100.
    #[serde(default = "default_max_score")]
    pub max_score: u32,

    /// Estimated gas that costs one score point.
    #[serde(default = "default_gas_per_point")]
    pub gas_per_point: u64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            max_score: default_max_score(),
            gas_per_point: default_gas_per_point(),
        }
    }
}

fn default_max_score() -> u32 {
    100
}

fn default_gas_per_point() -> u64 {
    1000
}

/// Report generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Persist the JSON report after each run.
    #[serde(default = "default_true")]
    pub save_json: bool,

    /// Directory that receives timestamped reports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Print the best-practice tips after the findings.
    #[serde(default = "default_true")]
    pub show_tips: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            save_json: true,
            output_dir: default_output_dir(),
            show_tips: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(DEFAULT_CONFIG_FILE);

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings and only
    /// override them when explicitly provided.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(min_score) = args.min_score {
            self.general.min_score = Some(min_score);
        }

        if let Some(ref dir) = args.output_dir {
            self.report.output_dir = dir.clone();
        }

        if args.no_save {
            self.report.save_json = false;
        }

        if args.no_tips {
            self.report.show_tips = false;
        }
    }

    /// Reject settings that are well-formed TOML but out of range.
    pub fn validate(&self) -> Result<()> {
        if let Some(min_score) = self.general.min_score {
            if min_score > SCORE_SCALE {
                anyhow::bail!(
                    "general.min_score must be between 0 and {}, got {}",
                    SCORE_SCALE,
                    min_score
                );
            }
        }
        Ok(())
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.weights.storage_declaration, 20000);
        assert_eq!(config.weights.external_call, 700);
        assert_eq!(config.weights.mapping_read, 800);
        assert_eq!(config.scoring.gas_per_point, 1000);
        assert_eq!(config.scoring.max_score, 100);
        assert!(config.report.save_json);
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
[general]
min_score = 60

[weights]
storage_declaration = 22100
loop_expensive = 5000

[report]
show_tips = false
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.general.min_score, Some(60));
        assert_eq!(config.weights.storage_declaration, 22100);
        assert_eq!(config.weights.loop_expensive, 5000);
        // Untouched weights keep their defaults
        assert_eq!(config.weights.array_push, 20000);
        assert_eq!(config.scoring, ScoringConfig::default());
        assert!(!config.report.show_tips);
        assert!(config.report.save_json);
    }

    #[test]
    fn test_default_toml_round_trips() {
        let toml_str = Config::default_toml();
        assert!(toml_str.contains("[weights]"));
        assert!(toml_str.contains("[scoring]"));
        assert!(toml_str.contains("[report]"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[weights\nstorage_declaration = ").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_validate_min_score_from_file() {
        let config: Config = toml::from_str("[general]\nmin_score = 150\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("min_score"));

        let config: Config = toml::from_str("[general]\nmin_score = 100\n").unwrap();
        assert!(config.validate().is_ok());
        assert!(Config::default().validate().is_ok());
    }
}
