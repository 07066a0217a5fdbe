//! Data models for the gas analyzer.
//!
//! This module contains the records produced by the detectors and the
//! report structure that is rendered and persisted by the reporter.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity level of a gas hotspot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Low severity - noticeable but cheap patterns
    Low,
    /// Medium severity - patterns worth reviewing before deployment
    Medium,
    /// High severity - expensive work repeated in loops
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "LOW"),
            Severity::Medium => write!(f, "MEDIUM"),
            Severity::High => write!(f, "HIGH"),
        }
    }
}

impl Severity {
    /// Returns an emoji representation of the severity.
    pub fn emoji(&self) -> &'static str {
        match self {
            Severity::Low => "🟢",
            Severity::Medium => "🟡",
            Severity::High => "🟠",
        }
    }
}

/// Category tag of a gas hotspot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HotspotKind {
    StorageUsage,
    LoopOperations,
    FunctionCalls,
    ArrayOperations,
    MappingOperations,
}

impl HotspotKind {
    /// Returns the tag used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            HotspotKind::StorageUsage => "STORAGE_USAGE",
            HotspotKind::LoopOperations => "LOOP_OPERATIONS",
            HotspotKind::FunctionCalls => "FUNCTION_CALLS",
            HotspotKind::ArrayOperations => "ARRAY_OPERATIONS",
            HotspotKind::MappingOperations => "MAPPING_OPERATIONS",
        }
    }
}

impl fmt::Display for HotspotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category tag of an optimization suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptimizationKind {
    DataTypeOptimization,
    ConstantOptimization,
    VisibilityOptimization,
    ErrorOptimization,
    EventOptimization,
    StructPacking,
}

impl OptimizationKind {
    /// Returns the tag used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizationKind::DataTypeOptimization => "DATA_TYPE_OPTIMIZATION",
            OptimizationKind::ConstantOptimization => "CONSTANT_OPTIMIZATION",
            OptimizationKind::VisibilityOptimization => "VISIBILITY_OPTIMIZATION",
            OptimizationKind::ErrorOptimization => "ERROR_OPTIMIZATION",
            OptimizationKind::EventOptimization => "EVENT_OPTIMIZATION",
            OptimizationKind::StructPacking => "STRUCT_PACKING",
        }
    }
}

impl fmt::Display for OptimizationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A code pattern estimated to consume a non-trivial amount of gas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotspot {
    /// Category of the hotspot.
    #[serde(rename = "type")]
    pub kind: HotspotKind,
    /// Severity of the hotspot.
    pub severity: Severity,
    /// Human-readable description with the match counts.
    pub description: String,
    /// Estimated gas cost.
    pub estimated_cost: u64,
    /// Suggested remediation.
    #[serde(rename = "optimization")]
    pub remediation: String,
}

/// A suggested code change with an estimated gas reduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Optimization {
    /// Category of the suggestion.
    #[serde(rename = "type")]
    pub kind: OptimizationKind,
    /// Human-readable description.
    pub description: String,
    /// Estimated gas savings.
    pub gas_savings: u64,
}

/// Hotspots and optimizations accumulated by one or more detectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    pub hotspots: Vec<Hotspot>,
    pub optimizations: Vec<Optimization>,
}

impl Findings {
    /// Creates findings holding a single hotspot.
    pub fn hotspot(hotspot: Hotspot) -> Self {
        Self {
            hotspots: vec![hotspot],
            optimizations: Vec::new(),
        }
    }

    /// Appends another detector's findings, preserving order.
    pub fn extend(&mut self, other: Findings) {
        self.hotspots.extend(other.hotspots);
        self.optimizations.extend(other.optimizations);
    }

    /// Adds a single optimization suggestion.
    pub fn push_optimization(&mut self, optimization: Optimization) {
        self.optimizations.push(optimization);
    }

    pub fn is_empty(&self) -> bool {
        self.hotspots.is_empty() && self.optimizations.is_empty()
    }
}

/// Upper bound of the efficiency score scale. The rating bands are fixed
/// on this scale.
pub const SCORE_SCALE: u32 = 100;

/// Qualitative rating derived from the efficiency score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EfficiencyRating {
    Excellent,
    Good,
    NeedsImprovement,
    Critical,
}

impl EfficiencyRating {
    /// Maps a score in `[0, 100]` to a rating.
    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => EfficiencyRating::Excellent,
            75..=89 => EfficiencyRating::Good,
            50..=74 => EfficiencyRating::NeedsImprovement,
            _ => EfficiencyRating::Critical,
        }
    }

    /// Returns an emoji representation of the rating.
    pub fn emoji(&self) -> &'static str {
        match self {
            EfficiencyRating::Excellent => "✅",
            EfficiencyRating::Good => "👍",
            EfficiencyRating::NeedsImprovement => "⚠️",
            EfficiencyRating::Critical => "🚨",
        }
    }
}

impl fmt::Display for EfficiencyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EfficiencyRating::Excellent => write!(f, "EXCELLENT"),
            EfficiencyRating::Good => write!(f, "GOOD"),
            EfficiencyRating::NeedsImprovement => write!(f, "NEEDS IMPROVEMENT"),
            EfficiencyRating::Critical => write!(f, "CRITICAL OPTIMIZATION NEEDED"),
        }
    }
}

/// Summary metrics of a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Sum of all hotspot costs.
    pub total_estimated_cost: u64,
    /// Sum of all optimization savings.
    pub total_potential_savings: u64,
    /// Efficiency score in `[0, 100]`.
    pub efficiency_score: u32,
    /// Number of hotspots.
    pub hotspot_count: usize,
    /// Number of optimizations.
    pub optimization_count: usize,
}

impl ReportSummary {
    /// Returns the qualitative rating for the score.
    pub fn rating(&self) -> EfficiencyRating {
        EfficiencyRating::from_score(self.efficiency_score)
    }
}

/// The complete gas analysis report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GasReport {
    /// Label of the analyzed source, usually its path.
    pub file_path: String,
    /// Date and time of the analysis.
    pub analysis_timestamp: DateTime<Local>,
    /// Summary metrics.
    pub summary: ReportSummary,
    /// Hotspots in detection order.
    pub gas_hotspots: Vec<Hotspot>,
    /// Optimization suggestions in detection order.
    pub optimizations: Vec<Optimization>,
}
