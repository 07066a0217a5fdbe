//! Gas pattern detectors.
//!
//! Each detector is a pure function of the contract text and the
//! configured weights. Detectors never see each other's output; the
//! dispatch order only fixes the order of the final listings.

pub mod arrays;
pub mod data_types;
pub mod functions;
pub mod loops;
pub mod mappings;
pub mod patterns;
pub mod storage;
pub mod suggestions;

use crate::config::Weights;
use crate::models::Findings;
use tracing::debug;

/// Signature shared by every detector.
pub type DetectFn = fn(&str, &Weights) -> Findings;

/// The fixed set of detectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorKind {
    StorageUsage,
    LoopPatterns,
    FunctionPatterns,
    DataTypes,
    ArrayOperations,
    MappingOperations,
    ConstantCandidates,
    FunctionVisibility,
    ErrorStyle,
    EventUsage,
    StructPacking,
}

impl DetectorKind {
    /// Every detector, in dispatch order.
    pub const ALL: [DetectorKind; 11] = [
        DetectorKind::StorageUsage,
        DetectorKind::LoopPatterns,
        DetectorKind::FunctionPatterns,
        DetectorKind::DataTypes,
        DetectorKind::ArrayOperations,
        DetectorKind::MappingOperations,
        DetectorKind::ConstantCandidates,
        DetectorKind::FunctionVisibility,
        DetectorKind::ErrorStyle,
        DetectorKind::EventUsage,
        DetectorKind::StructPacking,
    ];

    /// Short identifier used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            DetectorKind::StorageUsage => "storage-usage",
            DetectorKind::LoopPatterns => "loop-patterns",
            DetectorKind::FunctionPatterns => "function-patterns",
            DetectorKind::DataTypes => "data-types",
            DetectorKind::ArrayOperations => "array-operations",
            DetectorKind::MappingOperations => "mapping-operations",
            DetectorKind::ConstantCandidates => "constant-candidates",
            DetectorKind::FunctionVisibility => "function-visibility",
            DetectorKind::ErrorStyle => "error-style",
            DetectorKind::EventUsage => "event-usage",
            DetectorKind::StructPacking => "struct-packing",
        }
    }

    fn detect_fn(&self) -> DetectFn {
        match self {
            DetectorKind::StorageUsage => storage::detect,
            DetectorKind::LoopPatterns => loops::detect,
            DetectorKind::FunctionPatterns => functions::detect,
            DetectorKind::DataTypes => data_types::detect,
            DetectorKind::ArrayOperations => arrays::detect,
            DetectorKind::MappingOperations => mappings::detect,
            DetectorKind::ConstantCandidates => suggestions::constant_candidates,
            DetectorKind::FunctionVisibility => suggestions::function_visibility,
            DetectorKind::ErrorStyle => suggestions::error_style,
            DetectorKind::EventUsage => suggestions::event_usage,
            DetectorKind::StructPacking => suggestions::struct_packing,
        }
    }

    /// Run this detector against the contract text.
    pub fn run(&self, source: &str, weights: &Weights) -> Findings {
        let findings = (self.detect_fn())(source, weights);
        if findings.is_empty() {
            debug!("{}: nothing found", self.name());
        } else {
            debug!(
                "{}: {} hotspots, {} optimizations",
                self.name(),
                findings.hotspots.len(),
                findings.optimizations.len()
            );
        }
        findings
    }
}

/// Run every detector once and merge their findings in dispatch order.
pub fn run_all(source: &str, weights: &Weights) -> Findings {
    DetectorKind::ALL
        .iter()
        .fold(Findings::default(), |mut acc, detector| {
            acc.extend(detector.run(source, weights));
            acc
        })
}
