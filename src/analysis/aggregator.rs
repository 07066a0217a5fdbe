//! Finding aggregation and scoring.
//!
//! This module folds the accumulated hotspots and optimizations into the
//! report summary and computes the efficiency score.

use crate::config::ScoringConfig;
use crate::models::{Findings, Hotspot, Optimization, ReportSummary, SCORE_SCALE};

/// Sum of all hotspot costs.
pub fn total_estimated_cost(hotspots: &[Hotspot]) -> u64 {
    hotspots
        .iter()
        .fold(0u64, |acc, h| acc.saturating_add(h.estimated_cost))
}

/// Sum of all optimization savings.
pub fn total_potential_savings(optimizations: &[Optimization]) -> u64 {
    optimizations
        .iter()
        .fold(0u64, |acc, o| acc.saturating_add(o.gas_savings))
}

/// `max_score - floor(total_cost / gas_per_point)`, clamped to `[0, max_score]`.
///
/// `max_score` can only lower the ceiling; the score never exceeds
/// [`SCORE_SCALE`].
pub fn efficiency_score(total_cost: u64, scoring: &ScoringConfig) -> u32 {
    let penalty = total_cost
        .checked_div(scoring.gas_per_point)
        .unwrap_or(u64::MAX);
    let max_score = u64::from(scoring.max_score.min(SCORE_SCALE));

    max_score.saturating_sub(penalty) as u32
}

/// Build the report summary from the accumulated findings.
pub fn summarize(findings: &Findings, scoring: &ScoringConfig) -> ReportSummary {
    let total_cost = total_estimated_cost(&findings.hotspots);

    ReportSummary {
        total_estimated_cost: total_cost,
        total_potential_savings: total_potential_savings(&findings.optimizations),
        efficiency_score: efficiency_score(total_cost, scoring),
        hotspot_count: findings.hotspots.len(),
        optimization_count: findings.optimizations.len(),
    }
}
