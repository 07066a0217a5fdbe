//! Report rendering and persistence.
//!
//! This module renders gas reports for the console (plain text or
//! Markdown), serializes them to JSON and writes the timestamped
//! JSON artifact.

use crate::models::{
    GasReport, Hotspot, Optimization, ReportSummary, Severity, SCORE_SCALE,
};
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing::info;

/// Static gas optimization tips printed after the findings.
pub const BEST_PRACTICES: [&str; 10] = [
    "Use appropriate data types (uint instead of uint256)",
    "Pack structs efficiently (group smaller types)",
    "Use constant and immutable for unchanging values",
    "Prefer internal/private over public functions",
    "Use custom errors instead of require strings",
    "Minimize storage operations, especially in loops",
    "Use events instead of storing non-critical data",
    "Consider using mappings over arrays for large datasets",
    "Batch operations when possible",
    "Use view/pure functions when not modifying state",
];

const RULE_WIDE: usize = 60;
const RULE_NARROW: usize = 40;

/// Format a gas amount with thousands separators.
pub fn format_gas(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Generate the plain-text console report.
pub fn generate_text_report(report: &GasReport, show_tips: bool) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str(&"=".repeat(RULE_WIDE));
    output.push_str("\n⛽ GAS USAGE ANALYSIS REPORT\n");
    output.push_str(&"=".repeat(RULE_WIDE));
    output.push('\n');

    output.push_str(&generate_summary_text(report));
    output.push_str(&generate_hotspots_text(&report.gas_hotspots));
    output.push_str(&generate_optimizations_text(&report.optimizations));

    if show_tips {
        output.push_str(&generate_tips_text());
    }

    output
}

fn generate_summary_text(report: &GasReport) -> String {
    let summary = &report.summary;
    let rating = summary.rating();
    let mut section = String::new();

    section.push_str(&format!("📄 File: {}\n", report.file_path));
    section.push_str(&format!(
        "📅 Analysis Date: {}\n",
        report.analysis_timestamp.to_rfc3339()
    ));
    section.push_str(&format!(
        "💰 Estimated Total Cost: {} gas\n",
        format_gas(summary.total_estimated_cost)
    ));
    section.push_str(&format!(
        "💡 Potential Savings: {} gas\n",
        format_gas(summary.total_potential_savings)
    ));
    section.push_str(&format!(
        "📊 Efficiency Score: {}/{}\n",
        summary.efficiency_score,
        SCORE_SCALE
    ));
    section.push_str(&format!("{} Gas Efficiency: {}\n", rating.emoji(), rating));

    section
}

fn generate_hotspots_text(hotspots: &[Hotspot]) -> String {
    if hotspots.is_empty() {
        return String::new();
    }

    let mut section = String::new();
    section.push_str("\n🔥 GAS HOTSPOTS:\n");
    section.push_str(&"-".repeat(RULE_NARROW));
    section.push('\n');

    for (i, hotspot) in hotspots.iter().enumerate() {
        section.push_str(&format!(
            "{}. [{}] {}\n",
            i + 1,
            hotspot.severity,
            hotspot.kind
        ));
        section.push_str(&format!("   Description: {}\n", hotspot.description));
        section.push_str(&format!(
            "   Estimated Cost: {} gas\n",
            format_gas(hotspot.estimated_cost)
        ));
        section.push_str(&format!("   Optimization: {}\n\n", hotspot.remediation));
    }

    section
}

fn generate_optimizations_text(optimizations: &[Optimization]) -> String {
    if optimizations.is_empty() {
        return String::new();
    }

    let mut section = String::new();
    section.push_str("\n🛠️ OPTIMIZATION SUGGESTIONS:\n");
    section.push_str(&"-".repeat(RULE_NARROW));
    section.push('\n');

    for (i, opt) in optimizations.iter().enumerate() {
        section.push_str(&format!("{}. {}\n", i + 1, opt.kind));
        section.push_str(&format!("   Description: {}\n", opt.description));
        section.push_str(&format!(
            "   Potential Savings: {} gas\n\n",
            format_gas(opt.gas_savings)
        ));
    }

    section
}

fn generate_tips_text() -> String {
    let mut section = String::new();
    section.push_str("\n📚 GAS OPTIMIZATION BEST PRACTICES:\n");
    section.push_str(&"-".repeat(RULE_NARROW));
    section.push('\n');

    for (i, tip) in BEST_PRACTICES.iter().enumerate() {
        section.push_str(&format!("{}. {}\n", i + 1, tip));
    }

    section
}

/// Generate a Markdown report.
pub fn generate_markdown_report(report: &GasReport, show_tips: bool) -> String {
    let mut output = String::new();

    output.push_str("# Gas Usage Analysis Report\n\n");
    output.push_str(&generate_summary_section(report));
    output.push_str(&generate_hotspots_section(&report.gas_hotspots));
    output.push_str(&generate_optimizations_section(&report.optimizations));

    if show_tips {
        output.push_str("## Best Practices\n\n");
        for (i, tip) in BEST_PRACTICES.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, tip));
        }
        output.push('\n');
    }

    output.push_str("---\n\n");
    output.push_str("*Report generated by gaslens*\n");

    output
}

fn generate_summary_section(report: &GasReport) -> String {
    let summary: &ReportSummary = &report.summary;
    let mut section = String::new();

    section.push_str("## Summary\n\n");
    section.push_str(&format!("- **File:** `{}`\n", report.file_path));
    section.push_str(&format!(
        "- **Analysis Date:** {}\n",
        report.analysis_timestamp.format("%Y-%m-%d %H:%M:%S")
    ));
    section.push_str(&format!(
        "- **Estimated Total Cost:** {} gas\n",
        format_gas(summary.total_estimated_cost)
    ));
    section.push_str(&format!(
        "- **Potential Savings:** {} gas\n",
        format_gas(summary.total_potential_savings)
    ));
    section.push_str(&format!(
        "- **Efficiency Score:** {}/{} ({} {})\n\n",
        summary.efficiency_score,
        SCORE_SCALE,
        summary.rating().emoji(),
        summary.rating()
    ));

    section
}

fn generate_hotspots_section(hotspots: &[Hotspot]) -> String {
    let mut section = String::new();
    section.push_str("## Gas Hotspots\n\n");

    if hotspots.is_empty() {
        section.push_str("No gas hotspots were detected.\n\n");
        return section;
    }

    section.push_str("| # | Severity | Type | Estimated Cost | Description |\n");
    section.push_str("|:---:|:---|:---|---:|:---|\n");

    for (i, hotspot) in hotspots.iter().enumerate() {
        section.push_str(&format!(
            "| {} | {} {} | `{}` | {} | {} |\n",
            i + 1,
            hotspot.severity.emoji(),
            hotspot.severity,
            hotspot.kind,
            format_gas(hotspot.estimated_cost),
            hotspot.description
        ));
    }
    section.push('\n');

    for hotspot in hotspots.iter().filter(|h| h.severity >= Severity::Medium) {
        section.push_str(&format!(
            "> 💡 **{}:** {}\n\n",
            hotspot.kind, hotspot.remediation
        ));
    }

    section
}

fn generate_optimizations_section(optimizations: &[Optimization]) -> String {
    let mut section = String::new();
    section.push_str("## Optimization Suggestions\n\n");

    if optimizations.is_empty() {
        section.push_str("No optimization suggestions.\n\n");
        return section;
    }

    section.push_str("| # | Type | Potential Savings | Description |\n");
    section.push_str("|:---:|:---|---:|:---|\n");

    for (i, opt) in optimizations.iter().enumerate() {
        section.push_str(&format!(
            "| {} | `{}` | {} | {} |\n",
            i + 1,
            opt.kind,
            format_gas(opt.gas_savings),
            opt.description
        ));
    }
    section.push('\n');

    section
}

/// Generate a JSON report.
pub fn generate_json_report(report: &GasReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}

/// Timestamped artifact name, e.g. `gas-analysis-20240131-235959.json`.
pub fn report_file_name(timestamp: &DateTime<Local>) -> String {
    format!("gas-analysis-{}.json", timestamp.format("%Y%m%d-%H%M%S"))
}

/// Write a JSON report to an explicit path.
pub fn write_json_report(report: &GasReport, path: &Path) -> Result<()> {
    let content = generate_json_report(report)?;

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    info!("Gas analysis report saved to: {}", path.display());
    Ok(())
}

/// Write a JSON report under `dir` using the timestamped file name.
pub fn save_json_report(report: &GasReport, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(report_file_name(&report.analysis_timestamp));
    write_json_report(report, &path)?;
    Ok(path)
}
