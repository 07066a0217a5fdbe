//! Storage usage detector.
//!
//! Counts primitive state variable declarations that start a line and
//! every assignment expression in the contract.

use super::patterns::{count, weighted, RE_ASSIGNMENT, RE_STATE_VARIABLE};
use crate::config::Weights;
use crate::models::{Findings, Hotspot, HotspotKind, Severity};

pub fn detect(source: &str, weights: &Weights) -> Findings {
    let declarations = count(&RE_STATE_VARIABLE, source);
    let assignments = count(&RE_ASSIGNMENT, source);

    let estimated_cost = weighted(declarations, weights.storage_declaration)
        .saturating_add(weighted(assignments, weights.storage_assignment));

    let severity = if declarations > weights.storage_medium_threshold {
        Severity::Medium
    } else {
        Severity::Low
    };

    Findings::hotspot(Hotspot {
        kind: HotspotKind::StorageUsage,
        severity,
        description: format!(
            "Found {} storage variables, {} assignments",
            declarations, assignments
        ),
        estimated_cost,
        remediation: "Consider packing variables, using memory for temporary data".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_heavy_contract() -> String {
        let mut source = String::from("contract Heavy {\n");
        for i in 0..15 {
            source.push_str(&format!("    uint256 public value{};\n", i));
        }
        source.push_str("    function set() external {\n");
        for i in 0..5 {
            source.push_str(&format!("        value{} = {};\n", i, i + 1));
        }
        source.push_str("    }\n}\n");
        source
    }

    #[test]
    fn test_storage_heavy_contract() {
        let findings = detect(&storage_heavy_contract(), &Weights::default());
        let hotspot = &findings.hotspots[0];

        assert_eq!(hotspot.kind, HotspotKind::StorageUsage);
        assert_eq!(hotspot.estimated_cost, 15 * 20000 + 5 * 5000);
        assert_eq!(hotspot.estimated_cost, 325000);
        assert_eq!(hotspot.severity, Severity::Medium);
        assert_eq!(
            hotspot.description,
            "Found 15 storage variables, 5 assignments"
        );
    }

    #[test]
    fn test_few_declarations_are_low() {
        let source = "uint256 a;\nbool b;\naddress owner;\n";
        let findings = detect(source, &Weights::default());

        assert_eq!(findings.hotspots[0].severity, Severity::Low);
        assert_eq!(findings.hotspots[0].estimated_cost, 3 * 20000);
    }

    #[test]
    fn test_empty_source_still_reports() {
        let findings = detect("", &Weights::default());
        assert_eq!(findings.hotspots.len(), 1);
        assert_eq!(findings.hotspots[0].estimated_cost, 0);
    }

    #[test]
    fn test_extra_assignment_never_lowers_cost() {
        let base = "uint256 a;\nfunction f() { a = 1; }";
        let more = "uint256 a;\nfunction f() { a = 1; a = 2; }";
        let weights = Weights::default();

        let before = detect(base, &weights).hotspots[0].estimated_cost;
        let after = detect(more, &weights).hotspots[0].estimated_cost;
        assert!(after >= before);
        assert_eq!(after - before, 5000);
    }
}
