//! Array operation detector.

use super::patterns::{count, weighted, RE_LITERAL_INDEX, RE_POP, RE_PUSH};
use crate::config::Weights;
use crate::models::{Findings, Hotspot, HotspotKind, Severity};

pub fn detect(source: &str, weights: &Weights) -> Findings {
    let pushes = count(&RE_PUSH, source);
    let pops = count(&RE_POP, source);
    let accesses = count(&RE_LITERAL_INDEX, source);

    if pushes + pops + accesses == 0 {
        return Findings::default();
    }

    let estimated_cost = weighted(pushes, weights.array_push)
        .saturating_add(weighted(pops, weights.array_pop))
        .saturating_add(weighted(accesses, weights.array_access));

    let severity = if estimated_cost > weights.array_medium_threshold {
        Severity::Medium
    } else {
        Severity::Low
    };

    Findings::hotspot(Hotspot {
        kind: HotspotKind::ArrayOperations,
        severity,
        description: format!(
            "Array operations: {} push, {} pop, {} access",
            pushes, pops, accesses
        ),
        estimated_cost,
        remediation: "Consider using mappings for large datasets, batch array operations"
            .to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_heavy_is_medium() {
        let source = r#"
holders.push(a);
holders.push(b);
holders.push(c);
holders.pop();
first = holders[0];
"#;
        let findings = detect(source, &Weights::default());
        let hotspot = &findings.hotspots[0];

        assert_eq!(hotspot.estimated_cost, 3 * 20000 + 5000 + 800);
        assert_eq!(hotspot.severity, Severity::Medium);
        assert_eq!(hotspot.description, "Array operations: 3 push, 1 pop, 1 access");
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // 2 pushes + 2 pops = 50000, not above the threshold
        let source = "a.push(1); a.push(2); a.pop(); a.pop();";
        let findings = detect(source, &Weights::default());

        assert_eq!(findings.hotspots[0].estimated_cost, 50000);
        assert_eq!(findings.hotspots[0].severity, Severity::Low);
    }

    #[test]
    fn test_variable_index_is_not_literal_access() {
        assert!(detect("x = values[i];", &Weights::default()).is_empty());
    }
}
