//! Function and call pattern detector.

use super::patterns::{count, weighted, RE_DELEGATECALL, RE_DOTTED_CALL, RE_FUNCTION};
use crate::config::Weights;
use crate::models::{Findings, Hotspot, HotspotKind, Severity};

pub fn detect(source: &str, weights: &Weights) -> Findings {
    let functions = count(&RE_FUNCTION, source);
    let external_calls = count(&RE_DOTTED_CALL, source);
    let delegate_calls = count(&RE_DELEGATECALL, source);

    let estimated_cost = weighted(functions, weights.function_declaration)
        .saturating_add(weighted(external_calls, weights.external_call))
        .saturating_add(weighted(delegate_calls, weights.delegate_call));

    Findings::hotspot(Hotspot {
        kind: HotspotKind::FunctionCalls,
        severity: Severity::Medium,
        description: format!(
            "Found {} functions, {} external calls, {} delegate calls",
            functions, external_calls, delegate_calls
        ),
        estimated_cost,
        remediation: "Use internal functions when possible, batch external calls".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_functions_and_calls() {
        let source = r#"
function balanceOf(address who) external view returns (uint256) {
    return balances[who];
}

function forward(address target, bytes memory data) public payable {
    (bool ok, ) = target.delegatecall(data);
    require(ok);
}
"#;
        let findings = detect(source, &Weights::default());
        let hotspot = &findings.hotspots[0];

        // target.delegatecall( is both a dotted call and a delegatecall
        assert_eq!(
            hotspot.description,
            "Found 2 functions, 1 external calls, 1 delegate calls"
        );
        assert_eq!(hotspot.estimated_cost, 2 * 500 + 700 + 700);
        assert_eq!(hotspot.severity, Severity::Medium);
    }

    #[test]
    fn test_modifier_order_outside_pattern_is_missed() {
        // Mutability before visibility does not fit the lexical signature.
        let source = "function f() view public returns (uint) { return 1; }";
        let findings = detect(source, &Weights::default());
        assert_eq!(findings.hotspots[0].estimated_cost, 0);
    }

    #[test]
    fn test_always_emitted() {
        let findings = detect("", &Weights::default());
        assert_eq!(findings.hotspots.len(), 1);
        assert_eq!(findings.hotspots[0].severity, Severity::Medium);
    }
}
