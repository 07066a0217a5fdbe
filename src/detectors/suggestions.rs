//! Optimization suggestion detectors.
//!
//! These checks do not estimate cost; each emits suggestions with an
//! estimated saving.

use super::patterns::{
    count, weighted, RE_CUSTOM_ERROR, RE_EMIT, RE_EVENT, RE_LITERAL, RE_NARROW_UINT,
    RE_PUBLIC_FUNCTION, RE_REQUIRE, RE_SIMPLE_ASSIGNMENT, RE_STRUCT, RE_WIDE_UINT,
};
use crate::config::Weights;
use crate::models::{Findings, Optimization, OptimizationKind};

/// Assignments of a literal value, one suggestion per statement.
///
/// A variable assigned in several places is reported once per statement.
pub fn constant_candidates(source: &str, weights: &Weights) -> Findings {
    let mut findings = Findings::default();

    for caps in RE_SIMPLE_ASSIGNMENT.captures_iter(source) {
        let (Some(var), Some(value)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        if !RE_LITERAL.is_match(value.as_str()) {
            continue;
        }

        findings.push_optimization(Optimization {
            kind: OptimizationKind::ConstantOptimization,
            description: format!(
                "Variable \"{}\" could be marked as constant if not modified",
                var.as_str()
            ),
            gas_savings: weights.constant_savings,
        });
    }

    findings
}

pub fn function_visibility(source: &str, weights: &Weights) -> Findings {
    let public_functions = count(&RE_PUBLIC_FUNCTION, source);
    let mut findings = Findings::default();

    if public_functions > 0 {
        findings.push_optimization(Optimization {
            kind: OptimizationKind::VisibilityOptimization,
            description: format!(
                "Consider making functions internal/private if not called externally ({} public functions found)",
                public_functions
            ),
            gas_savings: weighted(public_functions, weights.visibility_savings),
        });
    }

    findings
}

/// `require` calls in a contract that declares no custom errors.
pub fn error_style(source: &str, weights: &Weights) -> Findings {
    let requires = count(&RE_REQUIRE, source);
    let mut findings = Findings::default();

    if requires > 0 && !RE_CUSTOM_ERROR.is_match(source) {
        findings.push_optimization(Optimization {
            kind: OptimizationKind::ErrorOptimization,
            description: format!(
                "Consider using custom errors instead of require strings ({} require statements found)",
                requires
            ),
            gas_savings: weighted(requires, weights.custom_error_savings),
        });
    }

    findings
}

pub fn event_usage(source: &str, weights: &Weights) -> Findings {
    let events = count(&RE_EVENT, source);
    let emits = count(&RE_EMIT, source);
    let mut findings = Findings::default();

    if events > emits {
        findings.push_optimization(Optimization {
            kind: OptimizationKind::EventOptimization,
            description: format!(
                "Some events are declared but not emitted ({} events, {} emits)",
                events, emits
            ),
            gas_savings: weighted(events - emits, weights.unused_event_savings),
        });
    }

    findings
}

/// Structs mixing `uint256` with narrower unsigned fields.
pub fn struct_packing(source: &str, weights: &Weights) -> Findings {
    let mut findings = Findings::default();

    for caps in RE_STRUCT.captures_iter(source) {
        let Some(body) = caps.get(1) else {
            continue;
        };
        let body = body.as_str();

        if RE_WIDE_UINT.is_match(body) && RE_NARROW_UINT.is_match(body) {
            findings.push_optimization(Optimization {
                kind: OptimizationKind::StructPacking,
                description:
                    "Struct may benefit from variable packing (reorder smaller types together)"
                        .to_string(),
                gas_savings: weights.struct_packing_savings,
            });
        }
    }

    findings
}
