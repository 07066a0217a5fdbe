//! Loop pattern detector.
//!
//! Finds `for` and `while` blocks and flags the ones whose body writes
//! to an indexed slot or performs a dotted call. A body ends at the
//! first closing brace, so nested blocks are truncated.

use super::patterns::{weighted, RE_DOTTED_CALL, RE_FOR_LOOP, RE_INDEXED_ASSIGNMENT, RE_WHILE_LOOP};
use crate::config::Weights;
use crate::models::{Findings, Hotspot, HotspotKind, Severity};

/// Whether a loop body contains storage writes or external calls.
fn is_expensive(body: &str) -> bool {
    RE_INDEXED_ASSIGNMENT.is_match(body) || RE_DOTTED_CALL.is_match(body)
}

pub fn detect(source: &str, weights: &Weights) -> Findings {
    let bodies: Vec<&str> = RE_FOR_LOOP
        .captures_iter(source)
        .chain(RE_WHILE_LOOP.captures_iter(source))
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect();

    if bodies.is_empty() {
        return Findings::default();
    }

    let total_loops = bodies.len();
    let expensive_loops = bodies.iter().filter(|body| is_expensive(body)).count();

    let estimated_cost = weighted(total_loops, weights.loop_base)
        .saturating_add(weighted(expensive_loops, weights.loop_expensive));

    let severity = if expensive_loops > 0 {
        Severity::High
    } else {
        Severity::Medium
    };

    Findings::hotspot(Hotspot {
        kind: HotspotKind::LoopOperations,
        severity,
        description: format!(
            "Found {} loops, {} with expensive operations",
            total_loops, expensive_loops
        ),
        estimated_cost,
        remediation: "Minimize storage operations and external calls in loops".to_string(),
    })
}
