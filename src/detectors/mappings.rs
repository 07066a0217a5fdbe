//! Mapping operation detector.
//!
//! Any `name[key]` access counts, whether or not `name` is a mapping;
//! declarations are only logged.

use super::patterns::{count, keyed_accesses, weighted, RE_MAPPING};
use crate::config::Weights;
use crate::models::{Findings, Hotspot, HotspotKind, Severity};
use tracing::debug;

pub fn detect(source: &str, weights: &Weights) -> Findings {
    let declarations = count(&RE_MAPPING, source);
    let (reads, writes) = keyed_accesses(source);
    debug!(
        "mappings: {} declarations, {} reads, {} writes",
        declarations, reads, writes
    );

    if reads + writes == 0 {
        return Findings::default();
    }

    let estimated_cost = weighted(reads, weights.mapping_read)
        .saturating_add(weighted(writes, weights.mapping_write));

    Findings::hotspot(Hotspot {
        kind: HotspotKind::MappingOperations,
        severity: Severity::Low,
        description: format!("Mapping operations: {} reads, {} writes", reads, writes),
        estimated_cost,
        remediation: "Mappings are generally gas-efficient for key-value storage".to_string(),
    })
}
