//! Data type usage detector.
//!
//! Suggests fixed-size byte types over `string` and generic `uint` over
//! explicit `uint256` when the source leans heavily on the costlier form.

use super::patterns::{
    count, weighted, RE_BYTES, RE_STRING, RE_UINT, RE_UINT128, RE_UINT256, RE_UINT32, RE_UINT64,
};
use crate::config::Weights;
use crate::models::{Findings, Optimization, OptimizationKind};
use tracing::debug;

/// Whole-word type usage counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeCounts {
    pub uint256: usize,
    pub uint128: usize,
    pub uint64: usize,
    pub uint32: usize,
    pub uint: usize,
    pub string: usize,
    pub bytes: usize,
}

impl TypeCounts {
    pub fn scan(source: &str) -> Self {
        Self {
            uint256: count(&RE_UINT256, source),
            uint128: count(&RE_UINT128, source),
            uint64: count(&RE_UINT64, source),
            uint32: count(&RE_UINT32, source),
            uint: count(&RE_UINT, source),
            string: count(&RE_STRING, source),
            bytes: count(&RE_BYTES, source),
        }
    }
}

pub fn detect(source: &str, weights: &Weights) -> Findings {
    let counts = TypeCounts::scan(source);
    debug!(
        "type usage: uint256={} uint128={} uint64={} uint32={} uint={} string={} bytes={}",
        counts.uint256,
        counts.uint128,
        counts.uint64,
        counts.uint32,
        counts.uint,
        counts.string,
        counts.bytes
    );

    let mut findings = Findings::default();

    if counts.string > counts.bytes {
        findings.push_optimization(Optimization {
            kind: OptimizationKind::DataTypeOptimization,
            description: format!(
                "Consider using bytes32 instead of string for fixed-length data ({} string usages found)",
                counts.string
            ),
            gas_savings: weighted(counts.string, weights.string_to_bytes_savings),
        });
    }

    if counts.uint256 > counts.uint.saturating_mul(2) {
        findings.push_optimization(Optimization {
            kind: OptimizationKind::DataTypeOptimization,
            description: format!(
                "Consider using uint instead of uint256 where possible ({} uint256 usages found)",
                counts.uint256
            ),
            gas_savings: weighted(counts.uint256, weights.wide_int_savings),
        });
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_heavy_contract() {
        let source = r#"
string public name;
string public symbol;
string internal uri;
string private note;
bytes32 public id;
function label() public view returns (string memory) { return name; }
"#;
        let findings = detect(source, &Weights::default());

        assert_eq!(findings.optimizations.len(), 1);
        assert_eq!(findings.optimizations[0].gas_savings, 5 * 20);
        assert!(findings.optimizations[0].description.contains("5 string usages"));
    }

    #[test]
    fn test_wide_integer_dominance() {
        let source = "uint256 a; uint256 b; uint256 c; uint d;";
        let findings = detect(source, &Weights::default());

        assert_eq!(findings.optimizations.len(), 1);
        assert_eq!(findings.optimizations[0].gas_savings, 3 * 5);
    }

    #[test]
    fn test_balanced_integer_usage() {
        let source = "uint256 a; uint256 b; uint c;";
        assert!(detect(source, &Weights::default()).is_empty());
    }

    #[test]
    fn test_counts_sized_types() {
        let counts = TypeCounts::scan("uint128 a; uint64 b; uint32 c; bytes d; bytes4 e;");
        assert_eq!(counts.uint128, 1);
        assert_eq!(counts.uint64, 1);
        assert_eq!(counts.uint32, 1);
        assert_eq!(counts.bytes, 2);
        assert_eq!(counts.uint, 0);
    }
}
