//! Static reference table of operation costs.
//!
//! The table is seeded once and never mutated. It backs the default
//! detector weights and is printed by `--list-costs`.

use std::sync::LazyLock;

/// Cost entry for a single operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationCost {
    /// Operation name within its category.
    pub name: &'static str,
    /// Base cost in gas units.
    pub base_cost: u64,
    /// Human-readable description.
    pub description: &'static str,
}

/// A named group of operations.
#[derive(Debug, Clone)]
pub struct CostCategory {
    pub name: &'static str,
    pub operations: Vec<OperationCost>,
}

/// Read-only mapping from category to operation to cost.
#[derive(Debug, Clone)]
pub struct CostTable {
    categories: Vec<CostCategory>,
}

static COST_TABLE: LazyLock<CostTable> = LazyLock::new(CostTable::seed);

const fn op(name: &'static str, base_cost: u64, description: &'static str) -> OperationCost {
    OperationCost {
        name,
        base_cost,
        description,
    }
}

impl CostTable {
    /// Returns the process-wide table.
    pub fn get() -> &'static CostTable {
        &COST_TABLE
    }

    fn seed() -> Self {
        Self {
            categories: vec![
                CostCategory {
                    name: "storage_operations",
                    operations: vec![
                        op("sstore", 20000, "Storage write operation"),
                        op("sload", 800, "Storage read operation"),
                    ],
                },
                CostCategory {
                    name: "loop_operations",
                    operations: vec![
                        op("for_loop", 3, "For loop iteration"),
                        op("while_loop", 3, "While loop iteration"),
                    ],
                },
                CostCategory {
                    name: "function_calls",
                    operations: vec![
                        op("external_call", 700, "External function call"),
                        op("internal_call", 24, "Internal function call"),
                    ],
                },
                CostCategory {
                    name: "data_types",
                    operations: vec![
                        op("uint256", 3, "uint256 operation"),
                        op("uint128", 3, "uint128 operation"),
                        op("uint64", 3, "uint64 operation"),
                        op("bytes32", 3, "bytes32 operation"),
                        op("string", 32, "String operation"),
                    ],
                },
            ],
        }
    }

    /// Looks up an operation within a category.
    pub fn lookup(&self, category: &str, operation: &str) -> Option<&OperationCost> {
        self.categories
            .iter()
            .find(|c| c.name == category)?
            .operations
            .iter()
            .find(|o| o.name == operation)
    }

    /// Base cost of an operation, if the table knows it.
    pub fn base_cost(&self, category: &str, operation: &str) -> Option<u64> {
        self.lookup(category, operation).map(|o| o.base_cost)
    }

    /// Render the table as aligned text.
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{:<20} {:<15} {:>10}  Description\n",
            "Category", "Operation", "Base Cost"
        ));
        output.push_str(&"-".repeat(70));
        output.push('\n');

        for category in &self.categories {
            for operation in &category.operations {
                output.push_str(&format!(
                    "{:<20} {:<15} {:>10}  {}\n",
                    category.name, operation.name, operation.base_cost, operation.description
                ));
            }
        }

        let total: usize = self.categories.iter().map(|c| c.operations.len()).sum();
        output.push_str(&format!("\nTotal: {} operations\n", total));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_operations() {
        let table = CostTable::get();
        assert_eq!(table.base_cost("storage_operations", "sstore"), Some(20000));
        assert_eq!(table.base_cost("storage_operations", "sload"), Some(800));
        assert_eq!(table.base_cost("function_calls", "external_call"), Some(700));
        assert_eq!(
            table.lookup("data_types", "string").map(|o| o.description),
            Some("String operation")
        );
    }

    #[test]
    fn test_lookup_unknown_operations() {
        let table = CostTable::get();
        assert_eq!(table.base_cost("storage_operations", "tstore"), None);
        assert_eq!(table.base_cost("opcodes", "sstore"), None);
    }

    #[test]
    fn test_render_lists_every_category() {
        let rendered = CostTable::get().render();
        for name in ["storage_operations", "loop_operations", "function_calls", "data_types"] {
            assert!(rendered.contains(name));
        }
        assert!(rendered.contains("Total: 11 operations"));
    }
}
