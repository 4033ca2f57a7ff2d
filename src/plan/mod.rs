//! Direction-specific column plans
//!
//! A plan is the resolved mapping between schema fields and concrete table
//! columns for a single conversion call. Plans are direction-specific,
//! immutable once built, rebuilt fresh on every call, and never leave the
//! crate.

mod emit;
mod errors;
mod parse;

pub use emit::EmitPlan;
pub use errors::{PlanError, PlanResult};
pub use parse::ParsePlan;

use serde_json::Value;

/// Resolved read mapping for one field
#[derive(Debug, Clone)]
pub struct ParseColumn {
    /// Record property receiving the value
    pub field_id: String,
    /// Substituted when the column is unresolved or the row is short
    pub default: Value,
    /// Label the field was declared with, if any
    pub col_label: Option<String>,
    /// Position in the actual header; `None` means the value always comes
    /// from the default
    pub col_index: Option<usize>,
}

/// Resolved write mapping for one output column
#[derive(Debug, Clone)]
pub struct EmitColumn {
    /// Record property read for cell values; `None` emits the default in
    /// every row (the obfuscate policy)
    pub field_id: Option<String>,
    /// Substituted when no record value is read
    pub default: Value,
    /// Header label of the output column
    pub col_label: String,
}
