//! Emission-direction plan builder
//!
//! Applies the per-column emission policy, in schema order:
//! - unlabeled fields produce no output column at all
//! - exclude: no output column
//! - obfuscate: column present, every cell carries the field default
//! - include: column present, cells read from the record

use serde_json::Value;

use crate::schema::{ColOutputMode, Schema};

use super::errors::{PlanError, PlanResult};
use super::EmitColumn;

/// Ordered write plan for the emitted table
#[derive(Debug, Clone)]
pub struct EmitPlan {
    columns: Vec<EmitColumn>,
}

impl EmitPlan {
    /// Builds the output column list from the schema.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidOutputMode` when a labeled field carries
    /// no emission policy.
    pub fn build(schema: &Schema) -> PlanResult<Self> {
        let mut columns = Vec::with_capacity(schema.len());

        for spec in schema {
            let label = match spec.effective_label() {
                Some(label) => label,
                None => continue,
            };

            let mode = spec
                .col_output_mode
                .ok_or_else(|| PlanError::InvalidOutputMode(label.to_string()))?;

            let field_id = match mode {
                ColOutputMode::Exclude => continue,
                ColOutputMode::Obfuscate => None,
                ColOutputMode::Include => Some(spec.field_id.clone()),
            };

            columns.push(EmitColumn {
                field_id,
                default: spec.default.clone(),
                col_label: label.to_string(),
            });
        }

        Ok(Self { columns })
    }

    /// Header row for the emitted table, labels in plan order.
    pub fn header_row(&self) -> Vec<Value> {
        self.columns
            .iter()
            .map(|column| Value::String(column.col_label.clone()))
            .collect()
    }

    /// Columns in plan order.
    pub fn columns(&self) -> &[EmitColumn] {
        &self.columns
    }
}
