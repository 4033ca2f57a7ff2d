//! Parsing-direction plan builder
//!
//! Resolves each schema field against the actual header row:
//! - unlabeled fields read nothing and always take their default
//! - labels match header cells by exact string equality, first match wins
//! - a missing optional column falls back to the default
//! - a missing required column aborts plan construction

use serde_json::Value;

use crate::schema::Schema;

use super::errors::{PlanError, PlanResult};
use super::ParseColumn;

/// Ordered read plan: exactly one column per schema field
#[derive(Debug, Clone)]
pub struct ParsePlan {
    columns: Vec<ParseColumn>,
}

impl ParsePlan {
    /// Resolves the schema against a header row.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::HeaderColumnNotFound` when a non-optional
    /// labeled column is absent from the header.
    pub fn resolve(schema: &Schema, header: &[Value]) -> PlanResult<Self> {
        let mut columns = Vec::with_capacity(schema.len());

        for spec in schema {
            let mut column = ParseColumn {
                field_id: spec.field_id.clone(),
                default: spec.default.clone(),
                col_label: None,
                col_index: None,
            };

            if let Some(label) = spec.effective_label() {
                column.col_label = Some(label.to_string());
                match find_label(header, label) {
                    Some(index) => column.col_index = Some(index),
                    None if spec.col_is_optional => {}
                    None => {
                        return Err(PlanError::HeaderColumnNotFound(
                            column.col_label.unwrap_or_default(),
                        ))
                    }
                }
            }

            columns.push(column);
        }

        Ok(Self { columns })
    }

    /// Columns in schema order.
    pub fn columns(&self) -> &[ParseColumn] {
        &self.columns
    }
}

/// First exact match of `label` among the header cells.
///
/// Labels are opaque strings: no whitespace or case folding, and
/// non-string header cells never match.
fn find_label(header: &[Value], label: &str) -> Option<usize> {
    header.iter().position(|cell| cell.as_str() == Some(label))
}
