//! Record-to-row transformation

use serde_json::Value;

use crate::plan::{EmitColumn, EmitPlan};

use super::{Record, Row};

/// Builds one output row from one record, cells aligned with the emitted
/// header.
pub(super) fn row_from_record(record: &Record, plan: &EmitPlan) -> Row {
    plan.columns()
        .iter()
        .map(|column| emit_cell(record, column))
        .collect()
}

/// A cell carries the record value only when the column reads a field and
/// the record actually contains it. Presence is an explicit key check, so
/// a field set to null or false still counts as present.
fn emit_cell(record: &Record, column: &EmitColumn) -> Value {
    match &column.field_id {
        Some(field_id) => match record.get(field_id) {
            Some(value) => value.clone(),
            None => column.default.clone(),
        },
        None => column.default.clone(),
    }
}
