//! Row-to-record transformation

use serde_json::Value;

use crate::plan::{ParseColumn, ParsePlan};

use super::Record;

/// Builds one record from one data row.
///
/// Every plan column contributes exactly one property, in plan order; a
/// row shorter than the header resolves its missing cells to defaults.
pub(super) fn record_from_row(row: &[Value], plan: &ParsePlan) -> Record {
    let mut record = Record::new();
    for column in plan.columns() {
        let value = read_cell(row, column);
        record.insert(column.field_id.clone(), trim_string(value));
    }
    record
}

/// The cell at the column's resolved position, or the default when the
/// column is unresolved or the row ends early.
fn read_cell(row: &[Value], column: &ParseColumn) -> Value {
    column
        .col_index
        .and_then(|index| row.get(index))
        .cloned()
        .unwrap_or_else(|| column.default.clone())
}

/// Strings lose surrounding whitespace; every other value type passes
/// through untouched.
fn trim_string(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(s.trim().to_string()),
        other => other,
    }
}
