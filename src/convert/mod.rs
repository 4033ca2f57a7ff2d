//! Table ↔ record conversion
//!
//! The two public operations share one pipeline: check the input contract,
//! build a direction-specific column plan, then transform rows (or
//! records) one at a time. Either the whole conversion succeeds or the
//! first failure is returned; no partial output.
//!
//! Each call is independent and stateless: plans are built fresh from the
//! schema and discarded afterwards, so concurrent calls never share
//! mutable state.

mod errors;
mod reader;
mod writer;

pub use errors::{ConvertError, ConvertResult, PlanError};

use serde_json::Value;

use crate::plan::{EmitPlan, ParsePlan};
use crate::schema::Schema;

/// One parsed record: field ids mapped to cell values, in schema order
pub type Record = serde_json::Map<String, Value>;

/// One table row
pub type Row = Vec<Value>;

/// Converts a table (header row + data rows) into records.
///
/// Row 0 must be the header. Each data row yields exactly one record with
/// one property per schema field; unresolved columns and missing trailing
/// cells take the field default, and string values are trimmed.
///
/// # Errors
///
/// Fails with `ConvertError::MissingHeader` when the table is empty, or
/// with `PlanError::HeaderColumnNotFound` when a required labeled column
/// is absent from the header.
pub fn table_to_records(table: &[Row], schema: &Schema) -> ConvertResult<Vec<Record>> {
    let (header, rows) = table.split_first().ok_or(ConvertError::MissingHeader)?;
    let plan = ParsePlan::resolve(schema, header)?;

    Ok(rows
        .iter()
        .map(|row| reader::record_from_row(row, &plan))
        .collect())
}

/// Converts records into a table led by a header row.
///
/// Only fields with an `include` or `obfuscate` policy produce columns;
/// obfuscated columns carry the field default in every row, and fields a
/// record does not contain fall back to their default.
///
/// # Errors
///
/// Fails with `PlanError::InvalidOutputMode` when a labeled field carries
/// no emission policy.
pub fn records_to_table(records: &[Record], schema: &Schema) -> ConvertResult<Vec<Row>> {
    let plan = EmitPlan::build(schema)?;

    let mut table = Vec::with_capacity(records.len() + 1);
    table.push(plan.header_row());
    for record in records {
        table.push(writer::row_from_record(record, &plan));
    }

    Ok(table)
}
