//! Schema well-formedness checks
//!
//! Runs behind the `Schema` factory so that every constructed schema is
//! well-formed:
//! - every `field_id` is a non-empty string
//! - `field_id` values are unique across the schema
//!
//! Column attributes are not checked here: an absent or empty label means
//! "no column", and output modes are interpreted only when an emission
//! plan is built.

use std::collections::HashSet;

use super::errors::{SchemaError, SchemaResult, ValidationDetails};
use super::types::FieldSpec;

/// Validates a field spec list.
pub(super) fn check_fields(fields: &[FieldSpec]) -> SchemaResult<()> {
    let mut seen = HashSet::with_capacity(fields.len());

    for spec in fields {
        if spec.field_id.is_empty() {
            return Err(SchemaError::validation_failed(
                ValidationDetails::empty_field_id(),
            ));
        }
        // A duplicate id would collapse two record properties into one
        if !seen.insert(spec.field_id.as_str()) {
            return Err(SchemaError::validation_failed(
                ValidationDetails::duplicate_field_id(&spec.field_id),
            ));
        }
    }

    Ok(())
}
