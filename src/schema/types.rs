//! Declarative schema type definitions
//!
//! A schema is an ordered list of field specs. Order is semantic: it fixes
//! record property order and output column order.
//!
//! Declarative schema documents are plain JSON arrays of camelCase objects:
//!
//! ```json
//! [
//!   { "fieldId": "lastName", "default": "", "colLabel": "Last Name", "colOutputMode": "include" },
//!   { "fieldId": "participantId", "default": "" }
//! ]
//! ```

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use super::errors::{SchemaError, SchemaResult};
use super::validator;

/// Per-column emission policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColOutputMode {
    /// Column emitted with real record values
    Include,
    /// Column entirely absent from emitted tables
    Exclude,
    /// Column emitted, but every cell carries the field default
    Obfuscate,
}

impl ColOutputMode {
    /// Returns the mode name as it appears in declarative schema documents
    pub fn mode_name(&self) -> &'static str {
        match self {
            ColOutputMode::Include => "include",
            ColOutputMode::Exclude => "exclude",
            ColOutputMode::Obfuscate => "obfuscate",
        }
    }
}

/// One logical field and its optional column binding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    /// Unique identifier of the field in a record
    pub field_id: String,
    /// Value substituted when no data is available (may be null)
    pub default: Value,
    /// Column header this field maps to; a field without a label never
    /// appears in tabular form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col_label: Option<String>,
    /// Emission policy; required for any field with a column label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col_output_mode: Option<ColOutputMode>,
    /// Whether the column may be absent from a parsed header
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub col_is_optional: bool,
}

impl FieldSpec {
    /// Create a field with no column binding (record-only)
    pub fn record_only(field_id: impl Into<String>, default: Value) -> Self {
        Self {
            field_id: field_id.into(),
            default,
            col_label: None,
            col_output_mode: None,
            col_is_optional: false,
        }
    }

    /// Create a field bound to a column with the given emission policy
    pub fn column(
        field_id: impl Into<String>,
        default: Value,
        col_label: impl Into<String>,
        col_output_mode: ColOutputMode,
    ) -> Self {
        Self {
            field_id: field_id.into(),
            default,
            col_label: Some(col_label.into()),
            col_output_mode: Some(col_output_mode),
            col_is_optional: false,
        }
    }

    /// Marks the column as tolerated-absent during parsing
    pub fn optional(mut self) -> Self {
        self.col_is_optional = true;
        self
    }

    /// The column label, treating an empty label the same as an absent one
    pub fn effective_label(&self) -> Option<&str> {
        self.col_label.as_deref().filter(|label| !label.is_empty())
    }
}

/// Validated, ordered, immutable sequence of field specs.
///
/// Constructed only through the validating factory [`Schema::new`] (or the
/// equivalent deserialization path), so every `Schema` value in existence
/// is well-formed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Vec<FieldSpec>")]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    /// Validates the field specs and creates a schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` with code `TABREC_SCHEMA_VALIDATION_FAILED` if
    /// a `field_id` is empty or duplicated.
    pub fn new(fields: Vec<FieldSpec>) -> SchemaResult<Self> {
        validator::check_fields(&fields)?;
        Ok(Self { fields })
    }

    /// Parses and validates a declarative JSON schema document.
    ///
    /// # Errors
    ///
    /// Returns `TABREC_SCHEMA_MALFORMED` when the document is not a valid
    /// spec array (missing `fieldId`/`default`, wrong attribute types,
    /// unknown output modes), and `TABREC_SCHEMA_VALIDATION_FAILED` when
    /// the parsed specs violate a well-formedness rule.
    pub fn from_json_str(document: &str) -> SchemaResult<Self> {
        let fields: Vec<FieldSpec> =
            serde_json::from_str(document).map_err(|e| SchemaError::malformed(e.to_string()))?;
        Self::new(fields)
    }

    /// Field specs in schema order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Iterates field specs in schema order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldSpec> {
        self.fields.iter()
    }

    /// Looks up a field spec by id.
    pub fn field(&self, field_id: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.field_id == field_id)
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the schema has no fields.
    ///
    /// An empty schema is valid: it maps every row to an empty record and
    /// emits a header-only table.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl TryFrom<Vec<FieldSpec>> for Schema {
    type Error = SchemaError;

    fn try_from(fields: Vec<FieldSpec>) -> SchemaResult<Self> {
        Self::new(fields)
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a FieldSpec;
    type IntoIter = std::slice::Iter<'a, FieldSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}
