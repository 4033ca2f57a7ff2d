//! Declarative column schema subsystem
//!
//! A schema describes how logical record fields bind to table columns:
//!
//! - every field carries a default used when data is absent
//! - a field without a column label never appears in tabular form
//! - labeled fields declare an emission policy (include|exclude|obfuscate)
//! - optional columns may be missing from a parsed header
//!
//! Schemas are validated at construction and immutable afterwards.

mod errors;
mod types;
mod validator;

pub use errors::{SchemaError, SchemaErrorCode, SchemaResult, ValidationDetails};
pub use types::{ColOutputMode, FieldSpec, Schema};
