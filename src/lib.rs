//! tabrec - A strict, deterministic mapper between tabular data and schema-typed records
//!
//! `convert::table_to_records` turns a header-led table into schema-typed
//! records; `convert::records_to_table` goes the other way. Both directions
//! share the declarative column schema defined in `schema`.

pub mod convert;
pub mod schema;

mod plan;
