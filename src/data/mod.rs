//! Record data and the data source loader.
//!
//! This module defines the row type displayed by the table and the ways the
//! record collection can be read.

mod error;
mod record;
mod source;

pub use error::LoadError;
pub use record::{Field, Record, RecordId, UnknownField, ValueKind};
pub use source::{parse_records, DataSource, DEFAULT_DATA_SOURCE};
