//! Tabular data model and dataset loader for student test records
//!
//! This crate owns the record set abstraction shared by every analysis in the
//! Cohort project:
//!
//! - [`value::CellValue`]: the three-way cell value (text, number, missing)
//! - [`record::RecordSet`]: ordered rows over a shared column set
//! - [`schema::TableSchema`]: configurable column-name mapping
//! - [`loader`]: CSV ingestion with score coercion
//!
//! # Examples
//!
//! ```
//! use cohort_table::{loader, schema::TableSchema};
//!
//! let csv = "\
//! Test Chapter,Test Score,Strength,Opportunity,Challenge
//! Ch1,80,Teamwork,Focus,Time
//! Ch1,bad,Teamwork,Focus,Time
//! ";
//! let schema = TableSchema::default();
//! let records = loader::load_csv(csv.as_bytes(), &schema).unwrap();
//!
//! // Both rows survive; the unparseable score becomes missing.
//! assert_eq!(records.len(), 2);
//! ```

pub mod loader;
pub mod record;
pub mod schema;
pub mod value;

pub use loader::{LoadError, load_csv};
pub use record::RecordSet;
pub use schema::TableSchema;
pub use value::CellValue;
