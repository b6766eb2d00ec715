//! Quince - bidirectional conversion between delimited text and row records
//!
//! This library provides a small in-memory engine for comma- and
//! character-separated values: a character-level parser that turns raw text
//! into an ordered sequence of structured records, and a serializer that
//! turns records back into delimited text.
//!
//! # Features
//!
//! - **Configurable dialect**: separator and quote characters, column names
//!   taken from the first row or supplied explicitly
//! - **Quote handling**: quoted cells may contain the separator; doubled
//!   quotes inside a quoted cell become literal quote characters
//! - **Cell references**: column transforms receive each cell's position,
//!   including its A1-style (`B3`) and R1C1-style (`R3C2`) references
//! - **Typed values**: per-column transforms project raw text into typed
//!   cells (integers, floats, booleans, timestamps)
//! - **Round-trip serialization**: records serialize back to delimited text
//!   with standard quoting and escaping
//!
//! # Example - Parsing
//!
//! ```
//! use quince::parse;
//!
//! let records = parse("id,name\n1,Alan\n2,Julian")?;
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].get("id").unwrap().as_str(), Some("1"));
//! assert_eq!(records[1].get("name").unwrap().as_str(), Some("Julian"));
//! # Ok::<(), quince::Error>(())
//! ```
//!
//! # Example - Typed columns
//!
//! ```
//! use quince::{transform, CellValue, CsvParser, Transforms};
//!
//! let parser = CsvParser::new()
//!     .with_transforms(Transforms::new().with_column("age", transform::integer()));
//!
//! let records = parser.parse("name,age\nJohn,25\nJane,30")?;
//! assert_eq!(records[0].get("age"), Some(&CellValue::Int(25)));
//! # Ok::<(), quince::Error>(())
//! ```
//!
//! # Example - Serialization
//!
//! ```
//! use quince::{serialize, CellValue, Record};
//!
//! let records = vec![
//!     Record::from_pairs([
//!         ("id", CellValue::Int(1)),
//!         ("note", CellValue::from("first, of many")),
//!     ]),
//! ];
//!
//! let text = serialize(&records)?;
//! assert_eq!(text, "id,note\n1,\"first, of many\"");
//! # Ok::<(), quince::Error>(())
//! ```

/// Cell position metadata and spreadsheet-style references
pub mod cell;

/// Parser and writer configuration
pub mod config;

/// Unified error types
pub mod error;

/// Character-level tokenizer and the parse entry points
pub mod parser;

/// Records, header resolution, and per-column transforms
pub mod record;

/// Ready-made column transforms
pub mod transform;

/// Typed cell values
pub mod value;

/// Record-to-text serialization
pub mod writer;

// Re-export commonly used types for convenience
pub use cell::{CellRef, column_label};
pub use config::{CsvConfig, HeaderMode};
pub use error::{Error, Result};
pub use parser::{CsvParser, parse};
pub use record::{Record, Transform, Transforms};
pub use value::CellValue;
pub use writer::{CsvWriter, serialize};
