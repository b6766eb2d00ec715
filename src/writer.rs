//! Record-to-text serialization.

use chrono::SecondsFormat;
use tracing::debug;

use crate::config::CsvConfig;
use crate::error::{Error, Result};
use crate::record::Record;
use crate::value::CellValue;

/// Writer for delimited text.
#[derive(Debug, Clone, Default)]
pub struct CsvWriter {
    config: CsvConfig,
}

impl CsvWriter {
    /// Create a writer with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with a custom configuration
    pub fn with_config(config: CsvConfig) -> Self {
        CsvWriter { config }
    }

    /// Serialize records into delimited text.
    ///
    /// The first record's column sequence becomes the header row, and every
    /// record must share it exactly. Rows are joined with `\n`; no trailing
    /// newline is emitted. Fails with [`Error::EmptyInput`] when `records`
    /// is empty and [`Error::MismatchedRecord`] when a record's columns
    /// differ from the first record's.
    pub fn serialize(&self, records: &[Record]) -> Result<String> {
        let first = records.first().ok_or(Error::EmptyInput)?;
        let columns = first.columns();
        for (index, record) in records.iter().enumerate().skip(1) {
            if record.columns() != columns {
                return Err(Error::MismatchedRecord { index });
            }
        }
        debug!(
            records = records.len(),
            columns = columns.len(),
            "serializing records"
        );

        let separator = self.config.separator.to_string();
        let mut rows = Vec::with_capacity(records.len() + 1);
        rows.push(
            columns
                .iter()
                .map(|name| self.escape(name))
                .collect::<Vec<_>>()
                .join(&separator),
        );
        for record in records {
            rows.push(
                record
                    .values()
                    .iter()
                    .map(|value| self.escape(&stringify(value)))
                    .collect::<Vec<_>>()
                    .join(&separator),
            );
        }

        Ok(rows.join("\n"))
    }

    /// Quote a cell when its content requires it.
    ///
    /// A cell containing the quote character is wrapped with every embedded
    /// quote doubled; a cell containing a space or the separator is wrapped
    /// unchanged; anything else stays bare.
    fn escape(&self, cell: &str) -> String {
        let quote = self.config.quote;
        if cell.contains(quote) {
            let mut escaped = String::with_capacity(cell.len() + 2);
            escaped.push(quote);
            for ch in cell.chars() {
                if ch == quote {
                    escaped.push(quote);
                }
                escaped.push(ch);
            }
            escaped.push(quote);
            escaped
        } else if cell.contains(' ') || cell.contains(self.config.separator) {
            format!("{}{}{}", quote, cell, quote)
        } else {
            cell.to_string()
        }
    }
}

/// Fixed scalar-to-text rules, one per value variant.
fn stringify(value: &CellValue) -> String {
    match value {
        CellValue::Empty => String::new(),
        CellValue::Bool(b) => b.to_string(),
        CellValue::Int(i) => itoa::Buffer::new().format(*i).to_string(),
        CellValue::Float(f) => ryu::Buffer::new().format(*f).to_string(),
        CellValue::String(s) => s.clone(),
        CellValue::DateTime(dt) => dt.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

/// Serialize records with the default configuration.
pub fn serialize(records: &[Record]) -> Result<String> {
    CsvWriter::new().serialize(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn writer() -> CsvWriter {
        CsvWriter::new()
    }

    #[test]
    fn test_bare_separator_and_space_quoting() {
        assert_eq!(writer().escape("plain"), "plain");
        assert_eq!(writer().escape("a,b"), "\"a,b\"");
        assert_eq!(writer().escape("two words"), "\"two words\"");
    }

    #[test]
    fn test_embedded_quote_doubling() {
        assert_eq!(writer().escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_stringify_rules() {
        assert_eq!(stringify(&CellValue::Empty), "");
        assert_eq!(stringify(&CellValue::Bool(true)), "true");
        assert_eq!(stringify(&CellValue::Int(-42)), "-42");
        assert_eq!(stringify(&CellValue::Float(2.5)), "2.5");
        assert_eq!(stringify(&CellValue::String("x".into())), "x");

        let dt = Utc.with_ymd_and_hms(2023, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(
            stringify(&CellValue::DateTime(dt)),
            "2023-01-15T10:30:00.000Z"
        );
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = writer().serialize(&[]).unwrap_err();
        assert!(matches!(err, Error::EmptyInput));
    }

    #[test]
    fn test_mismatched_record_rejected() {
        let records = vec![
            Record::from_pairs([("a", CellValue::Int(1))]),
            Record::from_pairs([("b", CellValue::Int(2))]),
        ];
        let err = writer().serialize(&records).unwrap_err();
        assert!(matches!(err, Error::MismatchedRecord { index: 1 }));
    }

    #[test]
    fn test_header_cells_are_escaped() {
        let records = vec![Record::from_pairs([
            ("plain", CellValue::Int(1)),
            ("needs, quoting", CellValue::Int(2)),
        ])];
        let text = writer().serialize(&records).unwrap();
        assert_eq!(text, "plain,\"needs, quoting\"\n1,2");
    }

    #[test]
    fn test_custom_separator() {
        let records = vec![Record::from_pairs([
            ("a", CellValue::from("x;y")),
            ("b", CellValue::from("z")),
        ])];
        let text = CsvWriter::with_config(CsvConfig::semicolon())
            .serialize(&records)
            .unwrap();
        assert_eq!(text, "a;b\n\"x;y\";z");
    }
}
