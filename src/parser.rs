//! Character-level tokenizer and the parse entry points.

use tracing::debug;

use crate::config::CsvConfig;
use crate::error::{Error, Result};
use crate::record::{self, Record, Transforms};

/// Parser for delimited text.
///
/// Owns a [`CsvConfig`] and a [`Transforms`] registry; each call to
/// [`parse`](CsvParser::parse) works on its own buffers, so a parser can be
/// shared freely between calls.
#[derive(Default)]
pub struct CsvParser {
    config: CsvConfig,
    transforms: Transforms,
}

impl CsvParser {
    /// Create a parser with the default configuration and no transforms
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with a custom configuration
    pub fn with_config(config: CsvConfig) -> Self {
        CsvParser {
            config,
            transforms: Transforms::new(),
        }
    }

    /// Install per-column transforms
    pub fn with_transforms(mut self, transforms: Transforms) -> Self {
        self.transforms = transforms;
        self
    }

    /// Parse raw text into records.
    ///
    /// Fails with [`Error::RaggedRow`] when rows disagree on their cell
    /// count, and propagates the first transform error as-is. No partial
    /// result is ever returned.
    pub fn parse(&self, text: &str) -> Result<Vec<Record>> {
        let grid = tokenize(text, self.config.separator, self.config.quote);
        validate_shape(&grid)?;
        debug!(
            rows = grid.len(),
            width = grid.first().map_or(0, Vec::len),
            "tokenized input"
        );

        record::project(grid, &self.config.header, &self.transforms)
    }
}

/// Parse text with the default configuration and no transforms.
pub fn parse(text: &str) -> Result<Vec<Record>> {
    CsvParser::new().parse(text)
}

/// Split raw text into a grid of cell strings.
///
/// Lines are separated by `\n` or `\r\n`; fully empty lines are skipped
/// rather than emitted as zero-width rows. Quote state never crosses a line
/// boundary, so an unterminated quote dies with its line.
pub(crate) fn tokenize(text: &str, separator: char, quote: char) -> Vec<Vec<String>> {
    text.lines()
        .filter(|line| !line.is_empty())
        .map(|line| tokenize_line(line, separator, quote))
        .collect()
}

/// Scan a single line left-to-right into cell strings.
fn tokenize_line(line: &str, separator: char, quote: char) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == separator && !in_quotes {
            cells.push(std::mem::take(&mut current));
        } else if ch == quote {
            if in_quotes && chars.peek() == Some(&quote) {
                // Doubled quote inside a quoted cell is a literal quote
                current.push(quote);
                chars.next();
            } else {
                in_quotes = !in_quotes;
            }
        } else {
            current.push(ch);
        }
    }
    cells.push(current);

    cells
}

/// Reject grids whose rows disagree on cell count.
fn validate_shape(grid: &[Vec<String>]) -> Result<()> {
    let expected = grid.first().map_or(0, Vec::len);
    for (row, cells) in grid.iter().enumerate() {
        if cells.len() != expected {
            return Err(Error::RaggedRow {
                row,
                expected,
                found: cells.len(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_line() {
        let grid = tokenize("a,b,c\n1,2,3", ',', '"');
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[0], vec!["a", "b", "c"]);
        assert_eq!(grid[1], vec!["1", "2", "3"]);
    }

    #[test]
    fn test_quoted_separator() {
        let grid = tokenize("a,\"b,c\",d", ',', '"');
        assert_eq!(grid[0], vec!["a", "b,c", "d"]);
    }

    #[test]
    fn test_escaped_quote() {
        let grid = tokenize("\"he said \"\"hi\"\"\"", ',', '"');
        assert_eq!(grid[0], vec!["he said \"hi\""]);
    }

    #[test]
    fn test_single_quote_dialect() {
        let grid = tokenize("'a,b';c", ';', '\'');
        assert_eq!(grid[0], vec!["a,b", "c"]);
    }

    #[test]
    fn test_crlf_and_empty_lines() {
        let grid = tokenize("a,b\r\n\r\n\nc,d\n", ',', '"');
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[0], vec!["a", "b"]);
        assert_eq!(grid[1], vec!["c", "d"]);
    }

    #[test]
    fn test_trailing_empty_cells() {
        let grid = tokenize("a,,\nb,,", ',', '"');
        assert_eq!(grid[0], vec!["a", "", ""]);
        assert_eq!(grid[1], vec!["b", "", ""]);
    }

    #[test]
    fn test_unterminated_quote_stays_on_line() {
        // The dangling quote swallows the rest of its own line only
        let grid = tokenize("\"open,x\na,b", ',', '"');
        assert_eq!(grid[0], vec!["open,x"]);
        assert_eq!(grid[1], vec!["a", "b"]);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let grid = tokenize("a,b,c\n1,2", ',', '"');
        let err = validate_shape(&grid).unwrap_err();
        match err {
            Error::RaggedRow {
                row,
                expected,
                found,
            } => {
                assert_eq!(row, 1);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("", ',', '"').is_empty());
        assert!(tokenize("\n\r\n\n", ',', '"').is_empty());
    }
}
