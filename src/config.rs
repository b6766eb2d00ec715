//! Configuration for parsing and writing delimited text.

/// How column names are resolved during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderMode {
    /// The first row of the input holds the column names
    FirstRow,
    /// Column names are supplied explicitly; every input row is data
    Named(Vec<String>),
}

/// Configuration shared by the parser and the writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvConfig {
    /// Cell separator character
    pub separator: char,
    /// Quote character for quoted cells
    pub quote: char,
    /// How column names are resolved
    pub header: HeaderMode,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            separator: ',',          // CSV default
            quote: '"',              // Standard CSV quoting
            header: HeaderMode::FirstRow,
        }
    }
}

impl CsvConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cell separator
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Set the quote character
    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    /// Set how column names are resolved
    pub fn with_header(mut self, header: HeaderMode) -> Self {
        self.header = header;
        self
    }

    /// Use an explicit list of column names; no input row is consumed as headers.
    ///
    /// The list length must match the cell count of the input rows; that is
    /// the caller's responsibility and is not validated here.
    pub fn with_columns<I, S>(self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_header(HeaderMode::Named(
            columns.into_iter().map(Into::into).collect(),
        ))
    }

    /// Create TSV (tab-separated) configuration
    pub fn tsv() -> Self {
        Self::new().with_separator('\t')
    }

    /// Create semicolon-separated configuration
    pub fn semicolon() -> Self {
        Self::new().with_separator(';')
    }

    /// Create pipe-separated configuration
    pub fn pipe() -> Self {
        Self::new().with_separator('|')
    }
}
