//! Records, header resolution, and per-column transforms.

use std::collections::HashMap;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::trace;

use crate::cell::CellRef;
use crate::config::HeaderMode;
use crate::error::Result;
use crate::value::CellValue;

/// Per-column transform: raw cell text plus position metadata in, typed
/// value out. Returning an error aborts the whole parse.
pub type Transform = dyn Fn(&str, &CellRef) -> Result<CellValue> + Send + Sync;

/// Registry of per-column transforms.
///
/// A transform is keyed by the column's resolved name or its 0-based
/// position. When both exist for the same column, the name-keyed entry wins.
/// Columns without an entry keep their raw text.
#[derive(Default)]
pub struct Transforms {
    by_name: HashMap<String, Box<Transform>>,
    by_index: HashMap<usize, Box<Transform>>,
}

impl Transforms {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a transform for a named column
    pub fn with_column<F>(mut self, name: impl Into<String>, transform: F) -> Self
    where
        F: Fn(&str, &CellRef) -> Result<CellValue> + Send + Sync + 'static,
    {
        self.by_name.insert(name.into(), Box::new(transform));
        self
    }

    /// Register a transform for a 0-based column position
    pub fn with_index<F>(mut self, index: usize, transform: F) -> Self
    where
        F: Fn(&str, &CellRef) -> Result<CellValue> + Send + Sync + 'static,
    {
        self.by_index.insert(index, Box::new(transform));
        self
    }

    /// Whether no transforms are registered
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty() && self.by_index.is_empty()
    }

    /// Look up the transform for a column, name key first.
    fn resolve(&self, index: usize, name: &str) -> Option<&Transform> {
        if let Some(transform) = self.by_name.get(name) {
            return Some(transform.as_ref());
        }
        self.by_index.get(&index).map(Box::as_ref)
    }
}

/// One parsed row: column names zipped with values, in header order.
///
/// Column names are shared between all records of a parse, so cloning a
/// record never copies the header.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub(crate) columns: Arc<[String]>,
    pub(crate) values: Vec<CellValue>,
}

impl Record {
    /// Build a record from explicit (column, value) pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, CellValue)>,
        S: Into<String>,
    {
        let (columns, values): (Vec<String>, Vec<CellValue>) = pairs
            .into_iter()
            .map(|(name, value)| (name.into(), value))
            .unzip();
        Record {
            columns: columns.into(),
            values,
        }
    }

    /// Column names in header order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Values in header order
    pub fn values(&self) -> &[CellValue] {
        &self.values
    }

    /// Look up a value by column name
    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.columns
            .iter()
            .position(|column| column == name)
            .map(|i| &self.values[i])
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the record has no columns
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate (column, value) pairs in header order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Split the validated grid into column names and data rows.
fn resolve_headers(grid: Vec<Vec<String>>, mode: &HeaderMode) -> (Arc<[String]>, Vec<Vec<String>>) {
    match mode {
        HeaderMode::FirstRow => {
            let mut rows = grid.into_iter();
            let columns: Arc<[String]> = rows.next().unwrap_or_default().into();
            (columns, rows.collect())
        }
        HeaderMode::Named(names) => (names.clone().into(), grid),
    }
}

/// Project data rows into records, applying column transforms.
///
/// Metadata is built fresh for every transform invocation; untransformed
/// cells pass through as strings without one.
pub(crate) fn project(
    grid: Vec<Vec<String>>,
    mode: &HeaderMode,
    transforms: &Transforms,
) -> Result<Vec<Record>> {
    let (columns, rows) = resolve_headers(grid, mode);
    trace!(
        columns = columns.len(),
        rows = rows.len(),
        "resolved headers"
    );

    rows.into_iter()
        .enumerate()
        .map(|(row_idx, cells)| {
            let values = columns
                .iter()
                .zip(cells)
                .enumerate()
                .map(|(col_idx, (name, raw))| match transforms.resolve(col_idx, name) {
                    Some(transform) => {
                        let cell = CellRef::new(row_idx as u32 + 1, col_idx as u32 + 1, name.clone());
                        transform(&raw, &cell)
                    }
                    None => Ok(CellValue::String(raw)),
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Record {
                columns: columns.clone(),
                values,
            })
        })
        .collect()
}
