use serde::Serialize;
use std::path::PathBuf;

/// Format family of the input file, derived from its extension.
///
/// Governs both the parse strategy at load time and the output format at
/// export time; the two sides never cross (an Excel input is never exported
/// as text, and vice versa).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FileClassification {
    Excel,
    DelimitedText,
    Unknown,
}

/// A single named column of text cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: String,
    pub cells: Vec<String>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<String>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }
}

/// In-memory tabular data: ordered named columns aligned by row index.
///
/// Every cell is text once loaded; numeric and date cells are converted at
/// the load boundary. Invariant: all columns have the same number of cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.cells.len())
    }

    pub fn header(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Cells of one row, in column order.
    pub fn row(&self, index: usize) -> Vec<&str> {
        self.columns
            .iter()
            .map(|c| c.cells[index].as_str())
            .collect()
    }
}

/// Occurrence counts per removed character, keyed by a printable label.
///
/// Entries keep their insertion order so the report lists characters in the
/// order the pipeline accumulated them. A configured character that never
/// occurs still gets an entry with count zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RemovalCounter {
    entries: Vec<(String, u64)>,
}

impl RemovalCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` occurrences under `label`, creating the entry if needed.
    pub fn add(&mut self, label: &str, count: u64) {
        match self.entries.iter_mut().find(|(l, _)| l.as_str() == label) {
            Some((_, total)) => *total += count,
            None => self.entries.push((label.to_string(), count)),
        }
    }

    pub fn get(&self, label: &str) -> u64 {
        self.entries
            .iter()
            .find(|(l, _)| l.as_str() == label)
            .map_or(0, |(_, c)| *c)
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries.iter().map(|(l, c)| (l.as_str(), *c))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append another counter's entries after this one's, preserving order.
    pub fn extend(&mut self, other: &RemovalCounter) {
        for (label, count) in other.iter() {
            self.add(label, count);
        }
    }
}

/// Successful result of a full cleaning run.
#[derive(Debug, Clone, Serialize)]
pub struct CleanOutcome {
    /// Final path the cleaned file was written to, extension included.
    pub output_path: PathBuf,
    /// Per-character removal counts, structural characters first.
    pub removed: RemovalCounter,
}
