use crate::error::CleanError;
use crate::models::{Column, FileClassification, Table};
use calamine::{open_workbook_auto, Data, Reader};
use csv::ReaderBuilder;
use std::fs;
use std::path::Path;

/// Parse the input file into a [`Table`] according to its classification.
///
/// Excel inputs read the first sheet only. Delimited inputs try a comma
/// parse first and fall back to tab. Any structural parse failure collapses
/// into [`CleanError::NotParseable`]; plain I/O errors propagate as-is.
pub fn load(path: &Path, classification: FileClassification) -> Result<Table, CleanError> {
    match classification {
        FileClassification::Excel => load_excel(path),
        FileClassification::DelimitedText => load_delimited(path),
        FileClassification::Unknown => Err(CleanError::NotParseable),
    }
}

fn load_excel(path: &Path) -> Result<Table, CleanError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| {
        tracing::warn!("Failed to open workbook {}: {}", path.display(), e);
        CleanError::NotParseable
    })?;

    let range = match workbook.worksheet_range_at(0) {
        Some(Ok(range)) => range,
        Some(Err(e)) => {
            tracing::warn!("Failed to read first worksheet: {}", e);
            return Err(CleanError::NotParseable);
        }
        None => {
            tracing::warn!("Workbook {} has no sheets", path.display());
            return Err(CleanError::NotParseable);
        }
    };

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(row) => row.iter().map(cell_to_text).collect(),
        // Empty sheet: a table with zero columns and zero rows, not a failure.
        None => return Ok(Table::default()),
    };

    let mut columns: Vec<Column> = headers
        .into_iter()
        .map(|name| Column::new(name, Vec::new()))
        .collect();

    for row in rows {
        for (idx, column) in columns.iter_mut().enumerate() {
            column
                .cells
                .push(row.get(idx).map(cell_to_text).unwrap_or_default());
        }
    }

    Ok(Table::new(columns))
}

/// Canonical text form of a spreadsheet cell, applied once at the load
/// boundary. Whole-number floats render without a decimal point; everything
/// else is best-effort `Display` output.
fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 9.0e15 => format!("{}", *f as i64),
        other => other.to_string(),
    }
}

fn load_delimited(path: &Path) -> Result<Table, CleanError> {
    let content = read_lossy(path)?;

    match parse_delimited(&content, b',') {
        Ok(table) if !comma_misparse(&table) => return Ok(table),
        Ok(_) => {
            tracing::debug!("Comma parse yielded one tab-bearing column, retrying with tab");
        }
        Err(e) => {
            tracing::debug!("Comma parse failed ({}), retrying with tab", e);
        }
    }

    parse_delimited(&content, b'\t').map_err(|e| {
        tracing::warn!("Tab parse failed for {}: {}", path.display(), e);
        CleanError::NotParseable
    })
}

/// A comma parse that produced a single column whose header still contains a
/// tab character means the file was tab-delimited all along.
fn comma_misparse(table: &Table) -> bool {
    table.column_count() == 1 && table.columns[0].name.contains('\t')
}

fn parse_delimited(content: &str, delimiter: u8) -> Result<Table, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let mut columns: Vec<Column> = headers
        .into_iter()
        .map(|name| Column::new(name, Vec::new()))
        .collect();

    for result in reader.records() {
        let record = result?;
        for (idx, column) in columns.iter_mut().enumerate() {
            column.cells.push(record.get(idx).unwrap_or("").to_string());
        }
    }

    Ok(Table::new(columns))
}

/// Read the whole file, replacing invalid UTF-8 rather than failing on it.
fn read_lossy(path: &Path) -> Result<String, CleanError> {
    let buffer = fs::read(path)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_csv_content() {
        let table = parse_delimited("name,age\nAlice,30\nBob,25", b',').unwrap();
        assert_eq!(table.header(), vec!["name", "age"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.row(0), vec!["Alice", "30"]);
    }

    #[test]
    fn quoted_fields_keep_embedded_delimiters() {
        let table = parse_delimited("msg\n\"He said, \"\"hi\"\"\"", b',').unwrap();
        assert_eq!(table.columns[0].cells[0], "He said, \"hi\"");
    }

    #[test]
    fn ragged_rows_are_a_parse_error() {
        assert!(parse_delimited("a,b\n1,2,3", b',').is_err());
    }

    #[test]
    fn empty_content_gives_empty_table() {
        let table = parse_delimited("", b',').unwrap();
        assert_eq!(table.column_count(), 0);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn header_only_content_gives_zero_rows() {
        let table = parse_delimited("a,b,c", b',').unwrap();
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn detects_comma_misparse_of_tab_file() {
        let table = parse_delimited("a\tb\n1\t2", b',').unwrap();
        assert!(comma_misparse(&table));
    }

    #[test]
    fn unknown_classification_never_parses() {
        let err = load(Path::new("doc.pdf"), FileClassification::Unknown).unwrap_err();
        assert!(matches!(err, CleanError::NotParseable));
    }

    #[test]
    fn whole_number_floats_render_without_decimal_point() {
        assert_eq!(cell_to_text(&Data::Float(3.0)), "3");
        assert_eq!(cell_to_text(&Data::Float(3.5)), "3.5");
        assert_eq!(cell_to_text(&Data::Empty), "");
        assert_eq!(cell_to_text(&Data::Int(-7)), "-7");
    }
}
