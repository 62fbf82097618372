use crate::error::CleanError;
use crate::models::{FileClassification, Table};
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

/// Write the cleaned table to `output_folder/filename`, with the extension
/// forced to match the input's classification (`.xlsx` or `.txt`).
///
/// Returns the final written path so the caller can surface it or open it in
/// a viewer; the exporter itself never assumes a desktop environment. The
/// output folder must already exist — that check belongs to the caller.
pub fn export(
    table: &Table,
    output_folder: &Path,
    filename: &str,
    classification: FileClassification,
) -> Result<PathBuf, CleanError> {
    match classification {
        FileClassification::Excel => {
            let path = output_folder.join(filename).with_extension("xlsx");
            write_excel(table, &path)?;
            Ok(path)
        }
        FileClassification::DelimitedText => {
            let path = output_folder.join(filename).with_extension("txt");
            write_tab_delimited(table, &path)?;
            Ok(path)
        }
        FileClassification::Unknown => Err(CleanError::UnsupportedFormat),
    }
}

fn write_excel(table: &Table, path: &Path) -> Result<(), CleanError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, column) in table.columns.iter().enumerate() {
        worksheet.write_string(0, col as u16, &column.name)?;
        for (row, cell) in column.cells.iter().enumerate() {
            worksheet.write_string(row as u32 + 1, col as u16, cell)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}

fn write_tab_delimited(table: &Table, path: &Path) -> Result<(), CleanError> {
    let mut writer = csv::WriterBuilder::new().delimiter(b'\t').from_path(path)?;

    if table.column_count() > 0 {
        writer.write_record(table.header())?;
        for row in 0..table.row_count() {
            writer.write_record(table.row(row))?;
        }
    }

    writer.flush().map_err(CleanError::Io)?;
    Ok(())
}
