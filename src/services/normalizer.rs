use crate::models::Table;

/// Canonicalize missing-value markers: any cell that is exactly the literal
/// `nan` or `NaT` (artifacts of numeric/date coercion during loading)
/// becomes the empty string. Idempotent.
pub fn normalize_nulls(table: &mut Table) {
    for column in &mut table.columns {
        for cell in &mut column.cells {
            if *cell == "nan" || *cell == "NaT" {
                cell.clear();
            }
        }
    }
}

/// Strip leading and trailing whitespace from every cell. Idempotent.
pub fn trim_cells(table: &mut Table) {
    for column in &mut table.columns {
        for cell in &mut column.cells {
            let trimmed = cell.trim();
            if trimmed.len() != cell.len() {
                *cell = trimmed.to_string();
            }
        }
    }
}
