use thiserror::Error;

/// Crate-wide error type for the cleaning pipeline.
///
/// Parse failures collapse into the single `NotParseable` variant so callers
/// see one descriptive message instead of raw parser errors; I/O failures
/// pass through untouched.
#[derive(Debug, Error)]
pub enum CleanError {
    /// Input extension unsupported, or every parse attempt for its
    /// classification failed.
    #[error("File type must be either Excel, Text as comma or tab delimited, or CSV.")]
    NotParseable,

    /// Export was asked to write an `Unknown` classification. Recoverable
    /// and reportable; should be unreachable when the loader already ran.
    #[error("Unsupported file type for export")]
    UnsupportedFormat,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),
}
