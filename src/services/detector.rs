use crate::models::FileClassification;
use std::path::Path;

/// Classify a file by its extension, lowercased.
///
/// `.xlsx`/`.xls` map to Excel, `.txt`/`.csv` to delimited text, everything
/// else (including no extension at all) to Unknown. Pure; never touches the
/// filesystem.
pub fn classify(path: &Path) -> FileClassification {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase());

    match extension.as_deref() {
        Some("xlsx") | Some("xls") => FileClassification::Excel,
        Some("txt") | Some("csv") => FileClassification::DelimitedText,
        _ => FileClassification::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excel_extensions() {
        assert_eq!(classify(Path::new("data.xlsx")), FileClassification::Excel);
        assert_eq!(classify(Path::new("data.xls")), FileClassification::Excel);
        assert_eq!(classify(Path::new("DATA.XLSX")), FileClassification::Excel);
    }

    #[test]
    fn delimited_extensions() {
        assert_eq!(
            classify(Path::new("/tmp/report.csv")),
            FileClassification::DelimitedText
        );
        assert_eq!(
            classify(Path::new("report.TXT")),
            FileClassification::DelimitedText
        );
    }

    #[test]
    fn unknown_extensions() {
        assert_eq!(classify(Path::new("doc.pdf")), FileClassification::Unknown);
        assert_eq!(classify(Path::new("no_extension")), FileClassification::Unknown);
        assert_eq!(classify(Path::new("archive.tar.gz")), FileClassification::Unknown);
    }
}
