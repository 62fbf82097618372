use crate::config::CleanOptions;
use crate::error::CleanError;
use crate::models::CleanOutcome;
use crate::services::{detector, exporter, loader, normalizer};
use crate::services::scrubber::{CharacterScrubber, SpecialCharacterScrubber};
use std::path::Path;

/// Run the full cleaning pipeline on one file.
///
/// Classifies the input by extension, loads it into a table, counts and
/// strips the structural bad characters, normalizes null markers, trims
/// whitespace, strips special characters, and re-exports in a format
/// matching the input. The caller is responsible for verifying that
/// `input_file` and `output_folder` exist.
pub fn clean_file(
    input_file: &Path,
    output_folder: &Path,
    filename: &str,
    options: &CleanOptions,
) -> Result<CleanOutcome, CleanError> {
    let classification = detector::classify(input_file);
    tracing::info!(
        "Cleaning {} (classified as {:?})",
        input_file.display(),
        classification
    );

    let mut table = loader::load(input_file, classification)?;
    tracing::info!(
        "Loaded table: {} columns, {} rows",
        table.column_count(),
        table.row_count()
    );

    // Count before any mutation so the totals reflect the original content.
    let scrubber = CharacterScrubber::new(&options.bad_characters);
    let mut removed = scrubber.count(&table);
    scrubber.strip(&mut table);

    normalizer::normalize_nulls(&mut table);
    normalizer::trim_cells(&mut table);

    let special = SpecialCharacterScrubber::new(&options.special_characters);
    removed.extend(&special.count_and_strip(&mut table));

    let output_path = exporter::export(&table, output_folder, filename, classification)?;
    tracing::info!(
        "Wrote cleaned file to {} ({} characters removed)",
        output_path.display(),
        removed.total()
    );

    Ok(CleanOutcome {
        output_path,
        removed,
    })
}
