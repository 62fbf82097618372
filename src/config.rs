/// Character sets the scrubbing stages operate on.
///
/// Injected into the scrubbers rather than read from globals so tests can
/// substitute alternate sets. The defaults are the fixed lists the tool has
/// always used; they are not exposed for end-user configuration.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    /// Literal sequences considered harmful to downstream ETL consumers,
    /// removed from every cell. Order matters for both counting and removal.
    pub bad_characters: Vec<String>,
    /// Control characters removed in a separate pass after null
    /// normalization and trimming.
    pub special_characters: Vec<char>,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            bad_characters: vec![
                ",".to_string(),
                "\"".to_string(),
                "\"\"".to_string(),
                "'".to_string(),
            ],
            special_characters: vec!['\n', '\r', '\t', '\u{b}', '\u{c}'],
        }
    }
}
