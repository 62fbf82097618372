use crate::models::{RemovalCounter, Table};

/// Counts and strips the structural bad-character sequences (commas, quotes)
/// from every cell. Matching is always literal, never a pattern.
pub struct CharacterScrubber {
    sequences: Vec<String>,
}

impl CharacterScrubber {
    pub fn new(sequences: &[String]) -> Self {
        Self {
            sequences: sequences.to_vec(),
        }
    }

    /// Count occurrences of each configured sequence across every cell.
    ///
    /// Must run before [`strip`](Self::strip); the counter reflects original
    /// content. Every configured sequence gets an entry, zero counts
    /// included, as long as the table has at least one column.
    pub fn count(&self, table: &Table) -> RemovalCounter {
        let mut counter = RemovalCounter::new();
        for column in &table.columns {
            for sequence in &self.sequences {
                let count: u64 = column
                    .cells
                    .iter()
                    .map(|cell| cell.matches(sequence.as_str()).count() as u64)
                    .sum();
                counter.add(sequence, count);
            }
        }
        counter
    }

    /// Remove every occurrence of each configured sequence from every cell,
    /// in configured order.
    pub fn strip(&self, table: &mut Table) {
        for column in &mut table.columns {
            for cell in &mut column.cells {
                for sequence in &self.sequences {
                    if cell.contains(sequence.as_str()) {
                        *cell = cell.replace(sequence.as_str(), "");
                    }
                }
            }
        }
    }
}

/// Drops non-printable characters and counts/strips the named control
/// characters (newline, carriage return, tab, vertical tab, form feed).
pub struct SpecialCharacterScrubber {
    characters: Vec<char>,
}

impl SpecialCharacterScrubber {
    pub fn new(characters: &[char]) -> Self {
        Self {
            characters: characters.to_vec(),
        }
    }

    /// Filter each cell down to the printable set, then count and remove the
    /// configured control characters.
    ///
    /// Characters outside the printable set are dropped silently and never
    /// counted; only the named control characters appear in the counter,
    /// labeled by their escaped form (`\n`, `\t`, ...).
    pub fn count_and_strip(&self, table: &mut Table) -> RemovalCounter {
        let mut counter = RemovalCounter::new();

        for column in &mut table.columns {
            for cell in &mut column.cells {
                if !cell.chars().all(is_printable) {
                    *cell = cell.chars().filter(|c| is_printable(*c)).collect();
                }
            }

            for ch in &self.characters {
                let label = escape_label(*ch);
                let mut removed = 0u64;
                for cell in &mut column.cells {
                    let count = cell.matches(*ch).count() as u64;
                    if count > 0 {
                        *cell = cell.replace(*ch, "");
                    }
                    removed += count;
                }
                counter.add(&label, removed);
            }
        }

        counter
    }
}

/// The printable set: ASCII graphic characters, space, and the five control
/// characters the scrubber itself accounts for.
fn is_printable(c: char) -> bool {
    c.is_ascii_graphic() || matches!(c, ' ' | '\t' | '\n' | '\r' | '\u{b}' | '\u{c}')
}

/// Escaped, single-line label for a control character so the report can
/// distinguish it from the structural characters.
fn escape_label(c: char) -> String {
    match c {
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        '\u{b}' => "\\x0b".to_string(),
        '\u{c}' => "\\x0c".to_string(),
        other => other.escape_default().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CleanOptions;
    use crate::models::Column;

    fn table_of(cells: Vec<&str>) -> Table {
        Table::new(vec![Column::new(
            "col",
            cells.into_iter().map(String::from).collect(),
        )])
    }

    fn structural() -> CharacterScrubber {
        CharacterScrubber::new(&CleanOptions::default().bad_characters)
    }

    fn special() -> SpecialCharacterScrubber {
        SpecialCharacterScrubber::new(&CleanOptions::default().special_characters)
    }

    #[test]
    fn counts_then_strips_quoted_cell() {
        let mut table = table_of(vec!["He said, \"hi\""]);
        let scrubber = structural();

        let counter = scrubber.count(&table);
        assert_eq!(counter.get(","), 1);
        assert_eq!(counter.get("\""), 2);
        assert_eq!(counter.get("\"\""), 0);
        assert_eq!(counter.get("'"), 0);

        scrubber.strip(&mut table);
        assert_eq!(table.columns[0].cells[0], "He said hi");
    }

    #[test]
    fn doubled_quote_counts_under_both_labels() {
        let table = table_of(vec!["a\"\"b"]);
        let counter = structural().count(&table);
        assert_eq!(counter.get("\""), 2);
        assert_eq!(counter.get("\"\""), 1);
    }

    #[test]
    fn strip_leaves_no_occurrences() {
        let mut table = table_of(vec!["',\"x\"',", "plain"]);
        let scrubber = structural();
        scrubber.strip(&mut table);
        for cell in &table.columns[0].cells {
            assert!(!cell.contains(','));
            assert!(!cell.contains('"'));
            assert!(!cell.contains('\''));
        }
    }

    #[test]
    fn count_reflects_content_before_strip() {
        let mut table = table_of(vec!["a,b", "c,d"]);
        let scrubber = structural();
        let before = scrubber.count(&table);
        scrubber.strip(&mut table);
        let after = scrubber.count(&table);
        assert_eq!(before.get(","), 2);
        assert_eq!(after.get(","), 0);
    }

    #[test]
    fn counts_accumulate_across_columns() {
        let table = Table::new(vec![
            Column::new("a", vec!["x,y".into()]),
            Column::new("b", vec![",,".into()]),
        ]);
        let counter = structural().count(&table);
        assert_eq!(counter.get(","), 3);
    }

    #[test]
    fn special_counts_tab_and_drops_control_byte() {
        let mut table = table_of(vec!["a\tb\u{1}c"]);
        let counter = special().count_and_strip(&mut table);

        assert_eq!(table.columns[0].cells[0], "abc");
        assert_eq!(counter.get("\\t"), 1);
        // The 0x01 byte is dropped silently, not counted anywhere.
        assert_eq!(counter.total(), 1);
    }

    #[test]
    fn special_labels_are_escaped() {
        let mut table = table_of(vec!["x\ny\rz\u{b}w\u{c}v"]);
        let counter = special().count_and_strip(&mut table);
        let labels: Vec<_> = counter.iter().map(|(l, _)| l.to_string()).collect();
        assert_eq!(labels, vec!["\\n", "\\r", "\\t", "\\x0b", "\\x0c"]);
        assert_eq!(counter.get("\\n"), 1);
        assert_eq!(counter.get("\\x0b"), 1);
        assert_eq!(table.columns[0].cells[0], "xyzwv");
    }

    #[test]
    fn non_ascii_text_is_outside_the_printable_set() {
        let mut table = table_of(vec!["caf\u{e9}"]);
        let counter = special().count_and_strip(&mut table);
        assert_eq!(table.columns[0].cells[0], "caf");
        assert_eq!(counter.total(), 0);
    }

    #[test]
    fn alternate_sequence_set_is_honored() {
        let mut table = table_of(vec!["a;b;c"]);
        let scrubber = CharacterScrubber::new(&[";".to_string()]);
        let counter = scrubber.count(&table);
        assert_eq!(counter.get(";"), 2);
        scrubber.strip(&mut table);
        assert_eq!(table.columns[0].cells[0], "abc");
    }
}
