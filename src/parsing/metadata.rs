use std::collections::HashMap;

use tracing::warn;

use crate::core::types::{Difficulty, ProblemId, ProblemMetadata};
use crate::parsing::csv::{split_rows, DELIMITER};
use crate::parsing::tags::parse_tag_fields;

/// Per-problem tags and difficulty parsed from the metadata table
#[derive(Debug, Clone, Default)]
pub struct MetadataTable {
    /// Index: problem ID -> tags in table order
    tags: HashMap<ProblemId, Vec<String>>,

    /// Index: problem ID -> difficulty label as given
    difficulty: HashMap<ProblemId, Difficulty>,
}

impl MetadataTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Record metadata for a problem, replacing any earlier entry
    pub fn insert(&mut self, id: ProblemId, tags: Vec<String>, difficulty: Difficulty) {
        self.tags.insert(id.clone(), tags);
        self.difficulty.insert(id, difficulty);
    }

    /// Metadata for a problem.
    ///
    /// Problems absent from the table get empty tags and
    /// [`Difficulty::Unknown`] instead of an error.
    #[must_use]
    pub fn get(&self, id: &ProblemId) -> ProblemMetadata {
        ProblemMetadata {
            tags: self.tags.get(id).cloned().unwrap_or_default(),
            difficulty: self.difficulty.get(id).cloned().unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn contains(&self, id: &ProblemId) -> bool {
        self.difficulty.contains_key(id)
    }

    /// Number of problems with metadata
    pub fn len(&self) -> usize {
        self.difficulty.len()
    }

    pub fn is_empty(&self) -> bool {
        self.difficulty.is_empty()
    }
}

/// Parse metadata text with layout: id, tag-field x k, difficulty
///
/// The first row is a header and is skipped. Rows without a difficulty
/// column are skipped with a warning; a later row for the same ID replaces
/// an earlier one.
#[must_use]
pub fn parse_metadata_text(text: &str) -> MetadataTable {
    let mut table = MetadataTable::new();

    for (i, row) in split_rows(text, DELIMITER).into_iter().enumerate().skip(1) {
        if row.len() < 2 {
            warn!("Skipping metadata row {}: no difficulty column", i + 1);
            continue;
        }

        let last = row.len() - 1;
        let id = ProblemId::new(row[0].trim());
        let tags = parse_tag_fields(&row[1..last]);
        let difficulty = Difficulty::parse(&row[last]);

        table.insert(id, tags, difficulty);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    const METADATA: &str = r#"id,tags,difficulty
two-sum,"['Array', 'Hash Table']",Easy
sort-an-array,"['Array', 'Divide and Conquer', 'Sorting', 'Heap (Priority Queue)', 'Merge Sort']",Medium
word-ladder,['Hash Table'],Hard
no-tags,[],Easy
odd-label,['Math'],Impossible
"#;

    #[test]
    fn test_parse_metadata_tags() {
        let table = parse_metadata_text(METADATA);
        assert_eq!(table.len(), 5);

        let meta = table.get(&ProblemId::new("two-sum"));
        assert_eq!(meta.tags, vec!["Array", "Hash Table"]);
        assert_eq!(meta.difficulty, Difficulty::Easy);

        let meta = table.get(&ProblemId::new("sort-an-array"));
        assert_eq!(
            meta.tags,
            vec![
                "Array",
                "Divide and Conquer",
                "Sorting",
                "Heap (Priority Queue)",
                "Merge Sort"
            ]
        );
        assert_eq!(meta.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_parse_metadata_single_and_empty_tags() {
        let table = parse_metadata_text(METADATA);
        assert_eq!(
            table.get(&ProblemId::new("word-ladder")).tags,
            vec!["Hash Table"]
        );
        assert!(table.get(&ProblemId::new("no-tags")).tags.is_empty());
    }

    #[test]
    fn test_unrecognized_difficulty_is_kept() {
        let table = parse_metadata_text(METADATA);
        assert_eq!(
            table.get(&ProblemId::new("odd-label")).difficulty,
            Difficulty::Other("Impossible".to_string())
        );
    }

    #[test]
    fn test_missing_problem_gets_default_metadata() {
        let table = parse_metadata_text(METADATA);
        let meta = table.get(&ProblemId::new("not-in-table"));
        assert!(meta.tags.is_empty());
        assert_eq!(meta.difficulty, Difficulty::Unknown);
        assert!(!table.contains(&ProblemId::new("not-in-table")));
    }

    #[test]
    fn test_header_row_is_skipped() {
        let table = parse_metadata_text(METADATA);
        assert!(!table.contains(&ProblemId::new("id")));
    }

    #[test]
    fn test_row_without_difficulty_is_skipped() {
        let table = parse_metadata_text("id,tags,difficulty\nlonely\ntwo-sum,['Array'],Easy\n");
        assert_eq!(table.len(), 1);
        assert!(!table.contains(&ProblemId::new("lonely")));
    }

    #[test]
    fn test_later_row_replaces_earlier() {
        let text = "id,tags,difficulty\na,['X'],Easy\na,['Y'],Hard\n";
        let meta = parse_metadata_text(text).get(&ProblemId::new("a"));
        assert_eq!(meta.tags, vec!["Y"]);
        assert_eq!(meta.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_id_and_difficulty_only() {
        let table = parse_metadata_text("id,difficulty\na,Medium\n");
        let meta = table.get(&ProblemId::new("a"));
        assert!(meta.tags.is_empty());
        assert_eq!(meta.difficulty, Difficulty::Medium);
    }
}
