use std::collections::HashMap;

use crate::core::types::ProblemId;

/// Maps a problem identifier to its column in the assembled table.
///
/// Built once from the header row. The header's first cell labels the
/// identifier column and is not indexed. When an identifier appears more
/// than once, its first position wins.
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    columns: HashMap<ProblemId, usize>,
}

impl HeaderIndex {
    pub fn build(header: &[String]) -> Self {
        let mut columns = HashMap::with_capacity(header.len());
        for (position, id) in header.iter().enumerate().skip(1) {
            columns
                .entry(ProblemId::new(id.trim()))
                .or_insert(position);
        }
        Self { columns }
    }

    /// Column position of a problem, if it appears in the header
    #[must_use]
    pub fn column_of(&self, id: &ProblemId) -> Option<usize> {
        self.columns.get(id).copied()
    }

    pub fn contains(&self, id: &ProblemId) -> bool {
        self.columns.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Maps a problem identifier to the data row whose first field equals it.
/// First occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct RowIndex {
    rows: HashMap<ProblemId, usize>,
}

impl RowIndex {
    pub fn build(data_rows: &[Vec<String>]) -> Self {
        let mut rows = HashMap::with_capacity(data_rows.len());
        for (position, row) in data_rows.iter().enumerate() {
            if let Some(id) = row.first() {
                rows.entry(ProblemId::new(id.trim())).or_insert(position);
            }
        }
        Self { rows }
    }

    /// Position of a problem's row among the data rows
    #[must_use]
    pub fn row_of(&self, id: &ProblemId) -> Option<usize> {
        self.rows.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
