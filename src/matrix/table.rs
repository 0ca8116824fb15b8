use crate::core::error::SimilarityError;

/// The assembled similarity table.
///
/// Row 0 is the canonical header; every other row is
/// `(problem id, score, score, ...)` with scores aligned to the header.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityTable {
    rows: Vec<Vec<String>>,
}

impl SimilarityTable {
    /// Wrap already assembled rows
    ///
    /// # Errors
    ///
    /// Returns `SimilarityError::EmptyMatrix` if there is no header row.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Result<Self, SimilarityError> {
        if rows.is_empty() {
            return Err(SimilarityError::EmptyMatrix);
        }
        Ok(Self { rows })
    }

    /// The header row, in canonical column order
    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.rows[0]
    }

    /// All rows except the header
    #[must_use]
    pub fn data_rows(&self) -> &[Vec<String>] {
        &self.rows[1..]
    }

    /// All rows including the header
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
