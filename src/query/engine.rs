use crate::core::error::SimilarityError;
use crate::core::result::{round_score, PairwiseScore, RankedResult};
use crate::core::types::ProblemId;
use crate::matrix::snapshot::SimilaritySnapshot;

/// Answers rank and pairwise queries against a snapshot.
///
/// Queries are pure: they read the snapshot and perform no IO.
pub struct SimilarityEngine<'a> {
    snapshot: &'a SimilaritySnapshot,
}

impl<'a> SimilarityEngine<'a> {
    pub fn new(snapshot: &'a SimilaritySnapshot) -> Self {
        Self { snapshot }
    }

    /// Rank every other problem by similarity to `id`, most similar first.
    ///
    /// The query problem's own row is excluded by identifier, so a row that
    /// ties with or beats the diagonal is never dropped in its place.
    ///
    /// # Errors
    ///
    /// Returns `SimilarityError::UnknownProblem` if `id` is not in the
    /// header, or `SimilarityError::MalformedScore` if any cell in its
    /// column is missing or not a finite number.
    pub fn rank_similar(&self, id: &ProblemId) -> Result<Vec<RankedResult>, SimilarityError> {
        let table = self.snapshot.table();
        let column = self
            .snapshot
            .header_index()
            .column_of(id)
            .ok_or_else(|| SimilarityError::UnknownProblem(id.clone()))?;
        let column_name = &table.header()[column];

        let mut scored = table
            .data_rows()
            .iter()
            .map(|row| {
                let row_id = row.first().map_or("", |id| id.trim());
                parse_score(row_id, column_name, row.get(column)).map(|score| (row_id, score))
            })
            .collect::<Result<Vec<_>, _>>()?;

        // Stable: equal scores keep matrix row order
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        let metadata = self.snapshot.metadata();
        Ok(scored
            .into_iter()
            .filter(|(row_id, _)| *row_id != id.as_str())
            .map(|(row_id, score)| {
                let problem = ProblemId::new(row_id);
                let meta = metadata.get(&problem);
                RankedResult::new(problem, score, meta)
            })
            .collect())
    }

    /// Similarity between two problems, rounded to two decimal places.
    ///
    /// Reads row `first` at column `second`. Symmetry of the matrix is
    /// assumed, not checked.
    ///
    /// # Errors
    ///
    /// Returns `SimilarityError::UnknownProblem` naming the missing side when
    /// one problem is absent, `SimilarityError::UnknownProblems` when both
    /// are, or `SimilarityError::MalformedScore` if the cell does not parse.
    pub fn pairwise_similarity(
        &self,
        first: &ProblemId,
        second: &ProblemId,
    ) -> Result<PairwiseScore, SimilarityError> {
        let row = self.snapshot.row_index().row_of(first);
        let column = self.snapshot.header_index().column_of(second);

        let (row, column) = match (row, column) {
            (Some(row), Some(column)) => (row, column),
            (None, None) if first != second => {
                return Err(SimilarityError::UnknownProblems(
                    first.clone(),
                    second.clone(),
                ))
            }
            (None, _) => return Err(SimilarityError::UnknownProblem(first.clone())),
            (_, None) => return Err(SimilarityError::UnknownProblem(second.clone())),
        };

        let table = self.snapshot.table();
        let fields = &table.data_rows()[row];
        let score = parse_score(first.as_str(), &table.header()[column], fields.get(column))?;

        Ok(PairwiseScore {
            first: first.clone(),
            second: second.clone(),
            score: round_score(score),
        })
    }
}

fn parse_score(row: &str, column: &str, cell: Option<&String>) -> Result<f64, SimilarityError> {
    let malformed = |value: &str| SimilarityError::MalformedScore {
        row: row.to_string(),
        column: column.to_string(),
        value: value.to_string(),
    };

    let cell = cell.ok_or_else(|| malformed("<missing>"))?;
    match cell.trim().parse::<f64>() {
        Ok(score) if score.is_finite() => Ok(score),
        _ => Err(malformed(cell.as_str())),
    }
}
