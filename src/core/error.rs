use thiserror::Error;

use crate::core::types::ProblemId;

/// Failures reported by matrix loading and similarity queries.
///
/// Every variant is local to the load or query that produced it; none are
/// retried automatically.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimilarityError {
    #[error("Could not retrieve '{location}': {reason}")]
    SourceUnavailable { location: String, reason: String },

    #[error("Problem '{0}' was not found in the similarity matrix")]
    UnknownProblem(ProblemId),

    #[error("Neither '{0}' nor '{1}' was found in the similarity matrix")]
    UnknownProblems(ProblemId, ProblemId),

    #[error("Malformed score for row '{row}', column '{column}': '{value}'")]
    MalformedScore {
        row: String,
        column: String,
        value: String,
    },

    #[error("Similarity matrix is empty: no header row was found")]
    EmptyMatrix,

    #[error("Could not extract a problem identifier from '{0}'")]
    InvalidProblemUrl(String),
}

impl SimilarityError {
    pub fn source_unavailable(location: impl Into<String>, reason: impl ToString) -> Self {
        Self::SourceUnavailable {
            location: location.into(),
            reason: reason.to_string(),
        }
    }

    /// Short machine-readable name used in API error responses
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SourceUnavailable { .. } => "source_unavailable",
            Self::UnknownProblem(_) => "unknown_problem",
            Self::UnknownProblems(..) => "unknown_problems",
            Self::MalformedScore { .. } => "malformed_score",
            Self::EmptyMatrix => "empty_matrix",
            Self::InvalidProblemUrl(_) => "invalid_problem_url",
        }
    }
}
