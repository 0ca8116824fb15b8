use serde::{Deserialize, Serialize};

use crate::core::types::{Difficulty, ProblemId, ProblemMetadata};

/// One entry of a rank query: a problem, its score against the query
/// problem, and its joined metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub problem: ProblemId,
    pub score: f64,
    pub tags: Vec<String>,
    pub difficulty: Difficulty,
}

impl RankedResult {
    pub fn new(problem: ProblemId, score: f64, metadata: ProblemMetadata) -> Self {
        Self {
            problem,
            score,
            tags: metadata.tags,
            difficulty: metadata.difficulty,
        }
    }
}

/// Result of a pairwise query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairwiseScore {
    pub first: ProblemId,
    pub second: ProblemId,
    /// Score rounded to two decimal places
    pub score: f64,
}

/// Round a score to two decimal places for display and comparison.
///
/// Scores too large to scale are returned unchanged.
#[must_use]
pub fn round_score(score: f64) -> f64 {
    let scaled = score * 100.0;
    if scaled.is_finite() {
        scaled.round() / 100.0
    } else {
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_score() {
        assert!((round_score(0.5) - 0.50).abs() < f64::EPSILON);
        assert!((round_score(0.876) - 0.88).abs() < 1e-9);
        assert!((round_score(0.123_456) - 0.12).abs() < 1e-9);
        assert!((round_score(-0.126) - -0.13).abs() < 1e-9);
    }

    #[test]
    fn test_round_score_stays_finite_for_huge_scores() {
        let huge = f64::MAX / 10.0;
        assert_eq!(round_score(huge), huge);
        assert_eq!(round_score(-huge), -huge);
    }

    #[test]
    fn test_ranked_result_takes_metadata() {
        let meta = ProblemMetadata::new(vec!["Array".to_string()], Difficulty::Easy);
        let result = RankedResult::new(ProblemId::new("two-sum"), 0.9, meta);
        assert_eq!(result.tags, vec!["Array"]);
        assert_eq!(result.difficulty, Difficulty::Easy);
    }
}
