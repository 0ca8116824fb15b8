use crate::core::error::SimilarityError;
use crate::core::types::ProblemId;

/// Extract the problem identifier from a problem URL.
///
/// The identifier is the last non-empty path segment, so
/// `https://leetcode.com/problems/two-sum/` yields `two-sum`. Query strings,
/// fragments and trailing slashes are ignored. Input without a `/` is taken
/// as a bare identifier.
///
/// # Errors
///
/// Returns `SimilarityError::InvalidProblemUrl` if no identifier remains.
pub fn problem_id_from_url(input: &str) -> Result<ProblemId, SimilarityError> {
    let trimmed = input.trim();
    let without_fragment = trimmed.split('#').next().unwrap_or_default();
    let path = without_fragment.split('?').next().unwrap_or_default();

    let segment = path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .trim();

    // "https:" alone means the input was only a scheme
    if segment.is_empty() || segment.ends_with(':') {
        return Err(SimilarityError::InvalidProblemUrl(input.to_string()));
    }

    Ok(ProblemId::new(segment))
}
