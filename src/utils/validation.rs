//! Input validation for problem references received over the network.

/// Longest problem URL or identifier accepted from a request
pub const MAX_PROBLEM_INPUT_LENGTH: usize = 2048;

/// Validation error types
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty problem reference provided")]
    EmptyInput,
    #[error("Problem reference too long: exceeds {MAX_PROBLEM_INPUT_LENGTH} characters")]
    InputTooLong,
    #[error("Problem reference contains control characters")]
    InvalidCharacters,
}

/// Validate a problem URL or identifier before it is parsed.
///
/// # Examples
///
/// ```
/// use problem_sim::utils::validation::validate_problem_input;
///
/// assert!(validate_problem_input("https://leetcode.com/problems/two-sum/").is_ok());
/// assert!(validate_problem_input("   ").is_err());
/// ```
///
/// # Errors
///
/// Returns `ValidationError::EmptyInput` for blank input,
/// `ValidationError::InputTooLong` past the length limit, or
/// `ValidationError::InvalidCharacters` if it contains control characters.
pub fn validate_problem_input(input: &str) -> Result<&str, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    if trimmed.len() > MAX_PROBLEM_INPUT_LENGTH {
        return Err(ValidationError::InputTooLong);
    }

    if trimmed.chars().any(char::is_control) {
        return Err(ValidationError::InvalidCharacters);
    }

    Ok(trimmed)
}
