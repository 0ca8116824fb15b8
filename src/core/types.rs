use serde::{Deserialize, Serialize};

/// Base URL that problem slugs are appended to
pub const PROBLEM_URL_BASE: &str = "https://leetcode.com/problems/";

/// Unique identifier for a problem in the similarity matrix
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProblemId(pub String);

impl ProblemId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human readable title: `two-sum` becomes `Two Sum`
    #[must_use]
    pub fn display_title(&self) -> String {
        self.0
            .split('-')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Canonical problem page for this identifier
    #[must_use]
    pub fn problem_url(&self) -> String {
        format!("{PROBLEM_URL_BASE}{}/", self.0)
    }
}

impl std::fmt::Display for ProblemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProblemId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Difficulty label of a problem.
///
/// Labels outside the known set are kept verbatim in [`Difficulty::Other`]
/// rather than being normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    #[default]
    Unknown,
    Other(String),
}

impl Difficulty {
    /// Parse a label as it appears in the metadata table
    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label.trim() {
            "Easy" => Self::Easy,
            "Medium" => Self::Medium,
            "Hard" => Self::Hard,
            "Unknown" => Self::Unknown,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Unknown => "Unknown",
            Self::Other(label) => label,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for Difficulty {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Difficulty> for String {
    fn from(d: Difficulty) -> Self {
        d.as_str().to_string()
    }
}

/// Tags and difficulty for one problem
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProblemMetadata {
    /// Topic tags in the order given by the metadata table
    pub tags: Vec<String>,
    pub difficulty: Difficulty,
}

impl ProblemMetadata {
    pub fn new(tags: Vec<String>, difficulty: Difficulty) -> Self {
        Self { tags, difficulty }
    }
}
