use serde::{Deserialize, Serialize};
use std::fmt;

/// Trailing tokens that name a corporate form rather than the company itself.
/// Stripped when two spellings of the same employer are compared by name.
const CORPORATE_SUFFIXES: &[&str] = &[
    "inc",
    "incorporated",
    "corp",
    "corporation",
    "co",
    "company",
    "ltd",
    "llc",
    "plc",
    "group",
    "holdings",
];

/// A company name exactly as scraped from a source list. Never normalized at
/// capture time; [`CompanyName::normalized`] derives the comparison form on
/// demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyName(String);

impl CompanyName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Comparison form: case-folded, punctuation dropped, whitespace
    /// collapsed, trailing corporate-form tokens stripped.
    ///
    /// "Acme Corp." and "ACME CORP" both normalize to "acme". At least one
    /// token is always kept, so a company literally named "Company" does not
    /// normalize to the empty string.
    pub fn normalized(&self) -> String {
        let folded: String = self
            .0
            .to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { ' ' })
            .collect();

        let mut tokens: Vec<&str> = folded.split_whitespace().collect();
        while tokens.len() > 1 {
            match tokens.last() {
                Some(last) if CORPORATE_SUFFIXES.contains(last) => {
                    tokens.pop();
                }
                _ => break,
            }
        }
        tokens.join(" ")
    }
}

impl fmt::Display for CompanyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
