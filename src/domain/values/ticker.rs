use serde::{Deserialize, Serialize};
use std::fmt;

/// An exchange ticker symbol, case-normalized to uppercase at construction
/// so that identity comparisons never depend on how an upstream spelled it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TickerSymbol(String);

impl TickerSymbol {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TickerSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
