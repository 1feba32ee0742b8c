use crate::domain::values::ticker::TickerSymbol;

/// Outcome of one name→ticker lookup. "No ticker exists" and "the lookup
/// broke" are distinct variants, never a shared sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The search returned an equity match.
    Resolved(TickerSymbol),
    /// The search answered, but with no equity match. A normal outcome for
    /// private companies and subsidiaries.
    Unresolved,
    /// The lookup could not be completed (retries exhausted or the upstream
    /// answered garbage).
    Failed(String),
}
