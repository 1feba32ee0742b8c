use crate::domain::values::company::CompanyName;
use crate::domain::values::ticker::TickerSymbol;

/// The key two source lists are joined on: the ticker when one was resolved,
/// otherwise the normalized company name. The name fallback keeps employers
/// without a listed stock comparable across lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IdentityKey {
    Ticker(String),
    Name(String),
}

impl IdentityKey {
    pub fn from_parts(ticker: Option<&TickerSymbol>, name: &CompanyName) -> Self {
        match ticker {
            Some(t) => IdentityKey::Ticker(t.as_str().to_string()),
            None => IdentityKey::Name(name.normalized()),
        }
    }
}
