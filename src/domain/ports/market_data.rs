use crate::domain::error::DomainError;
use crate::domain::values::quote::MarketQuote;
use crate::domain::values::ticker::TickerSymbol;
use async_trait::async_trait;

/// Per-ticker market data lookup.
///
/// `Ok(None)` means the upstream answered but has nothing for this ticker:
/// a normal outcome, distinct from `Err` (the lookup itself broke after
/// retries were exhausted).
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Provider name for diagnostics.
    fn name(&self) -> &str;

    async fn quote(&self, ticker: &TickerSymbol) -> Result<Option<MarketQuote>, DomainError>;
}
