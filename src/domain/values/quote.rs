use serde::{Deserialize, Serialize};

/// Per-ticker payload from the market-data provider. Every field is optional:
/// upstream simply does not publish some of them for some tickers, and that
/// absence must stay distinguishable from a failed fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketQuote {
    /// Upstream's short display name, used only as a liveness signal.
    pub name: Option<String>,
    pub price: Option<f64>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub market_cap: Option<f64>,
    pub pe_ratio: Option<f64>,
}

impl MarketQuote {
    /// True when upstream answered but carried nothing usable.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.sector.is_none()
            && self.industry.is_none()
            && self.market_cap.is_none()
            && self.pe_ratio.is_none()
    }
}
