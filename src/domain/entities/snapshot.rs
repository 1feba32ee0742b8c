use crate::domain::values::company::CompanyName;
use crate::domain::values::identity_key::IdentityKey;
use crate::domain::values::quote::MarketQuote;
use crate::domain::values::ticker::TickerSymbol;
use serde::{Deserialize, Serialize};

/// How far one company made it through the resolve→fetch pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotStatus {
    /// Ticker resolved and market data fetched (fields may still be absent).
    Ok,
    /// No ticker could be resolved; no market call was made.
    NoTicker,
    /// Ticker resolved but upstream had no data for it.
    NoData,
    /// Ticker resolved but the market fetch exhausted its retries.
    FetchFailed,
}

impl SnapshotStatus {
    /// Rank used when the two source lists carry the same company with
    /// different completeness; higher wins.
    pub fn completeness(self) -> u8 {
        match self {
            SnapshotStatus::Ok => 3,
            SnapshotStatus::NoData => 2,
            SnapshotStatus::FetchFailed => 1,
            SnapshotStatus::NoTicker => 0,
        }
    }
}

/// Point-in-time market record for one scraped company. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSnapshot {
    pub company: CompanyName,
    pub ticker: Option<TickerSymbol>,
    pub price: Option<f64>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub market_cap: Option<f64>,
    pub pe_ratio: Option<f64>,
    pub status: SnapshotStatus,
}

impl StockSnapshot {
    pub fn resolved(company: CompanyName, ticker: TickerSymbol, quote: MarketQuote) -> Self {
        Self {
            company,
            ticker: Some(ticker),
            price: quote.price,
            sector: quote.sector,
            industry: quote.industry,
            market_cap: quote.market_cap,
            pe_ratio: quote.pe_ratio,
            status: SnapshotStatus::Ok,
        }
    }

    pub fn no_ticker(company: CompanyName) -> Self {
        Self::bare(company, None, SnapshotStatus::NoTicker)
    }

    pub fn no_data(company: CompanyName, ticker: TickerSymbol) -> Self {
        Self::bare(company, Some(ticker), SnapshotStatus::NoData)
    }

    pub fn fetch_failed(company: CompanyName, ticker: TickerSymbol) -> Self {
        Self::bare(company, Some(ticker), SnapshotStatus::FetchFailed)
    }

    fn bare(company: CompanyName, ticker: Option<TickerSymbol>, status: SnapshotStatus) -> Self {
        Self {
            company,
            ticker,
            price: None,
            sector: None,
            industry: None,
            market_cap: None,
            pe_ratio: None,
            status,
        }
    }

    pub fn identity_key(&self) -> IdentityKey {
        IdentityKey::from_parts(self.ticker.as_ref(), &self.company)
    }
}
