use crate::domain::error::DomainError;
use crate::domain::ports::market_data::MarketDataProvider;
use crate::domain::values::quote::MarketQuote;
use crate::domain::values::ticker::TickerSymbol;
use crate::infrastructure::http::PacedClient;
use async_trait::async_trait;
use std::sync::Arc;

const QUOTE_SUMMARY_URL: &str = "https://query2.finance.yahoo.com/v10/finance/quoteSummary";

/// The modules carrying the report columns: price + market cap, sector +
/// industry, trailing P/E.
const MODULES: &str = "price,summaryProfile,summaryDetail";

/// Yahoo Finance quoteSummary endpoint. Numeric fields arrive wrapped in
/// `{"raw": …, "fmt": "…"}` objects; only `raw` is used.
pub struct YahooQuoteSummary {
    client: Arc<PacedClient>,
}

impl YahooQuoteSummary {
    pub fn new(client: Arc<PacedClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, serde::Deserialize)]
struct SummaryResponse {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummary,
}

#[derive(Debug, serde::Deserialize)]
struct QuoteSummary {
    #[serde(default)]
    result: Option<Vec<SummaryResult>>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct SummaryResult {
    #[serde(default)]
    price: Option<PriceModule>,
    #[serde(default)]
    summary_profile: Option<ProfileModule>,
    #[serde(default)]
    summary_detail: Option<DetailModule>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct PriceModule {
    #[serde(default)]
    short_name: Option<String>,
    #[serde(default)]
    long_name: Option<String>,
    #[serde(default)]
    regular_market_price: Option<RawNum>,
    #[serde(default)]
    market_cap: Option<RawNum>,
}

#[derive(Debug, serde::Deserialize)]
struct ProfileModule {
    #[serde(default)]
    sector: Option<String>,
    #[serde(default)]
    industry: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct DetailModule {
    #[serde(rename = "trailingPE", default)]
    trailing_pe: Option<RawNum>,
    #[serde(rename = "marketCap", default)]
    market_cap: Option<RawNum>,
}

#[derive(Debug, serde::Deserialize)]
struct RawNum {
    #[serde(default)]
    raw: Option<f64>,
}

fn raw(num: Option<RawNum>) -> Option<f64> {
    num.and_then(|n| n.raw)
}

fn to_quote(result: SummaryResult) -> MarketQuote {
    let (name, price, cap_from_price) = match result.price {
        Some(price) => (
            price.short_name.or(price.long_name),
            raw(price.regular_market_price),
            raw(price.market_cap),
        ),
        None => (None, None, None),
    };
    let (sector, industry) = match result.summary_profile {
        Some(profile) => (profile.sector, profile.industry),
        None => (None, None),
    };
    let (pe_ratio, cap_from_detail) = match result.summary_detail {
        Some(detail) => (raw(detail.trailing_pe), raw(detail.market_cap)),
        None => (None, None),
    };

    MarketQuote {
        name,
        price,
        sector,
        industry,
        market_cap: cap_from_price.or(cap_from_detail),
        pe_ratio,
    }
}

#[async_trait]
impl MarketDataProvider for YahooQuoteSummary {
    fn name(&self) -> &str {
        "yahoo_quote_summary"
    }

    async fn quote(&self, ticker: &TickerSymbol) -> Result<Option<MarketQuote>, DomainError> {
        let url = format!("{QUOTE_SUMMARY_URL}/{ticker}?modules={MODULES}");
        let resp: SummaryResponse = self.client.get_json(&url).await?;

        // Yahoo reports "no such symbol" as a non-null error object, not as
        // an HTTP failure.
        if resp
            .quote_summary
            .error
            .as_ref()
            .is_some_and(|e| !e.is_null())
        {
            return Ok(None);
        }

        let quote = match resp
            .quote_summary
            .result
            .and_then(|results| results.into_iter().next())
        {
            Some(result) => to_quote(result),
            None => return Ok(None),
        };

        if quote.is_empty() {
            return Ok(None);
        }
        Ok(Some(quote))
    }
}
