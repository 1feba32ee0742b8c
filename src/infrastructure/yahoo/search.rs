use crate::domain::ports::ticker_resolver::TickerResolver;
use crate::domain::values::company::CompanyName;
use crate::domain::values::resolution::Resolution;
use crate::domain::values::ticker::TickerSymbol;
use crate::infrastructure::http::PacedClient;
use async_trait::async_trait;
use std::sync::Arc;

const SEARCH_URL: &str = "https://query2.finance.yahoo.com/v1/finance/search";

/// Yahoo Finance symbol search (no auth required). The first result typed
/// `EQUITY` wins; funds, indices and news hits are skipped.
pub struct YahooSearch {
    client: Arc<PacedClient>,
}

impl YahooSearch {
    pub fn new(client: Arc<PacedClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, serde::Deserialize)]
struct SearchResponse {
    #[serde(default)]
    quotes: Vec<SearchQuote>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchQuote {
    #[serde(default)]
    symbol: Option<String>,
    #[serde(default)]
    quote_type: Option<String>,
}

#[async_trait]
impl TickerResolver for YahooSearch {
    fn name(&self) -> &str {
        "yahoo_search"
    }

    async fn resolve(&self, company: &CompanyName) -> Resolution {
        let url = match reqwest::Url::parse_with_params(SEARCH_URL, &[("q", company.as_str())]) {
            Ok(url) => url,
            Err(e) => return Resolution::Failed(format!("bad search URL for {company}: {e}")),
        };

        match self.client.get_json::<SearchResponse>(url.as_str()).await {
            Ok(resp) => first_equity(resp),
            Err(e) => Resolution::Failed(e.to_string()),
        }
    }
}

fn first_equity(resp: SearchResponse) -> Resolution {
    resp.quotes
        .into_iter()
        .find(|q| q.quote_type.as_deref() == Some("EQUITY"))
        .and_then(|q| q.symbol)
        .map(|symbol| Resolution::Resolved(TickerSymbol::new(symbol)))
        .unwrap_or(Resolution::Unresolved)
}
