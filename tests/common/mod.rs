//! Shared test fakes for the pipeline ports.

use async_trait::async_trait;
use employerscreen::domain::entities::report::Report;
use employerscreen::domain::error::DomainError;
use employerscreen::domain::ports::employer_source::EmployerSource;
use employerscreen::domain::ports::market_data::MarketDataProvider;
use employerscreen::domain::ports::report_writer::ReportWriter;
use employerscreen::domain::ports::ticker_resolver::TickerResolver;
use employerscreen::domain::values::company::CompanyName;
use employerscreen::domain::values::quote::MarketQuote;
use employerscreen::domain::values::resolution::Resolution;
use employerscreen::domain::values::ticker::TickerSymbol;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

/// Source with a fixed list of names.
pub struct StaticSource {
    name: String,
    companies: Vec<String>,
}

impl StaticSource {
    pub fn new(name: &str, companies: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            companies: companies.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[async_trait]
impl EmployerSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_companies(&self) -> Result<Vec<CompanyName>, DomainError> {
        Ok(self.companies.iter().map(CompanyName::new).collect())
    }
}

/// Source whose fetch always fails.
pub struct BrokenSource {
    name: String,
}

impl BrokenSource {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[async_trait]
impl EmployerSource for BrokenSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_companies(&self) -> Result<Vec<CompanyName>, DomainError> {
        Err(DomainError::Source("fixture: page unreachable".into()))
    }
}

/// Resolver scripted per company name; unknown names are `Unresolved`.
/// Records every name it was asked about.
pub struct ScriptedResolver {
    table: HashMap<String, Resolution>,
    pub calls: Mutex<Vec<String>>,
}

impl ScriptedResolver {
    pub fn new(entries: &[(&str, Resolution)]) -> Self {
        Self {
            table: entries
                .iter()
                .map(|(name, res)| (name.to_string(), res.clone()))
                .collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn resolving(entries: &[(&str, &str)]) -> Self {
        let scripted: Vec<(&str, Resolution)> = entries
            .iter()
            .map(|(name, ticker)| (*name, Resolution::Resolved(TickerSymbol::new(*ticker))))
            .collect();
        Self::new(&scripted)
    }
}

#[async_trait]
impl TickerResolver for ScriptedResolver {
    fn name(&self) -> &str {
        "scripted_resolver"
    }

    async fn resolve(&self, company: &CompanyName) -> Resolution {
        self.calls.lock().unwrap().push(company.as_str().to_string());
        self.table
            .get(company.as_str())
            .cloned()
            .unwrap_or(Resolution::Unresolved)
    }
}

/// What the scripted market answers for one ticker.
pub enum ScriptedQuote {
    Data(MarketQuote),
    NoData,
    Fail,
}

/// Market data provider scripted per ticker; unknown tickers have no data.
/// Records every ticker it was asked about.
pub struct ScriptedMarket {
    table: HashMap<String, ScriptedQuote>,
    pub calls: Mutex<Vec<String>>,
}

impl ScriptedMarket {
    pub fn new(entries: Vec<(&str, ScriptedQuote)>) -> Self {
        Self {
            table: entries
                .into_iter()
                .map(|(ticker, quote)| (ticker.to_string(), quote))
                .collect(),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl MarketDataProvider for ScriptedMarket {
    fn name(&self) -> &str {
        "scripted_market"
    }

    async fn quote(&self, ticker: &TickerSymbol) -> Result<Option<MarketQuote>, DomainError> {
        self.calls.lock().unwrap().push(ticker.as_str().to_string());
        match self.table.get(ticker.as_str()) {
            Some(ScriptedQuote::Data(quote)) => Ok(Some(quote.clone())),
            Some(ScriptedQuote::NoData) | None => Ok(None),
            Some(ScriptedQuote::Fail) => Err(DomainError::Lookup(
                "fixture: gave up after 3 attempts".into(),
            )),
        }
    }
}

/// Writer that keeps the report in memory instead of touching disk.
#[derive(Default)]
pub struct CollectingWriter {
    pub written: Mutex<Option<Report>>,
}

impl ReportWriter for CollectingWriter {
    fn write(&self, report: &Report, _destination: &Path) -> Result<(), DomainError> {
        *self.written.lock().unwrap() = Some(report.clone());
        Ok(())
    }
}

pub fn quote(price: f64, sector: &str) -> MarketQuote {
    MarketQuote {
        name: Some("fixture".into()),
        price: Some(price),
        sector: Some(sector.to_string()),
        industry: None,
        market_cap: None,
        pe_ratio: None,
    }
}
