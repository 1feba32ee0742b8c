use crate::domain::entities::snapshot::StockSnapshot;
use crate::domain::entities::source_set::SourceResultSet;
use crate::domain::ports::employer_source::EmployerSource;
use crate::domain::ports::market_data::MarketDataProvider;
use crate::domain::ports::ticker_resolver::TickerResolver;
use crate::domain::values::company::CompanyName;
use crate::domain::values::resolution::Resolution;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Collects both employer lists and looks up one snapshot per distinct
/// company name, strictly sequentially; the pacing policy depends on
/// requests being spaced out, so nothing here fans out.
///
/// A company on both lists is looked up once and its snapshot shared.
/// Nothing in this stage is fatal: a source that cannot be fetched becomes
/// an empty list, a name that cannot be resolved becomes a NO_TICKER row,
/// and a fetch that keeps failing becomes a FETCH_FAILED row.
pub struct CollectUseCase {
    source_a: Arc<dyn EmployerSource>,
    source_b: Arc<dyn EmployerSource>,
    resolver: Arc<dyn TickerResolver>,
    market: Arc<dyn MarketDataProvider>,
}

impl CollectUseCase {
    pub fn new(
        source_a: Arc<dyn EmployerSource>,
        source_b: Arc<dyn EmployerSource>,
        resolver: Arc<dyn TickerResolver>,
        market: Arc<dyn MarketDataProvider>,
    ) -> Self {
        Self {
            source_a,
            source_b,
            resolver,
            market,
        }
    }

    pub async fn execute(&self) -> (SourceResultSet, SourceResultSet) {
        let names_a = self.fetch_list(self.source_a.as_ref()).await;
        let names_b = self.fetch_list(self.source_b.as_ref()).await;

        let union = union_of(&names_a, &names_b);
        let pb = progress_bar(union.len() as u64);

        let mut snapshots: HashMap<String, StockSnapshot> = HashMap::new();
        for company in union {
            pb.set_message(company.as_str().to_string());
            let snapshot = self.process_one(&company).await;
            snapshots.insert(company.as_str().to_string(), snapshot);
            pb.inc(1);
        }
        pb.finish_with_message("done");

        (
            assemble(self.source_a.name(), &names_a, &snapshots),
            assemble(self.source_b.name(), &names_b, &snapshots),
        )
    }

    async fn fetch_list(&self, source: &dyn EmployerSource) -> Vec<CompanyName> {
        match source.fetch_companies().await {
            Ok(names) => names,
            Err(e) => {
                eprintln!(
                    "Warning: failed to fetch {}: {e}; continuing with an empty list",
                    source.name()
                );
                Vec::new()
            }
        }
    }

    /// Resolve one name and, only if a ticker came back, fetch its data.
    async fn process_one(&self, company: &CompanyName) -> StockSnapshot {
        match self.resolver.resolve(company).await {
            Resolution::Resolved(ticker) => match self.market.quote(&ticker).await {
                Ok(Some(quote)) => StockSnapshot::resolved(company.clone(), ticker, quote),
                Ok(None) => StockSnapshot::no_data(company.clone(), ticker),
                Err(e) => {
                    eprintln!("Warning: market data for {company} ({ticker}) failed: {e}");
                    StockSnapshot::fetch_failed(company.clone(), ticker)
                }
            },
            Resolution::Unresolved => StockSnapshot::no_ticker(company.clone()),
            Resolution::Failed(reason) => {
                eprintln!("Warning: ticker lookup for {company} failed: {reason}");
                StockSnapshot::no_ticker(company.clone())
            }
        }
    }
}

/// Distinct names across both lists, ordered by first appearance (list A
/// first, then list B's additions).
fn union_of(names_a: &[CompanyName], names_b: &[CompanyName]) -> Vec<CompanyName> {
    let mut seen = HashSet::new();
    names_a
        .iter()
        .chain(names_b.iter())
        .filter(|name| seen.insert(name.as_str().to_string()))
        .cloned()
        .collect()
}

/// Rebuild one source's result set from the shared snapshots, keeping the
/// source's own order and dropping repeats.
fn assemble(
    source_name: &str,
    names: &[CompanyName],
    snapshots: &HashMap<String, StockSnapshot>,
) -> SourceResultSet {
    let mut seen = HashSet::new();
    let rows = names
        .iter()
        .filter(|name| seen.insert(name.as_str().to_string()))
        .filter_map(|name| snapshots.get(name.as_str()).cloned())
        .collect();
    SourceResultSet::new(source_name, rows)
}

fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:50}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#|-"),
    );
    pb
}
