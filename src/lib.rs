pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::collect::CollectUseCase;
use crate::application::run::{RunSummary, RunUseCase};
use crate::domain::error::DomainError;
use crate::domain::ports::employer_source::EmployerSource;
use crate::domain::ports::market_data::MarketDataProvider;
use crate::domain::ports::report_writer::ReportWriter;
use crate::domain::ports::ticker_resolver::TickerResolver;
use crate::infrastructure::excel::XlsxReportWriter;
use crate::infrastructure::http::identity::{ClientIdentity, RotatingIdentity};
use crate::infrastructure::http::pacing::{Sleeper, Throttle, TokioSleeper};
use crate::infrastructure::http::retry::RetryPolicy;
use crate::infrastructure::http::PacedClient;
use crate::infrastructure::sources::forbes::ForbesSource;
use crate::infrastructure::sources::great_place::GreatPlaceSource;
use crate::infrastructure::yahoo::search::YahooSearch;
use crate::infrastructure::yahoo::summary::YahooQuoteSummary;
use std::path::PathBuf;
use std::sync::Arc;

/// Run configuration: output destination plus the pacing knobs.
#[derive(Debug, Clone)]
pub struct ScreenConfig {
    pub output: PathBuf,
    pub max_retries: u32,
    pub backoff_min_ms: u64,
    pub backoff_max_ms: u64,
    pub pause_min_ms: u64,
    pub pause_max_ms: u64,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("employer_stocks.xlsx"),
            max_retries: 3,
            backoff_min_ms: 3000,
            backoff_max_ms: 8000,
            pause_min_ms: 3000,
            pause_max_ms: 8000,
        }
    }
}

impl ScreenConfig {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.max_retries == 0 {
            return Err(DomainError::Config("max_retries must be at least 1".into()));
        }
        if self.backoff_min_ms > self.backoff_max_ms {
            return Err(DomainError::Config(
                "backoff_min_ms must not exceed backoff_max_ms".into(),
            ));
        }
        if self.pause_min_ms > self.pause_max_ms {
            return Err(DomainError::Config(
                "pause_min_ms must not exceed pause_max_ms".into(),
            ));
        }
        Ok(())
    }
}

/// Facade wiring the production adapters into the pipeline. Tests swap any
/// port via [`EmployerScreen::with_ports`].
pub struct EmployerScreen {
    run_uc: RunUseCase,
}

impl EmployerScreen {
    pub fn new(config: ScreenConfig) -> Result<Self, DomainError> {
        config.validate()?;

        let sleeper: Arc<dyn Sleeper> = Arc::new(TokioSleeper);
        let identity: Arc<dyn ClientIdentity> = Arc::new(RotatingIdentity::default());
        let throttle = Throttle::new(config.pause_min_ms, config.pause_max_ms, sleeper.clone());
        let retry = RetryPolicy::new(
            config.max_retries,
            config.backoff_min_ms,
            config.backoff_max_ms,
            sleeper,
        );
        let client = Arc::new(PacedClient::new(identity, throttle, retry)?);

        let source_a: Arc<dyn EmployerSource> = Arc::new(ForbesSource::new(client.clone()));
        let source_b: Arc<dyn EmployerSource> = Arc::new(GreatPlaceSource::new(client.clone()));
        let resolver: Arc<dyn TickerResolver> = Arc::new(YahooSearch::new(client.clone()));
        let market: Arc<dyn MarketDataProvider> = Arc::new(YahooQuoteSummary::new(client));
        let writer: Arc<dyn ReportWriter> = Arc::new(XlsxReportWriter::new());

        Ok(Self::with_ports(
            config, source_a, source_b, resolver, market, writer,
        ))
    }

    pub fn with_ports(
        config: ScreenConfig,
        source_a: Arc<dyn EmployerSource>,
        source_b: Arc<dyn EmployerSource>,
        resolver: Arc<dyn TickerResolver>,
        market: Arc<dyn MarketDataProvider>,
        writer: Arc<dyn ReportWriter>,
    ) -> Self {
        let collect = CollectUseCase::new(source_a, source_b, resolver, market);
        Self {
            run_uc: RunUseCase::new(collect, writer, config.output),
        }
    }

    /// Run the whole pipeline and return the summary. Only an unwritable
    /// destination makes this fail.
    pub async fn run(&self) -> Result<RunSummary, DomainError> {
        self.run_uc.execute().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ScreenConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_bounds_are_rejected() {
        let config = ScreenConfig {
            backoff_min_ms: 9000,
            backoff_max_ms: 100,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DomainError::Config(_))
        ));

        let config = ScreenConfig {
            pause_min_ms: 9000,
            pause_max_ms: 100,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_retries_rejected() {
        let config = ScreenConfig {
            max_retries: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
