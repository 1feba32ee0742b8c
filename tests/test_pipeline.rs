//! End-to-end pipeline runs against scripted ports.

mod common;

use common::{
    quote, BrokenSource, CollectingWriter, ScriptedMarket, ScriptedQuote, ScriptedResolver,
    StaticSource,
};
use employerscreen::domain::entities::snapshot::SnapshotStatus;
use employerscreen::domain::ports::employer_source::EmployerSource;
use employerscreen::domain::values::resolution::Resolution;
use employerscreen::domain::values::ticker::TickerSymbol;
use employerscreen::{EmployerScreen, ScreenConfig};
use std::sync::Arc;

fn config() -> ScreenConfig {
    ScreenConfig {
        output: std::env::temp_dir().join("employerscreen-pipeline-test.xlsx"),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_end_to_end_scenario() {
    let source_a: Arc<dyn EmployerSource> =
        Arc::new(StaticSource::new("Forbes Employers", &["Acme Inc."]));
    let source_b: Arc<dyn EmployerSource> = Arc::new(StaticSource::new(
        "GPTW Employers",
        &["Acme Inc.", "Globex"],
    ));
    let resolver = Arc::new(ScriptedResolver::resolving(&[("Acme Inc.", "ACME")]));
    let market = Arc::new(ScriptedMarket::new(vec![(
        "ACME",
        ScriptedQuote::Data(quote(100.0, "Tech")),
    )]));
    let writer = Arc::new(CollectingWriter::default());

    let screen = EmployerScreen::with_ports(
        config(),
        source_a,
        source_b,
        resolver.clone(),
        market.clone(),
        writer.clone(),
    );
    let summary = screen.run().await.unwrap();

    assert_eq!(summary.source_a_rows, 1);
    assert_eq!(summary.source_b_rows, 2);
    assert_eq!(summary.common_rows, 1);

    let report = writer.written.lock().unwrap().clone().unwrap();

    let acme = &report.source_a.rows[0];
    assert_eq!(acme.ticker.as_ref().map(|t| t.as_str()), Some("ACME"));
    assert_eq!(acme.price, Some(100.0));
    assert_eq!(acme.sector.as_deref(), Some("Tech"));
    assert_eq!(acme.status, SnapshotStatus::Ok);

    let globex = &report.source_b.rows[1];
    assert_eq!(globex.company.as_str(), "Globex");
    assert_eq!(globex.status, SnapshotStatus::NoTicker);
    assert!(globex.ticker.is_none());
    assert!(globex.price.is_none());
    assert!(globex.sector.is_none());

    assert_eq!(report.common.len(), 1);
    assert_eq!(
        report.common.rows[0].ticker.as_ref().map(|t| t.as_str()),
        Some("ACME")
    );
}

#[tokio::test]
async fn test_shared_companies_are_looked_up_once() {
    let source_a: Arc<dyn EmployerSource> =
        Arc::new(StaticSource::new("Forbes Employers", &["Acme Inc."]));
    let source_b: Arc<dyn EmployerSource> = Arc::new(StaticSource::new(
        "GPTW Employers",
        &["Acme Inc.", "Globex"],
    ));
    let resolver = Arc::new(ScriptedResolver::resolving(&[("Acme Inc.", "ACME")]));
    let market = Arc::new(ScriptedMarket::new(vec![(
        "ACME",
        ScriptedQuote::Data(quote(100.0, "Tech")),
    )]));
    let writer = Arc::new(CollectingWriter::default());

    let screen = EmployerScreen::with_ports(
        config(),
        source_a,
        source_b,
        resolver.clone(),
        market.clone(),
        writer,
    );
    screen.run().await.unwrap();

    // two distinct names resolved, each exactly once
    assert_eq!(
        *resolver.calls.lock().unwrap(),
        vec!["Acme Inc.".to_string(), "Globex".to_string()]
    );
    // the unresolved name never reaches the market provider
    assert_eq!(*market.calls.lock().unwrap(), vec!["ACME".to_string()]);
}

#[tokio::test]
async fn test_lookup_failures_do_not_abort_the_run() {
    let source_a: Arc<dyn EmployerSource> = Arc::new(StaticSource::new(
        "Forbes Employers",
        &["Acme Inc.", "Hooli", "Initech"],
    ));
    let source_b: Arc<dyn EmployerSource> =
        Arc::new(StaticSource::new("GPTW Employers", &["Initech"]));
    // Acme resolves but its market fetch keeps failing; Hooli's resolution
    // itself exhausts retries; Initech resolves with no upstream data.
    let resolver = Arc::new(ScriptedResolver::new(&[
        ("Acme Inc.", Resolution::Resolved(TickerSymbol::new("ACME"))),
        ("Hooli", Resolution::Failed("gave up after 3 attempts".into())),
        ("Initech", Resolution::Resolved(TickerSymbol::new("INTC"))),
    ]));
    let market = Arc::new(ScriptedMarket::new(vec![
        ("ACME", ScriptedQuote::Fail),
        ("INTC", ScriptedQuote::NoData),
    ]));
    let writer = Arc::new(CollectingWriter::default());

    let screen = EmployerScreen::with_ports(
        config(),
        source_a,
        source_b,
        resolver,
        market,
        writer.clone(),
    );
    let summary = screen.run().await.unwrap();
    assert_eq!(summary.source_a_rows, 3);

    let report = writer.written.lock().unwrap().clone().unwrap();
    let statuses: Vec<SnapshotStatus> =
        report.source_a.rows.iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        vec![
            SnapshotStatus::FetchFailed,
            SnapshotStatus::NoTicker,
            SnapshotStatus::NoData,
        ]
    );
    // failed rows carry no data fields
    assert!(report.source_a.rows[0].price.is_none());
    assert_eq!(report.common.len(), 1);
}

#[tokio::test]
async fn test_broken_source_yields_empty_sheet() {
    let source_a: Arc<dyn EmployerSource> = Arc::new(BrokenSource::new("Forbes Employers"));
    let source_b: Arc<dyn EmployerSource> =
        Arc::new(StaticSource::new("GPTW Employers", &["Globex"]));
    let resolver = Arc::new(ScriptedResolver::new(&[]));
    let market = Arc::new(ScriptedMarket::new(vec![]));
    let writer = Arc::new(CollectingWriter::default());

    let screen = EmployerScreen::with_ports(
        config(),
        source_a,
        source_b,
        resolver,
        market,
        writer.clone(),
    );
    let summary = screen.run().await.unwrap();

    assert_eq!(summary.source_a_rows, 0);
    assert_eq!(summary.source_b_rows, 1);
    assert_eq!(summary.common_rows, 0);

    let report = writer.written.lock().unwrap().clone().unwrap();
    assert!(report.source_a.is_empty());
    assert_eq!(report.source_b.rows[0].status, SnapshotStatus::NoTicker);
}
