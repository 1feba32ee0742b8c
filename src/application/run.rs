use crate::application::aggregate::aggregate;
use crate::application::collect::CollectUseCase;
use crate::domain::entities::report::Report;
use crate::domain::error::DomainError;
use crate::domain::ports::report_writer::ReportWriter;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// The whole pipeline: collect → aggregate → write. The write is the only
/// step allowed to fail the run.
pub struct RunUseCase {
    collect: CollectUseCase,
    writer: Arc<dyn ReportWriter>,
    output: PathBuf,
}

/// Printed as JSON at the end of a successful run.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub source_a: String,
    pub source_a_rows: usize,
    pub source_b: String,
    pub source_b_rows: usize,
    pub common_rows: usize,
    pub output: String,
    pub generated_at: DateTime<Utc>,
}

impl RunUseCase {
    pub fn new(collect: CollectUseCase, writer: Arc<dyn ReportWriter>, output: PathBuf) -> Self {
        Self {
            collect,
            writer,
            output,
        }
    }

    pub async fn execute(&self) -> Result<RunSummary, DomainError> {
        let (set_a, set_b) = self.collect.execute().await;
        let (set_a, set_b, common) = aggregate(set_a, set_b);
        let report = Report::new(set_a, set_b, common);

        self.writer.write(&report, &self.output)?;

        Ok(RunSummary {
            source_a: report.source_a.source_name.clone(),
            source_a_rows: report.source_a.len(),
            source_b: report.source_b.source_name.clone(),
            source_b_rows: report.source_b.len(),
            common_rows: report.common.len(),
            output: self.output.display().to_string(),
            generated_at: report.generated_at,
        })
    }
}
