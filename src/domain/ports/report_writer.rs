use crate::domain::entities::report::Report;
use crate::domain::error::DomainError;
use std::path::Path;

/// Serializes the finished report to a file. The only port whose failure is
/// fatal to a run: an analysis that cannot be written has no value.
pub trait ReportWriter: Send + Sync {
    fn write(&self, report: &Report, destination: &Path) -> Result<(), DomainError>;
}
