use crate::domain::error::DomainError;
use crate::domain::values::company::CompanyName;
use async_trait::async_trait;

/// A "best employer" list that yields company names in ranking order.
/// Implementations fetch and parse one fixed page layout.
#[async_trait]
pub trait EmployerSource: Send + Sync {
    /// Display name of this list, also used as the workbook sheet name.
    fn name(&self) -> &str;

    /// Fetch the list and return the company names in page order.
    async fn fetch_companies(&self) -> Result<Vec<CompanyName>, DomainError>;
}
