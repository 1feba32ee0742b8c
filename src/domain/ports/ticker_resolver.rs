use crate::domain::values::company::CompanyName;
use crate::domain::values::resolution::Resolution;
use async_trait::async_trait;

/// Name→ticker search. Infallible at the signature level: every failure mode
/// is a [`Resolution`] variant, and nothing here may abort the run.
#[async_trait]
pub trait TickerResolver: Send + Sync {
    /// Resolver name for diagnostics.
    fn name(&self) -> &str;

    async fn resolve(&self, company: &CompanyName) -> Resolution;
}
