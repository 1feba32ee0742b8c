use super::EXPECTED_LIST_LEN;
use crate::domain::error::DomainError;
use crate::domain::ports::employer_source::EmployerSource;
use crate::domain::values::company::CompanyName;
use crate::infrastructure::http::PacedClient;
use async_trait::async_trait;
use scraper::{Html, Selector};
use std::sync::Arc;

const GPTW_URL: &str = "https://www.greatplacetowork.com/best-workplaces/100-best/2025";

/// Company names are the text of `<a class="link h5">` cards.
const COMPANY_SELECTOR: &str = "a.link.h5";

/// Great Place To Work "100 Best Companies to Work For" list page.
pub struct GreatPlaceSource {
    client: Arc<PacedClient>,
}

impl GreatPlaceSource {
    pub fn new(client: Arc<PacedClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EmployerSource for GreatPlaceSource {
    fn name(&self) -> &str {
        "GPTW Employers"
    }

    async fn fetch_companies(&self) -> Result<Vec<CompanyName>, DomainError> {
        let html = self
            .client
            .get_text(GPTW_URL)
            .await
            .map_err(|e| DomainError::Source(format!("Great Place To Work list: {e}")))?;

        let companies = parse_companies(&html)?;
        if companies.len() < EXPECTED_LIST_LEN {
            eprintln!(
                "Warning: only {} companies extracted from {} (expected {EXPECTED_LIST_LEN}); the page structure may have changed",
                companies.len(),
                self.name()
            );
        }
        Ok(companies)
    }
}

pub fn parse_companies(html: &str) -> Result<Vec<CompanyName>, DomainError> {
    let selector = Selector::parse(COMPANY_SELECTOR)
        .map_err(|e| DomainError::Source(format!("bad selector: {e}")))?;
    let document = Html::parse_document(html);

    Ok(document
        .select(&selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|name| !name.is_empty() && name.chars().count() < 100)
        .map(CompanyName::new)
        .collect())
}
