use super::{dedup_preserving_order, EXPECTED_LIST_LEN};
use crate::domain::error::DomainError;
use crate::domain::ports::employer_source::EmployerSource;
use crate::domain::values::company::CompanyName;
use crate::infrastructure::http::PacedClient;
use async_trait::async_trait;
use scraper::{Html, Selector};
use std::sync::Arc;

const FORBES_URL: &str =
    "https://www.forbes.com/sites/rachelpeachman/2025/03/19/the-top-100-americas-best-large-employers-of--2025/";

/// Company names live in `<strong data-ga-track=…>` elements, interleaved
/// with bylines, ranks and promo copy that the filters below drop.
const COMPANY_SELECTOR: &str = "strong[data-ga-track]";

const EXCLUDE_KEYWORDS: &[&str] = &[
    "contributor",
    "editor",
    "subscribe",
    "photo",
    "watch",
    "video",
    "2025",
];

/// Forbes "America's Best Large Employers" article page.
pub struct ForbesSource {
    client: Arc<PacedClient>,
}

impl ForbesSource {
    pub fn new(client: Arc<PacedClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EmployerSource for ForbesSource {
    fn name(&self) -> &str {
        "Forbes Employers"
    }

    async fn fetch_companies(&self) -> Result<Vec<CompanyName>, DomainError> {
        let html = self
            .client
            .get_text(FORBES_URL)
            .await
            .map_err(|e| DomainError::Source(format!("Forbes list: {e}")))?;

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

/// Extract, filter, dedup and re-merge the company names from the article
/// markup. Pure, so the selection rules are testable on static fixtures.
pub fn parse_companies(html: &str) -> Result<Vec<CompanyName>, DomainError> {
    let selector = Selector::parse(COMPANY_SELECTOR)
        .map_err(|e| DomainError::Source(format!("bad selector: {e}")))?;
    let document = Html::parse_document(html);

    let raw: Vec<String> = document
        .select(&selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|name| !is_noise(name))
        .collect();

    let merged = merge_apostrophe_fragments(dedup_preserving_order(raw));

    Ok(merged
        .into_iter()
        .take(EXPECTED_LIST_LEN)
        .map(CompanyName::new)
        .collect())
}

/// Entries that are page furniture rather than company names.
fn is_noise(name: &str) -> bool {
    if name.is_empty() || name.chars().count() >= 60 {
        return true;
    }
    let lower = name.to_lowercase();
    if EXCLUDE_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return true;
    }
    if lower.starts_with("by ") {
        return true;
    }
    // rank numbers, possibly with one decimal point
    let digits = name.replacen('.', "", 1);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// The article markup splits possessive names across two elements
/// ("McDonald" followed by a bare "’s"); stitch them back together.
fn merge_apostrophe_fragments(names: Vec<String>) -> Vec<String> {
    let mut merged = Vec::with_capacity(names.len());
    let mut skip_next = false;

    for i in 0..names.len() {
        if skip_next {
            skip_next = false;
            continue;
        }
        let current = &names[i];
        let next_is_fragment = names
            .get(i + 1)
            .map(|next| matches!(next.to_lowercase().as_str(), "s" | "'s" | "’s"))
            .unwrap_or(false);

        if next_is_fragment {
            merged.push(format!("{current}'s"));
            skip_next = true;
        } else {
            merged.push(current.clone());
        }
    }
    merged
}
