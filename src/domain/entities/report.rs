use crate::domain::entities::source_set::SourceResultSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The finished analysis: both source lists plus their intersection, ready
/// for the report writer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub source_a: SourceResultSet,
    pub source_b: SourceResultSet,
    pub common: SourceResultSet,
    pub generated_at: DateTime<Utc>,
}

impl Report {
    pub fn new(
        source_a: SourceResultSet,
        source_b: SourceResultSet,
        common: SourceResultSet,
    ) -> Self {
        Self {
            source_a,
            source_b,
            common,
            generated_at: Utc::now(),
        }
    }

    pub fn sheets(&self) -> [&SourceResultSet; 3] {
        [&self.source_a, &self.source_b, &self.common]
    }
}
