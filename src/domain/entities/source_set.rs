use crate::domain::entities::snapshot::StockSnapshot;
use serde::{Deserialize, Serialize};

/// Ordered snapshots for one source list. Built once by the collection use
/// case, then only filtered/joined, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceResultSet {
    /// Display name of the originating list, also used as the sheet name.
    pub source_name: String,
    pub rows: Vec<StockSnapshot>,
}

impl SourceResultSet {
    pub fn new(source_name: impl Into<String>, rows: Vec<StockSnapshot>) -> Self {
        Self {
            source_name: source_name.into(),
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
