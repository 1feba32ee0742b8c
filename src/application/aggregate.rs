use crate::domain::entities::snapshot::StockSnapshot;
use crate::domain::entities::source_set::SourceResultSet;
use crate::domain::values::identity_key::IdentityKey;
use std::collections::{HashMap, HashSet};

pub const COMMON_SHEET: &str = "Common Employers";

/// Join the two source sets: dedup each by identity key, then intersect.
///
/// The common set follows setA's order of first appearance. When both sides
/// carry the same company, the row with the more complete snapshot wins;
/// on a tie setA's row is kept. Pure and deterministic: aggregating the
/// same inputs twice yields identical output.
pub fn aggregate(
    set_a: SourceResultSet,
    set_b: SourceResultSet,
) -> (SourceResultSet, SourceResultSet, SourceResultSet) {
    let set_a = dedup_by_identity(set_a);
    let set_b = dedup_by_identity(set_b);

    let b_by_key: HashMap<IdentityKey, &StockSnapshot> = set_b
        .rows
        .iter()
        .map(|row| (row.identity_key(), row))
        .collect();

    let common_rows: Vec<StockSnapshot> = set_a
        .rows
        .iter()
        .filter_map(|a_row| {
            b_by_key
                .get(&a_row.identity_key())
                .copied()
                .map(|b_row| prefer_complete(a_row, b_row).clone())
        })
        .collect();

    let common = SourceResultSet::new(COMMON_SHEET, common_rows);
    (set_a, set_b, common)
}

/// First occurrence per identity key wins, input order kept.
fn dedup_by_identity(set: SourceResultSet) -> SourceResultSet {
    let mut seen = HashSet::new();
    let rows = set
        .rows
        .into_iter()
        .filter(|row| seen.insert(row.identity_key()))
        .collect();
    SourceResultSet::new(set.source_name, rows)
}

fn prefer_complete<'a>(a: &'a StockSnapshot, b: &'a StockSnapshot) -> &'a StockSnapshot {
    if b.status.completeness() > a.status.completeness() {
        b
    } else {
        a
    }
}
