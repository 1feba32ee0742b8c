pub mod forbes;
pub mod great_place;

/// Both lists advertise a top-100; fewer extracted entries usually means the
/// page structure changed.
pub(crate) const EXPECTED_LIST_LEN: usize = 100;

/// First occurrence wins, page order kept.
pub(crate) fn dedup_preserving_order(names: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
