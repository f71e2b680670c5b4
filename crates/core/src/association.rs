//! Association reconciliation for many-to-many references.
//!
//! Callers hand in the ids a client asked to associate with an entity. Only
//! the ids that resolve to an existing row survive; unknown ids are dropped
//! without an error and are never created as stubs.

use std::collections::HashSet;
use std::future::Future;

use crate::types::DbId;

/// Resolve `ids` through `lookup`, keeping the rows that exist.
///
/// Results keep the order of first appearance in `ids`. Repeated ids are
/// looked up once. A lookup error aborts reconciliation and is returned as-is.
pub async fn retain_existing<T, E, F, Fut>(ids: &[DbId], mut lookup: F) -> Result<Vec<T>, E>
where
    F: FnMut(DbId) -> Fut,
    Fut: Future<Output = Result<Option<T>, E>>,
{
    let mut seen = HashSet::with_capacity(ids.len());
    let mut found = Vec::with_capacity(ids.len());

    for &id in ids {
        if !seen.insert(id) {
            continue;
        }
        if let Some(item) = lookup(id).await? {
            found.push(item);
        }
    }

    Ok(found)
}
