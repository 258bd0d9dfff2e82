//! Category extraction across catalog entries.

use super::AgentRecord;
use std::collections::BTreeSet;

/// Collects the distinct categories used by `records`.
///
/// The result is sorted in ascending code-point order and contains each
/// category once. Records without categories contribute nothing, so an
/// empty input yields an empty list.
#[must_use]
pub fn extract_categories<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a AgentRecord>,
{
    let distinct: BTreeSet<&'a str> = records
        .into_iter()
        .flat_map(|record| record.categories().iter().map(String::as_str))
        .collect();
    distinct.into_iter().map(str::to_owned).collect()
}
