//! Search and category filtering of catalog entries.

use super::AgentRecord;
use serde::{Deserialize, Serialize};

/// Current search text and category selection.
///
/// An empty field means "no constraint" for that criterion, so the default
/// state matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    search_term: String,
    selected_category: String,
}

impl FilterState {
    /// Creates a filter state with both criteria set.
    #[must_use]
    pub fn new(search_term: impl Into<String>, selected_category: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            selected_category: selected_category.into(),
        }
    }

    /// Returns the search text.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Returns the selected category, empty for all categories.
    #[must_use]
    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    /// Replaces the search text.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Replaces the selected category.
    pub fn select_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
    }

    /// Resets both criteria.
    pub fn clear(&mut self) {
        self.search_term.clear();
        self.selected_category.clear();
    }

    /// Returns whether either criterion constrains the result.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty() || !self.selected_category.is_empty()
    }

    /// Returns whether `record` satisfies both criteria.
    #[must_use]
    pub fn matches(&self, record: &AgentRecord) -> bool {
        let needle = self.search_term.to_lowercase();
        matches_search(record, &needle) && matches_category(record, &self.selected_category)
    }

    /// Applies this state to `records`. See [`filter_agents`].
    #[must_use]
    pub fn apply<'a, I>(&self, records: I) -> Vec<&'a AgentRecord>
    where
        I: IntoIterator<Item = &'a AgentRecord>,
    {
        filter_agents(records, &self.search_term, &self.selected_category)
    }
}

/// Returns the records matching both the search text and the category.
///
/// The search is a case-insensitive substring match against the name,
/// description, id and every tag; an empty term matches everything. The
/// category must appear verbatim in the record's categories; an empty
/// category matches everything. Input order is preserved.
#[must_use]
pub fn filter_agents<'a, I>(
    records: I,
    search_term: &str,
    selected_category: &str,
) -> Vec<&'a AgentRecord>
where
    I: IntoIterator<Item = &'a AgentRecord>,
{
    let needle = search_term.to_lowercase();
    records
        .into_iter()
        .filter(|record| {
            matches_search(record, &needle) && matches_category(record, selected_category)
        })
        .collect()
}

/// Returns the positions within `records` of the entries matching `state`.
pub(crate) fn matching_positions(records: &[AgentRecord], state: &FilterState) -> Vec<usize> {
    let needle = state.search_term.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            matches_search(record, &needle) && matches_category(record, &state.selected_category)
        })
        .map(|(position, _)| position)
        .collect()
}

/// `needle` must already be lower-cased.
fn matches_search(record: &AgentRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let contains = |haystack: &str| haystack.to_lowercase().contains(needle);
    contains(record.name())
        || contains(record.description())
        || contains(record.id().as_str())
        || record.tags().iter().any(|tag| contains(tag.as_str()))
}

fn matches_category(record: &AgentRecord, selected_category: &str) -> bool {
    selected_category.is_empty() || record.has_category(selected_category)
}
