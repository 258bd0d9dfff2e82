//! Presentation-facing view over the agent catalog.
//!
//! [`CatalogView`] owns the filter state driven by user input and answers
//! the questions a catalog page asks on every render: which agents are
//! visible, which categories can be selected, and how to summarise the
//! result.

use crate::catalog::domain::{
    AgentRecord, AgentStore, FilterState, format_label, matching_positions,
};
use serde::Serialize;

/// Label of the selector entry that clears the category criterion.
pub const ALL_CATEGORIES_LABEL: &str = "All Categories";

/// One entry of the category selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOption {
    value: String,
    label: String,
    selected: bool,
}

impl CategoryOption {
    /// Returns the raw category passed back on selection, empty for all.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns whether this option is the current selection.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }
}

/// Serializable state of the catalog page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot<'a> {
    /// Current filter criteria.
    pub filters: FilterState,
    /// Whether any criterion is set.
    pub has_active_filters: bool,
    /// Result count summary, e.g. `"2 agents found"`.
    pub summary: String,
    /// Category selector entries.
    pub categories: Vec<CategoryOption>,
    /// Visible agents in catalog order.
    pub agents: Vec<&'a AgentRecord>,
}

#[derive(Debug)]
struct CachedResult {
    store: AgentStore,
    filters: FilterState,
    positions: Vec<usize>,
}

/// Filter state plus the catalog it applies to.
///
/// The visible set is recomputed only when the store or one of the two
/// criteria changes.
#[derive(Debug)]
pub struct CatalogView {
    store: AgentStore,
    filters: FilterState,
    cached: Option<CachedResult>,
}

impl CatalogView {
    /// Creates a view over `store` with no active filters.
    #[must_use]
    pub fn new(store: AgentStore) -> Self {
        Self {
            store,
            filters: FilterState::default(),
            cached: None,
        }
    }

    /// Returns the catalog this view presents.
    #[must_use]
    pub const fn store(&self) -> &AgentStore {
        &self.store
    }

    /// Swaps in a different catalog, keeping the filter criteria.
    pub fn replace_store(&mut self, store: AgentStore) {
        self.store = store;
    }

    /// Returns the current criteria.
    #[must_use]
    pub const fn filter_state(&self) -> &FilterState {
        &self.filters
    }

    /// Updates the search text.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filters.set_search_term(term);
    }

    /// Updates the selected category; empty selects all categories.
    pub fn select_category(&mut self, category: impl Into<String>) {
        self.filters.select_category(category);
    }

    /// Resets both criteria.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    /// Returns whether any criterion is set.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        self.filters.is_active()
    }

    /// Returns the agents matching the current criteria in catalog order.
    pub fn visible_agents(&mut self) -> Vec<&AgentRecord> {
        self.refresh();
        let records = self.store.records();
        self.cached
            .as_ref()
            .map(|cached| {
                cached
                    .positions
                    .iter()
                    .filter_map(|&position| records.get(position))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns the number of agents matching the current criteria.
    pub fn visible_count(&mut self) -> usize {
        self.refresh();
        self.cached
            .as_ref()
            .map_or(0, |cached| cached.positions.len())
    }

    /// Returns the selector entries: "All Categories" first, then every
    /// category in the catalog with its display label.
    #[must_use]
    pub fn category_options(&self) -> Vec<CategoryOption> {
        let selected = self.filters.selected_category();
        let all = CategoryOption {
            value: String::new(),
            label: ALL_CATEGORIES_LABEL.to_owned(),
            selected: selected.is_empty(),
        };
        std::iter::once(all)
            .chain(self.store.categories().iter().map(|category| CategoryOption {
                value: category.clone(),
                label: format_label(category),
                selected: category == selected,
            }))
            .collect()
    }

    /// Returns the text shown on the collapsed category selector.
    ///
    /// This is the raw selected category, not its formatted label.
    #[must_use]
    pub fn selected_category_label(&self) -> &str {
        match self.filters.selected_category() {
            "" => ALL_CATEGORIES_LABEL,
            category => category,
        }
    }

    /// Returns the result count summary, e.g. `"1 agent found"`.
    pub fn result_summary(&mut self) -> String {
        match self.visible_count() {
            1 => "1 agent found".to_owned(),
            count => format!("{count} agents found"),
        }
    }

    /// Captures the page state for the presentation layer.
    pub fn snapshot(&mut self) -> CatalogSnapshot<'_> {
        let summary = self.result_summary();
        let categories = self.category_options();
        let filters = self.filters.clone();
        let has_active_filters = self.has_active_filters();
        CatalogSnapshot {
            filters,
            has_active_filters,
            summary,
            categories,
            agents: self.visible_agents(),
        }
    }

    /// Renders [`CatalogView::snapshot`] as JSON.
    ///
    /// # Errors
    ///
    /// Returns the serialization error, which only occurs if a record
    /// cannot be represented as JSON.
    pub fn snapshot_json(&mut self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.snapshot())
    }

    fn refresh(&mut self) {
        let fresh = self.cached.as_ref().is_some_and(|cached| {
            cached.store.same_store(&self.store) && cached.filters == self.filters
        });
        if fresh {
            return;
        }
        tracing::trace!(
            search_term = self.filters.search_term(),
            category = self.filters.selected_category(),
            "recomputing visible agents"
        );
        self.cached = Some(CachedResult {
            store: self.store.clone(),
            filters: self.filters.clone(),
            positions: matching_positions(self.store.records(), &self.filters),
        });
    }
}
