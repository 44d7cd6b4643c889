use crate::domain::{
    entities::{FilterCheckbox, FilterGroup, FilterState, QueryParameters},
    repositories::Navigator,
    services::FilterSync,
};
use anyhow::{Context, Result};
use std::sync::Arc;

#[derive(Default)]
pub struct InitializeFilters;

impl InitializeFilters {
    pub fn new() -> Self {
        Self
    }

    /// `None` when there are no checkboxes to sync.
    pub fn execute(&self, query: &str, checkboxes: &[FilterCheckbox]) -> Option<Vec<bool>> {
        if checkboxes.is_empty() {
            return None;
        }

        let params = QueryParameters::parse(query);
        let mut restored = checkboxes.to_vec();
        FilterSync::initialize(&params, &mut restored);

        let state = FilterState::from_checkboxes(&restored);
        if state.has_selection() {
            for group in FilterGroup::ALL {
                tracing::debug!("Restored {}: {:?}", group, state.values(group));
            }
        } else {
            tracing::debug!("No filters selected in query");
        }

        Some(restored.into_iter().map(|cb| cb.checked).collect())
    }
}

#[derive(Default)]
pub struct RebuildFilterQuery;

impl RebuildFilterQuery {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, query: &str, checkboxes: &[FilterCheckbox]) -> Option<String> {
        if checkboxes.is_empty() {
            return None;
        }

        let params = QueryParameters::parse(query);
        let rebuilt = FilterSync::rebuild_query(&params, checkboxes).to_query_string();
        tracing::debug!("Rebuilt filter query: {:?} -> {:?}", query, rebuilt);
        Some(rebuilt)
    }
}

pub struct NavigateTo {
    navigator: Arc<dyn Navigator>,
}

impl NavigateTo {
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self { navigator }
    }

    pub fn execute(&self, query: &str) -> Result<()> {
        tracing::info!("Navigating to ?{}", query);
        self.navigator
            .navigate(query)
            .context("Failed to navigate to filtered page")
    }
}
