//! Keeps sidebar checkboxes and the page query string consistent.
//!
//! On load every checkbox is checked iff its value appears in the
//! comma-separated parameter named after its group. On change the query is
//! rebuilt from the checked boxes: unrecognized keys are copied forward
//! untouched, recognized groups are written in `cuisine`, `diet`, `time`
//! order and a group with nothing checked is left out entirely.
//!
//! Option values containing commas are not supported.

use crate::domain::entities::{FilterCheckbox, FilterGroup, QueryParameters};

pub struct FilterSync;

impl FilterSync {
    /// Checked state for each checkbox, in collection order.
    pub fn checked_from_query(params: &QueryParameters, checkboxes: &[FilterCheckbox]) -> Vec<bool> {
        checkboxes
            .iter()
            .map(|checkbox| {
                params
                    .get(&checkbox.name)
                    .unwrap_or("")
                    .split(',')
                    .any(|value| value == checkbox.value)
            })
            .collect()
    }

    pub fn initialize(params: &QueryParameters, checkboxes: &mut [FilterCheckbox]) {
        let checked = Self::checked_from_query(params, checkboxes);
        for (checkbox, checked) in checkboxes.iter_mut().zip(checked) {
            checkbox.checked = checked;
        }
    }

    pub fn rebuild_query(params: &QueryParameters, checkboxes: &[FilterCheckbox]) -> QueryParameters {
        let mut rebuilt = QueryParameters::new();

        for (key, value) in params.entries() {
            if !FilterGroup::is_filter_key(key) {
                rebuilt.set(key, value);
            }
        }

        for group in FilterGroup::ALL {
            let selected: Vec<&str> = checkboxes
                .iter()
                .filter(|cb| cb.checked && cb.name == group.as_str())
                .map(|cb| cb.value.as_str())
                .collect();

            if !selected.is_empty() {
                rebuilt.set(group.as_str(), &selected.join(","));
            }
        }

        rebuilt
    }
}
