use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterGroup {
    Cuisine,
    Diet,
    Time,
}

impl FilterGroup {
    /// Recognized groups, in the order their keys are written to the query string.
    pub const ALL: [FilterGroup; 3] = [FilterGroup::Cuisine, FilterGroup::Diet, FilterGroup::Time];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterGroup::Cuisine => "cuisine",
            FilterGroup::Diet => "diet",
            FilterGroup::Time => "time",
        }
    }

    pub fn is_filter_key(key: &str) -> bool {
        key.parse::<FilterGroup>().is_ok()
    }
}

impl fmt::Display for FilterGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterGroup {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cuisine" => Ok(FilterGroup::Cuisine),
            "diet" => Ok(FilterGroup::Diet),
            "time" => Ok(FilterGroup::Time),
            _ => Err(()),
        }
    }
}

/// One sidebar checkbox. `name` is the raw group name as found on the page and
/// is not required to be a recognized group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCheckbox {
    pub name: String,
    pub value: String,
    pub checked: bool,
}

impl FilterCheckbox {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            checked: false,
        }
    }

    pub fn group(&self) -> Option<FilterGroup> {
        self.name.parse().ok()
    }
}

/// Selected option values per recognized group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    selected: HashMap<FilterGroup, BTreeSet<String>>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_checkboxes(checkboxes: &[FilterCheckbox]) -> Self {
        let mut state = Self::new();
        for checkbox in checkboxes.iter().filter(|cb| cb.checked) {
            if let Some(group) = checkbox.group() {
                state.select(group, checkbox.value.clone());
            }
        }
        state
    }

    pub fn select(&mut self, group: FilterGroup, value: String) {
        self.selected.entry(group).or_default().insert(value);
    }

    pub fn values(&self, group: FilterGroup) -> Vec<&str> {
        self.selected
            .get(&group)
            .map(|values| values.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }
}

#[cfg(test)]
impl FilterCheckbox {
    pub fn set_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}
