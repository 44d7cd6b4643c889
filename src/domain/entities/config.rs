use super::FilterGroup;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    pub theme: ThemeMode,
    pub initial_query: String,
    pub filters: Vec<FilterOptions>,
    pub recipes: Vec<String>,
    pub card_stagger_ms: u64,
    pub card_transition_ms: u64,
    pub card_offset_px: f32,
    pub highlight_ms: u64,
}

impl PageConfig {
    pub fn card_stagger(&self) -> Duration {
        Duration::from_millis(self.card_stagger_ms)
    }

    pub fn card_transition(&self) -> Duration {
        Duration::from_millis(self.card_transition_ms)
    }

    pub fn highlight(&self) -> Duration {
        Duration::from_millis(self.highlight_ms)
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::System,
            initial_query: String::new(),
            filters: vec![
                FilterOptions::new(
                    FilterGroup::Cuisine,
                    &["Indian", "Italian", "Chinese", "Various"],
                ),
                FilterOptions::new(
                    FilterGroup::Diet,
                    &["Non-Vegetarian", "Vegetarian", "Vegan", "Unknown"],
                ),
                FilterOptions::new(FilterGroup::Time, &["Under30", "30to60", "Over60"]),
            ],
            recipes: [
                "Paneer Butter Masala",
                "Spaghetti Aglio e Olio",
                "Veg Manchurian",
                "Chicken Biryani",
                "Tofu Stir Fry",
                "Garden Salad",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            card_stagger_ms: 120,
            card_transition_ms: 400,
            card_offset_px: 10.0,
            highlight_ms: 1500,
        }
    }
}

/// Options offered in the sidebar for one filter group.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FilterOptions {
    pub group: FilterGroup,
    pub options: Vec<String>,
}

impl FilterOptions {
    pub fn new(group: FilterGroup, options: &[&str]) -> Self {
        Self {
            group,
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ThemeMode {
    System,
    Light,
    Dark,
}
