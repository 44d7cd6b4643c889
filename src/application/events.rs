use crate::domain::entities::{CardFade, Chip, FilterCheckbox};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    Load,
    CheckboxChange,
    IngredientInput,
    FormSubmit,
}

/// What the page looks like when an event fires.
#[derive(Debug, Clone, Default)]
pub struct PageSnapshot {
    pub query: String,
    pub checkboxes: Vec<FilterCheckbox>,
    /// `None` when the page has no ingredients form.
    pub ingredients: Option<String>,
    pub card_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    /// Checked state per checkbox, in snapshot order.
    CheckFilters(Vec<bool>),
    Navigate(String),
    RenderChips(Vec<Chip>),
    BlockSubmission {
        notice: String,
        highlight_for: Duration,
    },
    Submit(Vec<Chip>),
    AnimateCards(Vec<CardFade>),
}
