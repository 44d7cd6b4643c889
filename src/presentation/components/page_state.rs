use crate::application::{PageAction, PageSnapshot};
use crate::domain::entities::{CardFade, Chip, FilterCheckbox, PageConfig};
use std::time::{Duration, Instant};

/// Everything that lives only until the next page reload.
pub struct PageState {
    checkboxes: Vec<FilterCheckbox>,
    ingredients: String,
    chips: Vec<Chip>,
    highlight_until: Option<Instant>,
    fades: Vec<CardFade>,
    loaded_at: Instant,
}

impl PageState {
    pub fn new(config: &PageConfig) -> Self {
        let checkboxes = config
            .filters
            .iter()
            .flat_map(|filter| {
                filter
                    .options
                    .iter()
                    .map(move |option| FilterCheckbox::new(filter.group.as_str(), option.as_str()))
            })
            .collect();

        Self {
            checkboxes,
            ingredients: String::new(),
            chips: Vec::new(),
            highlight_until: None,
            fades: Vec::new(),
            loaded_at: Instant::now(),
        }
    }

    pub fn snapshot(&self, query: String, card_count: usize) -> PageSnapshot {
        PageSnapshot {
            query,
            checkboxes: self.checkboxes.clone(),
            ingredients: Some(self.ingredients.clone()),
            card_count,
        }
    }

    /// Applies everything except navigation and the blocking notice, which
    /// need the platform.
    pub fn apply(&mut self, action: &PageAction) {
        match action {
            PageAction::CheckFilters(checked) => {
                for (checkbox, checked) in self.checkboxes.iter_mut().zip(checked) {
                    checkbox.checked = *checked;
                }
            }
            PageAction::RenderChips(chips) => self.chips = chips.clone(),
            PageAction::BlockSubmission { highlight_for, .. } => {
                self.highlight_until = Some(Instant::now() + *highlight_for);
            }
            PageAction::AnimateCards(fades) => {
                self.fades = fades.clone();
                self.loaded_at = Instant::now();
            }
            PageAction::Navigate(_) | PageAction::Submit(_) => {}
        }
    }

    pub fn checkboxes_mut(&mut self) -> &mut [FilterCheckbox] {
        &mut self.checkboxes
    }

    pub fn ingredients_mut(&mut self) -> &mut String {
        &mut self.ingredients
    }

    pub fn chips(&self) -> &[Chip] {
        &self.chips
    }

    pub fn fades(&self) -> &[CardFade] {
        &self.fades
    }

    pub fn elapsed(&self) -> Duration {
        self.loaded_at.elapsed()
    }

    /// Clears an expired highlight; returns whether one is still showing.
    pub fn highlight_active(&mut self, now: Instant) -> bool {
        match self.highlight_until {
            Some(until) if now < until => true,
            Some(_) => {
                self.highlight_until = None;
                false
            }
            None => false,
        }
    }

    pub fn highlight_remaining(&self, now: Instant) -> Option<Duration> {
        self.highlight_until
            .map(|until| until.saturating_duration_since(now))
    }

    pub fn animating(&self) -> bool {
        let elapsed = self.elapsed();
        self.fades.iter().any(|fade| !fade.is_finished(elapsed))
    }
}
