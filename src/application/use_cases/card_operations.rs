use crate::domain::{entities::CardFade, services::FadeSchedule};

pub struct AnimateRecipeCards {
    schedule: FadeSchedule,
}

impl AnimateRecipeCards {
    pub fn new(schedule: FadeSchedule) -> Self {
        Self { schedule }
    }

    pub fn execute(&self, card_count: usize) -> Option<Vec<CardFade>> {
        if card_count == 0 {
            return None;
        }
        tracing::trace!("Scheduling fade-in for {} cards", card_count);
        Some(self.schedule.plan(card_count))
    }
}
