use crate::domain::entities::{CardFade, CardVisual};
use std::time::Duration;

pub struct FadeSchedule {
    stagger: Duration,
    transition: Duration,
    offset: f32,
}

impl FadeSchedule {
    pub fn new(stagger: Duration, transition: Duration, offset: f32) -> Self {
        Self {
            stagger,
            transition,
            offset,
        }
    }

    pub fn plan(&self, card_count: usize) -> Vec<CardFade> {
        (0..card_count)
            .map(|index| CardFade {
                index,
                delay: self.stagger * index as u32,
                duration: self.transition,
                from: CardVisual::hidden(self.offset),
                to: CardVisual::settled(),
            })
            .collect()
    }
}

impl Default for FadeSchedule {
    fn default() -> Self {
        Self::new(Duration::from_millis(120), Duration::from_millis(400), 10.0)
    }
}
