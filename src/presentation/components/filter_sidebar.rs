use crate::domain::entities::{FilterCheckbox, FilterState};
use eframe::egui;

pub struct FilterSidebar;

impl FilterSidebar {
    /// Returns true when any checkbox changed this frame.
    pub fn show(ui: &mut egui::Ui, checkboxes: &mut [FilterCheckbox]) -> bool {
        let mut changed = false;
        let state = FilterState::from_checkboxes(checkboxes);

        ui.heading("Filters");
        ui.separator();

        for index in 0..checkboxes.len() {
            if index == 0 || checkboxes[index - 1].name != checkboxes[index].name {
                ui.add_space(6.0);
                let checkbox = &checkboxes[index];
                let selected = checkbox
                    .group()
                    .map(|group| state.values(group).len())
                    .unwrap_or(0);
                if selected > 0 {
                    ui.strong(format!("{} ({})", group_title(&checkbox.name), selected));
                } else {
                    ui.strong(group_title(&checkbox.name));
                }
            }

            let checkbox = &mut checkboxes[index];
            if ui
                .checkbox(&mut checkbox.checked, checkbox.value.as_str())
                .changed()
            {
                tracing::debug!(
                    "Filter {}={} set to {}",
                    checkbox.name,
                    checkbox.value,
                    checkbox.checked
                );
                changed = true;
            }
        }

        changed
    }
}

fn group_title(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
