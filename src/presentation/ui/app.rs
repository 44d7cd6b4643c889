use crate::application::{PageAction, PageEvent, UseCaseContainer};
use crate::domain::entities::PageConfig;
use crate::infrastructure::PageLocation;
use crate::presentation::components::{FilterSidebar, IngredientForm, LogManager, PageState, RecipeCards};
use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub struct RecipePageApp {
    use_cases: Arc<UseCaseContainer>,
    location: Arc<PageLocation>,
    config: PageConfig,
    page: PageState,
    log_manager: LogManager,
    log_rx: Receiver<String>,
    status_message: String,
    output_panel_height: f32,
}

impl RecipePageApp {
    pub fn new(
        use_cases: Arc<UseCaseContainer>,
        location: Arc<PageLocation>,
        config: PageConfig,
        log_rx: Receiver<String>,
    ) -> Self {
        let page = PageState::new(&config);
        let mut app = Self {
            use_cases,
            location,
            config,
            page,
            log_manager: LogManager::new(),
            log_rx,
            status_message: String::new(),
            output_panel_height: 160.0,
        };
        app.load_page();
        app
    }

    /// Throws away the page and rebuilds it from the current location.
    fn load_page(&mut self) {
        tracing::info!("Loading recipes{}", self.location.search());
        self.page = PageState::new(&self.config);
        self.status_message = "Page loaded".to_string();
        self.fire(PageEvent::Load);
    }

    fn fire(&mut self, event: PageEvent) {
        let snapshot = self
            .page
            .snapshot(self.location.search(), self.config.recipes.len());

        match self.use_cases.dispatch(event, &snapshot) {
            Ok(actions) => {
                for action in &actions {
                    self.perform(action);
                }
            }
            Err(e) => {
                tracing::error!("Failed to handle {:?}: {:#}", event, e);
                self.status_message = format!("Error: {e}");
            }
        }
    }

    fn perform(&mut self, action: &PageAction) {
        apply_action(&mut self.page, action, show_blocking_notice);

        match action {
            PageAction::BlockSubmission { notice, .. } => {
                self.status_message = notice.clone();
            }
            PageAction::Submit(chips) => {
                let labels: Vec<&str> = chips.iter().map(|c| c.label.as_str()).collect();
                self.status_message = format!("Searching recipes with {}", labels.join(", "));
            }
            PageAction::Navigate(query) => {
                self.status_message = format!("Reloading with ?{query}");
            }
            PageAction::CheckFilters(_)
            | PageAction::RenderChips(_)
            | PageAction::AnimateCards(_) => {}
        }
    }

    fn poll_logs(&mut self) {
        let messages: Vec<String> = self.log_rx.try_iter().collect();
        self.log_manager.extend(messages);
    }

    fn schedule_repaint(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        if self.page.animating() {
            ctx.request_repaint_after(FRAME_INTERVAL);
        }
        if self.page.highlight_active(now) {
            if let Some(remaining) = self.page.highlight_remaining(now) {
                ctx.request_repaint_after(remaining);
            }
        }
    }
}

impl eframe::App for RecipePageApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.location.take_reload() {
            self.load_page();
        }
        self.poll_logs();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🍳 Recipes");
                ui.separator();
                ui.monospace(format!("/recipes{}", self.location.search()));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(&self.status_message);
                });
            });
        });

        egui::TopBottomPanel::bottom("bottom_panel")
            .resizable(true)
            .default_height(self.output_panel_height)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    if ui.button("Clear Output").clicked() {
                        self.log_manager.clear();
                    }
                    ui.separator();
                    ui.label(format!("{} entries", self.log_manager.len()));
                });
                ui.separator();

                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        for entry in self.log_manager.all_logs() {
                            ui.horizontal(|ui| {
                                ui.label(
                                    egui::RichText::new(format!("[{}]", entry.format_timestamp()))
                                        .color(egui::Color32::GRAY)
                                        .monospace(),
                                );
                                ui.monospace(&entry.message);
                            });
                        }
                    });

                self.output_panel_height = ui.min_rect().height();
            });

        let filters_changed = egui::SidePanel::left("sidebar")
            .resizable(false)
            .default_width(200.0)
            .show(ctx, |ui| FilterSidebar::show(ui, self.page.checkboxes_mut()))
            .inner;

        let highlighted = self.page.highlight_active(Instant::now());
        let form = egui::CentralPanel::default()
            .show(ctx, |ui| {
                let page = &mut self.page;
                let chips = page.chips().to_vec();
                let form = IngredientForm::show(ui, page.ingredients_mut(), &chips, highlighted);

                ui.add_space(16.0);
                ui.heading("Recipes");
                ui.separator();

                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        RecipeCards::show(ui, &self.config.recipes, page.fades(), page.elapsed());
                    });

                form
            })
            .inner;

        if filters_changed {
            self.fire(PageEvent::CheckboxChange);
        }
        if form.edited {
            self.fire(PageEvent::IngredientInput);
        }
        if form.submitted {
            self.fire(PageEvent::FormSubmit);
        }
        if self.location.take_reload() {
            self.load_page();
        }

        self.schedule_repaint(ctx);
    }
}

/// Applies `action` to the page. A blocked submission shows its notice before
/// the highlight is applied, so the highlight timer starts once the notice is
/// dismissed.
fn apply_action(page: &mut PageState, action: &PageAction, show_notice: impl FnOnce(&str)) {
    if let PageAction::BlockSubmission { notice, .. } = action {
        show_notice(notice);
    }
    page.apply(action);
}

fn show_blocking_notice(notice: &str) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Warning)
        .set_title("Recipes")
        .set_description(notice)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}
