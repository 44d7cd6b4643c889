use crate::application::events::{PageAction, PageEvent, PageSnapshot};
use crate::application::use_cases::*;
use crate::domain::entities::PageConfig;
use crate::domain::repositories::Navigator;
use crate::domain::services::FadeSchedule;
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

pub struct UseCaseContainer {
    pub initialize_filters: Arc<InitializeFilters>,
    pub rebuild_filter_query: Arc<RebuildFilterQuery>,
    pub navigate: Arc<NavigateTo>,
    pub preview_ingredients: Arc<PreviewIngredients>,
    pub validate_ingredients: Arc<ValidateIngredients>,
    pub animate_cards: Arc<AnimateRecipeCards>,
    highlight_for: Duration,
}

impl UseCaseContainer {
    pub fn new(navigator: Arc<dyn Navigator>, config: &PageConfig) -> Self {
        let schedule = FadeSchedule::new(
            config.card_stagger(),
            config.card_transition(),
            config.card_offset_px,
        );

        Self {
            initialize_filters: Arc::new(InitializeFilters::new()),
            rebuild_filter_query: Arc::new(RebuildFilterQuery::new()),
            navigate: Arc::new(NavigateTo::new(Arc::clone(&navigator))),
            preview_ingredients: Arc::new(PreviewIngredients::new()),
            validate_ingredients: Arc::new(ValidateIngredients::new()),
            animate_cards: Arc::new(AnimateRecipeCards::new(schedule)),
            highlight_for: config.highlight(),
        }
    }

    /// Actions the page should take in response to `event`. Performs no side effects.
    pub fn handle(&self, event: PageEvent, snapshot: &PageSnapshot) -> Vec<PageAction> {
        let mut actions = Vec::new();

        match event {
            PageEvent::Load => {
                if let Some(checked) = self
                    .initialize_filters
                    .execute(&snapshot.query, &snapshot.checkboxes)
                {
                    actions.push(PageAction::CheckFilters(checked));
                }
                if let Some(fades) = self.animate_cards.execute(snapshot.card_count) {
                    actions.push(PageAction::AnimateCards(fades));
                }
            }
            PageEvent::CheckboxChange => {
                if let Some(query) = self
                    .rebuild_filter_query
                    .execute(&snapshot.query, &snapshot.checkboxes)
                {
                    actions.push(PageAction::Navigate(query));
                }
            }
            PageEvent::IngredientInput => {
                if let Some(raw) = &snapshot.ingredients {
                    actions.push(PageAction::RenderChips(
                        self.preview_ingredients.execute(raw),
                    ));
                }
            }
            PageEvent::FormSubmit => {
                if let Some(raw) = &snapshot.ingredients {
                    actions.push(match self.validate_ingredients.execute(raw) {
                        Ok(chips) => PageAction::Submit(chips),
                        Err(e) => PageAction::BlockSubmission {
                            notice: e.to_string(),
                            highlight_for: self.highlight_for,
                        },
                    });
                }
            }
        }

        actions
    }

    /// Like [`handle`](Self::handle), but also performs any navigation.
    pub fn dispatch(&self, event: PageEvent, snapshot: &PageSnapshot) -> Result<Vec<PageAction>> {
        let actions = self.handle(event, snapshot);
        for action in &actions {
            if let PageAction::Navigate(query) = action {
                self.navigate.execute(query)?;
            }
        }
        Ok(actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Chip, FilterCheckbox, QueryParameters};
    use crate::infrastructure::PageLocation;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNavigator {
        visited: Mutex<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, query: &str) -> Result<()> {
            self.visited.lock().unwrap().push(query.to_string());
            Ok(())
        }
    }

    fn container() -> (UseCaseContainer, Arc<RecordingNavigator>) {
        let navigator = Arc::new(RecordingNavigator::default());
        let container = UseCaseContainer::new(navigator.clone(), &PageConfig::default());
        (container, navigator)
    }

    fn snapshot(query: &str, checkboxes: Vec<FilterCheckbox>) -> PageSnapshot {
        PageSnapshot {
            query: query.to_string(),
            checkboxes,
            ingredients: None,
            card_count: 0,
        }
    }

    #[test]
    fn load_restores_checked_filters() {
        let (container, navigator) = container();
        let page = snapshot(
            "?cuisine=italian,thai&diet=vegan",
            vec![
                FilterCheckbox::new("cuisine", "italian"),
                FilterCheckbox::new("cuisine", "thai"),
                FilterCheckbox::new("cuisine", "mexican"),
                FilterCheckbox::new("diet", "vegan"),
            ],
        );

        let actions = container.dispatch(PageEvent::Load, &page).unwrap();

        assert_eq!(
            actions,
            vec![PageAction::CheckFilters(vec![true, true, false, true])]
        );
        assert!(navigator.visited.lock().unwrap().is_empty());
    }

    #[test]
    fn checkbox_change_navigates_with_rebuilt_query() {
        let (container, navigator) = container();
        let page = snapshot(
            "?page=2",
            vec![
                FilterCheckbox::new("cuisine", "italian").set_checked(true),
                FilterCheckbox::new("diet", "vegan"),
                FilterCheckbox::new("time", "under30").set_checked(true),
            ],
        );

        let actions = container.dispatch(PageEvent::CheckboxChange, &page).unwrap();

        let visited = navigator.visited.lock().unwrap();
        assert_eq!(visited.len(), 1);
        assert_eq!(actions, vec![PageAction::Navigate(visited[0].clone())]);

        let params = QueryParameters::parse(&visited[0]);
        assert_eq!(params.get("page"), Some("2"));
        assert_eq!(params.get("cuisine"), Some("italian"));
        assert_eq!(params.get("time"), Some("under30"));
        assert!(!params.contains_key("diet"));
        assert_eq!(params.entries().count(), 3);
    }

    #[test]
    fn change_reload_and_load_through_page_location() {
        let location = Arc::new(PageLocation::new("?page=2&cuisine=Indian"));
        let container = UseCaseContainer::new(location.clone(), &PageConfig::default());
        let sidebar = || {
            vec![
                FilterCheckbox::new("cuisine", "Indian"),
                FilterCheckbox::new("cuisine", "Italian"),
                FilterCheckbox::new("diet", "Vegan"),
                FilterCheckbox::new("time", "Under30"),
            ]
        };

        let mut page = snapshot(&location.search(), sidebar());
        match container.dispatch(PageEvent::Load, &page).unwrap().as_slice() {
            [PageAction::CheckFilters(checked)] => {
                for (checkbox, checked) in page.checkboxes.iter_mut().zip(checked) {
                    checkbox.checked = *checked;
                }
            }
            other => panic!("unexpected actions: {other:?}"),
        }
        assert!(!location.take_reload());

        page.checkboxes[0].checked = false;
        page.checkboxes[1].checked = true;
        page.checkboxes[2].checked = true;
        container.dispatch(PageEvent::CheckboxChange, &page).unwrap();

        assert!(location.take_reload());
        let params = QueryParameters::parse(&location.search());
        assert_eq!(params.get("page"), Some("2"));
        assert_eq!(params.get("cuisine"), Some("Italian"));
        assert_eq!(params.get("diet"), Some("Vegan"));
        assert!(!params.contains_key("time"));

        let reloaded = snapshot(&location.search(), sidebar());
        let actions = container.dispatch(PageEvent::Load, &reloaded).unwrap();
        assert_eq!(
            actions,
            vec![PageAction::CheckFilters(vec![false, true, true, false])]
        );
        assert!(!location.take_reload());
    }

    #[test]
    fn engine_is_inert_without_checkboxes() {
        let (container, navigator) = container();
        let page = snapshot("?cuisine=italian", Vec::new());

        assert!(container.dispatch(PageEvent::Load, &page).unwrap().is_empty());
        assert!(
            container
                .dispatch(PageEvent::CheckboxChange, &page)
                .unwrap()
                .is_empty()
        );
        assert!(navigator.visited.lock().unwrap().is_empty());
    }

    #[test]
    fn load_schedules_card_fades() {
        let (container, _) = container();
        let mut page = snapshot("", Vec::new());
        page.card_count = 3;

        let actions = container.handle(PageEvent::Load, &page);

        match actions.as_slice() {
            [PageAction::AnimateCards(fades)] => {
                assert_eq!(fades.len(), 3);
                assert_eq!(fades[2].delay, Duration::from_millis(240));
            }
            other => panic!("unexpected actions: {other:?}"),
        }
    }

    #[test]
    fn typing_renders_chips() {
        let (container, _) = container();
        let mut page = snapshot("", Vec::new());
        page.ingredients = Some("eggs, milk,, flour".to_string());

        let actions = container.handle(PageEvent::IngredientInput, &page);

        assert_eq!(
            actions,
            vec![PageAction::RenderChips(vec![
                Chip::new("eggs"),
                Chip::new("milk"),
                Chip::new("flour"),
            ])]
        );
    }

    #[test]
    fn empty_submission_is_blocked() {
        let (container, _) = container();
        let mut page = snapshot("", Vec::new());
        page.ingredients = Some("  ".to_string());

        let actions = container.handle(PageEvent::FormSubmit, &page);

        assert_eq!(
            actions,
            vec![PageAction::BlockSubmission {
                notice: "⚠️ Please enter at least one ingredient.".to_string(),
                highlight_for: Duration::from_millis(1500),
            }]
        );
    }

    #[test]
    fn valid_submission_proceeds() {
        let (container, _) = container();
        let mut page = snapshot("", Vec::new());
        page.ingredients = Some("rice, dal".to_string());

        let actions = container.handle(PageEvent::FormSubmit, &page);

        assert_eq!(
            actions,
            vec![PageAction::Submit(vec![Chip::new("rice"), Chip::new("dal")])]
        );
    }

    #[test]
    fn form_events_ignored_without_form() {
        let (container, _) = container();
        let page = snapshot("", Vec::new());

        assert!(container.handle(PageEvent::IngredientInput, &page).is_empty());
        assert!(container.handle(PageEvent::FormSubmit, &page).is_empty());
    }
}
