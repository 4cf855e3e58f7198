//! View Controllers
//!
//! One async entry point per screen. Each one shows the loading indicator,
//! writes its heading, fetches one endpoint, caps the list, renders, and
//! hides the indicator on every path.
//!
//! Overlapping activations are resolved by a generation counter: each
//! activation takes a new generation and a response that comes back after a
//! newer activation started is dropped without touching the view. The newest
//! activation always ends by hiding the indicator.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::action::Action;
use crate::api::{ApiClient, Endpoint, Transport};
use crate::config::ApiConfig;
use crate::models::Meal;
use crate::render;
use crate::view::ViewState;

/// The two search inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Name,
    FirstLetter,
}

impl SearchMode {
    pub fn delay(&self, config: &ApiConfig) -> Duration {
        match self {
            SearchMode::Name => config.name_debounce,
            SearchMode::FirstLetter => config.letter_debounce,
        }
    }

    /// Whether a trimmed query is worth a request
    pub fn accepts(&self, query: &str) -> bool {
        match self {
            SearchMode::Name => !query.is_empty(),
            SearchMode::FirstLetter => query.chars().count() == 1,
        }
    }

    pub fn endpoint(&self, query: &str) -> Endpoint {
        match self {
            SearchMode::Name => Endpoint::SearchByName(query.to_string()),
            SearchMode::FirstLetter => Endpoint::SearchByFirstLetter(query.to_string()),
        }
    }
}

struct Inner<T> {
    api: ApiClient<T>,
    config: ApiConfig,
    generation: Cell<u64>,
}

/// Entry points for every view; cheap to clone
pub struct Controller<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Controller<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Transport> Controller<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        let api = ApiClient::new(transport, config.base_url.clone());
        Self {
            inner: Rc::new(Inner {
                api,
                config,
                generation: Cell::new(0),
            }),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    fn begin(&self, view_name: &str) -> u64 {
        let generation = self.inner.generation.get() + 1;
        self.inner.generation.set(generation);
        log::debug!("[VIEW] {} (generation {})", view_name, generation);
        generation
    }

    fn is_current(&self, generation: u64) -> bool {
        let current = self.inner.generation.get() == generation;
        if !current {
            log::debug!("[VIEW] dropping stale response (generation {})", generation);
        }
        current
    }

    fn words(&self) -> usize {
        self.inner.config.meal_excerpt_words
    }

    /// Meals from an endpoint, capped; a failed fetch is an empty list
    async fn capped_meals(&self, endpoint: &Endpoint) -> Vec<Meal> {
        let mut meals = self.inner.api.meals(endpoint).await.unwrap_or_default();
        meals.truncate(self.inner.config.meal_limit);
        meals
    }

    /// Route an action to its view
    pub async fn dispatch<V: ViewState>(&self, view: &V, action: Action) {
        match action {
            Action::Home => self.load_home(view).await,
            Action::Search => self.open_search(view),
            Action::Categories => self.categories(view).await,
            Action::Areas => self.areas(view).await,
            Action::Ingredients => self.ingredients(view).await,
            Action::Contact => self.open_contact(view),
            Action::Category(name) => self.meals_by_category(view, &name).await,
            Action::Area(name) => self.meals_by_area(view, &name).await,
            Action::Ingredient(name) => self.meals_by_ingredient(view, &name).await,
            Action::Meal(id) => self.meal_details(view, &id).await,
        }
    }

    /// Featured meals: the first page of the full catalogue
    pub async fn load_home<V: ViewState>(&self, view: &V) {
        let generation = self.begin("home");
        view.show_loading();
        view.set_content(render::heading("Featured Meals"));

        let meals = self
            .capped_meals(&Endpoint::SearchByName(String::new()))
            .await;
        if !self.is_current(generation) {
            return;
        }

        if meals.is_empty() {
            view.append_content(&render::empty_state("No meals available."));
        } else {
            view.append_content(&render::meal_grid(&meals, self.words()));
        }
        view.hide_loading();
    }

    /// Show the search form; nothing is fetched until the user types
    pub fn open_search<V: ViewState>(&self, view: &V) {
        self.begin("search");
        view.open_search();
        view.hide_loading();
    }

    /// Run one (already debounced) search into the results area
    ///
    /// An empty name, or anything but a single character for the letter
    /// search, clears the results without a request.
    pub async fn search<V: ViewState>(&self, view: &V, mode: SearchMode, raw_query: &str) {
        let query = raw_query.trim();
        let generation = self.begin("search results");
        if !mode.accepts(query) {
            view.set_results(String::new());
            view.hide_loading();
            return;
        }

        view.show_loading();
        let meals = self.capped_meals(&mode.endpoint(query)).await;
        if !self.is_current(generation) {
            return;
        }

        view.set_results(render::search_results(&meals, self.words()));
        view.hide_loading();
    }

    pub async fn categories<V: ViewState>(&self, view: &V) {
        let generation = self.begin("categories");
        view.show_loading();
        view.set_content(render::heading("Categories"));

        let categories = self.inner.api.categories().await.unwrap_or_default();
        if !self.is_current(generation) {
            return;
        }

        if categories.is_empty() {
            view.append_content(&render::empty_state("No categories."));
        } else {
            let words = self.inner.config.category_excerpt_words;
            view.append_content(&render::grid(
                categories.iter().map(|c| render::category_tile(c, words)),
            ));
        }
        view.hide_loading();
    }

    pub async fn areas<V: ViewState>(&self, view: &V) {
        let generation = self.begin("areas");
        view.show_loading();
        view.set_content(render::heading("Areas"));

        let areas = self.inner.api.areas().await.unwrap_or_default();
        if !self.is_current(generation) {
            return;
        }

        if areas.is_empty() {
            view.append_content(&render::empty_state("No areas."));
        } else {
            view.append_content(&render::grid(areas.iter().map(render::area_tile)));
        }
        view.hide_loading();
    }

    pub async fn ingredients<V: ViewState>(&self, view: &V) {
        let generation = self.begin("ingredients");
        view.show_loading();
        view.set_content(render::heading("Ingredients"));

        let mut ingredients = self.inner.api.ingredients().await.unwrap_or_default();
        if !self.is_current(generation) {
            return;
        }
        ingredients.truncate(self.inner.config.ingredient_limit);

        if ingredients.is_empty() {
            view.append_content(&render::empty_state("No ingredients."));
        } else {
            view.append_content(&render::grid(
                ingredients.iter().map(render::ingredient_tile),
            ));
        }
        view.hide_loading();
    }

    pub async fn meals_by_category<V: ViewState>(&self, view: &V, category: &str) {
        self.filtered(view, "category filter", Endpoint::FilterByCategory(category.to_string()))
            .await
    }

    pub async fn meals_by_area<V: ViewState>(&self, view: &V, area: &str) {
        self.filtered(view, "area filter", Endpoint::FilterByArea(area.to_string()))
            .await
    }

    pub async fn meals_by_ingredient<V: ViewState>(&self, view: &V, ingredient: &str) {
        self.filtered(
            view,
            "ingredient filter",
            Endpoint::FilterByIngredient(ingredient.to_string()),
        )
        .await
    }

    /// Shared body of the three filter views
    async fn filtered<V: ViewState>(&self, view: &V, view_name: &str, endpoint: Endpoint) {
        let generation = self.begin(view_name);
        view.show_loading();

        let meals = self.capped_meals(&endpoint).await;
        if !self.is_current(generation) {
            return;
        }

        view.set_content(render::meal_results(&meals, self.words()));
        view.hide_loading();
    }

    /// Full details for one meal, or "Meal not found."
    pub async fn meal_details<V: ViewState>(&self, view: &V, id: &str) {
        let generation = self.begin("details");
        let id = id.trim();
        if id.is_empty() {
            view.set_content(render::empty_state("Meal not found."));
            view.hide_loading();
            return;
        }

        view.show_loading();
        let meal = self.inner.api.meal(id).await;
        if !self.is_current(generation) {
            return;
        }

        match meal {
            Some(meal) => view.set_content(render::meal_details(&meal)),
            None => view.set_content(render::empty_state("Meal not found.")),
        }
        view.hide_loading();
    }

    /// Show the contact form
    pub fn open_contact<V: ViewState>(&self, view: &V) {
        self.begin("contact");
        view.open_contact();
        view.hide_loading();
    }
}
