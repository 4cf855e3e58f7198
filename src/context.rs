//! Application Context
//!
//! The page's view state and the controller, provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use mealdb_core::{Action, ApiConfig, Controller, SearchMode, ViewState};

use crate::api::BrowserTransport;

/// What the content region currently holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Markup produced by a controller
    #[default]
    Markup,
    Search,
    Contact,
}

/// `ViewState` backed by signals
#[derive(Clone, Copy)]
pub struct PageView {
    pub loading: RwSignal<bool>,
    pub page: RwSignal<Page>,
    pub content: RwSignal<String>,
    /// Search results area (only shown on the search page)
    pub results: RwSignal<String>,
}

impl PageView {
    pub fn new() -> Self {
        Self {
            loading: RwSignal::new(false),
            page: RwSignal::new(Page::Markup),
            content: RwSignal::new(String::new()),
            results: RwSignal::new(String::new()),
        }
    }
}

impl ViewState for PageView {
    fn show_loading(&self) {
        self.loading.set(true);
    }

    fn hide_loading(&self) {
        self.loading.set(false);
    }

    fn set_content(&self, markup: String) {
        self.content.set(markup);
        self.page.set(Page::Markup);
    }

    fn append_content(&self, markup: &str) {
        self.content.update(|c| c.push_str(markup));
    }

    fn open_search(&self) {
        self.content.set(String::new());
        self.results.set(String::new());
        self.page.set(Page::Search);
    }

    fn set_results(&self, markup: String) {
        self.results.set(markup);
    }

    fn open_contact(&self) {
        self.content.set(String::new());
        self.page.set(Page::Contact);
    }
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub view: PageView,
    /// Controllers are `Rc`-based, so they live in local storage
    controller: StoredValue<Controller<BrowserTransport>, LocalStorage>,
}

impl AppContext {
    pub fn new(view: PageView, controller: Controller<BrowserTransport>) -> Self {
        Self {
            view,
            controller: StoredValue::new_local(controller),
        }
    }

    pub fn config(&self) -> ApiConfig {
        self.controller.with_value(|c| c.config().clone())
    }

    /// Run an action's view controller in the background
    pub fn dispatch(&self, action: Action) {
        let controller = self.controller.get_value();
        let view = self.view;
        spawn_local(async move {
            controller.dispatch(&view, action).await;
        });
    }

    /// Run one debounced search in the background
    pub fn search(&self, mode: SearchMode, query: String) {
        let controller = self.controller.get_value();
        let view = self.view;
        spawn_local(async move {
            controller.search(&view, mode, &query).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_view_transitions() {
        let view = PageView::new();

        view.show_loading();
        view.set_content("<h2>Areas</h2>".to_string());
        view.append_content("<p>No areas.</p>");
        view.hide_loading();
        assert!(!view.loading.get_untracked());
        assert_eq!(view.page.get_untracked(), Page::Markup);
        assert_eq!(view.content.get_untracked(), "<h2>Areas</h2><p>No areas.</p>");

        view.open_search();
        view.set_results("<p>No results.</p>".to_string());
        assert_eq!(view.page.get_untracked(), Page::Search);
        assert_eq!(view.content.get_untracked(), "");
        assert_eq!(view.results.get_untracked(), "<p>No results.</p>");

        view.open_contact();
        assert_eq!(view.page.get_untracked(), Page::Contact);
    }
}
