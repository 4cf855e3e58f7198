//! Search Panel Component
//!
//! Name and first-letter inputs, each behind its own debouncer. The
//! debouncers live as long as the panel; leaving the page cancels a pending
//! search.

use leptos::prelude::*;

use mealdb_core::{Debouncer, SearchMode};

use crate::components::content_region::clicked_action;
use crate::context::AppContext;
use crate::timer::GlooDriver;

#[component]
pub fn SearchPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let config = ctx.config();

    let debouncer = |mode: SearchMode| {
        StoredValue::new_local(Debouncer::new(
            GlooDriver,
            mode.delay(&config),
            move |query: String| ctx.search(mode, query),
        ))
    };
    let by_name = debouncer(SearchMode::Name);
    let by_letter = debouncer(SearchMode::FirstLetter);

    let on_results_click = move |ev: web_sys::MouseEvent| {
        if let Some(action) = clicked_action(&ev) {
            ctx.dispatch(action);
        }
    };

    view! {
        <h2 class="mb-3">"Search"</h2>
        <div class="search-row">
            <input
                id="searchName"
                class="search-input"
                placeholder="Search by meal name"
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    by_name.with_value(|d| d.trigger(value));
                }
            />
            <input
                id="searchLetter"
                class="search-input"
                maxlength="1"
                placeholder="Search by first letter"
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    by_letter.with_value(|d| d.trigger(value));
                }
            />
        </div>
        <div
            id="searchResults"
            on:click=on_results_click
            inner_html=move || ctx.view.results.get()
        ></div>
    }
}
