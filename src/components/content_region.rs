//! Content Region Component
//!
//! Shows whatever the last controller put there. Tiles in rendered markup
//! are handled by one delegated click listener that reads their
//! `data-action` / `data-arg` attributes.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use mealdb_core::action::{ACTION_ATTR, ARG_ATTR};
use mealdb_core::Action;

use crate::components::{ContactForm, SearchPanel};
use crate::context::{AppContext, Page};

/// Action of the nearest tile around the click target, if any
pub fn clicked_action(ev: &web_sys::MouseEvent) -> Option<Action> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let tile = target.closest(&format!("[{}]", ACTION_ATTR)).ok()??;
    let key = tile.get_attribute(ACTION_ATTR)?;
    Action::from_attrs(&key, tile.get_attribute(ARG_ATTR).as_deref())
}

#[component]
pub fn ContentRegion() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let view = ctx.view;

    let on_click = move |ev: web_sys::MouseEvent| {
        if let Some(action) = clicked_action(&ev) {
            ctx.dispatch(action);
        }
    };

    move || match view.page.get() {
        Page::Markup => view! {
            <div class="content-markup" on:click=on_click inner_html=move || view.content.get()></div>
        }
        .into_any(),
        Page::Search => view! { <SearchPanel /> }.into_any(),
        Page::Contact => view! { <ContactForm /> }.into_any(),
    }
}
