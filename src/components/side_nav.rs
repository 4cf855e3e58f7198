//! Side Navigation Component
//!
//! Menu button plus the collapsible panel of view links.

use leptos::prelude::*;

use mealdb_core::Action;

use crate::context::AppContext;

#[component]
pub fn SideNav() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (open, set_open) = signal(false);

    view! {
        <nav class="side-nav">
            <button
                id="menuBtn"
                class="menu-btn"
                aria-controls="sidePanel"
                aria-expanded=move || if open.get() { "true" } else { "false" }
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <i class="fa-solid fa-bars"></i>
            </button>
            <aside
                id="sidePanel"
                class=move || if open.get() { "side-panel open" } else { "side-panel" }
                aria-hidden=move || if open.get() { "false" } else { "true" }
            >
                <ul class="nav-links">
                    {Action::NAV.into_iter().map(|(action, label)| {
                        view! {
                            <li>
                                <a
                                    href="#"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        ctx.dispatch(action.clone());
                                    }
                                >
                                    {label}
                                </a>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </aside>
        </nav>
    }
}
