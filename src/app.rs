//! Meal Browser App
//!
//! Side navigation, loading overlay, and the single content region.

use leptos::prelude::*;

use mealdb_core::{Action, ApiConfig, Controller};

use crate::api::BrowserTransport;
use crate::components::{ContentRegion, LoadingOverlay, SideNav};
use crate::context::{AppContext, PageView};

#[component]
pub fn App() -> impl IntoView {
    let view = PageView::new();
    let controller = Controller::new(BrowserTransport, ApiConfig::from_build_env());
    let ctx = AppContext::new(view, controller);

    // Provide context to all children
    provide_context(ctx);

    // Initial load: home
    Effect::new(move |_| {
        ctx.dispatch(Action::Home);
    });

    view! {
        <LoadingOverlay loading=view.loading />
        <div class="app-layout">
            <SideNav />
            <main class="content-area" id="contentArea">
                <ContentRegion />
            </main>
        </div>
    }
}
