//! Loading Overlay Component

use leptos::prelude::*;

/// Full-page spinner shown while a view is fetching
#[component]
pub fn LoadingOverlay(loading: RwSignal<bool>) -> impl IntoView {
    view! {
        <div
            id="loading"
            class="loading-overlay"
            style=move || if loading.get() { "display:flex" } else { "display:none" }
            aria-hidden=move || if loading.get() { "false" } else { "true" }
        >
            <span class="spinner"></span>
        </div>
    }
}
