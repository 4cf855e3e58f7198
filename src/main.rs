//! Meal Browser Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod timer;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);
    mount_to_body(App);
}
