//! MealDB Browser Core
//!
//! Target-independent half of the recipe browser:
//! - config: API base and list/debounce limits
//! - api: endpoint catalogue, transport trait and the fetch wrapper
//! - models: meal, category, area and ingredient records
//! - html / render: escaping and markup fragments
//! - view: the `ViewState` seam the UI implements
//! - action: view/tile identifiers carried in rendered markup
//! - controller: one entry point per screen plus the action dispatch table
//! - debounce: cancellable timers for keystroke-driven searches
//! - contact: contact form validation

pub mod action;
pub mod api;
pub mod config;
pub mod contact;
pub mod controller;
pub mod debounce;
pub mod html;
pub mod models;
pub mod render;
pub mod view;

#[cfg(test)]
mod testing;

pub use action::Action;
pub use api::{ApiClient, Endpoint, FetchError, Transport};
pub use config::ApiConfig;
pub use contact::{ContactField, ContactForm};
pub use controller::{Controller, SearchMode};
pub use debounce::{Debouncer, TimerDriver};
pub use models::{Area, Category, IngredientEntry, Meal, MealIngredient};
pub use view::ViewState;
