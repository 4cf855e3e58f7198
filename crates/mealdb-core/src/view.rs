//! View State
//!
//! The only shared UI surface: one loading indicator and one content region
//! that every controller overwrites wholesale.

/// UI surface handed to every controller
///
/// Implementations use interior mutability; all calls happen on the UI thread.
pub trait ViewState {
    /// Idempotent
    fn show_loading(&self);
    /// Idempotent
    fn hide_loading(&self);
    /// Replace the content region with markup
    fn set_content(&self, markup: String);
    /// Append markup to the content region
    fn append_content(&self, markup: &str);
    /// Swap the content region for the search form, with no results
    fn open_search(&self);
    /// Replace the search results area
    fn set_results(&self, markup: String);
    /// Swap the content region for the contact form
    fn open_contact(&self);
}
