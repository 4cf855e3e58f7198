//! UI Components
//!
//! Leptos components around the controller-rendered markup.

mod contact_form;
mod content_region;
mod loading_overlay;
mod search_panel;
mod side_nav;

pub use contact_form::ContactForm;
pub use content_region::ContentRegion;
pub use loading_overlay::LoadingOverlay;
pub use search_panel::SearchPanel;
pub use side_nav::SideNav;
