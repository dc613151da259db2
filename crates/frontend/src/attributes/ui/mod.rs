//! Attribute entry form UI.
//!
//! Simplified MVVM split, same shape as the rest of the app:
//! - `view_model.rs`: signals and commands, no markup
//! - `view.rs`: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::AttributeEntryForm;
pub use view_model::AttributeFormViewModel;
