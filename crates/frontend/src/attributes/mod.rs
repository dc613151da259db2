//! Attribute entry form: state, API access and UI.

pub mod api;
pub mod state;
pub mod ui;
