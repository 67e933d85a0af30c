//! Summary screen UI module
//!
//! - view_model.rs: description template and tag-set rules
//! - view.rs: full-screen editable summary component

mod view;
mod view_model;

pub use view::SummaryScreen;
pub use view_model::SummaryVm;
