//! Pricing screen UI module
//!
//! - view_model.rs: keypad entry rules
//! - view.rs: bottom-sheet keypad component

mod view;
mod view_model;

pub use view::PricingScreen;
pub use view_model::{PricingVm, MAX_PRICE_DIGITS, QUICK_PRICES};
