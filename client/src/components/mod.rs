//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and catalog views while reading shared state
//! from Leptos context providers.

pub mod book_card;
pub mod book_list;
pub mod header;
pub mod icons;
pub mod navbar;
