//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `books`, `profile`, `ui`) so pages and
//! components depend on small focused models.

pub mod auth;
pub mod books;
pub mod profile;
pub mod ui;
