//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, fetch triggers) and
//! delegates rendering details to `components`.

pub mod books;
pub mod home;
pub mod login;
pub mod logout;
pub mod profile;
