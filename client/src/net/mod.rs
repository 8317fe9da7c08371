//! Networking modules for the external REST services.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the login, book, and profile requests, `error` classifies
//! their failures, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
