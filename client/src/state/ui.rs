//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation toggles out of session state so the header can evolve
//! independently of auth.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}
