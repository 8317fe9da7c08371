//! Dark-mode preference for the header toggle.
//!
//! The preference lives in `localStorage`; without one, the system
//! `prefers-color-scheme` query decides. The active theme is a `theme--dark`
//! class on `<html>`. Browser access only happens under `hydrate`.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "library_store_dark_mode";
#[cfg(feature = "hydrate")]
const DARK_CLASS: &str = "theme--dark";

/// Decode a stored preference; anything but `"1"`/`"0"` counts as unset.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn parse_stored(raw: &str) -> Option<bool> {
    match raw {
        "1" => Some(true),
        "0" => Some(false),
        _ => None,
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn encode(enabled: bool) -> &'static str {
    if enabled { "1" } else { "0" }
}

/// Read the saved preference, falling back to the system color scheme.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|v| parse_stored(&v));
        if let Some(enabled) = stored {
            return enabled;
        }
        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Add or remove the dark theme class on the document element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(el) = root {
            let classes = el.class_list();
            let _ = if enabled { classes.add_1(DARK_CLASS) } else { classes.remove_1(DARK_CLASS) };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme, apply it, and persist the new value. Returns the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, encode(next));
        }
    }
    next
}
