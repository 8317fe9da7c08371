//! Branded header with member links and the theme toggle.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

pub const LOGO_URL: &str = "https://d502jbuhuh9wk.cloudfront.net/logos/640864ece4b04cd73b1926a9.png";
pub const LIBRARY_NAME: &str = "Learning Thoughts Library";

/// Icon for the theme toggle: the sun switches back to light, the moon to dark.
pub fn theme_icon(dark_mode: bool) -> IconKind {
    if dark_mode { IconKind::Brightness7 } else { IconKind::Brightness4 }
}

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle = move |_| {
        let next = crate::util::dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <header class="header">
            <div class="header__brand">
                <img class="header__logo" src=LOGO_URL alt=format!("{LIBRARY_NAME} Logo")/>
                <span class="header__title">{LIBRARY_NAME}</span>
            </div>
            <Show when=move || auth.get().is_logged_in()>
                <a class="header__link" href="/books">"Books"</a>
                <a class="header__link" href="/profile">"Profile"</a>
            </Show>
            <button class="header__theme" type="button" title="Toggle theme" on:click=on_toggle>
                {move || view! { <Icon kind=theme_icon(ui.get().dark_mode)/> }}
            </button>
        </header>
    }
}
