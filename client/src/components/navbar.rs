//! Top navigation bar with login-aware links.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::state::auth::AuthState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: IconKind,
    /// Clicking this item ends the session.
    pub logs_out: bool,
}

/// Links shown in the navbar for the given login state.
pub fn nav_items(logged_in: bool) -> Vec<NavItem> {
    let mut items = vec![
        NavItem { path: "/", label: "Home", icon: IconKind::Home, logs_out: false },
        NavItem { path: "/books", label: "Books", icon: IconKind::MenuBook, logs_out: false },
    ];
    items.push(if logged_in {
        NavItem { path: "/logout", label: "Logout", icon: IconKind::Logout, logs_out: true }
    } else {
        NavItem { path: "/login", label: "Login", icon: IconKind::Login, logs_out: false }
    });
    items
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <nav class="navbar">
            <button class="navbar__menu" type="button" aria-label="menu">
                <Icon kind=IconKind::Menu/>
            </button>
            <span class="navbar__title">"Library Store"</span>
            <div class="navbar__links">
                {move || {
                    nav_items(auth.get().is_logged_in())
                        .into_iter()
                        .map(|item| {
                            view! {
                                <a
                                    class="navbar__link"
                                    href=item.path
                                    on:click=move |_| {
                                        if item.logs_out {
                                            auth.update(AuthState::logout);
                                        }
                                    }
                                >
                                    <Icon kind=item.icon/>
                                    <span>{item.label}</span>
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </nav>
    }
}
