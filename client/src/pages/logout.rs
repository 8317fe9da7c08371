//! `/logout` route: drop the session and return home.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

#[component]
pub fn LogoutPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        auth.update(AuthState::logout);
        navigate("/", NavigateOptions { replace: true, ..NavigateOptions::default() });
    });

    view! { <p class="logout-message">"Signing out..."</p> }
}
