//! Login page: password-grant sign-in against the users service.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::config::use_api_config;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
use crate::state::auth::AuthState;

const MISSING_FIELDS_MESSAGE: &str = "Enter both username and password.";
#[cfg(any(test, feature = "hydrate"))]
const LOGIN_FAILED_MESSAGE: &str = "Login failed";

/// Trim the username and require both fields. Passwords are sent untouched.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Text shown after a failed login: the server's message, else a fallback.
#[cfg(any(test, feature = "hydrate"))]
fn login_error_message(err: &ApiError) -> String {
    err.server_message().unwrap_or(LOGIN_FAILED_MESSAGE).to_owned()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = use_api_config();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(String::new());
        let (user_value, pass_value) = match validate_login_input(&username.get_untracked(), &password.get_untracked()) {
            Ok(v) => v,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&config, &user_value, &pass_value).await {
                    Ok(session) => {
                        auth.update(|a| a.login(session));
                        navigate("/", NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("login failed: {e}");
                        error.set(login_error_message(&e));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, auth, user_value, pass_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Login"</h1>
                <form class="login-form" on:submit=on_submit>
                    <Show when=move || !error.get().is_empty()>
                        <p class="login-message login-message--error">{move || error.get()}</p>
                    </Show>
                    <label class="login-label" for="username">"Username"</label>
                    <input
                        class="login-input"
                        id="username"
                        name="username"
                        type="text"
                        autocomplete="username"
                        autofocus=true
                        required=true
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label class="login-label" for="password">"Password"</label>
                    <input
                        class="login-input"
                        id="password"
                        name="password"
                        type="password"
                        autocomplete="current-password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Login"
                    </button>
                </form>
            </div>
        </div>
    }
}
