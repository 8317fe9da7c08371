//! `/profile` route: the signed-in user's account details.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::use_api_config;
use crate::state::auth::AuthState;
use crate::state::profile::{FAILED_MESSAGE, LOADING_MESSAGE, ProfileView};
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());
    let config = use_api_config();

    let profile = LocalResource::new(move || {
        let config = config.clone();
        let token = auth.with_untracked(|a| a.access_token().map(str::to_owned));
        async move {
            let result = crate::net::api::fetch_profile(&config, token.as_deref()).await;
            if let Err(e) = &result {
                leptos::logging::warn!("profile fetch failed: {e}");
            }
            result
        }
    });

    let loading = move || view! { <div class="profile__message">{LOADING_MESSAGE}</div> };

    view! {
        <Suspense fallback=loading>
            {move || match ProfileView::resolve(profile.get()) {
                ProfileView::Loading => loading().into_any(),
                ProfileView::Failed => view! { <div class="profile__message">{FAILED_MESSAGE}</div> }.into_any(),
                ProfileView::Loaded(summary) => {
                    view! {
                        <div class="profile">
                            <h1>"User Profile"</h1>
                            <p><strong>"Name:"</strong>" "{summary.name}</p>
                            <p><strong>"Email:"</strong>" "{summary.email}</p>
                            <p><strong>"Member Since:"</strong>" "{summary.member_since}</p>
                        </div>
                    }
                        .into_any()
                }
            }}
        </Suspense>
    }
}
