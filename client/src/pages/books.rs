//! `/books` route: guard on the session, then render the catalog.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::book_list::BookList;
use crate::config::use_api_config;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn BooksPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());
    let config = use_api_config();

    // Re-mount the list when the token changes so it fetches exactly once per token.
    let token = Memo::new(move |_| auth.with(|a| a.access_token().map(str::to_owned)));

    view! {
        <div class="books-page">
            {move || view! { <BookList access_token=token.get() config=config.clone()/> }}
        </div>
    }
}
