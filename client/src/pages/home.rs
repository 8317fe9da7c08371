//! Landing page with a hero banner and a login-aware call to action.

use leptos::prelude::*;

use crate::components::header::LIBRARY_NAME;
use crate::state::auth::AuthState;

const HERO_IMAGE_URL: &str = "https://thumbs.dreamstime.com/b/old-book-flying-letters-magic-light-background-bookshelf-library-ancient-books-as-symbol-knowledge-history-218640948.jpg";

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let hero_style = format!("background-image: url(\"{HERO_IMAGE_URL}\")");

    view! {
        <div class="home-page">
            <section class="home-card">
                <div class="home-card__hero" style=hero_style>
                    <h1 class="home-card__hero-title">{LIBRARY_NAME}</h1>
                </div>
                <div class="home-card__body">
                    <h2>"Welcome to our digital haven of knowledge"</h2>
                    <p>
                        "Explore our vast collection of books, from classic literature to cutting-edge research. "
                        "Our library is designed to inspire, educate, and entertain readers of all ages and interests."
                    </p>
                    <Show
                        when=move || auth.get().is_logged_in()
                        fallback=|| {
                            view! {
                                <div class="home-card__cta">
                                    <p>"Please log in to access your account and start your reading journey."</p>
                                    <a class="btn btn--primary" href="/login">"Login"</a>
                                </div>
                            }
                        }
                    >
                        <div class="home-card__cta">
                            <p>"Browse our collection of books and manage your account."</p>
                            <button class="btn btn--primary" type="button" on:click=move |_| auth.update(AuthState::logout)>
                                "Logout"
                            </button>
                        </div>
                    </Show>
                </div>
            </section>
        </div>
    }
}
