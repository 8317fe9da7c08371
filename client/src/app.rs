//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{header::Header, navbar::Navbar};
use crate::config::{ApiConfig, ApiConfigMeta};
use crate::pages::{
    books::BooksPage, home::HomePage, login::LoginPage, logout::LogoutPage, profile::ProfilePage,
};
use crate::state::{auth::AuthState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is echoed into `<head>` so the browser build can read it back.
pub fn shell(options: LeptosOptions, config: ApiConfig) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <ApiConfigMeta config/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and UI contexts and sets up client-side routing.
/// The session starts empty on every page load.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(auth);
    provide_context(ui);

    // Sync the header toggle with the stored/system preference once hydrated.
    Effect::new(move || {
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/library-store.css"/>
        <Title text="Library Store"/>

        <Router>
            <div class="app">
                <Header/>
                <Navbar/>
                <main class="app__main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("logout") view=LogoutPage/>
                        <Route path=StaticSegment("books") view=BooksPage/>
                        <Route path=StaticSegment("profile") view=ProfilePage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
