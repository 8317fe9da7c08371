//! Remote API endpoints used by the client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host reads `BOOKS_API_URL` / `BACKEND_API_URL` from its environment and
//! provides an `ApiConfig` through Leptos context during SSR. The shell also
//! renders both URLs as `<meta>` tags so the hydrated WASM app can recover the
//! same values with `ApiConfig::from_document`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use leptos::prelude::*;

pub const DEFAULT_BOOKS_API_URL: &str = "http://localhost:8000/api/v1/books";
pub const DEFAULT_BACKEND_API_URL: &str = "http://localhost:8001/api/v1";

/// `<meta name=...>` carrying the books collection endpoint.
pub const BOOKS_META_NAME: &str = "books-api-url";
/// `<meta name=...>` carrying the users-service base URL.
pub const BACKEND_META_NAME: &str = "backend-api-url";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Full URL of the books collection (`GET` returns every book).
    pub books_api_url: String,
    /// Base URL of the users service; `/token` and `/users/profile` hang off it.
    pub backend_api_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BOOKS_API_URL, DEFAULT_BACKEND_API_URL)
    }
}

impl ApiConfig {
    /// Build a config, trimming a trailing `/` from the backend base so endpoint
    /// joins never produce `//token`.
    pub fn new(books_api_url: impl Into<String>, backend_api_url: impl Into<String>) -> Self {
        let backend: String = backend_api_url.into();
        Self {
            books_api_url: books_api_url.into(),
            backend_api_url: backend.trim_end_matches('/').to_owned(),
        }
    }

    /// Build from optional raw values, falling back to defaults for missing or
    /// blank entries.
    pub fn from_parts(books: Option<&str>, backend: Option<&str>) -> Self {
        let pick = |raw: Option<&str>, default: &str| {
            raw.map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_owned()
        };
        Self::new(
            pick(books, DEFAULT_BOOKS_API_URL),
            pick(backend, DEFAULT_BACKEND_API_URL),
        )
    }

    /// `POST` target for the password-grant login.
    pub fn token_endpoint(&self) -> String {
        format!("{}/token", self.backend_api_url)
    }

    /// `GET` target for the signed-in user's profile.
    pub fn profile_endpoint(&self) -> String {
        format!("{}/users/profile", self.backend_api_url)
    }

    /// Read the URLs the SSR shell embedded in `<head>`.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let read = |name: &str| -> Option<String> {
                let doc = web_sys::window()?.document()?;
                let el = doc
                    .query_selector(&format!("meta[name=\"{name}\"]"))
                    .ok()??;
                el.get_attribute("content")
            };
            Self::from_parts(
                read(BOOKS_META_NAME).as_deref(),
                read(BACKEND_META_NAME).as_deref(),
            )
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}

/// Resolve the active config: context first (SSR), then the document (hydrate).
pub fn use_api_config() -> ApiConfig {
    use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_document)
}

/// `<meta>` tags exposing `config` to the hydrated app.
#[component]
pub fn ApiConfigMeta(config: ApiConfig) -> impl IntoView {
    view! {
        <meta name=BOOKS_META_NAME content=config.books_api_url/>
        <meta name=BACKEND_META_NAME content=config.backend_api_url/>
    }
}
