//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches the health probe, the static WASM/CSS bundle, and Leptos SSR
//! rendering of the client app under a single Axum router. The remote users
//! and books services are called directly from the browser, so no API routes
//! live here.


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use client::config::ApiConfig;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Leptos SSR frontend plus static assets.
pub fn app(leptos_options: LeptosOptions, api: ApiConfig) -> Router {
    let routes = generate_route_list(client::app::App);
    let pkg_dir = PathBuf::from(leptos_options.site_root.as_ref()).join(leptos_options.site_pkg_dir.as_ref());

    Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let api = api.clone();
                move || provide_context(api.clone())
            },
            {
                let opts = leptos_options.clone();
                move || client::app::shell(opts.clone(), api.clone())
            },
        )
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Page not found.")
}
