//! Book grid backed by one authenticated fetch on mount.

use leptos::prelude::*;

use crate::components::book_card::BookCard;
use crate::config::ApiConfig;
use crate::net::error::ApiError;
use crate::state::books::{BookListView, EMPTY_MESSAGE, LOADING_MESSAGE, SIGNED_OUT_MESSAGE};

/// Renders the catalog for `access_token`. Without a token nothing is fetched.
#[component]
pub fn BookList(access_token: Option<String>, config: ApiConfig) -> impl IntoView {
    let has_token = access_token.as_deref().is_some_and(|t| !t.trim().is_empty());

    let books = LocalResource::new(move || {
        let config = config.clone();
        let token = access_token.clone();
        async move {
            let result = crate::net::api::fetch_books(&config, token.as_deref()).await;
            match &result {
                Err(ApiError::MissingToken) | Ok(_) => {}
                Err(e) => leptos::logging::warn!("book fetch failed: {e}"),
            }
            result
        }
    });

    let loading = move || view! { <div class="booklist__message">{LOADING_MESSAGE}</div> };

    view! {
        <Suspense fallback=loading>
            {move || match BookListView::resolve(has_token, books.get()) {
                BookListView::SignedOut => {
                    view! { <div class="booklist__message">{SIGNED_OUT_MESSAGE}</div> }.into_any()
                }
                BookListView::Loading => loading().into_any(),
                BookListView::Failed(text) => {
                    view! { <div class="booklist__message booklist__message--error">{text}</div> }.into_any()
                }
                BookListView::Empty => {
                    view! {
                        <div class="booklist">
                            <h2>"Book List"</h2>
                            <p>{EMPTY_MESSAGE}</p>
                        </div>
                    }
                        .into_any()
                }
                BookListView::Loaded(list) => {
                    view! {
                        <div class="booklist">
                            <h2>"Book List"</h2>
                            <div class="book-grid">
                                {list
                                    .into_iter()
                                    .map(|book| view! { <BookCard book=book/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </Suspense>
    }
}
