//! Card for a single book in the catalog grid.
//!
//! Availability is derived purely from `inventory_count > 0`. The hover
//! lift/shadow lives in the stylesheet (`.book-card:hover`).

#[cfg(test)]
#[path = "book_card_test.rs"]
mod book_card_test;

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::net::types::Book;

/// Card classes for a given availability.
pub fn card_class(available: bool) -> &'static str {
    if available { "book-card" } else { "book-card book-card--unavailable" }
}

/// Status icon and label for a given availability.
pub fn availability_badge(available: bool) -> (IconKind, &'static str) {
    if available {
        (IconKind::CheckCircle, "Available")
    } else {
        (IconKind::Cancel, "Unavailable")
    }
}

pub fn cover_alt(title: &str) -> String {
    format!("Cover of {title}")
}

#[component]
pub fn BookCard(book: Book) -> impl IntoView {
    let available = book.is_available();
    let (icon, label) = availability_badge(available);
    let status_class = if available {
        "book-card__status book-card__status--available"
    } else {
        "book-card__status book-card__status--unavailable"
    };
    let alt = cover_alt(&book.title);

    view! {
        <div class=card_class(available)>
            {book.image_path.map(|src| view! { <img class="book-card__cover" src=src alt=alt/> })}
            <h3 class="book-card__title">{book.title}</h3>
            <p class="book-card__author">{format!("by {}", book.author)}</p>
            <p class=status_class>
                <Icon kind=icon class="book-card__status-icon"/>
                <span>{label}</span>
            </p>
        </div>
    }
}
