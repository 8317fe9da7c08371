//! Wire DTOs for the external users and books services.
//!
//! DESIGN
//! ======
//! Responses are decoded verbatim and never mutated locally. Fields the views
//! do not render (`created_at`, `modified_at` on books, `user_type` on users)
//! are ignored rather than modeled.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A catalog entry as returned by `GET {BOOKS_API_URL}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub description: String,
    /// Cover image URL; books without one render no `<img>`.
    #[serde(default)]
    pub image_path: Option<String>,
    /// Stock level. Not validated: negative counts are accepted as-is.
    pub inventory_count: i64,
}

impl Book {
    /// Whether the book can currently be borrowed.
    pub fn is_available(&self) -> bool {
        self.inventory_count > 0
    }
}

/// Token response from `POST {BACKEND_API_URL}/token`.
///
/// Only `access_token` is required; the users service also sends a refresh
/// token and a token type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// The signed-in user's profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(alias = "username")]
    pub name: String,
    pub email: String,
    #[serde(alias = "createdAt")]
    pub created_at: String,
}

/// Error body shapes seen from the services: `{"message": ...}` or
/// FastAPI's `{"detail": ...}` (string, or a validation list).
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
impl ErrorBody {
    /// Human message carried by the body, preferring `message` over `detail`.
    pub(crate) fn into_message(self) -> Option<String> {
        let detail = match self.detail {
            Some(serde_json::Value::String(s)) => Some(s),
            _ => None,
        };
        self.message
            .or(detail)
            .filter(|m| !m.trim().is_empty())
    }
}
