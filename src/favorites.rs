//! Saved favorites.
//!
//! A favorite is a (mood, quote) pair with a unique id. The whole list is
//! serialized to the store as a single JSON value after every mutation;
//! decoding is an explicit step that yields either a valid list or an empty
//! one, so a corrupt payload can never take the app down.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::mood::Mood;

/// A user-saved quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: Uuid,
    pub mood: Mood,
    pub text: String,
}

impl Favorite {
    /// Create a favorite with a fresh id
    pub fn new(mood: Mood, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            mood,
            text: text.into(),
        }
    }
}

/// Decode a persisted favorites payload.
///
/// Any parse failure falls back to an empty list; the error is logged and
/// never surfaced to the user.
pub fn decode(raw: &str) -> Vec<Favorite> {
    match serde_json::from_str(raw) {
        Ok(list) => list,
        Err(e) => {
            tracing::warn!("Discarding corrupt favorites payload: {}", e);
            Vec::new()
        }
    }
}
