//! Application state and its mutation operations.
//!
//! `AppState` owns the current mood, the current quote, and the favorites
//! list. Every mutation goes through a method here; the ones that touch
//! persisted data write to the store immediately. Store write failures are
//! logged and never propagate — losing a write is not worth crashing a
//! quote widget over.

use rand::Rng;
use uuid::Uuid;

use crate::favorites::{self, Favorite};
use crate::mood::Mood;
use crate::quotes;
use crate::store::{KEY_FAVORITES, KEY_MOOD, KeyValueStore};

/// Result of a save-favorite attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The quote was added to the favorites list
    Saved,
    /// An entry with the same mood and text already exists
    Duplicate,
    /// There was no current quote to save
    NoQuote,
}

/// In-memory application state
pub struct AppState {
    /// Active mood; persists across sessions
    pub mood: Mood,
    /// Currently displayed quote; recomputed at startup
    pub quote: String,
    /// Saved quotes, most recently saved first; persist across sessions
    pub favorites: Vec<Favorite>,
}

impl AppState {
    /// Rebuild state from the store.
    ///
    /// An invalid or missing stored mood falls back to the default. The
    /// initial quote is freshly picked, not persisted, and the restored
    /// mood is not written back (it was just read).
    pub fn restore(store: &dyn KeyValueStore, rng: &mut impl Rng) -> Self {
        let mood = store
            .get(KEY_MOOD)
            .and_then(|raw| {
                raw.parse::<Mood>()
                    .map_err(|e| tracing::debug!("Ignoring stored mood: {}", e))
                    .ok()
            })
            .unwrap_or_default();

        let favorites = store
            .get(KEY_FAVORITES)
            .map(|raw| favorites::decode(&raw))
            .unwrap_or_default();

        let quote = quotes::pick(mood, None, rng);

        Self {
            mood,
            quote,
            favorites,
        }
    }

    /// Switch the active mood and persist it
    pub fn set_mood(&mut self, mood: Mood, store: &mut dyn KeyValueStore) {
        self.mood = mood;
        if let Err(e) = store.set(KEY_MOOD, mood.key()) {
            tracing::error!("Failed to persist mood: {}", e);
        }
    }

    /// Pick a new quote for the active mood, avoiding the current one
    pub fn refresh_quote(&mut self, rng: &mut impl Rng) {
        self.quote = quotes::pick(self.mood, Some(&self.quote), rng);
    }

    /// Save the current quote to the favorites list.
    ///
    /// New entries are prepended. Duplicates (same mood and text) and an
    /// empty current quote are recoverable no-ops.
    pub fn save_favorite(&mut self, store: &mut dyn KeyValueStore) -> SaveOutcome {
        if self.quote.is_empty() {
            return SaveOutcome::NoQuote;
        }
        let duplicate = self
            .favorites
            .iter()
            .any(|f| f.mood == self.mood && f.text == self.quote);
        if duplicate {
            return SaveOutcome::Duplicate;
        }

        self.favorites
            .insert(0, Favorite::new(self.mood, self.quote.clone()));
        self.persist_favorites(store);
        SaveOutcome::Saved
    }

    /// Remove the favorite with the given id; unknown ids are a no-op
    pub fn remove_favorite(&mut self, id: Uuid, store: &mut dyn KeyValueStore) {
        let before = self.favorites.len();
        self.favorites.retain(|f| f.id != id);
        if self.favorites.len() != before {
            self.persist_favorites(store);
        }
    }

    /// Empty the favorites list
    pub fn clear_favorites(&mut self, store: &mut dyn KeyValueStore) {
        self.favorites.clear();
        self.persist_favorites(store);
    }

    /// Serialize the whole favorites list to the store
    fn persist_favorites(&self, store: &mut dyn KeyValueStore) {
        match serde_json::to_string(&self.favorites) {
            Ok(raw) => {
                if let Err(e) = store.set(KEY_FAVORITES, &raw) {
                    tracing::error!("Failed to persist favorites: {}", e);
                }
            }
            Err(e) => tracing::error!("Failed to serialize favorites: {}", e),
        }
    }
}
