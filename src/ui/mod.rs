//! UI rendering for Quip
//!
//! Render functions read app state and push `Action`s; they never mutate
//! the state directly.

mod favorites_panel;
mod mood_bar;
mod quote_card;
pub mod theme;

pub use favorites_panel::render_favorites_panel;
pub use mood_bar::render_mood_bar;
pub use quote_card::render_quote_card;
