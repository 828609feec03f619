use eframe::egui;
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::clipboard::{self, ClipboardWriter, SystemClipboard};
use crate::config::Config;
use crate::mood::{Animation, Mood};
use crate::state::{AppState, SaveOutcome};
use crate::store::FileStore;
use crate::ui;
use crate::ui::theme::Theme;

/// How long a status flash stays on screen
const STATUS_FLASH: Duration = Duration::from_millis(1400);

/// Duration of the quote transition effect
const QUOTE_ANIM_SECS: f32 = 0.45;

/// User actions produced by the render layer.
///
/// The UI never mutates state directly; it pushes actions that are drained
/// and applied after the frame is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectMood(Mood),
    NewQuote,
    CopyQuote,
    SaveFavorite,
    RemoveFavorite(Uuid),
    ClearFavorites,
}

/// Transient status message with an expiry deadline
pub struct Flash {
    pub text: String,
    pub ok: bool,
    pub expires_at: Instant,
}

/// A running quote transition effect
pub struct QuoteAnim {
    pub kind: Animation,
    started: Instant,
}

impl QuoteAnim {
    /// Progress in `[0, 1]`
    pub fn progress(&self) -> f32 {
        (self.started.elapsed().as_secs_f32() / QUOTE_ANIM_SECS).min(1.0)
    }
}

/// Main application state
pub struct QuipApp {
    /// User preferences
    pub config: Config,
    /// Persistent key-value store
    pub store: FileStore,
    /// Clipboard access, substitutable for tests
    pub clipboard: Box<dyn ClipboardWriter>,
    /// Mood, quote, and favorites
    pub state: AppState,
    /// Status flash, if one is showing
    pub flash: Option<Flash>,
    /// Running quote transition, if any
    pub quote_anim: Option<QuoteAnim>,
    /// Theme for the active mood
    pub theme: Theme,
    /// Whether the theme needs to be re-applied to the context
    theme_dirty: bool,
    /// Actions collected from the render layer this frame
    pub pending: Vec<Action>,
}

impl QuipApp {
    /// Create a new application instance
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = Config::load().unwrap_or_else(|e| {
            tracing::error!("Failed to load config: {}", e);
            Config::default()
        });

        let store = match FileStore::open() {
            Ok(store) => store,
            Err(e) => {
                // Session-only persistence is better than no app at all
                tracing::error!("Failed to open store: {}", e);
                FileStore::at(std::env::temp_dir().join("quip"))
            }
        };

        Self::with_parts(config, store, Box::new(SystemClipboard))
    }

    fn with_parts(config: Config, store: FileStore, clipboard: Box<dyn ClipboardWriter>) -> Self {
        let state = AppState::restore(&store, &mut rand::thread_rng());
        let theme = Theme::for_mood(state.mood);
        tracing::info!(
            "Restored mood {} with {} favorites",
            state.mood,
            state.favorites.len()
        );

        Self {
            config,
            store,
            clipboard,
            state,
            flash: None,
            quote_anim: None,
            theme,
            theme_dirty: true,
            pending: Vec::new(),
        }
    }

    /// Apply a single user action
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SelectMood(mood) => {
                self.state.set_mood(mood, &mut self.store);
                self.state.refresh_quote(&mut rand::thread_rng());
                self.theme_dirty = true;
                self.restart_quote_anim();
            }
            Action::NewQuote => {
                self.state.refresh_quote(&mut rand::thread_rng());
                self.restart_quote_anim();
            }
            Action::CopyQuote => {
                let payload = clipboard::format_payload(self.state.mood, &self.state.quote);
                match self.clipboard.write_text(&payload) {
                    Ok(()) => self.set_flash("Copied!", true),
                    Err(e) => {
                        tracing::warn!("Clipboard write failed: {}", e);
                        self.set_flash("Clipboard blocked", false);
                    }
                }
            }
            Action::SaveFavorite => match self.state.save_favorite(&mut self.store) {
                SaveOutcome::Saved => self.set_flash("Saved", true),
                SaveOutcome::Duplicate => self.set_flash("Already saved", false),
                SaveOutcome::NoQuote => {}
            },
            Action::RemoveFavorite(id) => self.state.remove_favorite(id, &mut self.store),
            Action::ClearFavorites => self.state.clear_favorites(&mut self.store),
        }
    }

    /// Show a transient status message.
    ///
    /// A newer flash replaces the text and restarts the expiry timer.
    pub fn set_flash(&mut self, text: &str, ok: bool) {
        self.flash = Some(Flash {
            text: text.to_string(),
            ok,
            expires_at: Instant::now() + STATUS_FLASH,
        });
    }

    /// Restart the quote transition from zero, so an identical effect
    /// replays even when the mood hasn't changed
    fn restart_quote_anim(&mut self) {
        self.quote_anim = None;
        if !self.config.ui.animate {
            return;
        }
        if let Some(kind) = self.state.mood.animation() {
            self.quote_anim = Some(QuoteAnim {
                kind,
                started: Instant::now(),
            });
        }
    }

    /// Save configuration to disk
    pub fn save_config(&self) {
        if let Err(e) = self.config.save() {
            tracing::error!("Failed to save config: {}", e);
        }
    }
}

impl eframe::App for QuipApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.theme_dirty {
            self.theme = Theme::for_mood(self.state.mood);
            self.theme.apply(ctx);
            self.theme_dirty = false;
        }

        // Expire the status flash; keep repainting while one is showing
        let now = Instant::now();
        if self.flash.as_ref().is_some_and(|f| now >= f.expires_at) {
            self.flash = None;
        }
        if let Some(flash) = &self.flash {
            ctx.request_repaint_after(flash.expires_at - now);
        }

        // Drop finished transitions; repaint while one is running
        if self.quote_anim.as_ref().is_some_and(|a| a.progress() >= 1.0) {
            self.quote_anim = None;
        }
        if self.quote_anim.is_some() {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("mood_bar").show(ctx, |ui| {
            ui::render_mood_bar(self, ui);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let mut animate = self.config.ui.animate;
                if ui.checkbox(&mut animate, "Animate quotes").changed() {
                    self.config.ui.animate = animate;
                    self.save_config();
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("Quip {}", env!("CARGO_PKG_VERSION")))
                            .size(11.0)
                            .color(self.theme.text_muted),
                    );
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui::render_quote_card(self, ui);
            ui.add_space(12.0);
            ui::render_favorites_panel(self, ui);
        });

        // Apply this frame's actions after layout
        let pending = std::mem::take(&mut self.pending);
        for action in pending {
            self.apply(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{KEY_FAVORITES, KEY_MOOD, KeyValueStore};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records written payloads, or fails every write
    struct StubClipboard {
        fail: bool,
        written: Rc<RefCell<Vec<String>>>,
    }

    impl ClipboardWriter for StubClipboard {
        fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("clipboard access denied");
            }
            self.written.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    fn test_app(dir: &std::path::Path) -> QuipApp {
        test_app_with_clipboard(dir, false).0
    }

    fn test_app_with_clipboard(
        dir: &std::path::Path,
        fail: bool,
    ) -> (QuipApp, Rc<RefCell<Vec<String>>>) {
        let written = Rc::new(RefCell::new(Vec::new()));
        let clipboard = StubClipboard {
            fail,
            written: Rc::clone(&written),
        };
        let app = QuipApp::with_parts(
            Config::default(),
            FileStore::at(dir),
            Box::new(clipboard),
        );
        (app, written)
    }

    #[test]
    fn select_mood_switches_state_theme_and_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.theme_dirty = false;

        app.apply(Action::SelectMood(Mood::Dark));
        assert_eq!(app.state.mood, Mood::Dark);
        assert!(app.theme_dirty);
        assert_eq!(app.store.get(KEY_MOOD).as_deref(), Some("dark"));
    }

    #[test]
    fn duplicate_save_flashes_already_saved() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());

        app.apply(Action::SaveFavorite);
        assert_eq!(app.flash.as_ref().unwrap().text, "Saved");

        app.apply(Action::SaveFavorite);
        let flash = app.flash.as_ref().unwrap();
        assert_eq!(flash.text, "Already saved");
        assert!(!flash.ok);
        assert_eq!(app.state.favorites.len(), 1);
    }

    #[test]
    fn remove_and_clear_reach_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());

        app.apply(Action::SaveFavorite);
        let id = app.state.favorites[0].id;
        app.apply(Action::RemoveFavorite(id));
        assert!(app.state.favorites.is_empty());

        app.apply(Action::SaveFavorite);
        app.apply(Action::ClearFavorites);
        assert!(app.state.favorites.is_empty());
        assert_eq!(app.store.get(KEY_FAVORITES).as_deref(), Some("[]"));
    }

    #[test]
    fn copy_writes_payload_and_flashes_success() {
        let dir = tempfile::tempdir().unwrap();
        let (mut app, written) = test_app_with_clipboard(dir.path(), false);

        app.apply(Action::CopyQuote);
        let flash = app.flash.as_ref().unwrap();
        assert_eq!(flash.text, "Copied!");
        assert!(flash.ok);

        let written = written.borrow();
        assert_eq!(written.len(), 1);
        let expected = clipboard::format_payload(app.state.mood, &app.state.quote);
        assert_eq!(written[0], expected);
    }

    #[test]
    fn copy_failure_flashes_clipboard_blocked() {
        let dir = tempfile::tempdir().unwrap();
        let (mut app, written) = test_app_with_clipboard(dir.path(), true);

        app.apply(Action::CopyQuote);
        let flash = app.flash.as_ref().unwrap();
        assert_eq!(flash.text, "Clipboard blocked");
        assert!(!flash.ok);
        assert!(written.borrow().is_empty());
    }

    #[test]
    fn reselecting_the_active_mood_still_rerolls_the_quote() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        let before = app.state.quote.clone();

        app.apply(Action::SelectMood(app.state.mood));
        assert_ne!(app.state.quote, before);
        assert!(app.quote_anim.is_some());
    }

    #[test]
    fn animations_respect_the_config_toggle() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());

        app.apply(Action::NewQuote);
        assert!(app.quote_anim.is_some());

        app.config.ui.animate = false;
        app.apply(Action::NewQuote);
        assert!(app.quote_anim.is_none());
    }

    #[test]
    fn newer_flash_replaces_the_pending_one() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());

        app.set_flash("first", true);
        let first_deadline = app.flash.as_ref().unwrap().expires_at;
        app.set_flash("second", false);
        let flash = app.flash.as_ref().unwrap();
        assert_eq!(flash.text, "second");
        assert!(flash.expires_at >= first_deadline);
    }
}
