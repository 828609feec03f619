//! Per-mood themes.
//!
//! Each mood restyles the whole window, the way the browser original
//! swapped `mood-*` classes on the body element.

use eframe::egui::{self, Color32, Stroke, Visuals};

use crate::mood::Mood;

/// Theme color definitions
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg_darkest: Color32,
    pub bg_dark: Color32,
    pub bg_medium: Color32,
    pub bg_light: Color32,

    // Text colors
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,

    // Accent colors
    pub accent: Color32,
    pub accent_hover: Color32,
    pub accent_muted: Color32,

    // Semantic colors
    pub success: Color32,
    pub error: Color32,

    // UI element colors
    pub border: Color32,
    pub selection: Color32,
}

impl Theme {
    /// Get the theme for a mood
    pub fn for_mood(mood: Mood) -> Self {
        match mood {
            Mood::Happy => Theme::happy(),
            Mood::Sad => Theme::sad(),
            Mood::Angry => Theme::angry(),
            Mood::Chill => Theme::chill(),
            Mood::Savage => Theme::savage(),
            Mood::Istarii => Theme::istarii(),
            Mood::Dark => Theme::dark(),
        }
    }

    /// Happy - warm amber glow
    fn happy() -> Self {
        Self {
            bg_darkest: Color32::from_rgb(26, 22, 12),
            bg_dark: Color32::from_rgb(36, 30, 16),
            bg_medium: Color32::from_rgb(48, 40, 22),
            bg_light: Color32::from_rgb(66, 55, 30),

            text_primary: Color32::from_rgb(254, 249, 231),
            text_secondary: Color32::from_rgb(222, 210, 170),
            text_muted: Color32::from_rgb(160, 148, 110),

            accent: Color32::from_rgb(250, 204, 21),        // Yellow-400
            accent_hover: Color32::from_rgb(254, 240, 138), // Yellow-200
            accent_muted: Color32::from_rgb(180, 140, 10),

            success: Color32::from_rgb(74, 222, 128),
            error: Color32::from_rgb(248, 113, 113),

            border: Color32::from_rgb(90, 76, 42),
            selection: Color32::from_rgb(250, 204, 21).gamma_multiply(0.3),
        }
    }

    /// Sad - washed-out blue grey
    fn sad() -> Self {
        Self {
            bg_darkest: Color32::from_rgb(13, 18, 28),
            bg_dark: Color32::from_rgb(19, 26, 38),
            bg_medium: Color32::from_rgb(28, 37, 52),
            bg_light: Color32::from_rgb(40, 52, 70),

            text_primary: Color32::from_rgb(226, 232, 240),
            text_secondary: Color32::from_rgb(180, 192, 208),
            text_muted: Color32::from_rgb(120, 132, 150),

            accent: Color32::from_rgb(96, 165, 250),        // Blue-400
            accent_hover: Color32::from_rgb(147, 197, 253), // Blue-300
            accent_muted: Color32::from_rgb(60, 110, 180),

            success: Color32::from_rgb(74, 222, 128),
            error: Color32::from_rgb(248, 113, 113),

            border: Color32::from_rgb(55, 68, 88),
            selection: Color32::from_rgb(96, 165, 250).gamma_multiply(0.3),
        }
    }

    /// Angry - embers on charcoal
    fn angry() -> Self {
        Self {
            bg_darkest: Color32::from_rgb(28, 12, 12),
            bg_dark: Color32::from_rgb(38, 17, 17),
            bg_medium: Color32::from_rgb(52, 24, 24),
            bg_light: Color32::from_rgb(72, 34, 34),

            text_primary: Color32::from_rgb(254, 242, 242),
            text_secondary: Color32::from_rgb(222, 190, 190),
            text_muted: Color32::from_rgb(160, 120, 120),

            accent: Color32::from_rgb(248, 113, 113),       // Red-400
            accent_hover: Color32::from_rgb(252, 165, 165), // Red-300
            accent_muted: Color32::from_rgb(185, 60, 60),

            success: Color32::from_rgb(74, 222, 128),
            error: Color32::from_rgb(252, 165, 165),

            border: Color32::from_rgb(95, 48, 48),
            selection: Color32::from_rgb(248, 113, 113).gamma_multiply(0.3),
        }
    }

    /// Chill - cool teal
    fn chill() -> Self {
        Self {
            bg_darkest: Color32::from_rgb(10, 22, 22),
            bg_dark: Color32::from_rgb(15, 31, 31),
            bg_medium: Color32::from_rgb(22, 43, 43),
            bg_light: Color32::from_rgb(32, 60, 60),

            text_primary: Color32::from_rgb(240, 253, 250),
            text_secondary: Color32::from_rgb(190, 222, 215),
            text_muted: Color32::from_rgb(125, 155, 150),

            accent: Color32::from_rgb(45, 212, 191),        // Teal-400
            accent_hover: Color32::from_rgb(94, 234, 212),  // Teal-300
            accent_muted: Color32::from_rgb(24, 150, 133),

            success: Color32::from_rgb(74, 222, 128),
            error: Color32::from_rgb(248, 113, 113),

            border: Color32::from_rgb(45, 80, 78),
            selection: Color32::from_rgb(45, 212, 191).gamma_multiply(0.3),
        }
    }

    /// Savage - hot magenta
    fn savage() -> Self {
        Self {
            bg_darkest: Color32::from_rgb(26, 12, 22),
            bg_dark: Color32::from_rgb(36, 17, 30),
            bg_medium: Color32::from_rgb(50, 24, 42),
            bg_light: Color32::from_rgb(70, 34, 58),

            text_primary: Color32::from_rgb(253, 242, 248),
            text_secondary: Color32::from_rgb(225, 195, 212),
            text_muted: Color32::from_rgb(165, 125, 148),

            accent: Color32::from_rgb(244, 114, 182),       // Pink-400
            accent_hover: Color32::from_rgb(249, 168, 212), // Pink-300
            accent_muted: Color32::from_rgb(180, 65, 130),

            success: Color32::from_rgb(74, 222, 128),
            error: Color32::from_rgb(248, 113, 113),

            border: Color32::from_rgb(92, 48, 76),
            selection: Color32::from_rgb(244, 114, 182).gamma_multiply(0.3),
        }
    }

    /// Istarii - deep violet with silver text
    fn istarii() -> Self {
        Self {
            bg_darkest: Color32::from_rgb(18, 14, 30),
            bg_dark: Color32::from_rgb(25, 20, 42),
            bg_medium: Color32::from_rgb(35, 28, 58),
            bg_light: Color32::from_rgb(48, 40, 78),

            text_primary: Color32::from_rgb(244, 244, 252),
            text_secondary: Color32::from_rgb(205, 202, 228),
            text_muted: Color32::from_rgb(140, 136, 168),

            accent: Color32::from_rgb(167, 139, 250),       // Violet-400
            accent_hover: Color32::from_rgb(196, 181, 253), // Violet-300
            accent_muted: Color32::from_rgb(110, 85, 195),

            success: Color32::from_rgb(74, 222, 128),
            error: Color32::from_rgb(248, 113, 113),

            border: Color32::from_rgb(62, 54, 100),
            selection: Color32::from_rgb(167, 139, 250).gamma_multiply(0.3),
        }
    }

    /// Dark - near-black monochrome
    fn dark() -> Self {
        Self {
            bg_darkest: Color32::from_rgb(8, 8, 9),
            bg_dark: Color32::from_rgb(14, 14, 16),
            bg_medium: Color32::from_rgb(22, 22, 25),
            bg_light: Color32::from_rgb(34, 34, 38),

            text_primary: Color32::from_rgb(228, 228, 231),
            text_secondary: Color32::from_rgb(180, 180, 186),
            text_muted: Color32::from_rgb(113, 113, 122),

            accent: Color32::from_rgb(161, 161, 170),       // Zinc-400
            accent_hover: Color32::from_rgb(212, 212, 216), // Zinc-300
            accent_muted: Color32::from_rgb(90, 90, 98),

            success: Color32::from_rgb(74, 222, 128),
            error: Color32::from_rgb(248, 113, 113),

            border: Color32::from_rgb(46, 46, 52),
            selection: Color32::from_rgb(161, 161, 170).gamma_multiply(0.3),
        }
    }

    /// Apply this theme to egui's visuals
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = Visuals::dark();

        // Window and panel backgrounds
        visuals.window_fill = self.bg_dark;
        visuals.panel_fill = self.bg_dark;
        visuals.faint_bg_color = self.bg_medium;
        visuals.extreme_bg_color = self.bg_darkest;

        // Widget backgrounds
        visuals.widgets.noninteractive.bg_fill = self.bg_medium;
        visuals.widgets.noninteractive.weak_bg_fill = self.bg_light;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        // Inactive widgets
        visuals.widgets.inactive.bg_fill = self.bg_medium;
        visuals.widgets.inactive.weak_bg_fill = self.bg_light;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);

        // Hovered widgets
        visuals.widgets.hovered.bg_fill = self.bg_light;
        visuals.widgets.hovered.weak_bg_fill = self.bg_light;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.accent);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.text_primary);

        // Active/pressed widgets
        visuals.widgets.active.bg_fill = self.accent_muted;
        visuals.widgets.active.weak_bg_fill = self.accent_muted;
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, self.accent_hover);
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.text_primary);

        // Open widgets (dropdowns, etc)
        visuals.widgets.open.bg_fill = self.bg_light;
        visuals.widgets.open.weak_bg_fill = self.bg_light;
        visuals.widgets.open.bg_stroke = Stroke::new(1.0, self.accent);
        visuals.widgets.open.fg_stroke = Stroke::new(1.0, self.text_primary);

        // Selection
        visuals.selection.bg_fill = self.selection;
        visuals.selection.stroke = Stroke::new(1.0, self.accent);

        // Hyperlinks
        visuals.hyperlink_color = self.accent;

        // Window styling
        visuals.window_stroke = Stroke::new(1.0, self.border);
        visuals.window_shadow = egui::epaint::Shadow::NONE;

        // Popup styling
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mood_has_a_distinct_accent() {
        let mut accents: Vec<_> = Mood::ALL
            .iter()
            .map(|m| Theme::for_mood(*m).accent.to_array())
            .collect();
        accents.sort();
        accents.dedup();
        assert_eq!(accents.len(), Mood::ALL.len());
    }
}
