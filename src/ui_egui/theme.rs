//! Theme for the floating calendar window.
//!
//! A single dark scheme derived from the project palette so the window
//! background and the day-cell background always match.

use egui::Color32;

use crate::models::palette::{ColorPalette, Rgb};

pub fn to_color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingTheme {
    /// Window and cell background
    pub background: Color32,
    /// Button resting fill
    pub button_fill: Color32,
    /// Button hover fill
    pub button_hover: Color32,
    /// Body text and day numbers
    pub text: Color32,
    /// Title text in the header and mini bar
    pub title: Color32,
    /// Hover text / accent
    pub accent: Color32,
    /// Overlay for selected dates
    pub selection: Color32,
    /// Outline around selection endpoints
    pub selection_edge: Color32,
}

impl FloatingTheme {
    pub fn from_palette(palette: &ColorPalette) -> Self {
        let accent = Color32::from_rgb(0x60, 0xa5, 0xfa);
        Self {
            background: to_color32(palette.background),
            button_fill: Color32::from_rgba_unmultiplied(255, 255, 255, 5),
            button_hover: Color32::from_rgba_unmultiplied(255, 255, 255, 10),
            text: to_color32(palette.text),
            title: Color32::from_rgb(0xdf, 0xf1, 0xff),
            accent,
            selection: with_alpha(accent, 60),
            selection_edge: accent,
        }
    }

    /// Window background with the configured opacity applied.
    pub fn window_fill(&self, opacity: f32) -> Color32 {
        let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        with_alpha(self.background, alpha)
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context, opacity: f32) {
        let mut visuals = egui::Visuals::dark();

        visuals.window_fill = self.background;
        visuals.panel_fill = self.window_fill(opacity);
        visuals.window_rounding = egui::Rounding::same(10.0);

        visuals.widgets.inactive.weak_bg_fill = self.button_fill;
        visuals.widgets.inactive.bg_fill = self.button_fill;
        visuals.widgets.hovered.weak_bg_fill = self.button_hover;
        visuals.widgets.hovered.bg_fill = self.button_hover;
        visuals.widgets.hovered.fg_stroke.color = self.accent;
        visuals.widgets.inactive.bg_stroke = egui::Stroke::NONE;
        visuals.widgets.hovered.bg_stroke = egui::Stroke::NONE;
        for widget in [
            &mut visuals.widgets.inactive,
            &mut visuals.widgets.hovered,
            &mut visuals.widgets.active,
        ] {
            widget.rounding = egui::Rounding::same(8.0);
        }

        visuals.override_text_color = Some(self.text);

        ctx.set_visuals(visuals);
    }
}
