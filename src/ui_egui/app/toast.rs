//! Short-lived feedback messages ("Copied: …", "Saved 3 rows to …").
//!
//! Toasts stack upward from the bottom of the window and fade out during the
//! last half second of their lifetime.

use egui::{Color32, Context, Pos2, RichText};
use std::time::{Duration, Instant};

const FADE: Duration = Duration::from_millis(500);
const MAX_WIDTH: f32 = 300.0;
const HEIGHT: f32 = 36.0;
const MARGIN: f32 = 10.0;
const SPACING: f32 = 5.0;
/// Clearance for the footer panel
const FOOTER_CLEARANCE: f32 = 56.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Error,
}

impl ToastLevel {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Success => "✓",
            ToastLevel::Info => "ℹ",
            ToastLevel::Error => "✗",
        }
    }

    pub fn background_color(&self) -> Color32 {
        match self {
            ToastLevel::Success => Color32::from_rgb(30, 70, 40),
            ToastLevel::Info => Color32::from_rgb(30, 50, 80),
            ToastLevel::Error => Color32::from_rgb(80, 30, 30),
        }
    }

    pub fn text_color(&self) -> Color32 {
        match self {
            ToastLevel::Success => Color32::from_rgb(100, 220, 120),
            ToastLevel::Info => Color32::from_rgb(100, 180, 255),
            ToastLevel::Error => Color32::from_rgb(255, 120, 120),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
            created_at: Instant::now(),
            duration: Duration::from_secs(3),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Opacity in `0.0..=1.0`, fading over the final half second.
    pub fn opacity(&self) -> f32 {
        opacity_at(self.created_at.elapsed(), self.duration)
    }
}

fn opacity_at(elapsed: Duration, duration: Duration) -> f32 {
    let fade_start = duration.saturating_sub(FADE);
    if elapsed >= duration {
        0.0
    } else if elapsed >= fade_start {
        ((duration - elapsed).as_secs_f32() / FADE.as_secs_f32()).clamp(0.0, 1.0)
    } else {
        1.0
    }
}

#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.add(Toast::new(message, ToastLevel::Success));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.add(Toast::new(message, ToastLevel::Info));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.add(Toast::new(message, ToastLevel::Error));
    }

    pub fn cleanup(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    #[cfg(test)]
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    pub fn render(&mut self, ctx: &Context) {
        self.cleanup();

        if self.toasts.is_empty() {
            return;
        }

        // Keep animating the fade
        ctx.request_repaint();

        let screen_rect = ctx.screen_rect();
        let width = MAX_WIDTH.min(screen_rect.width() - 2.0 * MARGIN);

        for (i, toast) in self.toasts.iter().rev().enumerate() {
            let opacity = toast.opacity();
            if opacity <= 0.0 {
                continue;
            }

            let y_offset = (i as f32) * (HEIGHT + SPACING);
            let pos = Pos2::new(
                screen_rect.right() - width - MARGIN,
                screen_rect.bottom() - HEIGHT - FOOTER_CLEARANCE - y_offset,
            );

            egui::Area::new(egui::Id::new(("toast", i)))
                .fixed_pos(pos)
                .order(egui::Order::Foreground)
                .interactable(false)
                .show(ctx, |ui| {
                    let bg = toast.level.background_color();
                    let fg = toast.level.text_color();
                    let bg = Color32::from_rgba_unmultiplied(
                        bg.r(),
                        bg.g(),
                        bg.b(),
                        (230.0 * opacity) as u8,
                    );
                    let fg = Color32::from_rgba_unmultiplied(
                        fg.r(),
                        fg.g(),
                        fg.b(),
                        (255.0 * opacity) as u8,
                    );

                    egui::Frame::none()
                        .fill(bg)
                        .rounding(6.0)
                        .inner_margin(egui::Margin::symmetric(10.0, 6.0))
                        .stroke(egui::Stroke::new(1.0, fg.gamma_multiply(0.3)))
                        .show(ui, |ui| {
                            ui.set_max_width(width - 20.0);
                            ui.horizontal_wrapped(|ui| {
                                ui.label(RichText::new(toast.level.icon()).color(fg).strong());
                                ui.label(RichText::new(&toast.message).color(fg).size(11.0));
                            });
                        });
                });
        }
    }
}
