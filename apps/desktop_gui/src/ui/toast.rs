//! Bottom-anchored toast stack for feed notices.

use std::time::{Duration, Instant};

use catalog_core::Notice;
use eframe::egui;

use super::theme;

const TOAST_LIFETIME: Duration = Duration::from_secs(4);
const MAX_VISIBLE: usize = 3;

/// Transient error notifications. Notices arrive from the feed exactly
/// once; this stack only owns display timing, so an expired toast cannot
/// reappear on a later render.
pub struct ToastStack {
    active: Vec<ActiveToast>,
}

struct ActiveToast {
    notice: Notice,
    shown_at: Instant,
}

impl ToastStack {
    pub fn new() -> Self {
        Self { active: Vec::new() }
    }

    pub fn push_all(&mut self, notices: Vec<Notice>) {
        for notice in notices {
            tracing::warn!(seq = notice.seq, "toast: {}", notice.message);
            self.active.push(ActiveToast {
                notice,
                shown_at: Instant::now(),
            });
        }
        if self.active.len() > MAX_VISIBLE {
            let overflow = self.active.len() - MAX_VISIBLE;
            self.active.drain(..overflow);
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Draws the stack bottom-center and drops expired entries.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.active
            .retain(|toast| toast.shown_at.elapsed() < TOAST_LIFETIME);
        if self.active.is_empty() {
            return;
        }
        egui::Area::new(egui::Id::new("toast_stack"))
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -24.0))
            .order(egui::Order::Foreground)
            .interactable(false)
            .show(ctx, |ui| {
                for toast in &self.active {
                    egui::Frame::new()
                        .fill(theme::TOAST_FILL)
                        .stroke(egui::Stroke::new(1.0, theme::TOAST_STROKE))
                        .corner_radius(6)
                        .inner_margin(egui::Margin::symmetric(12, 8))
                        .show(ui, |ui| {
                            ui.set_max_width(420.0);
                            ui.label(
                                egui::RichText::new(&toast.notice.message)
                                    .color(theme::TITLE_COLOR),
                            );
                        });
                }
            });
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

impl Default for ToastStack {
    fn default() -> Self {
        Self::new()
    }
}
