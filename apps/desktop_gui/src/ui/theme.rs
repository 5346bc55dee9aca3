//! Fixed dark palette and layout metrics shared by the screens.

use eframe::egui;

pub const TOP_BAR_HEIGHT: f32 = 44.0;
pub const GRID_GUTTER: f32 = 12.0;
pub const CARD_HEIGHT: f32 = 236.0;
pub const CARD_CORNER_RADIUS: u8 = 10;
pub const OVERLAY_BAND_HEIGHT: f32 = 56.0;

pub const WINDOW_FILL: egui::Color32 = egui::Color32::from_rgb(15, 16, 22);
pub const TOP_BAR_FILL: egui::Color32 = egui::Color32::from_rgb(24, 26, 34);
pub const GRID_FILL: egui::Color32 = egui::Color32::from_rgb(19, 20, 27);
pub const CARD_FILL: egui::Color32 = egui::Color32::from_rgb(32, 34, 44);
pub const OVERLAY_FILL: egui::Color32 = egui::Color32::from_rgba_premultiplied(0, 0, 0, 140);
pub const TITLE_COLOR: egui::Color32 = egui::Color32::from_rgb(236, 238, 244);
pub const TITLE_SHADOW: egui::Color32 = egui::Color32::from_rgba_premultiplied(0, 0, 0, 160);
pub const RATING_STAR: egui::Color32 = egui::Color32::from_rgb(250, 202, 21);
pub const RATING_TEXT: egui::Color32 = egui::Color32::from_rgb(220, 222, 228);
pub const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(240, 120, 120);
pub const TOAST_FILL: egui::Color32 = egui::Color32::from_rgb(46, 26, 28);
pub const TOAST_STROKE: egui::Color32 = egui::Color32::from_rgb(150, 70, 74);
pub const POSTER_PLACEHOLDER_GLYPH: egui::Color32 = egui::Color32::from_rgb(90, 94, 108);

pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = WINDOW_FILL;
    visuals.window_fill = WINDOW_FILL;
    ctx.set_visuals(visuals);
}
