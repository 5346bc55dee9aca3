//! One grid cell: cropped poster, marquee title, rating row.

use std::time::Duration;

use catalog_core::MovieSummary;
use eframe::egui;
use egui::load::TexturePoll;

use super::theme;

/// Points per second an overflowing title scrolls at.
const MARQUEE_SPEED: f32 = 26.0;
/// Blank run between two passes of a scrolling title.
const MARQUEE_GAP: f32 = 48.0;
const TITLE_FONT_SIZE: f32 = 15.0;
const RATING_FONT_SIZE: f32 = 14.0;

/// Renders one movie card at the current layout position and returns its
/// click response.
pub fn show(ui: &mut egui::Ui, movie: &MovieSummary, size: egui::Vec2) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    if ui.is_rect_visible(rect) {
        paint_poster(ui, &movie.poster, rect, theme::CARD_CORNER_RADIUS);
        paint_overlay(ui, movie, rect);
    }
    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Paints the image behind `uri` cropped to fill `rect`. While the loader
/// works the cell shows a spinner; a failed load degrades to a quiet
/// placeholder glyph, the loader owns retries and error detail.
pub fn paint_poster(ui: &mut egui::Ui, uri: &str, rect: egui::Rect, corner_radius: u8) {
    ui.painter()
        .rect_filled(rect, corner_radius, theme::CARD_FILL);
    match egui::Image::from_uri(uri).load_for_size(ui.ctx(), rect.size()) {
        Ok(TexturePoll::Ready { texture }) => {
            egui::Image::from_texture(texture)
                .uv(crop_to_fill_uv(texture.size, rect.size()))
                .corner_radius(corner_radius)
                .paint_at(ui, rect);
        }
        Ok(TexturePoll::Pending { .. }) => {
            let spinner_rect = egui::Rect::from_center_size(rect.center(), egui::vec2(22.0, 22.0));
            egui::Spinner::new().paint_at(ui, spinner_rect);
            ui.ctx().request_repaint_after(Duration::from_millis(100));
        }
        Err(err) => {
            tracing::debug!(uri, "poster failed to load: {err}");
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "🎬",
                egui::FontId::proportional(30.0),
                theme::POSTER_PLACEHOLDER_GLYPH,
            );
        }
    }
}

fn paint_overlay(ui: &egui::Ui, movie: &MovieSummary, rect: egui::Rect) {
    let band = egui::Rect::from_min_max(
        egui::pos2(rect.left(), rect.bottom() - theme::OVERLAY_BAND_HEIGHT),
        rect.max,
    );
    let band_radius = egui::CornerRadius {
        nw: 0,
        ne: 0,
        sw: theme::CARD_CORNER_RADIUS,
        se: theme::CARD_CORNER_RADIUS,
    };
    ui.painter().rect_filled(band, band_radius, theme::OVERLAY_FILL);

    let inner = band.shrink2(egui::vec2(10.0, 8.0));
    let title_rect = egui::Rect::from_min_size(
        inner.min,
        egui::vec2(inner.width(), TITLE_FONT_SIZE + 4.0),
    );
    paint_marquee_title(ui, title_rect, &movie.title);
    paint_rating(ui, inner, &movie.imdb_rating);
}

/// Title line that scrolls horizontally when it does not fit, with a second
/// copy trailing one gap behind so the loop reads as continuous.
fn paint_marquee_title(ui: &egui::Ui, rect: egui::Rect, title: &str) {
    let font = egui::FontId::proportional(TITLE_FONT_SIZE);
    let painter = ui.painter_at(rect);
    let galley = painter.layout_no_wrap(title.to_owned(), font.clone(), theme::TITLE_COLOR);
    let text_width = galley.size().x;
    match marquee_offset(text_width, rect.width(), ui.input(|input| input.time)) {
        None => {
            let shadow = painter.layout_no_wrap(title.to_owned(), font, theme::TITLE_SHADOW);
            painter.galley(rect.min + egui::vec2(0.0, 1.0), shadow, theme::TITLE_SHADOW);
            painter.galley(rect.min, galley, theme::TITLE_COLOR);
        }
        Some(offset) => {
            let period = text_width + MARQUEE_GAP;
            let base = egui::pos2(rect.left() - offset, rect.top());
            painter.galley(base, galley.clone(), theme::TITLE_COLOR);
            painter.galley(
                egui::pos2(base.x + period, rect.top()),
                galley,
                theme::TITLE_COLOR,
            );
            ui.ctx().request_repaint_after(Duration::from_millis(16));
        }
    }
}

fn paint_rating(ui: &egui::Ui, inner: egui::Rect, rating: &str) {
    let painter = ui.painter();
    let star_rect = painter.text(
        inner.left_bottom(),
        egui::Align2::LEFT_BOTTOM,
        "★",
        egui::FontId::proportional(RATING_FONT_SIZE + 1.0),
        theme::RATING_STAR,
    );
    painter.text(
        egui::pos2(star_rect.right() + 5.0, inner.bottom()),
        egui::Align2::LEFT_BOTTOM,
        rating,
        egui::FontId::proportional(RATING_FONT_SIZE),
        theme::RATING_TEXT,
    );
}

/// UV sub-rectangle that center-crops a texture of `tex_size` so it fills
/// `cell` without distortion. Whichever axis overflows after scaling gets
/// trimmed evenly on both sides.
fn crop_to_fill_uv(tex_size: egui::Vec2, cell: egui::Vec2) -> egui::Rect {
    let full = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    if tex_size.x <= 0.0 || tex_size.y <= 0.0 || cell.x <= 0.0 || cell.y <= 0.0 {
        return full;
    }
    let scale = (cell.x / tex_size.x).max(cell.y / tex_size.y);
    let visible_x = (cell.x / scale) / tex_size.x;
    let visible_y = (cell.y / scale) / tex_size.y;
    let min = egui::pos2((1.0 - visible_x) * 0.5, (1.0 - visible_y) * 0.5);
    egui::Rect::from_min_size(min, egui::vec2(visible_x, visible_y))
}

/// Scroll offset for an overflowing title at `time` seconds, `None` when the
/// title fits. The cycle restarts after the text plus one gap has passed.
fn marquee_offset(text_width: f32, available: f32, time: f64) -> Option<f32> {
    if text_width <= available {
        return None;
    }
    let period = text_width + MARQUEE_GAP;
    Some(((time as f32) * MARQUEE_SPEED).rem_euclid(period))
}
