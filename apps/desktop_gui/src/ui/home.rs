//! Home screen: top bar, two-column poster grid, loading/error footer.

use catalog_core::{crosses_trigger_threshold, ScreenSnapshot};
use eframe::egui;

use crate::controller::events::ScreenEvent;

use super::{card, theme};

pub const GRID_COLUMNS: usize = 2;

/// Renders the whole home screen and returns the events this frame emitted.
pub fn show(ctx: &egui::Context, snapshot: &ScreenSnapshot) -> Vec<ScreenEvent> {
    let mut events = Vec::new();
    show_top_bar(ctx);
    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(theme::GRID_FILL))
        .show(ctx, |ui| show_grid(ui, snapshot, &mut events));
    events
}

/// Static top bar. No state, no interaction.
fn show_top_bar(ctx: &egui::Context) {
    egui::TopBottomPanel::top("home_top_bar")
        .exact_height(theme::TOP_BAR_HEIGHT)
        .frame(egui::Frame::new().fill(theme::TOP_BAR_FILL))
        .show(ctx, |ui| {
            ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                ui.add_space(16.0);
                ui.label(
                    egui::RichText::new("Movies")
                        .size(20.0)
                        .strong()
                        .color(theme::TITLE_COLOR),
                );
            });
        });
}

fn show_grid(ui: &mut egui::Ui, snapshot: &ScreenSnapshot, events: &mut Vec<ScreenEvent>) {
    let movies = snapshot.movies.as_slice();
    let movie_rows = movies.len().div_ceil(GRID_COLUMNS);
    let footer_rows = usize::from(footer_kind(snapshot).is_some());
    let total_rows = movie_rows + footer_rows;

    if total_rows == 0 {
        ui.centered_and_justified(|ui| {
            ui.weak("The catalog is empty.");
        });
        return;
    }

    ui.spacing_mut().item_spacing = egui::vec2(theme::GRID_GUTTER, theme::GRID_GUTTER);
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show_rows(ui, theme::CARD_HEIGHT, total_rows, |ui, rows| {
            let card_size = egui::vec2(card_width(ui.available_width()), theme::CARD_HEIGHT);
            for row in rows {
                if row >= movie_rows {
                    show_footer(ui, snapshot, events);
                    continue;
                }
                ui.horizontal(|ui| {
                    ui.add_space(theme::GRID_GUTTER);
                    for column in 0..GRID_COLUMNS {
                        let index = row * GRID_COLUMNS + column;
                        let Some(movie) = movies.get(index) else {
                            break;
                        };
                        // Pull-to-load-more: laying out the last loaded item
                        // asks for the next page, but only while idle.
                        if crosses_trigger_threshold(index, movies.len())
                            && snapshot.phase.accepts_load_request()
                        {
                            events.push(ScreenEvent::RequestNextPage);
                        }
                        if card::show(ui, movie, card_size).clicked() {
                            events.push(ScreenEvent::OpenDetails(movie.id.clone()));
                        }
                    }
                });
            }
        });
}

fn card_width(available: f32) -> f32 {
    let gutters = theme::GRID_GUTTER * (GRID_COLUMNS as f32 + 1.0);
    ((available - gutters) / GRID_COLUMNS as f32).max(120.0)
}

enum Footer<'a> {
    Loading,
    Failed(&'a str),
}

/// The grid tail cell: a spinner while a page is in flight, the latched
/// error with a retry button after a failure, nothing otherwise.
fn footer_kind(snapshot: &ScreenSnapshot) -> Option<Footer<'_>> {
    if snapshot.phase.is_loading() {
        return Some(Footer::Loading);
    }
    match snapshot.last_error.as_deref() {
        Some(message) if snapshot.phase.accepts_load_request() => Some(Footer::Failed(message)),
        _ => None,
    }
}

fn show_footer(ui: &mut egui::Ui, snapshot: &ScreenSnapshot, events: &mut Vec<ScreenEvent>) {
    match footer_kind(snapshot) {
        Some(Footer::Loading) => {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.add(egui::Spinner::new().size(28.0));
            });
        }
        Some(Footer::Failed(message)) => {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.colored_label(theme::ERROR_TEXT, message);
                if ui.button("Retry").clicked() {
                    events.push(ScreenEvent::RetryPageLoad);
                }
            });
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use catalog_core::PaginationPhase;

    use super::*;
    use crate::ui::test_support::{
        painted_texts, raw_input, raw_input_with, snapshot, snapshot_with_error, texts_contain,
    };

    fn run_home(
        ctx: &egui::Context,
        input: egui::RawInput,
        snap: &ScreenSnapshot,
    ) -> (Vec<ScreenEvent>, egui::FullOutput) {
        let mut events = Vec::new();
        let output = ctx.run(input, |ctx| {
            events = show(ctx, snap);
        });
        (events, output)
    }

    fn page_requests(events: &[ScreenEvent]) -> usize {
        events
            .iter()
            .filter(|event| **event == ScreenEvent::RequestNextPage)
            .count()
    }

    #[test]
    fn top_bar_always_shows_the_app_title() {
        let ctx = egui::Context::default();
        let snap = snapshot(0, PaginationPhase::Idle);
        let (_, output) = run_home(&ctx, raw_input(), &snap);
        assert!(texts_contain(&painted_texts(&output), "Movies"));
    }

    #[test]
    fn renders_a_card_per_loaded_movie() {
        let ctx = egui::Context::default();
        let snap = snapshot(4, PaginationPhase::Exhausted);
        let (_, output) = run_home(&ctx, raw_input(), &snap);
        let texts = painted_texts(&output);
        for index in 0..4 {
            assert!(
                texts_contain(&texts, &format!("Movie {index}")),
                "missing card title {index}: {texts:?}"
            );
        }
    }

    #[test]
    fn reaching_the_last_item_requests_the_next_page_once() {
        let ctx = egui::Context::default();
        let snap = snapshot(10, PaginationPhase::Idle);
        let (events, _) = run_home(&ctx, raw_input(), &snap);
        assert_eq!(page_requests(&events), 1);
    }

    #[test]
    fn no_request_while_a_page_is_in_flight() {
        let ctx = egui::Context::default();
        let snap = snapshot(10, PaginationPhase::LoadingMore);
        let (events, _) = run_home(&ctx, raw_input(), &snap);
        assert_eq!(page_requests(&events), 0);
    }

    #[test]
    fn no_request_once_the_catalog_is_exhausted() {
        let ctx = egui::Context::default();
        let snap = snapshot(10, PaginationPhase::Exhausted);
        let (events, _) = run_home(&ctx, raw_input(), &snap);
        assert_eq!(page_requests(&events), 0);
    }

    #[test]
    fn empty_idle_grid_emits_nothing() {
        let ctx = egui::Context::default();
        let snap = snapshot(0, PaginationPhase::Exhausted);
        let (events, output) = run_home(&ctx, raw_input(), &snap);
        assert!(events.is_empty());
        assert!(texts_contain(&painted_texts(&output), "The catalog is empty."));
    }

    #[test]
    fn initial_load_shows_the_spinner_footer_not_the_empty_state() {
        let ctx = egui::Context::default();
        let snap = snapshot(0, PaginationPhase::LoadingMore);
        let (events, output) = run_home(&ctx, raw_input(), &snap);
        assert!(events.is_empty());
        assert!(!texts_contain(&painted_texts(&output), "The catalog is empty."));
    }

    #[test]
    fn failed_page_footer_shows_the_error_and_a_retry_button() {
        let ctx = egui::Context::default();
        let snap = snapshot_with_error(4, "catalog unavailable: backend offline");
        let (_, output) = run_home(&ctx, raw_input(), &snap);
        let texts = painted_texts(&output);
        assert!(texts_contain(&texts, "backend offline"));
        assert!(texts_contain(&texts, "Retry"));
    }

    #[test]
    fn loading_footer_has_no_retry_button() {
        let ctx = egui::Context::default();
        let snap = snapshot(4, PaginationPhase::LoadingMore);
        let (_, output) = run_home(&ctx, raw_input(), &snap);
        assert!(!texts_contain(&painted_texts(&output), "Retry"));
    }

    #[test]
    fn clicking_a_card_reports_its_movie_id() {
        let ctx = egui::Context::default();
        let snap = snapshot(4, PaginationPhase::Exhausted);

        // First card: x spans one gutter plus one card width, y starts
        // right under the top bar.
        let width = card_width(680.0);
        let center = egui::pos2(
            theme::GRID_GUTTER + width * 0.5,
            theme::TOP_BAR_HEIGHT + theme::CARD_HEIGHT * 0.5,
        );

        let mut all_opens = Vec::new();
        let frames = [
            raw_input_with(vec![egui::Event::PointerMoved(center)]),
            raw_input_with(vec![egui::Event::PointerButton {
                pos: center,
                button: egui::PointerButton::Primary,
                pressed: true,
                modifiers: egui::Modifiers::default(),
            }]),
            raw_input_with(vec![egui::Event::PointerButton {
                pos: center,
                button: egui::PointerButton::Primary,
                pressed: false,
                modifiers: egui::Modifiers::default(),
            }]),
        ];
        for input in frames {
            let (events, _) = run_home(&ctx, input, &snap);
            all_opens.extend(events.into_iter().filter_map(|event| match event {
                ScreenEvent::OpenDetails(movie_id) => Some(movie_id),
                _ => None,
            }));
        }

        assert_eq!(all_opens, vec![snap.movies[0].id.clone()]);
    }
}
