//! Details screen: the navigation target behind a card tap.

use catalog_core::{MovieId, MovieSummary, ScreenSnapshot};
use eframe::egui;

use crate::controller::events::ScreenEvent;

use super::{card, theme};

/// Renders the details screen for `movie_id` and returns the events this
/// frame emitted. The movie is re-resolved from the snapshot every frame;
/// the route only carries the id.
pub fn show(
    ctx: &egui::Context,
    snapshot: &ScreenSnapshot,
    movie_id: &MovieId,
) -> Vec<ScreenEvent> {
    let mut events = Vec::new();
    egui::TopBottomPanel::top("details_top_bar")
        .exact_height(theme::TOP_BAR_HEIGHT)
        .frame(egui::Frame::new().fill(theme::TOP_BAR_FILL))
        .show(ctx, |ui| {
            ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                ui.add_space(8.0);
                if ui.button("Back").clicked() {
                    events.push(ScreenEvent::NavigateBack);
                }
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new("Details")
                        .size(18.0)
                        .strong()
                        .color(theme::TITLE_COLOR),
                );
            });
        });
    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(theme::GRID_FILL))
        .show(ctx, |ui| match find_movie(snapshot, movie_id) {
            Some(movie) => show_movie(ui, movie),
            None => {
                ui.centered_and_justified(|ui| {
                    ui.weak("This movie is no longer loaded.");
                });
            }
        });
    events
}

fn find_movie<'a>(snapshot: &'a ScreenSnapshot, movie_id: &MovieId) -> Option<&'a MovieSummary> {
    snapshot.movies.iter().find(|movie| &movie.id == movie_id)
}

fn show_movie(ui: &mut egui::Ui, movie: &MovieSummary) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                let poster_size = egui::vec2(260.0, 390.0);
                let (rect, _) = ui.allocate_exact_size(poster_size, egui::Sense::hover());
                card::paint_poster(ui, &movie.poster, rect, theme::CARD_CORNER_RADIUS);
                ui.add_space(18.0);
                ui.label(
                    egui::RichText::new(&movie.title)
                        .size(22.0)
                        .strong()
                        .color(theme::TITLE_COLOR),
                );
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new(format!("★ {}", movie.imdb_rating))
                        .size(16.0)
                        .color(theme::RATING_STAR),
                );
                ui.add_space(6.0);
                ui.weak(movie.id.as_str());
            });
        });
}

#[cfg(test)]
mod tests {
    use catalog_core::PaginationPhase;

    use super::*;
    use crate::ui::test_support::{painted_texts, raw_input, snapshot, texts_contain};

    fn run_details(
        ctx: &egui::Context,
        snap: &ScreenSnapshot,
        movie_id: &MovieId,
    ) -> (Vec<ScreenEvent>, egui::FullOutput) {
        let mut events = Vec::new();
        let output = ctx.run(raw_input(), |ctx| {
            events = show(ctx, snap, movie_id);
        });
        (events, output)
    }

    #[test]
    fn shows_title_rating_and_back_affordance() {
        let ctx = egui::Context::default();
        let snap = snapshot(4, PaginationPhase::Exhausted);
        let movie_id = snap.movies[2].id.clone();
        let (events, output) = run_details(&ctx, &snap, &movie_id);
        let texts = painted_texts(&output);
        assert!(events.is_empty());
        assert!(texts_contain(&texts, "Movie 2"));
        assert!(texts_contain(&texts, "8.1"));
        assert!(texts_contain(&texts, "Back"));
    }

    #[test]
    fn unknown_id_degrades_to_a_placeholder() {
        let ctx = egui::Context::default();
        let snap = snapshot(4, PaginationPhase::Exhausted);
        let movie_id = MovieId::from("tt9999999");
        let (_, output) = run_details(&ctx, &snap, &movie_id);
        assert!(texts_contain(
            &painted_texts(&output),
            "This movie is no longer loaded."
        ));
    }
}
