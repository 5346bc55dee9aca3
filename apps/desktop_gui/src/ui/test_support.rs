//! Shared helpers for the headless screen tests.

use std::sync::Arc;

use catalog_core::{MovieId, MovieSummary, PaginationPhase, ScreenSnapshot};
use eframe::egui;

pub fn movie(index: usize) -> MovieSummary {
    MovieSummary {
        id: MovieId(format!("tt{index:07}")),
        title: format!("Movie {index}"),
        poster: format!("https://posters.invalid/{index}.jpg"),
        imdb_rating: "8.1".to_owned(),
    }
}

pub fn snapshot(count: usize, phase: PaginationPhase) -> ScreenSnapshot {
    ScreenSnapshot {
        movies: Arc::new((0..count).map(movie).collect()),
        phase,
        last_error: None,
    }
}

pub fn snapshot_with_error(count: usize, message: &str) -> ScreenSnapshot {
    let mut snapshot = snapshot(count, PaginationPhase::Idle);
    snapshot.last_error = Some(message.to_owned());
    snapshot
}

/// Viewport tall enough that every grid row of the small test snapshots is
/// laid out, so trigger and click behavior is exercised without scrolling.
pub fn raw_input() -> egui::RawInput {
    raw_input_with(Vec::new())
}

pub fn raw_input_with(events: Vec<egui::Event>) -> egui::RawInput {
    egui::RawInput {
        screen_rect: Some(egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(680.0, 2600.0),
        )),
        events,
        ..Default::default()
    }
}

/// Every text run the frame painted, in paint order.
pub fn painted_texts(output: &egui::FullOutput) -> Vec<String> {
    fn collect(shape: &egui::Shape, texts: &mut Vec<String>) {
        match shape {
            egui::Shape::Text(text) => texts.push(text.galley.text().to_owned()),
            egui::Shape::Vec(shapes) => {
                for shape in shapes {
                    collect(shape, texts);
                }
            }
            _ => {}
        }
    }
    let mut texts = Vec::new();
    for clipped in &output.shapes {
        collect(&clipped.shape, &mut texts);
    }
    texts
}

pub fn texts_contain(texts: &[String], needle: &str) -> bool {
    texts.iter().any(|text| text.contains(needle))
}
