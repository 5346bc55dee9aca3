//! Application shell: owns the feed handle, the route stack and the toasts.

use std::time::Duration;

use catalog_core::MovieFeed;
use eframe::egui;

use crate::controller::events::ScreenEvent;
use crate::controller::routing::{Route, RouteStack};

use super::toast::ToastStack;
use super::{details, home};

pub struct DesktopApp {
    feed: MovieFeed,
    routes: RouteStack,
    toasts: ToastStack,
}

impl DesktopApp {
    pub fn new(feed: MovieFeed) -> Self {
        Self {
            feed,
            routes: RouteStack::new(),
            toasts: ToastStack::new(),
        }
    }

    /// One frame of the application. Extracted from [`eframe::App::update`]
    /// so headless tests can drive it with a bare [`egui::Context`].
    pub fn run_frame(&mut self, ctx: &egui::Context) {
        self.toasts.push_all(self.feed.drain_notices());

        let snapshot = self.feed.snapshot();
        let route = self.routes.current().clone();
        let events = match &route {
            Route::Home => home::show(ctx, &snapshot),
            Route::Details(movie_id) => details::show(ctx, &snapshot, movie_id),
        };
        self.apply_events(events);
        self.toasts.show(ctx);

        // Worker results land between frames; poll faster while something
        // is animating.
        let cadence = if snapshot.phase.is_loading() || !self.toasts.is_empty() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };
        ctx.request_repaint_after(cadence);
    }

    fn apply_events(&mut self, events: Vec<ScreenEvent>) {
        for event in events {
            match event {
                ScreenEvent::RequestNextPage => self.feed.load_next_items(),
                ScreenEvent::RetryPageLoad => self.feed.retry_failed_page(),
                ScreenEvent::OpenDetails(movie_id) => {
                    tracing::debug!(movie = %movie_id, "opening details");
                    self.routes.push(Route::Details(movie_id));
                }
                ScreenEvent::NavigateBack => self.routes.pop(),
            }
        }
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.run_frame(ctx);
    }
}
