use catalog_core::MovieId;

/// The two screens of the app, as data instead of route strings. A details
/// route carries the id only; the screen re-resolves the movie from the
/// snapshot every frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Details(MovieId),
}

/// Navigation stack with `Home` as the permanent root.
pub struct RouteStack {
    current: Route,
    parents: Vec<Route>,
}

impl RouteStack {
    pub fn new() -> Self {
        Self {
            current: Route::Home,
            parents: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn push(&mut self, route: Route) {
        let previous = std::mem::replace(&mut self.current, route);
        self.parents.push(previous);
    }

    /// Returns to the previous screen. Popping at the root is a no-op.
    pub fn pop(&mut self) {
        if let Some(parent) = self.parents.pop() {
            self.current = parent;
        }
    }
}

impl Default for RouteStack {
    fn default() -> Self {
        Self::new()
    }
}
