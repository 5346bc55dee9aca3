/// Pagination progress for the movie list.
///
/// A single tagged state instead of `is_loading` / `end_reached` flags, so a
/// list cannot be loading and exhausted at the same time. Transitions are
/// applied by the feed:
///
/// - `Idle -> LoadingMore` when a page request is dispatched
/// - `LoadingMore -> Idle` on success with more pages remaining
/// - `LoadingMore -> Exhausted` on success with no next page
/// - `LoadingMore -> Idle` (with `last_error` set) on failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaginationPhase {
    #[default]
    Idle,
    LoadingMore,
    Exhausted,
}

impl PaginationPhase {
    /// Whether a new page request may be dispatched in this phase.
    pub fn accepts_load_request(self) -> bool {
        matches!(self, PaginationPhase::Idle)
    }

    pub fn is_loading(self) -> bool {
        matches!(self, PaginationPhase::LoadingMore)
    }

    pub fn is_exhausted(self) -> bool {
        matches!(self, PaginationPhase::Exhausted)
    }
}

/// Trigger rule for pull-to-load-more: laying out the last loaded item counts
/// as reaching the end of the list.
///
/// `item_index` is the index currently being rendered, `loaded` the number of
/// movies in the snapshot. An empty list never triggers; the initial page is
/// requested by the feed itself at launch.
pub fn crosses_trigger_threshold(item_index: usize, loaded: usize) -> bool {
    loaded > 0 && item_index + 1 >= loaded
}
