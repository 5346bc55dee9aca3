use catalog_core::MovieId;

/// One-frame outputs of a screen render pass.
///
/// Screens never mutate app state directly; they return these and the shell
/// applies them after the frame. `RequestNextPage` may repeat frame after
/// frame while the last row stays visible, the feed dedupes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    /// The grid laid out the last loaded item and wants another page.
    RequestNextPage,
    /// A movie card was clicked.
    OpenDetails(MovieId),
    /// The failed-page footer's retry button was clicked.
    RetryPageLoad,
    /// Leave the details screen.
    NavigateBack,
}
