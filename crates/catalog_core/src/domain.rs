use serde::{Deserialize, Serialize};

/// Catalog-issued identifier for a movie, e.g. `tt0111161`.
///
/// Kept opaque: the rest of the app routes and re-looks-up by id and never
/// parses it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovieId(pub String);

impl MovieId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MovieId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// One movie as listed on the grid.
///
/// The rating stays a string: it is display data, never arithmetic input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: MovieId,
    pub title: String,
    /// Poster image URI; resolution is the image loader's concern.
    pub poster: String,
    pub imdb_rating: String,
}
