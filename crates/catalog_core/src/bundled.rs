use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::MovieSummary;
use crate::source::{CatalogError, CatalogPage, CatalogSource, PageRequest};

const CATALOG_JSON: &str = include_str!("../assets/catalog.json");

#[derive(Deserialize)]
struct CatalogFile {
    movies: Vec<MovieSummary>,
}

/// In-memory catalog backed by the JSON fixture compiled into the crate.
///
/// Serves deterministic pages. An artificial per-page latency keeps the
/// loading footer and poster placeholders visible when the demo app runs
/// against it.
pub struct BundledCatalog {
    movies: Vec<MovieSummary>,
    latency: Duration,
}

impl BundledCatalog {
    pub fn load() -> Result<Self, CatalogError> {
        let parsed: CatalogFile = serde_json::from_str(CATALOG_JSON)
            .map_err(|err| CatalogError::Malformed(format!("bundled catalog: {err}")))?;
        Ok(Self {
            movies: parsed.movies,
            latency: Duration::ZERO,
        })
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[async_trait]
impl CatalogSource for BundledCatalog {
    async fn fetch_page(&self, request: PageRequest) -> Result<CatalogPage, CatalogError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if request.page_size == 0 {
            return Err(CatalogError::Malformed("page_size must be non-zero".into()));
        }
        let start = (request.page as usize).saturating_mul(request.page_size);
        let end = start.saturating_add(request.page_size).min(self.movies.len());
        let movies = if start < self.movies.len() {
            self.movies[start..end].to_vec()
        } else {
            Vec::new()
        };
        let next_page = if end < self.movies.len() {
            Some(request.page + 1)
        } else {
            None
        };
        Ok(CatalogPage { movies, next_page })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn block_on<T>(future: impl std::future::Future<Output = T>) -> T {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("test runtime")
            .block_on(future)
    }

    fn fetch(catalog: &BundledCatalog, page: u32, page_size: usize) -> CatalogPage {
        block_on(catalog.fetch_page(PageRequest { page, page_size })).expect("page")
    }

    #[test]
    fn fixture_parses_and_ids_are_unique() {
        let catalog = BundledCatalog::load().expect("bundled catalog");
        assert!(catalog.len() >= 40);
        let page = fetch(&catalog, 0, catalog.len());
        let ids: HashSet<_> = page.movies.iter().map(|movie| movie.id.clone()).collect();
        assert_eq!(ids.len(), catalog.len());
        for movie in &page.movies {
            assert!(!movie.title.is_empty());
            assert!(movie.poster.starts_with("https://"));
            assert!(!movie.imdb_rating.is_empty());
        }
    }

    #[test]
    fn pages_are_disjoint_and_ordered() {
        let catalog = BundledCatalog::load().expect("bundled catalog");
        let first = fetch(&catalog, 0, 12);
        let second = fetch(&catalog, 1, 12);
        assert_eq!(first.movies.len(), 12);
        assert_eq!(first.next_page, Some(1));
        assert_eq!(second.next_page, Some(2));
        assert_ne!(first.movies.last(), second.movies.first());

        let all = fetch(&catalog, 0, catalog.len());
        assert_eq!(&all.movies[..12], first.movies.as_slice());
        assert_eq!(&all.movies[12..24], second.movies.as_slice());
    }

    #[test]
    fn last_page_reports_exhaustion() {
        let catalog = BundledCatalog::load().expect("bundled catalog");
        let page_size = 12;
        let last = (catalog.len() - 1) / page_size;
        let page = fetch(&catalog, last as u32, page_size);
        assert!(!page.movies.is_empty());
        assert_eq!(page.next_page, None);
    }

    #[test]
    fn page_beyond_end_is_empty_and_exhausted() {
        let catalog = BundledCatalog::load().expect("bundled catalog");
        let page = fetch(&catalog, 99, 12);
        assert!(page.movies.is_empty());
        assert_eq!(page.next_page, None);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let catalog = BundledCatalog::load().expect("bundled catalog");
        let result = block_on(catalog.fetch_page(PageRequest {
            page: 0,
            page_size: 0,
        }));
        assert!(matches!(result, Err(CatalogError::Malformed(_))));
    }
}
