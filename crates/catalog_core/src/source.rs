use async_trait::async_trait;
use thiserror::Error;

use crate::domain::MovieSummary;

/// A single page request as the feed issues it. Pages are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: usize,
}

/// One page worth of catalog data.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage {
    pub movies: Vec<MovieSummary>,
    /// `None` means the catalog is exhausted after this page.
    pub next_page: Option<u32>,
}

#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
    #[error("malformed catalog data: {0}")]
    Malformed(String),
}

/// Supplier of movie pages.
///
/// The feed is the only caller and issues at most one request at a time.
/// Implementations decide where pages come from; [`crate::BundledCatalog`]
/// serves the fixture shipped with this crate, a networked source would
/// implement the same seam.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_page(&self, request: PageRequest) -> Result<CatalogPage, CatalogError>;
}
