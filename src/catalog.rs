//! Catalog Loading
//!
//! Fetches the dish list from the static JSON resource and turns the outcome
//! into a renderable state. Failures never escape: they become
//! `CatalogState::Unavailable`.

use std::sync::Arc;

use async_trait::async_trait;
use gloo_net::http::Request;

use crate::models::{parse_catalog, CatalogEntry};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(String),
    #[error("catalog request failed: {0}")]
    Status(u16),
    #[error("malformed catalog: {0}")]
    Decode(String),
    #[error("catalog entry {index} has no name")]
    InvalidEntry { index: usize },
}

/// Anything that can produce the catalog list
#[async_trait(?Send)]
pub trait CatalogSource {
    async fn fetch(&self) -> Result<Vec<CatalogEntry>, CatalogError>;
}

pub type SharedCatalogSource = Arc<dyn CatalogSource + Send + Sync>;

/// `GET` against a fixed URL
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    url: String,
}

impl HttpCatalog {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl CatalogSource for HttpCatalog {
    async fn fetch(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        let resp = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(CatalogError::Status(resp.status()));
        }
        let body = resp
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        parse_catalog(&body)
    }
}

/// What the catalog page shows
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogState {
    #[default]
    Loading,
    Ready(Vec<CatalogEntry>),
    Unavailable(CatalogError),
}

impl CatalogState {
    /// Entries to render; empty unless loaded
    pub fn entries(&self) -> &[CatalogEntry] {
        match self {
            CatalogState::Ready(entries) => entries,
            _ => &[],
        }
    }
}

impl From<Result<Vec<CatalogEntry>, CatalogError>> for CatalogState {
    fn from(result: Result<Vec<CatalogEntry>, CatalogError>) -> Self {
        match result {
            Ok(entries) => CatalogState::Ready(entries),
            Err(e) => CatalogState::Unavailable(e),
        }
    }
}

/// Run one fetch and log the outcome
pub async fn load_catalog(source: &dyn CatalogSource) -> CatalogState {
    let result = source.fetch().await;
    match &result {
        Ok(entries) => log::debug!("[CATALOG] loaded {} entries", entries.len()),
        Err(e) => log::warn!("[CATALOG] unavailable: {}", e),
    }
    result.into()
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Serves a fixed body through the same decoding as `HttpCatalog`
    pub struct StaticCatalog(pub &'static str);

    #[async_trait(?Send)]
    impl CatalogSource for StaticCatalog {
        async fn fetch(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
            parse_catalog(self.0)
        }
    }

    /// Always fails as if the network were down
    pub struct FailingCatalog;

    #[async_trait(?Send)]
    impl CatalogSource for FailingCatalog {
        async fn fetch(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
            Err(CatalogError::Network("connection refused".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{FailingCatalog, StaticCatalog};
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_load_ready() {
        let state = block_on(load_catalog(&StaticCatalog(r#"[{"name":"Taco"},{"name":"Burrito"}]"#)));
        let names: Vec<_> = state.entries().iter().map(|e| e.display_name()).collect();
        assert_eq!(names, ["Taco", "Burrito"]);
        assert!(matches!(state, CatalogState::Ready(_)));
    }

    #[test]
    fn test_network_failure_leaves_list_empty() {
        let state = block_on(load_catalog(&FailingCatalog));
        assert!(state.entries().is_empty());
        assert!(matches!(state, CatalogState::Unavailable(CatalogError::Network(_))));
    }

    #[test]
    fn test_bad_shape_fails_closed() {
        let state = block_on(load_catalog(&StaticCatalog(r#"[{"name":"Taco"},{"name":""}]"#)));
        assert!(state.entries().is_empty());
        assert_eq!(state, CatalogState::Unavailable(CatalogError::InvalidEntry { index: 1 }));
    }

    #[test]
    fn test_loading_renders_nothing() {
        assert!(CatalogState::default().entries().is_empty());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(CatalogError::Status(404).to_string(), "catalog request failed: 404");
        assert_eq!(
            CatalogError::InvalidEntry { index: 2 }.to_string(),
            "catalog entry 2 has no name"
        );
    }
}
