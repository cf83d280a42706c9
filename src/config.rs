//! App Configuration
//!
//! Settings the composition root hands to every page.

/// Default location of the dish list, relative to the served site
pub const DEFAULT_CATALOG_URL: &str = "/data/platos.json";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Where the catalog JSON array is fetched from
    pub catalog_url: String,
    /// How long the "added to cart" notice stays up
    pub notice_ms: u32,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            notice_ms: 2000,
            log_level: if cfg!(debug_assertions) {
                log::Level::Debug
            } else {
                log::Level::Info
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.catalog_url, "/data/platos.json");
        assert_eq!(config.notice_ms, 2000);
    }
}
