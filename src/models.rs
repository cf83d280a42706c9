//! Frontend Models
//!
//! Catalog records as served by `data/platos.json`, and the cart's element type.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::CatalogError;

/// Opaque name of a catalog entry, used as the cart's element type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// One dish in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Identifier and display name
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
}

impl CatalogEntry {
    #[cfg(test)]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            price: None,
            image: None,
        }
    }

    pub fn item_id(&self) -> ItemId {
        ItemId::new(self.name.clone())
    }

    pub fn display_name(&self) -> &str {
        &self.name
    }

    /// Price formatted for display, e.g. "$45.00"
    pub fn price_label(&self) -> Option<String> {
        self.price.map(|p| format!("${:.2}", p))
    }
}

/// Decode a catalog body, rejecting the whole list if any entry lacks a usable name.
pub fn parse_catalog(body: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
    let entries: Vec<CatalogEntry> =
        serde_json::from_str(body).map_err(|e| CatalogError::Decode(e.to_string()))?;

    if let Some(index) = entries.iter().position(|e| e.name.trim().is_empty()) {
        return Err(CatalogError::InvalidEntry { index });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_entries() {
        let entries = parse_catalog(r#"[{"name":"Taco"},{"name":"Burrito"}]"#).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], CatalogEntry::new("Taco"));
        assert_eq!(entries[1].item_id(), ItemId::from("Burrito"));
    }

    #[test]
    fn test_parse_full_entry_ignores_unknown_fields() {
        let body = r#"[{"name":"Pozole","description":"Caldo de maíz","price":85,"image":"/img/pozole.jpg","spicy":true}]"#;
        let entries = parse_catalog(body).unwrap();
        assert_eq!(entries[0].description.as_deref(), Some("Caldo de maíz"));
        assert_eq!(entries[0].price_label().as_deref(), Some("$85.00"));
        assert_eq!(entries[0].image.as_deref(), Some("/img/pozole.jpg"));
    }

    #[test]
    fn test_parse_rejects_blank_name() {
        let err = parse_catalog(r#"[{"name":"Taco"},{"name":"  "}]"#).unwrap_err();
        assert_eq!(err, CatalogError::InvalidEntry { index: 1 });
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert!(matches!(parse_catalog(r#"{"name":"Taco"}"#), Err(CatalogError::Decode(_))));
        assert!(matches!(parse_catalog(r#"[{"title":"Taco"}]"#), Err(CatalogError::Decode(_))));
        assert!(matches!(parse_catalog("not json"), Err(CatalogError::Decode(_))));
    }

    #[test]
    fn test_empty_array_is_valid() {
        assert!(parse_catalog("[]").unwrap().is_empty());
    }
}
