//! UI Components
//!
//! Reusable Leptos components.

mod catalog_entry_row;
mod cart_notice;
mod nav_bar;

pub use catalog_entry_row::CatalogEntryRow;
pub use cart_notice::CartNotice;
pub use nav_bar::NavBar;
