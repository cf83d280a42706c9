//! Pages
//!
//! One component per route.

mod cart;
mod catalog;
mod home;
mod not_found;

pub use cart::CartPage;
pub use catalog::CatalogPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
