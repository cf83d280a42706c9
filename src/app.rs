//! Storefront App
//!
//! Composition root: builds the cart store and catalog source, provides them
//! through context, and sets up client-side routing.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::StaticSegment;
use reactive_stores::Store;

use crate::catalog::{HttpCatalog, SharedCatalogSource};
use crate::components::{CartNotice, NavBar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{CartPage, CatalogPage, HomePage, NotFoundPage};
use crate::routes::{Page, DEFAULT_PATH, ROOT_SEGMENT};
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::new());
    let catalog: SharedCatalogSource = Arc::new(HttpCatalog::new(config.catalog_url.clone()));
    log::info!("[APP] catalog source {}", config.catalog_url);

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(config, catalog, signal(None)));

    view! {
        <Router>
            <NavBar/>
            <CartNotice/>
            <main class="main-content">
                // Mirrors `routes::resolve`; add a page to `Page::ALL` and here together
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment(ROOT_SEGMENT) view=|| view! { <Redirect path=DEFAULT_PATH/> }/>
                    <Route path=StaticSegment(Page::Home.segment()) view=HomePage/>
                    <Route path=StaticSegment(Page::Catalog.segment()) view=CatalogPage/>
                    <Route path=StaticSegment(Page::Cart.segment()) view=CartPage/>
                </Routes>
            </main>
        </Router>
    }
}
