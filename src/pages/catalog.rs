//! Catalog Page
//!
//! Loads the dish list once per activation and forwards selections to the
//! cart. A load that finishes after the page was left is dropped.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::activation::Activation;
use crate::catalog::{load_catalog, CatalogSource, CatalogState};
use crate::components::CatalogEntryRow;
use crate::context::use_app_context;
use crate::models::CatalogEntry;
use crate::store::{store_add_to_cart, use_app_store, AppStore};

/// Fetch the catalog; `None` if the page was deactivated meanwhile
pub async fn activate_catalog(
    source: &dyn CatalogSource,
    activation: &Activation,
) -> Option<CatalogState> {
    let state = load_catalog(source).await;
    if !activation.is_active() {
        log::debug!("[CATALOG] page left before load finished, dropping result");
        return None;
    }
    Some(state)
}

/// Forward a selected dish to the cart
pub fn add_entry(store: &AppStore, entry: &CatalogEntry) {
    store_add_to_cart(store, entry.item_id());
}

#[component]
pub fn CatalogPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (catalog, set_catalog) = signal(CatalogState::Loading);

    let activation = Activation::new();
    on_cleanup({
        let activation = activation.clone();
        move || activation.deactivate()
    });

    let source = ctx.catalog.clone();
    spawn_local(async move {
        if let Some(state) = activate_catalog(&*source, &activation).await {
            set_catalog.set(state);
        }
    });

    let on_add = Callback::new(move |entry: CatalogEntry| {
        add_entry(&store, &entry);
        ctx.announce(entry.item_id());
    });

    view! {
        <section class="catalog-page">
            <h1>"Catálogo"</h1>

            {move || catalog.with(|state| match state {
                CatalogState::Loading => view! {
                    <p class="catalog-status">"Cargando menú..."</p>
                }.into_any(),
                CatalogState::Unavailable(_) => view! {
                    <p class="catalog-status unavailable">"El menú no está disponible en este momento."</p>
                }.into_any(),
                CatalogState::Ready(entries) if entries.is_empty() => view! {
                    <p class="catalog-status">"No hay platos en el menú."</p>
                }.into_any(),
                CatalogState::Ready(_) => ().into_any(),
            })}

            <ul class="catalog-list">
                <For
                    each=move || catalog.with(|state| state.entries().to_vec().into_iter().enumerate().collect::<Vec<_>>())
                    key=|(index, entry)| (*index, entry.name.clone())
                    children=move |(_, entry)| view! { <CatalogEntryRow entry=entry on_add=on_add/> }
                />
            </ul>
        </section>
    }
}
