//! Catalog Entry Row Component
//!
//! One dish in the catalog list with its add button.

use leptos::prelude::*;

use crate::models::CatalogEntry;

/// A single dish row
#[component]
pub fn CatalogEntryRow(
    entry: CatalogEntry,
    on_add: Callback<CatalogEntry>,
) -> impl IntoView {
    let name = entry.display_name().to_string();
    let description = entry.description.clone();
    let price = entry.price_label();
    let image = entry.image.clone();

    view! {
        <li class="catalog-row">
            {image.map(|src| view! { <img class="catalog-image" src=src alt=name.clone()/> })}
            <div class="catalog-info">
                <span class="catalog-name">{name.clone()}</span>
                {description.map(|d| view! { <p class="catalog-description">{d}</p> })}
            </div>
            {price.map(|p| view! { <span class="catalog-price">{p}</span> })}
            <button
                class="add-btn"
                on:click=move |_: web_sys::MouseEvent| on_add.run(entry.clone())
            >
                "Agregar al carrito"
            </button>
        </li>
    }
}
