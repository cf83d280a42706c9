//! Cart Page
//!
//! Reads the cart once on activation. Later additions show up only after
//! navigating here again.

use leptos::prelude::*;

use crate::models::ItemId;
use crate::store::{store_cart_snapshot, use_app_store};

/// Heading count, e.g. "2 platos"
pub fn summary_label(count: usize) -> String {
    match count {
        1 => "1 plato".to_string(),
        n => format!("{} platos", n),
    }
}

#[component]
pub fn CartPage() -> impl IntoView {
    let store = use_app_store();
    let items: Vec<ItemId> = store_cart_snapshot(&store);
    log::debug!("[CART] showing {} items", items.len());

    let body = if items.is_empty() {
        view! { <p class="cart-empty">"Tu carrito está vacío."</p> }.into_any()
    } else {
        view! {
            <p class="cart-summary">{summary_label(items.len())}</p>
            <ol class="cart-list">
                {items.into_iter().map(|item| view! {
                    <li class="cart-row">{item.to_string()}</li>
                }).collect_view()}
            </ol>
        }.into_any()
    };

    view! {
        <section class="cart-page">
            <h1>"Carrito"</h1>
            {body}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{store_add_to_cart, AppState};
    use reactive_stores::Store;

    #[test]
    fn test_snapshot_after_two_adds() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(AppState::new());
            store_add_to_cart(&store, ItemId::from("Enchiladas"));
            store_add_to_cart(&store, ItemId::from("Tamal"));

            let shown = store_cart_snapshot(&store);
            assert_eq!(shown, vec![ItemId::from("Enchiladas"), ItemId::from("Tamal")]);

            // Taken at activation; later additions do not reach it
            store_add_to_cart(&store, ItemId::from("Pozole"));
            assert_eq!(shown.len(), 2);
            assert_eq!(store_cart_snapshot(&store).len(), 3);
        });
    }

    #[test]
    fn test_summary_label() {
        assert_eq!(summary_label(0), "0 platos");
        assert_eq!(summary_label(1), "1 plato");
        assert_eq!(summary_label(2), "2 platos");
    }
}
