//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! built once in `App` and handed down through context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::cart::Cart;
use crate::models::ItemId;

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Dishes selected this session
    pub cart: Cart,
}

impl AppState {
    pub fn new() -> Self {
        Self { cart: Cart::new() }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a dish to the cart
pub fn store_add_to_cart(store: &AppStore, item: ItemId) {
    log::info!("[CART] add {}", item);
    store.cart().write().add_to_cart(item);
}

/// Copy of the cart contents; does not subscribe the caller to changes
pub fn store_cart_snapshot(store: &AppStore) -> Vec<ItemId> {
    store.cart().read_untracked().items()
}

/// Number of dishes in the cart (tracked)
pub fn store_cart_len(store: &AppStore) -> usize {
    store.cart().read().len()
}

/// Whether nothing has been added yet (tracked)
pub fn store_cart_is_empty(store: &AppStore) -> bool {
    store.cart().read().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_append_and_snapshot() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(AppState::new());
            store_add_to_cart(&store, ItemId::from("Taco"));
            store_add_to_cart(&store, ItemId::from("Burrito"));

            let mut snapshot = store_cart_snapshot(&store);
            assert_eq!(snapshot, vec![ItemId::from("Taco"), ItemId::from("Burrito")]);

            snapshot.clear();
            assert_eq!(store_cart_snapshot(&store).len(), 2);
            assert_eq!(store.cart().read_untracked().len(), 2);
        });
    }

    #[test]
    fn test_store_is_empty_until_first_add() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(AppState::new());
            assert!(store_cart_is_empty(&store));
            assert_eq!(store_cart_len(&store), 0);

            store_add_to_cart(&store, ItemId::from("Tamal"));
            assert!(!store_cart_is_empty(&store));
            assert_eq!(store_cart_len(&store), 1);
        });
    }
}
