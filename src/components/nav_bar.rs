//! Navigation Bar Component
//!
//! Links to every page plus a live cart count.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::routes::{page_for, Page};
use crate::store::{store_cart_is_empty, store_cart_len, use_app_store};

#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_app_store();
    let location = use_location();
    let current = Memo::new(move |_| page_for(&location.pathname.get()));

    view! {
        <nav class="nav-bar">
            <span class="brand">"Antojitos"</span>
            {Page::ALL.into_iter().map(|page| {
                let link_class = move || {
                    if current.get() == Some(page) { "nav-link active" } else { "nav-link" }
                };
                view! {
                    <span class=link_class>
                        <A href=page.path()>
                            {page.label()}
                            {(page == Page::Cart).then(|| view! {
                                <Show when=move || !store_cart_is_empty(&store)>
                                    <span class="cart-badge">{move || store_cart_len(&store)}</span>
                                </Show>
                            })}
                        </A>
                    </span>
                }
            }).collect_view()}
        </nav>
    }
}
